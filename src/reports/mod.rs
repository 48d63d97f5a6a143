use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use hashtune::core_types::Weight;
use hashtune::optimizer::{HallOfFame, Logbook};
use hashtune::wordset::DistributionMetrics;
use strum::IntoEnumIterator;

fn right_align_from(table: &mut Table, first: usize, last: usize) {
    for i in first..=last {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn print_hall_of_fame(hof: &HallOfFame) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("Rank").add_attribute(Attribute::Bold)];
    for w in Weight::iter() {
        let cell = Cell::new(w.to_string());
        // Dimensions the hash ignores are dimmed.
        header.push(if w.affects_hash() {
            cell
        } else {
            cell.fg(Color::DarkGrey)
        });
    }
    header.push(Cell::new("Fitness").fg(Color::Cyan));
    table.add_row(header);

    for (rank, ind) in hof.entries().iter().enumerate() {
        let mut row = vec![Cell::new(rank + 1)];
        for w in Weight::iter() {
            row.push(Cell::new(format!("{:.4}", ind.params.get(w))));
        }
        row.push(
            Cell::new(
                ind.fitness()
                    .map_or_else(|| "-".to_string(), |f| format!("{:.6}", f)),
            )
            .fg(Color::Cyan),
        );
        table.add_row(row);
    }

    right_align_from(&mut table, 1, 5);
    println!("\n{}", table);
}

pub fn print_logbook_tail(logbook: &Logbook, n: usize) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.add_row(
        Logbook::HEADER
            .iter()
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );

    let skip = logbook.len().saturating_sub(n);
    for r in logbook.records().iter().skip(skip) {
        table.add_row(vec![
            Cell::new(r.gen),
            Cell::new(format!("{:.6}", r.min)).fg(Color::Green),
            Cell::new(format!("{:.6}", r.avg)),
            Cell::new(format!("{:.6}", r.std)),
            Cell::new(format!("{:.6}", r.max)).fg(Color::Red),
        ]);
    }

    right_align_from(&mut table, 0, 4);
    println!("\n{}", table);
}

pub fn print_distribution_report(rows: &[(String, DistributionMetrics, Vec<usize>)]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Document").add_attribute(Attribute::Bold),
        Cell::new("Size"),
        Cell::new("Min"),
        Cell::new("Avg"),
        Cell::new("Max"),
        Cell::new("Efficiency").fg(Color::Cyan),
        Cell::new("Empty"),
    ]);

    for (name, m, lengths) in rows {
        let empty = lengths.iter().filter(|&&l| l == 0).count();
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(m.size),
            Cell::new(m.min_length),
            Cell::new(m.avg_length),
            Cell::new(m.max_length),
            Cell::new(format!("{:.4}", m.efficiency_factor)).fg(Color::Cyan),
            Cell::new(empty),
        ]);
    }

    right_align_from(&mut table, 1, 6);
    println!("\n{}", table);

    if let Some((_, _, lengths)) = rows.first() {
        print_chain_histogram(lengths);
    }
}

/// One cell per bucket, ten to a row.
fn print_chain_histogram(lengths: &[usize]) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    for (row_idx, chunk) in lengths.chunks(10).enumerate() {
        let cells: Vec<Cell> = chunk
            .iter()
            .enumerate()
            .map(|(i, l)| {
                Cell::new(format!("{:>2}:{}", row_idx * 10 + i, l)).set_alignment(CellAlignment::Right)
            })
            .collect();
        table.add_row(cells);
    }
    println!("Chain lengths per bucket\n{}", table);
}

//! Files a search leaves behind: a text log per generation, an append-only
//! hall-of-fame log per process, plus a cumulative fitness CSV and chart per
//! generation. The generation that converges writes nothing.

use crate::config::OutputPaths;
use crate::error::{HashTuneError, HtResult};
use crate::optimizer::runner::{GenerationObserver, GenerationReport};
use crate::optimizer::stats::{HallOfFame, LogRecord, Logbook};
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct RunArtifacts {
    logs_dir: PathBuf,
    data_dir: PathBuf,
    pid: u32,
}

impl RunArtifacts {
    /// Creates both directories up front so write failures surface early.
    pub fn new(paths: &OutputPaths) -> HtResult<Self> {
        fs::create_dir_all(&paths.logs_dir)?;
        fs::create_dir_all(&paths.checkpoint_dir)?;
        Ok(Self {
            logs_dir: paths.logs_dir.clone(),
            data_dir: paths.checkpoint_dir.clone(),
            pid: std::process::id(),
        })
    }

    pub fn generation_log_path(&self, gen: usize) -> PathBuf {
        self.logs_dir.join(format!("evaluation_log_gen_{}.txt", gen))
    }

    pub fn hall_of_fame_path(&self) -> PathBuf {
        self.logs_dir.join(format!("hall_of_fame_{}.txt", self.pid))
    }

    pub fn fitness_csv_path(&self, gen: usize) -> PathBuf {
        self.data_dir.join(format!("gen_{}_fitness.csv", gen))
    }

    pub fn fitness_plot_path(&self, gen: usize) -> PathBuf {
        self.data_dir.join(format!("gen_{}_fitness.svg", gen))
    }

    pub fn write_generation_log(&self, record: &LogRecord, hof: &HallOfFame) -> HtResult<()> {
        let mut out = String::new();
        out.push_str(&format!("Generation {}\n", record.gen));
        out.push_str(&format!("Min Fitness: {}\n", record.min));
        out.push_str(&format!("Avg Fitness: {}\n", record.avg));
        out.push_str(&format!("Std Dev Fitness: {}\n", record.std));
        out.push_str(&format!("Max Fitness: {}\n", record.max));
        out.push_str("Hall of Fame Individuals:\n");
        for ind in hof.entries() {
            out.push_str(&format!("{}, Fitness: {}\n", ind.params, fitness_str(ind.fitness())));
        }
        fs::write(self.generation_log_path(record.gen), out)?;
        Ok(())
    }

    pub fn append_hall_of_fame(&self, hof: &HallOfFame) -> HtResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.hall_of_fame_path())?;
        for ind in hof.entries() {
            writeln!(
                file,
                "Multiplier: {}, Fitness: {}",
                ind.params,
                fitness_str(ind.fitness())
            )?;
        }
        Ok(())
    }

    /// Rewrites the whole logbook so far into this generation's CSV.
    pub fn write_fitness_csv(&self, logbook: &Logbook, gen: usize) -> HtResult<()> {
        write_logbook_csv(&self.fitness_csv_path(gen), logbook)
    }

    pub fn write_fitness_plot(&self, logbook: &Logbook, gen: usize) -> HtResult<()> {
        draw_fitness_chart(&self.fitness_plot_path(gen), logbook)
    }
}

pub fn write_logbook_csv(path: &Path, logbook: &Logbook) -> HtResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record([
        "Generation",
        "Min Fitness",
        "Avg Fitness",
        "Std Dev Fitness",
        "Max Fitness",
    ])?;
    for r in logbook.records() {
        wtr.write_record(&[
            r.gen.to_string(),
            r.min.to_string(),
            r.avg.to_string(),
            r.std.to_string(),
            r.max.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

fn plot_err<E: std::error::Error + Send + Sync>(e: DrawingAreaErrorKind<E>) -> HashTuneError {
    HashTuneError::Plot(e.to_string())
}

/// Min and avg fitness against generation, as an SVG line chart.
pub fn draw_fitness_chart(path: &Path, logbook: &Logbook) -> HtResult<()> {
    let records = logbook.records();
    let (Some(first), Some(last)) = (records.first(), records.last()) else {
        return Ok(());
    };

    let (lo, hi) = records
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
            (lo.min(r.min), hi.max(r.avg))
        });
    let pad = ((hi - lo) * 0.05).max(1e-6);
    let x_end = last.gen.max(first.gen + 1);

    let root = SVGBackend::new(path, (1000, 500)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Fitness Over Generations up to {}", last.gen),
            ("sans-serif", 20),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(first.gen..x_end, (lo - pad)..(hi + pad))
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Generation")
        .y_desc("Fitness")
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(LineSeries::new(records.iter().map(|r| (r.gen, r.min)), &BLUE))
        .map_err(plot_err)?
        .label("Min Fitness")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));
    chart
        .draw_series(LineSeries::new(records.iter().map(|r| (r.gen, r.avg)), &RED))
        .map_err(plot_err)?
        .label("Avg Fitness")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    Ok(())
}

fn fitness_str(f: Option<f64>) -> String {
    f.map_or_else(|| "unevaluated".to_string(), |v| v.to_string())
}

impl GenerationObserver for RunArtifacts {
    fn on_generation(&mut self, report: &GenerationReport<'_>) -> HtResult<()> {
        if report.converged {
            return Ok(());
        }
        self.write_generation_log(report.record, report.hall_of_fame)?;
        self.append_hall_of_fame(report.hall_of_fame)?;
        self.write_fitness_csv(report.logbook, report.generation)?;
        self.write_fitness_plot(report.logbook, report.generation)
    }
}

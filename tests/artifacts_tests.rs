use hashtune::artifacts::{draw_fitness_chart, write_logbook_csv, RunArtifacts};
use hashtune::config::OutputPaths;
use hashtune::core_types::{Individual, ParameterVector};
use hashtune::corpus::{Corpus, CorpusEvaluator, Evaluate};
use hashtune::optimizer::{
    Checkpoint, CheckpointStore, EvolutionarySearch, HallOfFame, LogRecord, Logbook,
    SearchOptions, SearchStatus, Toolbox,
};
use std::fs;
use tempfile::TempDir;

fn paths(dir: &TempDir) -> OutputPaths {
    OutputPaths {
        checkpoint_dir: dir.path().join("checkpoints"),
        logs_dir: dir.path().join("logs"),
    }
}

#[test]
fn test_new_creates_directories() {
    let dir = TempDir::new().unwrap();
    let p = paths(&dir);
    RunArtifacts::new(&p).unwrap();
    assert!(p.checkpoint_dir.is_dir());
    assert!(p.logs_dir.is_dir());
}

#[test]
fn test_logbook_csv_layout() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fitness.csv");
    let mut logbook = Logbook::new();
    logbook.record(LogRecord { gen: 0, min: 1.0, avg: 2.0, std: 0.5, max: 3.0 });
    logbook.record(LogRecord { gen: 1, min: 0.5, avg: 1.5, std: 0.25, max: 2.5 });

    write_logbook_csv(&path, &logbook).unwrap();

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["Generation", "Min Fitness", "Avg Fitness", "Std Dev Fitness", "Max Fitness"]
    );
    let rows: Vec<csv::StringRecord> = rdr.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[1][0], "1");
    assert_eq!(rows[1][2].parse::<f64>().unwrap(), 1.5);
}

#[test]
fn test_search_leaves_per_generation_files() {
    let dir = TempDir::new().unwrap();
    let p = paths(&dir);
    let mut artifacts = RunArtifacts::new(&p).unwrap();

    let corpus = Corpus::from_texts(["the quick brown fox jumps over the lazy dog"]).unwrap();
    let options = SearchOptions {
        population_size: 6,
        max_generations: 2,
        num_threads: 1,
        ..SearchOptions::default()
    };
    let mut search =
        EvolutionarySearch::new(CorpusEvaluator::new(corpus), options, Toolbox::default(), Some(3));
    search.initialize(false);
    search.run(&mut artifacts).unwrap();

    for gen in 0..2 {
        let log = fs::read_to_string(artifacts.generation_log_path(gen)).unwrap();
        assert!(log.starts_with(&format!("Generation {}\n", gen)));
        assert!(log.contains("Hall of Fame Individuals:"));
        assert!(artifacts.fitness_csv_path(gen).is_file());
        assert!(artifacts.fitness_plot_path(gen).is_file());
    }

    // The second CSV holds both generations.
    let csv_text = fs::read_to_string(artifacts.fitness_csv_path(1)).unwrap();
    assert_eq!(csv_text.lines().count(), 3);

    let hof = fs::read_to_string(artifacts.hall_of_fame_path()).unwrap();
    let re = regex::Regex::new(r"^Multiplier: \[[-0-9., e]+\], Fitness: [-0-9.e]+$").unwrap();
    let lines: Vec<&str> = hof.lines().collect();
    assert_eq!(lines.len(), 2);
    for line in lines {
        assert!(re.is_match(line), "bad hall of fame line: {}", line);
    }
}

#[test]
fn test_fitness_chart_is_svg() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("chart.svg");
    let mut logbook = Logbook::new();
    for gen in 0..4 {
        let avg = 10.0 - gen as f64;
        logbook.record(LogRecord { gen, min: avg - 1.0, avg, std: 0.3, max: avg + 1.0 });
    }

    draw_fitness_chart(&path, &logbook).unwrap();

    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Fitness Over Generations up to 3"));
}

#[test]
fn test_single_record_chart_and_empty_logbook() {
    let dir = TempDir::new().unwrap();
    let one = dir.path().join("one.svg");
    let none = dir.path().join("none.svg");
    let mut logbook = Logbook::new();
    logbook.record(LogRecord { gen: 0, min: 1.0, avg: 1.0, std: 0.0, max: 1.0 });

    draw_fitness_chart(&one, &logbook).unwrap();
    draw_fitness_chart(&none, &Logbook::new()).unwrap();
    assert!(one.is_file());
    assert!(!none.exists());
}

#[test]
fn test_converging_generation_writes_no_files() {
    let dir = TempDir::new().unwrap();
    let p = paths(&dir);
    let mut artifacts = RunArtifacts::new(&p).unwrap();
    let store = CheckpointStore::in_dir(&p.checkpoint_dir);

    let eval = |params: &ParameterVector| params.vowel;
    let population: Vec<Individual> = (0..4)
        .map(|_| {
            let params = ParameterVector::new(5.0, 1.0, 1.0, 1.0);
            Individual::with_fitness(params, eval.evaluate(&params))
        })
        .collect();
    let mut logbook = Logbook::new();
    for gen in 0..6 {
        logbook.record(LogRecord { gen, min: 5.0, avg: 5.0, std: 0.0, max: 5.0 });
    }
    let mut hof = HallOfFame::new(1);
    hof.update(&population, Toolbox::default().direction);
    store
        .save(&Checkpoint {
            population,
            generation: 6,
            hall_of_fame: hof,
            logbook,
            rng_state: 1,
        })
        .unwrap();

    let options = SearchOptions {
        population_size: 4,
        num_threads: 1,
        ..SearchOptions::default()
    };
    let mut search = EvolutionarySearch::new(eval, options, Toolbox::default(), Some(1))
        .with_checkpoint_store(store);
    search.initialize(true);
    let outcome = search.run(&mut artifacts).unwrap();

    assert_eq!(outcome.status, SearchStatus::Converged { generation: 6 });
    assert!(!artifacts.generation_log_path(6).exists());
    assert!(!artifacts.fitness_csv_path(6).exists());
    assert!(!artifacts.fitness_plot_path(6).exists());
    assert!(!artifacts.hall_of_fame_path().exists());
}

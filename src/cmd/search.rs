use crate::reports;
use clap::Args;
use hashtune::artifacts::RunArtifacts;
use hashtune::config::Config;
use hashtune::corpus::{Corpus, CorpusEvaluator};
use hashtune::error::HtResult;
use hashtune::optimizer::{CheckpointStore, EvolutionarySearch, SearchOptions, Toolbox};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Plain-text documents to score against, in order.
    #[arg(default_value = "books/pride_and_prejudice.txt")]
    pub corpus: Vec<PathBuf>,

    #[command(flatten)]
    pub config: Config,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Ignore any existing checkpoint and start from a random population.
    #[arg(long, default_value_t = false)]
    pub fresh: bool,
}

pub fn run(args: SearchArgs) -> HtResult<()> {
    args.config.validate()?;

    info!("📂 Loading corpus: {:?}", args.corpus);
    let corpus = Corpus::load(&args.corpus)?;
    let evaluator = CorpusEvaluator::new(corpus);

    let options = SearchOptions::from(&args.config);
    let toolbox = Toolbox::from(&args.config.variation);
    let store = CheckpointStore::in_dir(&args.config.output.checkpoint_dir);
    let mut artifacts = RunArtifacts::new(&args.config.output)?;

    let mut search = EvolutionarySearch::new(evaluator, options, toolbox, args.seed)
        .with_checkpoint_store(store);
    search.initialize(!args.fresh);

    let outcome = search.run(&mut artifacts)?;

    println!("\n=== 🏆 FINAL RESULT ===");
    println!("Status: {:?}", outcome.status);
    println!("Generations logged: {}", outcome.generations_logged);
    reports::print_logbook_tail(search.logbook(), 10);
    reports::print_hall_of_fame(search.hall_of_fame());
    Ok(())
}

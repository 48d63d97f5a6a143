use crate::reports;
use clap::Args;
use hashtune::core_types::ParameterVector;
use hashtune::corpus::{Corpus, CorpusEvaluator};
use hashtune::error::HtResult;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    /// Documents to hash, each into its own table.
    #[arg(required = true)]
    pub documents: Vec<PathBuf>,

    #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
    pub vowel: f64,
    #[arg(long, default_value_t = 4.0, allow_negative_numbers = true)]
    pub endings: f64,
    #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
    pub consonant: f64,
    #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
    pub frequency: f64,

    /// Also print the raw `size = ...` report per document.
    #[arg(long, default_value_t = false)]
    pub raw: bool,
}

pub fn run(args: InspectArgs) -> HtResult<()> {
    let params = ParameterVector::new(args.vowel, args.endings, args.consonant, args.frequency);
    let corpus = Corpus::load(&args.documents)?;

    println!("Weights: {}", params);
    let mut rows = Vec::with_capacity(corpus.len());
    for doc in corpus.documents() {
        let set = CorpusEvaluator::build_set(doc, &params);
        if args.raw {
            println!("\n{}\n{}", doc.name, set);
        }
        rows.push((doc.name.clone(), set.efficiency_factor(), set.chain_lengths()));
    }

    reports::print_distribution_report(&rows);
    Ok(())
}

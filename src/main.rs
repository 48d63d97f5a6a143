use clap::{Parser, Subcommand};
use std::process;
use tracing::{error, info};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evolve hash weights against a corpus.
    Search(cmd::search::SearchArgs),
    /// Print the bucket distribution of one document under fixed weights.
    Inspect(cmd::inspect::InspectArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    info!("🚀 Initializing hashtune...");

    let result = match cli.command {
        Commands::Search(args) => cmd::search::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
    };

    if let Err(e) = result {
        error!("❌ FATAL: {}", e);
        process::exit(1);
    }
}

use crate::consts::*;
use crate::error::{HashTuneError, HtResult};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub variation: VariationParams,
    #[command(flatten)]
    pub output: OutputPaths,
}

#[derive(Args, Debug, Clone)]
pub struct SearchParams {
    #[arg(long, default_value_t = DEFAULT_POPULATION_SIZE)]
    pub population_size: usize,
    #[arg(long, default_value_t = DEFAULT_MAX_GENERATIONS)]
    pub max_generations: usize,
    #[arg(long, default_value_t = DEFAULT_CONVERGENCE_THRESHOLD)]
    pub convergence_threshold: f64,
    #[arg(long, default_value_t = DEFAULT_CONVERGENCE_GENERATIONS)]
    pub convergence_generations: usize,
    #[arg(long, default_value_t = DEFAULT_INIT_MIN)]
    pub init_min: f64,
    #[arg(long, default_value_t = DEFAULT_INIT_MAX)]
    pub init_max: f64,
    /// Worker threads for fitness evaluation. Defaults to available parallelism.
    #[arg(long)]
    pub threads: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct VariationParams {
    #[arg(long, default_value_t = DEFAULT_CROSSOVER_PROB)]
    pub cxpb: f64,
    #[arg(long, default_value_t = DEFAULT_MUTATION_PROB)]
    pub mutpb: f64,
    #[arg(long, default_value_t = DEFAULT_BLEND_ALPHA)]
    pub blend_alpha: f64,
    #[arg(long, default_value_t = DEFAULT_MUTATION_MU)]
    pub mutation_mu: f64,
    #[arg(long, default_value_t = DEFAULT_MUTATION_SIGMA)]
    pub mutation_sigma: f64,
    #[arg(long, default_value_t = DEFAULT_MUTATION_INDPB)]
    pub mutation_indpb: f64,
    #[arg(long, default_value_t = DEFAULT_TOURNAMENT_SIZE)]
    pub tournament_size: usize,
}

#[derive(Args, Debug, Clone)]
pub struct OutputPaths {
    #[arg(long, default_value = "checkpoints")]
    pub checkpoint_dir: PathBuf,
    #[arg(long, default_value = "logs")]
    pub logs_dir: PathBuf,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            max_generations: DEFAULT_MAX_GENERATIONS,
            convergence_threshold: DEFAULT_CONVERGENCE_THRESHOLD,
            convergence_generations: DEFAULT_CONVERGENCE_GENERATIONS,
            init_min: DEFAULT_INIT_MIN,
            init_max: DEFAULT_INIT_MAX,
            threads: None,
        }
    }
}

impl Default for VariationParams {
    fn default() -> Self {
        Self {
            cxpb: DEFAULT_CROSSOVER_PROB,
            mutpb: DEFAULT_MUTATION_PROB,
            blend_alpha: DEFAULT_BLEND_ALPHA,
            mutation_mu: DEFAULT_MUTATION_MU,
            mutation_sigma: DEFAULT_MUTATION_SIGMA,
            mutation_indpb: DEFAULT_MUTATION_INDPB,
            tournament_size: DEFAULT_TOURNAMENT_SIZE,
        }
    }
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            checkpoint_dir: PathBuf::from("checkpoints"),
            logs_dir: PathBuf::from("logs"),
        }
    }
}

impl SearchParams {
    pub fn worker_threads(&self) -> usize {
        self.threads.filter(|&n| n > 0).unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
        })
    }
}

impl Config {
    pub fn validate(&self) -> HtResult<()> {
        let s = &self.search;
        let v = &self.variation;

        if s.population_size == 0 {
            return Err(invalid("population-size must be at least 1"));
        }
        if s.convergence_generations == 0 {
            return Err(invalid("convergence-generations must be at least 1"));
        }
        if !(s.convergence_threshold >= 0.0) {
            return Err(invalid("convergence-threshold must be non-negative"));
        }
        if !(s.init_min < s.init_max) || !s.init_min.is_finite() || !s.init_max.is_finite() {
            return Err(invalid("init-min must be below init-max"));
        }
        for (name, p) in [
            ("cxpb", v.cxpb),
            ("mutpb", v.mutpb),
            ("mutation-indpb", v.mutation_indpb),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(invalid(&format!("{} must lie in [0, 1], got {}", name, p)));
            }
        }
        if !(v.mutation_sigma >= 0.0) {
            return Err(invalid("mutation-sigma must be non-negative"));
        }
        if v.tournament_size == 0 {
            return Err(invalid("tournament-size must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> HashTuneError {
    HashTuneError::Config(msg.to_string())
}

/// Number of chain heads in every `HashWordSet`.
pub const BUCKETS: usize = 53;

/// Multiplier applied to the running hash before each character is folded in.
pub const HASH_PRIME: f64 = 31.0;

pub const DEFAULT_POPULATION_SIZE: usize = 50;
pub const DEFAULT_MAX_GENERATIONS: usize = 100;

/// Two consecutive generation averages closer than this count towards convergence.
pub const DEFAULT_CONVERGENCE_THRESHOLD: f64 = 0.01;
/// Consecutive near-equal averages needed to declare convergence.
pub const DEFAULT_CONVERGENCE_GENERATIONS: usize = 5;

/// Initial weights are drawn uniformly from this range.
pub const DEFAULT_INIT_MIN: f64 = 0.1;
pub const DEFAULT_INIT_MAX: f64 = 100.0;

pub const DEFAULT_CROSSOVER_PROB: f64 = 0.5;
pub const DEFAULT_MUTATION_PROB: f64 = 0.4;
pub const DEFAULT_BLEND_ALPHA: f64 = 0.5;
pub const DEFAULT_MUTATION_MU: f64 = 0.0;
pub const DEFAULT_MUTATION_SIGMA: f64 = 1.0;
pub const DEFAULT_MUTATION_INDPB: f64 = 0.2;
pub const DEFAULT_TOURNAMENT_SIZE: usize = 3;

pub const CHECKPOINT_FILE: &str = "latest_checkpoint.json";

pub mod checkpoint;
pub mod crossover;
pub mod initialization;
pub mod mutation;
pub mod runner;
pub mod selection;
pub mod stats;
pub mod toolbox;

pub use self::checkpoint::{Checkpoint, CheckpointStore};
pub use self::runner::{
    EvolutionarySearch, GenerationObserver, GenerationReport, NoopObserver, SearchOptions,
    SearchOutcome, SearchStatus,
};
pub use self::stats::{HallOfFame, LogRecord, Logbook};
pub use self::toolbox::{Crossover, FitnessDirection, Mutation, Selection, Toolbox};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HashTuneError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Writing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Corpus Error: could not read '{path}': {source}")]
    Corpus {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Plot Error: {0}")]
    Plot(String),

    #[error("Worker Pool Error: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

pub type HtResult<T> = Result<T, HashTuneError>;

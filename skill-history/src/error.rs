use std::path::PathBuf;
use thiserror::Error;

/// A failure confined to one user's pipeline; the rest of the batch carries on.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid username: {0}")]
    InvalidUserName(String),

    #[error("pipeline panicked: {0}")]
    Panicked(String),

    #[error("score #{index} has unparseable date {date:?}: {source}")]
    InvalidDate {
        index: usize,
        date: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// A failure that aborts the whole run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse batch config {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: json5::Error,
    },

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

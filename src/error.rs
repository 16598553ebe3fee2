//! Error types for the gamelog crate

use thiserror::Error;

/// Main error type for the gamelog crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("missing required column '{name}'")]
    MissingColumn { name: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to render {chart}: {message}")]
    Chart { chart: String, message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}

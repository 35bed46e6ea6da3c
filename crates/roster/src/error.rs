//! Error types for the roster front-end.

use std::path::PathBuf;

use roster_seeker::QueryError;
use thiserror::Error;

/// Errors raised while loading data, parsing commands or rendering output.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid record data: {0}")]
    Records(#[from] serde_json::Error),

    #[error("invalid postal code table: {0}")]
    PostalCodes(#[from] csv::Error),

    #[error("invalid config: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("serialization failed: {0}")]
    Serialize(String),

    #[error("write failed: {0}")]
    Write(#[from] std::io::Error),

    #[error(transparent)]
    Query(#[from] QueryError),

    /// A browse command or flag that could not be understood.
    #[error("{0}")]
    Command(String),
}

/// Result type for roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;

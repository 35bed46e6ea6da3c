//! Error types for the seeker crate.

use thiserror::Error;

/// Errors raised while building query state or evaluating a query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The sort key is not one of the supported orderings.
    ///
    /// Evaluation never fails with this error: it is reported and the
    /// filtered records keep their input order.
    #[error("sort by is not implemented for '{0}'")]
    UnrecognizedSortKey(String),

    /// The name does not match any known category.
    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    /// The region code was not observed when the state was initialized.
    #[error("unknown region '{0}'")]
    UnknownRegion(String),
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, QueryError>;

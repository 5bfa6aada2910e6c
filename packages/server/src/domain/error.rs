//! Domain layer error definitions.

use thiserror::Error;

/// Errors surfaced by message store implementations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The store rejected the query expression itself (e.g. a bound LIMIT
    /// on an ordered query is not supported by every driver)
    #[error("query rejected by the store: {0}")]
    QueryRejected(String),

    /// Write or read failure (constraint violation, connectivity loss)
    #[error("store operation failed: {0}")]
    Store(String),
}

//! UseCase layer error definitions.

use thiserror::Error;

use crate::domain::RepositoryError;

/// Message persistence failure. Aborts the current frame only; other
/// connections are unaffected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SendMessageError {
    /// The store rejected the write
    #[error("failed to persist message: {0}")]
    Store(#[from] RepositoryError),
}

/// History retrieval failure. Only raised when the fallback query fails
/// too; a rejected primary query is recovered locally and never surfaced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchHistoryError {
    /// Both the recent query and the fixed top-50 fallback failed
    #[error("recent query fallback failed: {0}")]
    FallbackFailed(RepositoryError),
}

/// Full listing failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListMessagesError {
    /// The store rejected the read
    #[error("failed to list messages: {0}")]
    Store(#[from] RepositoryError),
}

//! Message store contract.

use async_trait::async_trait;
use chrono::NaiveDateTime;
#[cfg(test)]
use mockall::automock;

use super::{entity::ChatMessage, error::RepositoryError};

/// Durable append-only store of chat messages, queryable by recency.
///
/// The contract is defined exactly once; implementations live in the
/// infrastructure layer (dependency inversion). There is no update and no
/// delete operation.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Persist a new record and return it with its store-assigned id.
    async fn append(
        &self,
        username: String,
        content: String,
        timestamp: NaiveDateTime,
    ) -> Result<ChatMessage, RepositoryError>;

    /// Up to `limit` most-recently-created records, newest-first
    /// (timestamp DESC, ties broken by id DESC).
    ///
    /// May be rejected by the underlying store: a bound LIMIT on an ordered
    /// query is not supported by every driver. Callers tolerate this by
    /// falling back to [`MessageRepository::list_top_50`].
    async fn list_recent(&self, limit: i64) -> Result<Vec<ChatMessage>, RepositoryError>;

    /// The guaranteed-supported expression of the recent query: the fixed
    /// top 50, newest-first.
    async fn list_top_50(&self) -> Result<Vec<ChatMessage>, RepositoryError>;

    /// Every record, oldest-first (timestamp ASC, ties broken by id ASC).
    async fn list_all(&self) -> Result<Vec<ChatMessage>, RepositoryError>;
}

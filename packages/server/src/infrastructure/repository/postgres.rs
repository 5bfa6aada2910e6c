//! Postgres-backed message repository.
//!
//! Runtime queries against the `chat_messages` table; the schema lives in
//! the crate's `migrations/` directory and is applied at startup.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::PgPool;

use crate::domain::{ChatMessage, MessageRepository, RepositoryError};

/// Row shape of the `chat_messages` table.
#[derive(sqlx::FromRow)]
struct MessageRow {
    id: i64,
    username: String,
    content: String,
    timestamp: NaiveDateTime,
}

impl From<MessageRow> for ChatMessage {
    fn from(row: MessageRow) -> Self {
        ChatMessage::new(row.id, row.username, row.content, row.timestamp)
    }
}

/// Message repository backed by a Postgres connection pool.
pub struct PostgresMessageRepository {
    pool: PgPool,
}

impl PostgresMessageRepository {
    /// Create a repository over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PostgresMessageRepository {
    async fn append(
        &self,
        username: String,
        content: String,
        timestamp: NaiveDateTime,
    ) -> Result<ChatMessage, RepositoryError> {
        let row = sqlx::query_as::<_, MessageRow>(
            "INSERT INTO chat_messages (username, content, timestamp) \
             VALUES ($1, $2, $3) \
             RETURNING id, username, content, timestamp",
        )
        .bind(&username)
        .bind(&content)
        .bind(timestamp)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::Store(e.to_string()))?;

        Ok(row.into())
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<ChatMessage>, RepositoryError> {
        // The bound LIMIT is the part not every driver accepts on an
        // ordered query; rejections surface as QueryRejected and callers
        // fall back to the fixed-limit form.
        let rows = sqlx::query_as::<_, MessageRow>(
            "SELECT id, username, content, timestamp FROM chat_messages \
             ORDER BY timestamp DESC, id DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryRejected(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_top_50(&self) -> Result<Vec<ChatMessage>, RepositoryError> {
        let rows = sqlx::query_as::<_, MessageRow>(
            "SELECT id, username, content, timestamp FROM chat_messages \
             ORDER BY timestamp DESC, id DESC LIMIT 50",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Store(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_all(&self) -> Result<Vec<ChatMessage>, RepositoryError> {
        let rows = sqlx::query_as::<_, MessageRow>(
            "SELECT id, username, content, timestamp FROM chat_messages \
             ORDER BY timestamp ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Store(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

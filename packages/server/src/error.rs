//! Server startup error definitions.

use thiserror::Error;

/// Fatal errors raised while bringing the server up or serving.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The message store could not be reached
    #[error("failed to connect to the message store: {0}")]
    Database(#[from] sqlx::Error),

    /// The schema migration failed
    #[error("failed to migrate the message store: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Bind or serve failure
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

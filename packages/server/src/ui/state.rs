//! Server state shared across connections.

use std::sync::Arc;

use crate::domain::MessageRepository;
use crate::infrastructure::broker::{InProcessBroker, MessageBroker};
use crate::infrastructure::repository::InMemoryMessageRepository;

/// Shared application state
pub struct AppState {
    /// Repository（データアクセス層の抽象化）
    pub repository: Arc<dyn MessageRepository>,
    /// Publish/subscribe relay fanning broadcasts out to subscribers
    pub broker: Arc<dyn MessageBroker>,
}

impl AppState {
    /// Assemble state from injected collaborators.
    pub fn new(repository: Arc<dyn MessageRepository>, broker: Arc<dyn MessageBroker>) -> Self {
        Self { repository, broker }
    }

    /// State over the in-memory store, for local development and tests.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryMessageRepository::new()),
            Arc::new(InProcessBroker::new()),
        )
    }
}

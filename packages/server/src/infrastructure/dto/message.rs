//! Chat message view, shared by the WebSocket frames and the REST endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::ChatMessage;

/// Wire representation of a chat message.
///
/// One-way, lossy projection of [`ChatMessage`]: the timestamp is rendered
/// at second precision and there is no reverse mapping. The id is absent on
/// not-yet-persisted instances (client submissions); whatever id or
/// timestamp a client sends is ignored and overwritten server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessageDto {
    pub id: Option<i64>,
    pub username: String,
    pub content: String,
    /// Formatted `%Y-%m-%d %H:%M:%S`, local server time
    pub timestamp: String,
}

impl From<&ChatMessage> for ChatMessageDto {
    fn from(message: &ChatMessage) -> Self {
        Self {
            id: Some(message.id),
            username: message.username.clone(),
            content: message.content.clone(),
            timestamp: parlor_shared::format_timestamp(&message.timestamp),
        }
    }
}

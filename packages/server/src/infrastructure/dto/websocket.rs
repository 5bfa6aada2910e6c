//! WebSocket frames for the chat relay.
//!
//! Frames are JSON objects tagged by `type`. `send` and `history` are the
//! application routes handled by the endpoints; `publish` addresses a broker
//! destination directly and is fanned out without further processing.

use serde::{Deserialize, Serialize};

use super::message::ChatMessageDto;

/// Shared topic every broadcast lands on.
pub const MESSAGES_TOPIC: &str = "/topic/messages";

/// Destination prefix relayed by the broker without application handling.
pub const BROKER_PREFIX: &str = "/topic";

/// Frames a client may send.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientFrame {
    /// Start receiving payloads published to `topic`
    Subscribe { topic: String },
    /// Stop receiving payloads published to `topic`
    Unsubscribe { topic: String },
    /// Publish a chat message; only username and content are meaningful
    Send { username: String, content: String },
    /// Ask for the recent history to be published to the shared topic
    History,
    /// Raw broker-destination publish, relayed verbatim to subscribers
    Publish {
        topic: String,
        payload: serde_json::Value,
    },
}

/// Frames the server publishes to subscribers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerFrame {
    /// A single persisted message, broadcast after a `send`
    Message(ChatMessageDto),
    /// Recent history, newest-first, broadcast after a `history` request
    History { messages: Vec<ChatMessageDto> },
}

//! Wire-facing data transfer objects.
//!
//! The view types here are transient projections of persisted records; they
//! own no lifecycle of their own.

pub mod message;
pub mod websocket;

pub use message::ChatMessageDto;
pub use websocket::{BROKER_PREFIX, ClientFrame, MESSAGES_TOPIC, ServerFrame};

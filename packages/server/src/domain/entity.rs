//! Core domain model for the chat relay.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A persisted chat message.
///
/// Created on a single store append and never updated or deleted afterwards.
/// The id is assigned exactly once by the store and never reused; the
/// timestamp is assigned exactly once by the server at write time, never by
/// the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Store-assigned identifier, monotonically increasing
    pub id: i64,
    /// Sender name, persisted as received
    pub username: String,
    /// Message body, arbitrary-length text
    pub content: String,
    /// Server-assigned creation time (local server time, no zone offset)
    pub timestamp: NaiveDateTime,
}

impl ChatMessage {
    /// Create a new chat message record
    pub fn new(id: i64, username: String, content: String, timestamp: NaiveDateTime) -> Self {
        Self {
            id,
            username,
            content,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn timestamp_at(secs: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(12, 0, secs)
            .unwrap()
    }

    #[test]
    fn test_chat_message_new() {
        // テスト項目: ChatMessage が与えた値そのままで作成される
        // given (前提条件):
        let timestamp = timestamp_at(0);

        // when (操作):
        let message = ChatMessage::new(1, "alice".to_string(), "hi".to_string(), timestamp);

        // then (期待する結果):
        assert_eq!(message.id, 1);
        assert_eq!(message.username, "alice");
        assert_eq!(message.content, "hi");
        assert_eq!(message.timestamp, timestamp);
    }

    #[test]
    fn test_chat_message_equality() {
        // テスト項目: 同じ値を持つ ChatMessage は等価
        // given (前提条件):
        let timestamp = timestamp_at(0);
        let a = ChatMessage::new(1, "alice".to_string(), "hi".to_string(), timestamp);
        let b = ChatMessage::new(1, "alice".to_string(), "hi".to_string(), timestamp);
        let c = ChatMessage::new(2, "alice".to_string(), "hi".to_string(), timestamp);

        // then (期待する結果):
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}

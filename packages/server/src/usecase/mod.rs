//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod error;
pub mod fetch_history;
pub mod list_messages;
pub mod send_message;

pub use error::{FetchHistoryError, ListMessagesError, SendMessageError};
pub use fetch_history::FetchHistoryUseCase;
pub use list_messages::ListMessagesUseCase;
pub use send_message::SendMessageUseCase;

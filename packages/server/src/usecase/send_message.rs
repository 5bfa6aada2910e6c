//! UseCase: メッセージ送信処理
//!
//! 受信したメッセージにサーバー側でタイムスタンプを付与し、ストアへ
//! 追記して、ストアが採番した ID 付きの永続化済みレコードを返します。

use std::sync::Arc;

use crate::domain::{ChatMessage, MessageRepository};

use super::error::SendMessageError;

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn MessageRepository>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(repository: Arc<dyn MessageRepository>) -> Self {
        Self { repository }
    }

    /// メッセージ送信を実行
    ///
    /// タイムスタンプはここで一度だけ採られ、クライアントが送ってきた
    /// 値は使いません。内容のバリデーションは行わず、空文字列も
    /// そのまま永続化されます。
    ///
    /// # Returns
    ///
    /// * `Ok(ChatMessage)` - ストアが採番した ID を持つ永続化済みレコード
    /// * `Err(SendMessageError)` - ストアへの書き込み失敗
    pub async fn execute(
        &self,
        username: String,
        content: String,
    ) -> Result<ChatMessage, SendMessageError> {
        let timestamp = parlor_shared::now_local();

        let message = self.repository.append(username, content, timestamp).await?;

        Ok(message)
    }
}

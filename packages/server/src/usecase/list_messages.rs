//! UseCase: 全件取得処理
//!
//! 永続化済みの全メッセージを古い順に返します。REST エンドポイントから
//! 呼ばれ、ブロードキャストの副作用はありません。

use std::sync::Arc;

use crate::domain::{ChatMessage, MessageRepository};

use super::error::ListMessagesError;

/// 全メッセージ取得のユースケース
pub struct ListMessagesUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn MessageRepository>,
}

impl ListMessagesUseCase {
    /// 新しい ListMessagesUseCase を作成
    pub fn new(repository: Arc<dyn MessageRepository>) -> Self {
        Self { repository }
    }

    /// 全件取得を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<ChatMessage>)` - 古い順の全レコード
    /// * `Err(ListMessagesError)` - ストアへの読み取り失敗
    pub async fn execute(&self) -> Result<Vec<ChatMessage>, ListMessagesError> {
        let messages = self.repository.list_all().await?;

        Ok(messages)
    }
}

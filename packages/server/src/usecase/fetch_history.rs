//! UseCase: 履歴取得処理
//!
//! 直近 N 件のメッセージを新しい順に取得します。プライマリのクエリが
//! ストアに拒否された場合は、固定 top-50 のフォールバッククエリで
//! その場でリトライし、呼び出し元にはエラーを見せません。

use std::sync::Arc;

use crate::domain::{ChatMessage, MessageRepository};

use super::error::FetchHistoryError;

/// 履歴取得のユースケース
pub struct FetchHistoryUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn MessageRepository>,
}

impl FetchHistoryUseCase {
    /// 新しい FetchHistoryUseCase を作成
    pub fn new(repository: Arc<dyn MessageRepository>) -> Self {
        Self { repository }
    }

    /// 履歴取得を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<ChatMessage>)` - 新しい順、最大 `limit` 件
    /// * `Err(FetchHistoryError)` - フォールバッククエリも失敗した場合のみ
    pub async fn execute(&self, limit: i64) -> Result<Vec<ChatMessage>, FetchHistoryError> {
        match self.repository.list_recent(limit).await {
            Ok(messages) => Ok(messages),
            Err(e) => {
                // Local recovery: retry via the query form every store supports.
                tracing::warn!(
                    "recent query rejected ({e}), retrying via the fixed top-50 form"
                );
                self.repository
                    .list_top_50()
                    .await
                    .map_err(FetchHistoryError::FallbackFailed)
            }
        }
    }
}

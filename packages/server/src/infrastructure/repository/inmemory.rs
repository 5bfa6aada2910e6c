//! InMemory Message Repository 実装
//!
//! ドメイン層が定義する MessageRepository trait の具体的な実装。
//! Vec をインメモリ DB として使用します。DATABASE_URL が未設定の
//! ローカル開発と結合テストで使われます。

use async_trait::async_trait;
use chrono::NaiveDateTime;
use tokio::sync::Mutex;

use crate::domain::{ChatMessage, MessageRepository, RepositoryError};

#[derive(Default)]
struct Store {
    /// 採番済みの最後の ID。ID は再利用されない
    last_id: i64,
    /// 挿入順のレコード列
    messages: Vec<ChatMessage>,
}

/// インメモリ Message Repository 実装
#[derive(Default)]
pub struct InMemoryMessageRepository {
    store: Mutex<Store>,
}

impl InMemoryMessageRepository {
    /// 新しい InMemoryMessageRepository を作成
    pub fn new() -> Self {
        Self::default()
    }

    async fn recent(&self, limit: i64) -> Vec<ChatMessage> {
        let store = self.store.lock().await;
        let mut messages = store.messages.clone();
        messages.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        messages.truncate(limit.max(0) as usize);
        messages
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn append(
        &self,
        username: String,
        content: String,
        timestamp: NaiveDateTime,
    ) -> Result<ChatMessage, RepositoryError> {
        let mut store = self.store.lock().await;
        store.last_id += 1;
        let message = ChatMessage::new(store.last_id, username, content, timestamp);
        store.messages.push(message.clone());
        Ok(message)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<ChatMessage>, RepositoryError> {
        Ok(self.recent(limit).await)
    }

    async fn list_top_50(&self) -> Result<Vec<ChatMessage>, RepositoryError> {
        Ok(self.recent(50).await)
    }

    async fn list_all(&self) -> Result<Vec<ChatMessage>, RepositoryError> {
        let store = self.store.lock().await;
        let mut messages = store.messages.clone();
        messages.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then(a.id.cmp(&b.id)));
        Ok(messages)
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

    #[tokio::test]
    async fn test_append_assigns_increasing_ids() {
        // テスト項目: append のたびに ID が 1 から単調増加で採番される
        // given (前提条件):
        let repo = InMemoryMessageRepository::new();

        // when (操作):
        let first = repo
            .append("alice".to_string(), "hi".to_string(), timestamp_at(0))
            .await
            .unwrap();
        let second = repo
            .append("bob".to_string(), "yo".to_string(), timestamp_at(1))
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_list_recent_orders_newest_first_with_id_tiebreak() {
        // テスト項目: list_recent はタイムスタンプ降順、同時刻は ID 降順
        // given (前提条件):
        let repo = InMemoryMessageRepository::new();
        repo.append("alice".to_string(), "first".to_string(), timestamp_at(0))
            .await
            .unwrap();
        // 同じタイムスタンプで2件（挿入順 = ID 順がタイブレーク）
        repo.append("bob".to_string(), "second".to_string(), timestamp_at(5))
            .await
            .unwrap();
        repo.append("carol".to_string(), "third".to_string(), timestamp_at(5))
            .await
            .unwrap();

        // when (操作):
        let messages = repo.list_recent(10).await.unwrap();

        // then (期待する結果):
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].content, "third");
        assert_eq!(messages[1].content, "second");
        assert_eq!(messages[2].content, "first");
    }

    #[tokio::test]
    async fn test_list_recent_caps_at_limit() {
        // テスト項目: list_recent は最大 limit 件しか返さない
        // given (前提条件):
        let repo = InMemoryMessageRepository::new();
        for i in 0..4 {
            repo.append("alice".to_string(), format!("m{i}"), timestamp_at(i))
                .await
                .unwrap();
        }

        // when (操作):
        let messages = repo.list_recent(2).await.unwrap();

        // then (期待する結果):
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content, "m3");
        assert_eq!(messages[1].content, "m2");
    }

    #[tokio::test]
    async fn test_list_top_50_matches_list_recent_50() {
        // テスト項目: フォールバッククエリはプライマリの limit=50 と同じ結果を返す
        // given (前提条件):
        let repo = InMemoryMessageRepository::new();
        for i in 0..55 {
            repo.append("alice".to_string(), format!("m{i}"), timestamp_at(i))
                .await
                .unwrap();
        }

        // when (操作):
        let primary = repo.list_recent(50).await.unwrap();
        let fallback = repo.list_top_50().await.unwrap();

        // then (期待する結果):
        assert_eq!(primary.len(), 50);
        assert_eq!(primary, fallback);
    }

    #[tokio::test]
    async fn test_save_then_query_scenario() {
        // テスト項目: alice/hi → bob/yo の順に保存すると、全件は古い順、
        //             直近1件は bob/yo になる
        // given (前提条件):
        let repo = InMemoryMessageRepository::new();
        repo.append("alice".to_string(), "hi".to_string(), timestamp_at(0))
            .await
            .unwrap();
        repo.append("bob".to_string(), "yo".to_string(), timestamp_at(1))
            .await
            .unwrap();

        // when (操作):
        let all = repo.list_all().await.unwrap();
        let recent = repo.list_recent(1).await.unwrap();

        // then (期待する結果):
        assert_eq!(all[0].username, "alice");
        assert_eq!(all[0].content, "hi");
        assert_eq!(all[1].username, "bob");
        assert_eq!(all[1].content, "yo");
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].username, "bob");
        assert_eq!(recent[0].content, "yo");
    }

    #[tokio::test]
    async fn test_list_all_orders_oldest_first() {
        // テスト項目: list_all は全件をタイムスタンプ昇順で返す
        // given (前提条件):
        let repo = InMemoryMessageRepository::new();
        repo.append("bob".to_string(), "later".to_string(), timestamp_at(9))
            .await
            .unwrap();
        repo.append("alice".to_string(), "earlier".to_string(), timestamp_at(1))
            .await
            .unwrap();

        // when (操作):
        let messages = repo.list_all().await.unwrap();

        // then (期待する結果):
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content, "earlier");
        assert_eq!(messages[1].content, "later");
    }
}

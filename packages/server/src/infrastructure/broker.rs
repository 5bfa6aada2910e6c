//! In-process publish/subscribe relay.
//!
//! Fans payloads out to every connection subscribed to a topic. Not a
//! durable broker: subscription state lives in memory and is discarded when
//! a connection closes.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc::UnboundedSender};
use uuid::Uuid;

/// Subscriber registry contract.
///
/// Injected into the handlers (never a singleton) so tests can swap in a
/// double. Concurrent publish and subscriber-set mutation must both be safe.
#[async_trait]
pub trait MessageBroker: Send + Sync {
    /// Register a connection's sender channel under a topic.
    async fn subscribe(&self, connection_id: Uuid, topic: &str, sender: UnboundedSender<String>);

    /// Drop a single subscription.
    async fn unsubscribe(&self, connection_id: Uuid, topic: &str);

    /// Drop every subscription held by a connection. Called when the
    /// connection closes; nothing about it is persisted.
    async fn unsubscribe_all(&self, connection_id: Uuid);

    /// Deliver a payload to every current subscriber of a topic, best-effort.
    async fn publish(&self, topic: &str, payload: String);
}

/// Broker implementation backed by a topic-keyed map of sender channels.
#[derive(Default)]
pub struct InProcessBroker {
    topics: Mutex<HashMap<String, HashMap<Uuid, UnboundedSender<String>>>>,
}

impl InProcessBroker {
    /// Create an empty broker.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageBroker for InProcessBroker {
    async fn subscribe(&self, connection_id: Uuid, topic: &str, sender: UnboundedSender<String>) {
        let mut topics = self.topics.lock().await;
        topics
            .entry(topic.to_string())
            .or_default()
            .insert(connection_id, sender);
    }

    async fn unsubscribe(&self, connection_id: Uuid, topic: &str) {
        let mut topics = self.topics.lock().await;
        if let Some(subscribers) = topics.get_mut(topic) {
            subscribers.remove(&connection_id);
            if subscribers.is_empty() {
                topics.remove(topic);
            }
        }
    }

    async fn unsubscribe_all(&self, connection_id: Uuid) {
        let mut topics = self.topics.lock().await;
        topics.retain(|_, subscribers| {
            subscribers.remove(&connection_id);
            !subscribers.is_empty()
        });
    }

    async fn publish(&self, topic: &str, payload: String) {
        let topics = self.topics.lock().await;
        let Some(subscribers) = topics.get(topic) else {
            return;
        };

        for (connection_id, sender) in subscribers {
            // A closed channel means the connection is going away; its
            // subscriptions are cleaned up by the disconnect path.
            if sender.send(payload.clone()).is_err() {
                tracing::warn!("failed to deliver to connection '{connection_id}'");
            }
        }
    }
}

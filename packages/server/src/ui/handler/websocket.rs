//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc::{self, UnboundedSender};
use uuid::Uuid;

use crate::{
    infrastructure::dto::{BROKER_PREFIX, ChatMessageDto, ClientFrame, MESSAGES_TOPIC, ServerFrame},
    ui::state::AppState,
    usecase::{FetchHistoryUseCase, SendMessageUseCase},
};

/// History requests publish at most this many records.
const HISTORY_LIMIT: i64 = 50;

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let connection_id = Uuid::new_v4();
    tracing::info!("Connection '{}' opened", connection_id);

    let (mut sender, mut receiver) = socket.split();

    // Channel the broker delivers this connection's payloads on
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();

    // Receive frames from this client and dispatch them
    let recv_state = state.clone();
    let recv_tx = tx.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    handle_frame(&recv_state, connection_id, &recv_tx, &text).await;
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", connection_id);
                    break;
                }
                _ => {}
            }
        }
    });

    // Forward published payloads to this client's socket
    let mut send_task = tokio::spawn(async move {
        while let Some(payload) = rx.recv().await {
            if sender.send(Message::Text(payload.into())).await.is_err() {
                break;
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // All subscription state for a closed connection is discarded
    state.broker.unsubscribe_all(connection_id).await;
    tracing::info!("Connection '{}' closed", connection_id);
}

/// Dispatch a single inbound frame. A failure aborts this frame only; the
/// connection stays up and there is no error frame back to the client.
async fn handle_frame(
    state: &Arc<AppState>,
    connection_id: Uuid,
    tx: &UnboundedSender<String>,
    text: &str,
) {
    let frame = match serde_json::from_str::<ClientFrame>(text) {
        Ok(frame) => frame,
        Err(e) => {
            tracing::warn!("Failed to parse frame as JSON: {}", e);
            return;
        }
    };

    match frame {
        ClientFrame::Subscribe { topic } => {
            state
                .broker
                .subscribe(connection_id, &topic, tx.clone())
                .await;
            tracing::info!("Connection '{}' subscribed to '{}'", connection_id, topic);
        }
        ClientFrame::Unsubscribe { topic } => {
            state.broker.unsubscribe(connection_id, &topic).await;
            tracing::info!(
                "Connection '{}' unsubscribed from '{}'",
                connection_id,
                topic
            );
        }
        ClientFrame::Send { username, content } => {
            // Persist first, then fan out the store-assigned view
            let usecase = SendMessageUseCase::new(state.repository.clone());
            match usecase.execute(username, content).await {
                Ok(message) => {
                    let frame = ServerFrame::Message(ChatMessageDto::from(&message));
                    publish_frame(state, MESSAGES_TOPIC, &frame).await;
                }
                Err(e) => {
                    tracing::warn!("Failed to persist message: {}", e);
                }
            }
        }
        ClientFrame::History => {
            let usecase = FetchHistoryUseCase::new(state.repository.clone());
            match usecase.execute(HISTORY_LIMIT).await {
                Ok(messages) => {
                    // History goes to every subscriber of the shared topic,
                    // not just the requester
                    let frame = ServerFrame::History {
                        messages: messages.iter().map(ChatMessageDto::from).collect(),
                    };
                    publish_frame(state, MESSAGES_TOPIC, &frame).await;
                }
                Err(e) => {
                    tracing::warn!("Failed to fetch history: {}", e);
                }
            }
        }
        ClientFrame::Publish { topic, payload } => {
            // Broker destinations are relayed without application handling
            if topic.starts_with(BROKER_PREFIX) {
                state.broker.publish(&topic, payload.to_string()).await;
            } else {
                tracing::warn!("Dropping publish to non-broker destination '{}'", topic);
            }
        }
    }
}

async fn publish_frame(state: &Arc<AppState>, topic: &str, frame: &ServerFrame) {
    match serde_json::to_string(frame) {
        Ok(json) => state.broker.publish(topic, json).await,
        Err(e) => tracing::error!("Failed to encode frame: {}", e),
    }
}

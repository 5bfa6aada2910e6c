//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    infrastructure::dto::ChatMessageDto, ui::state::AppState, usecase::ListMessagesUseCase,
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Every persisted message, oldest-first, returned to the caller only
/// (no broadcast side effect).
pub async fn get_all_messages(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ChatMessageDto>>, StatusCode> {
    let usecase = ListMessagesUseCase::new(state.repository.clone());

    let messages = usecase.execute().await.map_err(|e| {
        tracing::error!("Failed to list messages: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(messages.iter().map(ChatMessageDto::from).collect()))
}

//! Server startup: store selection, router construction, and serving.

use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::get,
};
use sqlx::postgres::PgPoolOptions;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::ServerConfig,
    domain::MessageRepository,
    error::ServerError,
    infrastructure::{
        broker::{InProcessBroker, MessageBroker},
        repository::PostgresMessageRepository,
    },
    ui::{handler, signal, state::AppState},
};

/// Run the chat relay server until a shutdown signal arrives.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let state = match &config.database_url {
        Some(url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.max_db_connections)
                .connect(url)
                .await?;
            sqlx::migrate!().run(&pool).await?;
            tracing::info!("Connected to the message store");
            let repository: Arc<dyn MessageRepository> =
                Arc::new(PostgresMessageRepository::new(pool));
            let broker: Arc<dyn MessageBroker> = Arc::new(InProcessBroker::new());
            Arc::new(AppState::new(repository, broker))
        }
        None => {
            tracing::warn!("DATABASE_URL is not set; messages will not survive a restart");
            Arc::new(AppState::in_memory())
        }
    };

    let app = build_router(state, &config.allowed_origins);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(signal::shutdown_signal())
        .await?;

    Ok(())
}

/// Assemble the application router.
///
/// The plain HTTP routes sit behind the configurable origin allow-list; the
/// WebSocket path stays origin-permissive. One logical WebSocket endpoint is
/// reachable under two route spellings, `/chat` and `/chat/websocket` (the
/// path fallback-transport clients negotiate their native socket on).
pub fn build_router(state: Arc<AppState>, allowed_origins: &[String]) -> Router {
    let api = Router::new()
        .route("/api/health", get(handler::health_check))
        .route("/api/chat/messages", get(handler::get_all_messages))
        .layer(cors_layer(allowed_origins));

    Router::new()
        .route("/chat", get(handler::websocket_handler))
        .route("/chat/websocket", get(handler::websocket_handler))
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS for the plain HTTP routes. An empty allow-list means any origin.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers(AllowHeaders::any());

    if allowed_origins.is_empty() {
        cors.allow_origin(AllowOrigin::any())
    } else {
        let origins = allowed_origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect::<Vec<_>>();
        cors.allow_origin(AllowOrigin::list(origins))
    }
}

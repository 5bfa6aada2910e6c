//! Client error definitions.

use thiserror::Error;

/// Errors raised while connecting to or talking with the relay.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection or transport failure
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    /// A frame could not be encoded
    #[error("failed to encode frame: {0}")]
    Encode(#[from] serde_json::Error),
}

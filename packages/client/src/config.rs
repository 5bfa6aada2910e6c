//! Client configuration, flag- and environment-driven.

use clap::Parser;

/// Terminal chat client configuration
#[derive(Parser, Debug, Clone)]
#[command(name = "parlor-client", version, about)]
pub struct ClientConfig {
    /// WebSocket URL of the relay
    #[arg(long, env = "CHAT_URL", default_value = "ws://127.0.0.1:8080/chat")]
    pub url: String,

    /// Name sent with every message
    #[arg(long, env = "CHAT_USERNAME", default_value = "guest")]
    pub username: String,
}

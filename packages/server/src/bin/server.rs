//! Parlor chat relay server.
//!
//! Persists inbound chat messages and broadcasts them to all connected
//! clients, plus recent history on request.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin parlor-server
//! ```

use clap::Parser;
use parlor_server::ServerConfig;
use parlor_shared::setup_logger;

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let config = ServerConfig::parse();

    // Run the server
    if let Err(e) = parlor_server::run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

//! Parlor terminal chat client.
//!
//! Connects to a running relay, prints broadcasts, and sends typed lines as
//! chat messages. `/history` re-requests the recent history, `/quit` leaves.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin parlor-client -- --username alice
//! ```

use clap::Parser;
use parlor_client::ClientConfig;
use parlor_shared::setup_logger;

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let config = ClientConfig::parse();

    // Run the client
    if let Err(e) = parlor_client::run_client(config).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}

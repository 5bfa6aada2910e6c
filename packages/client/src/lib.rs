//! Terminal chat client for the Parlor relay.
//!
//! Connects to the relay, subscribes to the shared topic, prints every
//! broadcast, and sends lines typed at the prompt as chat messages.

pub mod command;
pub mod config;
pub mod error;
mod runner;

// Re-export entry points
pub use config::ClientConfig;
pub use error::ClientError;
pub use runner::run_client;

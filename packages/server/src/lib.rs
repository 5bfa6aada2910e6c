//! Parlor chat relay server library.
//!
//! Accepts chat messages over a persistent WebSocket connection, persists
//! them to the message store, and fans each persisted message out to every
//! subscriber of the shared topic. Recent history can be requested over the
//! socket or fetched in full over a plain HTTP route.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use error::ServerError;
pub use ui::{build_router, run};

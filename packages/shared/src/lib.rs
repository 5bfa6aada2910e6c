//! Shared utilities for the Parlor chat relay.
//!
//! Carries the concerns every binary in the workspace needs: tracing setup
//! and the server-side timestamp helpers.

pub mod logger;
pub mod time;

pub use logger::setup_logger;
pub use time::{TIMESTAMP_FORMAT, format_timestamp, now_local};

//! # linkfeed-client
//!
//! Session layer between the [`Store`](linkfeed_store::Store) and a
//! presentation layer: shared state, command handlers, change events,
//! configuration and logging setup.

pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod state;

use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::ClientConfig;
use crate::events::EventSink;
use crate::state::{AppState, SharedState};

pub use error::ClientError;

/// Install the global tracing subscriber. Respects `RUST_LOG`; calling it
/// twice is harmless.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("linkfeed_client=debug,linkfeed_store=info,warn"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

/// Start a session with the default (logging) event sink.
pub fn start(config: &ClientConfig) -> SharedState {
    tracing::info!(seed_demo = config.seed_demo, theme = ?config.theme, "Starting Linkfeed session");
    AppState::new(config).into_shared()
}

/// Start a session that reports changes to `events`.
pub fn start_with_events(config: &ClientConfig, events: Arc<dyn EventSink>) -> SharedState {
    tracing::info!(seed_demo = config.seed_demo, "Starting Linkfeed session");
    AppState::new(config).with_events(events).into_shared()
}

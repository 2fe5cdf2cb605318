//! Application state shared across all commands.
//!
//! The [`AppState`] struct is wrapped in `Arc<Mutex<>>` so every command
//! handler sees the same session. Data lives in the [`Store`]; the fields
//! here only describe which panels are open.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use linkfeed_shared::constants::{SIDEBAR_MAX_WIDTH, SIDEBAR_SNAP_WIDTH};
use linkfeed_shared::{SortOption, Theme};
use linkfeed_store::seed::demo_items;
use linkfeed_store::Store;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::events::{EventSink, LogSink};

pub type SharedState = Arc<Mutex<AppState>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiSettings {
    pub theme: Theme,
    /// Width of the analytics sidebar. `0` means collapsed.
    pub sidebar_width: u32,
}

impl UiSettings {
    /// Apply a drag of the sidebar handle and return the resulting width.
    ///
    /// Widths at or below the snap threshold collapse the sidebar; widths at
    /// or above the maximum are ignored.
    pub fn resize_sidebar(&mut self, width: i32) -> u32 {
        if width <= SIDEBAR_SNAP_WIDTH as i32 {
            self.sidebar_width = 0;
        } else if width < SIDEBAR_MAX_WIDTH as i32 {
            self.sidebar_width = width as u32;
        }
        self.sidebar_width
    }
}

/// Central application state.
pub struct AppState {
    /// Links, identity and feed selection.
    pub store: Store,

    pub settings: UiSettings,

    /// Feed ordering. `None` keeps the store's ranking, which puts fresh
    /// submissions on top until the next vote.
    pub sort: Option<SortOption>,

    pub add_form_open: bool,
    pub settings_open: bool,
    pub subscription_open: bool,

    /// Where change notifications go.
    pub events: Arc<dyn EventSink>,
}

impl AppState {
    /// Create the state for a new session.
    pub fn new(config: &ClientConfig) -> Self {
        let mut store = Store::with_avatar_service(config.avatar_service.clone());
        if config.seed_demo {
            store = store.with_items(demo_items(Utc::now()));
            tracing::info!(items = store.items().len(), "Seeded demo feed");
        }

        Self {
            store,
            settings: UiSettings {
                theme: config.theme,
                sidebar_width: config.sidebar_width,
            },
            sort: None,
            add_form_open: false,
            settings_open: false,
            subscription_open: false,
            events: Arc::new(LogSink),
        }
    }

    pub fn with_events(mut self, events: Arc<dyn EventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn into_shared(self) -> SharedState {
        Arc::new(Mutex::new(self))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&ClientConfig::default())
    }
}

/// Lock the shared state, mapping poisoning to [`ClientError`].
pub fn lock(state: &SharedState) -> Result<MutexGuard<'_, AppState>, ClientError> {
    Ok(state.lock()?)
}

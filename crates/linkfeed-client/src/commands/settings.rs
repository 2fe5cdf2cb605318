use tracing::info;

use linkfeed_shared::Theme;

use crate::error::ClientError;
use crate::events::{emit_event, EVENT_SETTINGS_CHANGED};
use crate::state::{lock, AppState, SharedState, UiSettings};

fn notify_settings(state: &AppState) {
    emit_event(state.events.as_ref(), EVENT_SETTINGS_CHANGED, state.settings);
}

pub fn get_settings(state: &SharedState) -> Result<UiSettings, ClientError> {
    Ok(lock(state)?.settings)
}

/// Switch between light and dark. Returns the new theme.
pub fn toggle_theme(state: &SharedState) -> Result<Theme, ClientError> {
    let mut guard = lock(state)?;
    guard.settings.theme = guard.settings.theme.toggled();
    notify_settings(&guard);
    info!(theme = ?guard.settings.theme, "Theme changed");
    Ok(guard.settings.theme)
}

/// Drag the sidebar handle to `width` pixels. Returns the applied width.
pub fn resize_sidebar(state: &SharedState, width: i32) -> Result<u32, ClientError> {
    let mut guard = lock(state)?;
    let before = guard.settings.sidebar_width;
    let after = guard.settings.resize_sidebar(width);
    if after != before {
        notify_settings(&guard);
    }
    Ok(after)
}

use serde::Serialize;
use tracing::info;

use linkfeed_shared::Identity;

use crate::error::ClientError;
use crate::events::{emit_event, IdentityPayload, EVENT_IDENTITY_CHANGED};
use crate::state::{lock, AppState, SharedState};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IdentityDto {
    pub id: String,
    pub display_name: String,
    pub avatar: String,
    pub initials: String,
    pub is_pro: bool,
}

impl From<&Identity> for IdentityDto {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id.to_string(),
            display_name: identity.display_name.clone(),
            avatar: identity.avatar.clone(),
            initials: identity.initials(),
            is_pro: identity.is_privileged,
        }
    }
}

pub(crate) fn notify_identity(state: &AppState) {
    if let Some(identity) = state.store.identity() {
        emit_event(
            state.events.as_ref(),
            EVENT_IDENTITY_CHANGED,
            IdentityPayload {
                user_id: identity.id.to_string(),
                display_name: identity.display_name.clone(),
                is_pro: identity.is_privileged,
            },
        );
    }
}

pub fn sign_up(state: &SharedState, display_name: &str) -> Result<IdentityDto, ClientError> {
    let mut guard = lock(state)?;
    let identity = guard.store.sign_up(display_name)?;
    notify_identity(&guard);
    Ok(IdentityDto::from(&identity))
}

/// Save the settings form. Returns `None` when nobody is signed in.
pub fn update_profile(
    state: &SharedState,
    display_name: &str,
    avatar: &str,
) -> Result<Option<IdentityDto>, ClientError> {
    let mut guard = lock(state)?;
    guard.store.update_profile(display_name, avatar)?;

    let Some(dto) = guard.store.identity().map(IdentityDto::from) else {
        return Ok(None);
    };
    guard.settings_open = false;
    notify_identity(&guard);
    info!(user_id = %dto.id, "Settings saved");
    Ok(Some(dto))
}

pub fn current_identity(state: &SharedState) -> Result<Option<IdentityDto>, ClientError> {
    let guard = lock(state)?;
    Ok(guard.store.identity().map(IdentityDto::from))
}

pub fn open_settings(state: &SharedState) -> Result<(), ClientError> {
    lock(state)?.settings_open = true;
    Ok(())
}

pub fn close_settings(state: &SharedState) -> Result<(), ClientError> {
    lock(state)?.settings_open = false;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::RecordingSink;
    use std::sync::Arc;

    fn state_with_sink() -> (SharedState, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::new());
        let state = AppState::default().with_events(sink.clone()).into_shared();
        (state, sink)
    }

    #[test]
    fn sign_up_emits_identity_event() {
        let (state, sink) = state_with_sink();
        let dto = sign_up(&state, "Alex River").unwrap();
        assert_eq!(dto.display_name, "Alex River");
        assert_eq!(dto.initials, "AR");
        assert!(!dto.is_pro);
        assert_eq!(sink.names(), vec![EVENT_IDENTITY_CHANGED]);
        assert_eq!(current_identity(&state).unwrap(), Some(dto));
    }

    #[test]
    fn sign_up_blank_name_fails() {
        let (state, sink) = state_with_sink();
        let err = sign_up(&state, "  ").unwrap_err();
        assert_eq!(err.to_string(), "display name must not be empty");
        assert!(sink.events().is_empty());
        assert_eq!(current_identity(&state).unwrap(), None);
    }

    #[test]
    fn update_profile_closes_settings() {
        let (state, _sink) = state_with_sink();
        sign_up(&state, "Alex").unwrap();
        open_settings(&state).unwrap();

        let dto = update_profile(&state, "Alex R.", "data:image/png;base64,AA")
            .unwrap()
            .unwrap();
        assert_eq!(dto.display_name, "Alex R.");
        assert_eq!(dto.avatar, "data:image/png;base64,AA");
        assert!(!state.lock().unwrap().settings_open);
    }

    #[test]
    fn update_profile_without_identity() {
        let (state, sink) = state_with_sink();
        assert_eq!(update_profile(&state, "Alex", "").unwrap(), None);
        assert!(sink.events().is_empty());
    }
}

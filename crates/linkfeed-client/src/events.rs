use std::sync::Mutex;

use serde::Serialize;
use serde_json::Value;

pub const EVENT_IDENTITY_CHANGED: &str = "identity-changed";
pub const EVENT_FEED_CHANGED: &str = "feed-changed";
pub const EVENT_SELECTION_CHANGED: &str = "selection-changed";
pub const EVENT_COMMENTS_CHANGED: &str = "comments-changed";
pub const EVENT_SETTINGS_CHANGED: &str = "settings-changed";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityPayload {
    pub user_id: String,
    pub display_name: String,
    pub is_pro: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedChangedPayload {
    pub reason: &'static str,
    pub item_id: String,
    pub total_items: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionPayload {
    pub selected_topic: Option<String>,
    pub selected_item: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentsChangedPayload {
    pub item_id: String,
    pub comment_id: String,
    pub parent_id: Option<String>,
}

/// Receiver of change notifications. The presentation layer re-derives its
/// views when one arrives.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &str, payload: Value);
}

pub fn emit_event<S: Serialize>(sink: &dyn EventSink, event: &str, payload: S) {
    match serde_json::to_value(payload) {
        Ok(value) => sink.emit(event, value),
        Err(e) => tracing::error!(event, error = %e, "Failed to emit event"),
    }
}

/// Default sink: traces every event and drops it.
#[derive(Debug, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&self, event: &str, payload: Value) {
        tracing::debug!(event, %payload, "event");
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedEvent {
    pub name: String,
    pub payload: Value,
}

/// Keeps every emitted event in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<RecordedEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn names(&self) -> Vec<String> {
        self.events().into_iter().map(|e| e.name).collect()
    }

    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: &str, payload: Value) {
        match self.events.lock() {
            Ok(mut events) => events.push(RecordedEvent {
                name: event.to_string(),
                payload,
            }),
            Err(e) => tracing::error!(event, error = %e, "Event log poisoned"),
        }
    }
}

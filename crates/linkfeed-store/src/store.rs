//! The [`Store`] state container.
//!
//! Mutations live next to the data they touch: identity operations in
//! [`identity`](crate::identity), link operations in [`items`](crate::items)
//! and comment operations in [`comments`](crate::comments).

use linkfeed_shared::constants::DEFAULT_AVATAR_SERVICE;
use linkfeed_shared::{Identity, ItemId};

use crate::models::Item;

/// Single owner of all application data for one session.
#[derive(Debug, Clone)]
pub struct Store {
    /// Posted links, kept in feed order.
    pub(crate) items: Vec<Item>,

    /// `None` until the user signs up.
    pub(crate) identity: Option<Identity>,

    /// Topic filter. `None` shows every topic.
    pub(crate) selected_topic: Option<String>,

    /// Item open in the detail view, looked up by id on every read.
    pub(crate) selected_item: Option<ItemId>,

    /// Base URL of the placeholder avatar service used at signup.
    pub(crate) avatar_service: String,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_avatar_service(DEFAULT_AVATAR_SERVICE)
    }

    pub fn with_avatar_service(avatar_service: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            identity: None,
            selected_topic: None,
            selected_item: None,
            avatar_service: avatar_service.into(),
        }
    }

    /// Preload items, e.g. the demo feed. Existing items are replaced.
    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == *id)
    }

    pub(crate) fn item_mut(&mut self, id: &ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == *id)
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    pub fn selected_topic(&self) -> Option<&str> {
        self.selected_topic.as_deref()
    }

    /// Set or clear the topic filter. A topic with no items is allowed and
    /// simply yields an empty feed.
    pub fn select_topic(&mut self, topic: Option<String>) {
        self.selected_topic = topic;
    }

    /// Open an item in the detail view. Returns `false` if it does not exist.
    pub fn select_item(&mut self, id: &ItemId) -> bool {
        if self.item(id).is_none() {
            tracing::debug!(item_id = %id, "select ignored, unknown item");
            return false;
        }
        self.selected_item = Some(id.clone());
        true
    }

    pub fn close_item(&mut self) {
        self.selected_item = None;
    }

    pub fn selected_item_id(&self) -> Option<&ItemId> {
        self.selected_item.as_ref()
    }

    /// The item open in the detail view, read from the canonical list.
    pub fn selected_item(&self) -> Option<&Item> {
        self.selected_item.as_ref().and_then(|id| self.item(id))
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

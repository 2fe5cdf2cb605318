use serde::Serialize;
use tracing::{info, warn};

use linkfeed_shared::{ItemId, UserId, VoteDirection};
use linkfeed_store::Item;

use crate::commands::comments::CommentDto;
use crate::error::ClientError;
use crate::events::{
    emit_event, FeedChangedPayload, SelectionPayload, EVENT_FEED_CHANGED, EVENT_SELECTION_CHANGED,
};
use crate::state::{lock, AppState, SharedState};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ItemCardDto {
    pub id: String,
    pub title: String,
    pub url: String,
    pub domain: String,
    pub description: Option<String>,
    pub votes: i64,
    pub author_id: String,
    pub author_name: String,
    pub author_avatar: String,
    pub created_at: String,
    pub comment_count: usize,
    pub tags: Vec<String>,
    pub topic: String,
    /// Whether the signed-in user submitted this link (and may delete it).
    pub is_own: bool,
}

impl ItemCardDto {
    pub fn from_item(item: &Item, viewer: Option<&UserId>) -> Self {
        Self {
            id: item.id.to_string(),
            title: item.title.clone(),
            url: item.url.clone(),
            domain: item.domain.clone(),
            description: item.description.clone(),
            votes: item.votes,
            author_id: item.author.id.to_string(),
            author_name: item.author.display_name.clone(),
            author_avatar: item.author.avatar.clone(),
            created_at: item.created_at.to_rfc3339(),
            comment_count: item.comment_count(),
            tags: item.tags.clone(),
            topic: item.topic.clone(),
            is_own: viewer == Some(&item.author.id),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ItemDetailDto {
    pub item: ItemCardDto,
    pub comments: Vec<CommentDto>,
}

impl ItemDetailDto {
    pub fn from_item(item: &Item, viewer: Option<&UserId>) -> Self {
        Self {
            item: ItemCardDto::from_item(item, viewer),
            comments: item.comments.iter().map(CommentDto::from).collect(),
        }
    }
}

fn viewer(state: &AppState) -> Option<&UserId> {
    state.store.identity().map(|identity| &identity.id)
}

pub(crate) fn card(state: &AppState, item: &Item) -> ItemCardDto {
    ItemCardDto::from_item(item, viewer(state))
}

pub(crate) fn notify_feed(state: &AppState, reason: &'static str, item_id: &ItemId) {
    emit_event(
        state.events.as_ref(),
        EVENT_FEED_CHANGED,
        FeedChangedPayload {
            reason,
            item_id: item_id.to_string(),
            total_items: state.store.items().len(),
        },
    );
}

pub(crate) fn notify_selection(state: &AppState) {
    emit_event(
        state.events.as_ref(),
        EVENT_SELECTION_CHANGED,
        SelectionPayload {
            selected_topic: state.store.selected_topic().map(str::to_string),
            selected_item: state.store.selected_item_id().map(ItemId::to_string),
        },
    );
}

/// Submit a link. Closes the form and resets the topic filter so the new
/// link shows at the top of the feed.
pub fn add_link(
    state: &SharedState,
    title: &str,
    url: &str,
    topic: &str,
) -> Result<ItemCardDto, ClientError> {
    let mut guard = lock(state)?;
    let item = guard.store.add_item(title, url, topic)?;
    guard.add_form_open = false;

    notify_feed(&guard, "added", &item.id);
    notify_selection(&guard);
    Ok(card(&guard, &item))
}

/// Delete a link. Only its author may do so. Returns `false` when the link
/// no longer exists.
pub fn delete_link(state: &SharedState, item_id: &str) -> Result<bool, ClientError> {
    let item_id = ItemId::from(item_id);
    let mut guard = lock(state)?;

    let Some(item) = guard.store.item(&item_id) else {
        return Ok(false);
    };
    if viewer(&guard) != Some(&item.author.id) {
        warn!(item_id = %item_id, "Delete refused, not the author");
        return Err(ClientError::Forbidden(
            "only the author can delete this link".into(),
        ));
    }

    let was_selected = guard.store.selected_item_id() == Some(&item_id);
    let removed = guard.store.delete_item(&item_id);
    if removed {
        notify_feed(&guard, "deleted", &item_id);
        if was_selected {
            notify_selection(&guard);
        }
    }
    Ok(removed)
}

/// Returns the new vote count, `None` for an unknown link.
pub fn vote(
    state: &SharedState,
    item_id: &str,
    direction: VoteDirection,
) -> Result<Option<i64>, ClientError> {
    let item_id = ItemId::from(item_id);
    let mut guard = lock(state)?;
    let votes = guard.store.vote(&item_id, direction);
    if votes.is_some() {
        notify_feed(&guard, "voted", &item_id);
    }
    Ok(votes)
}

/// Open the detail view for a link.
pub fn open_detail(state: &SharedState, item_id: &str) -> Result<Option<ItemDetailDto>, ClientError> {
    let item_id = ItemId::from(item_id);
    let mut guard = lock(state)?;
    if !guard.store.select_item(&item_id) {
        return Ok(None);
    }
    notify_selection(&guard);
    Ok(detail(&guard))
}

pub fn close_detail(state: &SharedState) -> Result<(), ClientError> {
    let mut guard = lock(state)?;
    if guard.store.selected_item_id().is_some() {
        guard.store.close_item();
        notify_selection(&guard);
    }
    Ok(())
}

/// The link currently open in the detail view.
pub fn get_detail(state: &SharedState) -> Result<Option<ItemDetailDto>, ClientError> {
    let guard = lock(state)?;
    Ok(detail(&guard))
}

fn detail(state: &AppState) -> Option<ItemDetailDto> {
    state
        .store
        .selected_item()
        .map(|item| ItemDetailDto::from_item(item, viewer(state)))
}

/// Show or hide the submit form. Returns the new visibility.
pub fn toggle_add_form(state: &SharedState) -> Result<bool, ClientError> {
    let mut guard = lock(state)?;
    guard.add_form_open = !guard.add_form_open;
    info!(open = guard.add_form_open, "Submit form toggled");
    Ok(guard.add_form_open)
}

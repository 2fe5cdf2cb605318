use serde::Serialize;

use linkfeed_shared::{CommentId, ItemId};
use linkfeed_store::Comment;

use crate::error::ClientError;
use crate::events::{emit_event, CommentsChangedPayload, EVENT_COMMENTS_CHANGED};
use crate::state::{lock, SharedState};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: String,
    pub author_name: String,
    pub author_avatar: String,
    pub text: String,
    pub created_at: String,
    pub replies: Vec<CommentDto>,
}

impl From<&Comment> for CommentDto {
    fn from(c: &Comment) -> Self {
        Self {
            id: c.id.to_string(),
            author_name: c.author.display_name.clone(),
            author_avatar: c.author.avatar.clone(),
            text: c.text.clone(),
            created_at: c.created_at.to_rfc3339(),
            replies: c.replies.iter().map(CommentDto::from).collect(),
        }
    }
}

/// Post a comment, or a reply when `parent_id` is set.
///
/// Returns `None` if the link or the parent comment is gone.
pub fn add_comment(
    state: &SharedState,
    item_id: &str,
    text: &str,
    parent_id: Option<&str>,
) -> Result<Option<CommentDto>, ClientError> {
    let item_id = ItemId::from(item_id);
    let parent = parent_id.map(CommentId::from);

    let mut guard = lock(state)?;
    let Some(comment) = guard.store.add_comment(&item_id, text, parent.as_ref())? else {
        return Ok(None);
    };

    emit_event(
        guard.events.as_ref(),
        EVENT_COMMENTS_CHANGED,
        CommentsChangedPayload {
            item_id: item_id.to_string(),
            comment_id: comment.id.to_string(),
            parent_id: parent.map(|p| p.to_string()),
        },
    );
    Ok(Some(CommentDto::from(&comment)))
}

/// The comment tree of a link, empty if the link is gone.
pub fn get_comments(state: &SharedState, item_id: &str) -> Result<Vec<CommentDto>, ClientError> {
    let guard = lock(state)?;
    Ok(guard
        .store
        .item(&ItemId::from(item_id))
        .map(|item| item.comments.iter().map(CommentDto::from).collect())
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::identity::sign_up;
    use crate::commands::links::{get_detail, open_detail};
    use crate::config::ClientConfig;
    use crate::events::RecordingSink;
    use crate::state::AppState;
    use std::sync::Arc;

    fn seeded() -> (SharedState, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::new());
        let config = ClientConfig {
            seed_demo: true,
            ..ClientConfig::default()
        };
        let state = AppState::new(&config).with_events(sink.clone()).into_shared();
        sign_up(&state, "Casey").unwrap();
        sink.clear();
        (state, sink)
    }

    #[test]
    fn reply_shows_in_list_and_detail() {
        let (state, sink) = seeded();
        open_detail(&state, "1").unwrap();

        let reply = add_comment(&state, "1", "Agreed!", Some("c1")).unwrap().unwrap();

        let listed = get_comments(&state, "1").unwrap();
        let c1 = listed.iter().find(|c| c.id == "c1").unwrap();
        assert_eq!(c1.replies, vec![reply.clone()]);

        let detail = get_detail(&state).unwrap().unwrap();
        assert_eq!(detail.comments, listed);

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].name, EVENT_COMMENTS_CHANGED);
        assert_eq!(events[1].payload["parentId"], "c1");
    }

    #[test]
    fn top_level_comment_goes_first() {
        let (state, _sink) = seeded();
        let new = add_comment(&state, "1", "First!", None).unwrap().unwrap();
        let ids: Vec<String> = get_comments(&state, "1")
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![new.id, "c1".to_string(), "c2".to_string()]);
    }

    #[test]
    fn stale_references_are_noops() {
        let (state, sink) = seeded();
        assert_eq!(add_comment(&state, "99", "hi", None).unwrap(), None);
        assert_eq!(add_comment(&state, "1", "hi", Some("ghost")).unwrap(), None);
        assert!(sink.events().is_empty());
        assert!(get_comments(&state, "99").unwrap().is_empty());
    }

    #[test]
    fn blank_comment_is_rejected() {
        let (state, _sink) = seeded();
        let err = add_comment(&state, "1", "   ", None).unwrap_err();
        assert_eq!(err.to_string(), "comment must not be empty");
    }
}

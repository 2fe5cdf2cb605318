//! Domain model structs held by the [`Store`](crate::Store).
//!
//! Every struct derives `Serialize` and `Deserialize` so it can be handed
//! directly to the presentation layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use linkfeed_shared::{CommentId, Identity, ItemId};

// ---------------------------------------------------------------------------
// Item
// ---------------------------------------------------------------------------

/// A submitted link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub url: String,
    /// Host derived from `url` when the item was created. Never re-derived.
    pub domain: String,
    pub description: Option<String>,
    /// Unbounded in both directions.
    pub votes: i64,
    /// Snapshot of the author at submission time.
    pub author: Identity,
    pub created_at: DateTime<Utc>,
    /// Top-level comments, newest first.
    pub comments: Vec<Comment>,
    pub tags: Vec<String>,
    pub topic: String,
}

impl Item {
    /// Number of top-level comments, as shown on a feed card.
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    /// Number of comments in the whole tree, replies included.
    pub fn thread_len(&self) -> usize {
        self.comments.iter().map(Comment::thread_len).sum()
    }
}

// ---------------------------------------------------------------------------
// Comment
// ---------------------------------------------------------------------------

/// A comment on an item. Replies nest without a depth limit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub author: Identity,
    pub text: String,
    pub created_at: DateTime<Utc>,
    /// Replies, oldest first.
    #[serde(default)]
    pub replies: Vec<Comment>,
}

impl Comment {
    /// This comment plus all of its descendants.
    pub fn thread_len(&self) -> usize {
        1 + self.replies.iter().map(Comment::thread_len).sum::<usize>()
    }
}

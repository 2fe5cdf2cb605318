//! Comment trees.
//!
//! New top-level comments go first; replies are appended under their parent
//! so a thread reads oldest-first. A reply to a parent that does not exist
//! leaves the tree untouched.

use chrono::Utc;
use tracing::{debug, info};

use linkfeed_shared::{CommentId, ItemId, ValidationError};

use crate::error::Result;
use crate::models::Comment;
use crate::store::Store;

/// Return a copy of `tree` with `comment` inserted.
///
/// `parent = None` prepends a top-level comment. Otherwise the first node
/// (depth-first) whose id equals `parent` receives `comment` as its last
/// reply. The input is never modified.
pub fn insert_comment(tree: &[Comment], parent: Option<&CommentId>, comment: Comment) -> Vec<Comment> {
    let mut out = tree.to_vec();
    // An unknown parent hands the comment back; the copy is still equal to
    // the input, which is the no-op we want.
    let _ = insert_in_place(&mut out, parent, comment);
    out
}

/// Depth-first lookup of a comment anywhere in the tree.
pub fn find_comment<'a>(tree: &'a [Comment], id: &CommentId) -> Option<&'a Comment> {
    tree.iter().find_map(|node| {
        if node.id == *id {
            Some(node)
        } else {
            find_comment(&node.replies, id)
        }
    })
}

/// Insert into `tree` in place. Gives `comment` back if `parent` is unknown.
pub(crate) fn insert_in_place(
    tree: &mut Vec<Comment>,
    parent: Option<&CommentId>,
    comment: Comment,
) -> std::result::Result<(), Comment> {
    match parent {
        None => {
            tree.insert(0, comment);
            Ok(())
        }
        Some(parent) => attach_reply(tree, parent, comment),
    }
}

fn attach_reply(
    nodes: &mut [Comment],
    parent: &CommentId,
    mut reply: Comment,
) -> std::result::Result<(), Comment> {
    for node in nodes {
        if node.id == *parent {
            node.replies.push(reply);
            return Ok(());
        }
        match attach_reply(&mut node.replies, parent, reply) {
            Ok(()) => return Ok(()),
            Err(back) => reply = back,
        }
    }
    Err(reply)
}

impl Store {
    /// Post a comment on an item, or a reply when `parent` is given.
    ///
    /// Returns `Ok(None)` when the item or the parent comment no longer
    /// exists. The detail view reads the same item, so it sees the new
    /// comment without further bookkeeping.
    pub fn add_comment(
        &mut self,
        item_id: &ItemId,
        text: &str,
        parent: Option<&CommentId>,
    ) -> Result<Option<Comment>> {
        let author = self.identity.clone().ok_or(ValidationError::NotSignedIn)?;
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyField("comment").into());
        }

        let Some(item) = self.item_mut(item_id) else {
            debug!(item_id = %item_id, "comment ignored, unknown item");
            return Ok(None);
        };

        let comment = Comment {
            id: CommentId::random(),
            author,
            text: text.to_string(),
            created_at: Utc::now(),
            replies: Vec::new(),
        };

        match insert_in_place(&mut item.comments, parent, comment.clone()) {
            Ok(()) => {
                info!(
                    item_id = %item_id,
                    comment_id = %comment.id,
                    parent = ?parent.map(CommentId::as_str),
                    "Comment added"
                );
                Ok(Some(comment))
            }
            Err(_) => {
                debug!(item_id = %item_id, parent = ?parent, "reply ignored, unknown parent");
                Ok(None)
            }
        }
    }
}

//! Submitting, deleting and voting on links.

use chrono::Utc;
use tracing::{debug, info};

use linkfeed_shared::domain::display_domain;
use linkfeed_shared::{ItemId, ValidationError, VoteDirection};

use crate::error::Result;
use crate::models::Item;
use crate::store::Store;

impl Store {
    /// Submit a new link at the top of the feed.
    ///
    /// On success the topic filter is cleared so the new link is visible.
    pub fn add_item(&mut self, title: &str, url: &str, topic: &str) -> Result<Item> {
        let title = required(title, "title")?;
        let url = required(url, "url")?;
        let topic = required(topic, "topic")?;
        let author = self.identity.clone().ok_or(ValidationError::NotSignedIn)?;

        let item = Item {
            id: ItemId::random(),
            title: title.to_string(),
            domain: display_domain(url),
            url: url.to_string(),
            description: None,
            votes: 0,
            author,
            created_at: Utc::now(),
            comments: Vec::new(),
            tags: vec![topic.to_string()],
            topic: topic.to_string(),
        };

        info!(item_id = %item.id, domain = %item.domain, topic = %item.topic, "Link added");

        self.items.insert(0, item.clone());
        self.selected_topic = None;
        Ok(item)
    }

    /// Remove a link. Closes the detail view if it showed that link.
    ///
    /// Returns whether anything was removed.
    pub fn delete_item(&mut self, id: &ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != *id);
        let removed = self.items.len() != before;

        if !removed {
            debug!(item_id = %id, "delete ignored, unknown item");
            return false;
        }

        if self.selected_item.as_ref() == Some(id) {
            self.selected_item = None;
        }
        info!(item_id = %id, "Link deleted");
        true
    }

    /// Adjust a link's votes by one and re-rank the whole feed.
    ///
    /// The sort is stable: links with equal votes keep their previous
    /// relative order. Returns the new vote count, `None` for an unknown id.
    pub fn vote(&mut self, id: &ItemId, direction: VoteDirection) -> Option<i64> {
        let Some(item) = self.item_mut(id) else {
            debug!(item_id = %id, "vote ignored, unknown item");
            return None;
        };
        item.votes += direction.delta();
        let votes = item.votes;

        self.items.sort_by(|a, b| b.votes.cmp(&a.votes));

        debug!(item_id = %id, ?direction, votes, "Vote recorded");
        Some(votes)
    }
}

fn required<'a>(value: &'a str, field: &'static str) -> std::result::Result<&'a str, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_item;
    use crate::views::filtered_by_topic;
    use crate::StoreError;
    use linkfeed_shared::constants::UNKNOWN_DOMAIN;

    fn order(store: &Store) -> Vec<&str> {
        store.items().iter().map(|i| i.id.as_str()).collect()
    }

    fn signed_in() -> Store {
        let mut store = Store::new();
        store.sign_up("Alex River").unwrap();
        store
    }

    #[test]
    fn add_item_prepends_and_fills_fields() {
        let mut store = signed_in().with_items(vec![sample_item("1", 10, "Design")]);
        let item = store
            .add_item("Rust 2024", "https://www.rust-lang.org/blog", "Technology")
            .unwrap();

        assert_eq!(store.items()[0], item);
        assert_eq!(item.domain, "rust-lang.org");
        assert_eq!(item.votes, 0);
        assert_eq!(item.tags, vec!["Technology".to_string()]);
        assert!(item.comments.is_empty());
        assert_eq!(item.author, *store.identity().unwrap());
        assert_eq!(order(&store), vec![item.id.as_str(), "1"]);
    }

    #[test]
    fn add_item_is_first_in_its_topic() {
        let mut store = signed_in().with_items(vec![
            sample_item("1", 10, "Technology"),
            sample_item("2", 5, "Technology"),
        ]);
        let item = store.add_item("New", "https://example.com", "Technology").unwrap();
        let feed = filtered_by_topic(store.items(), Some("Technology"));
        assert_eq!(feed[0].id, item.id);
    }

    #[test]
    fn add_item_clears_topic_filter() {
        let mut store = signed_in();
        store.select_topic(Some("Design".into()));
        store.add_item("New", "https://example.com", "Technology").unwrap();
        assert!(store.selected_topic().is_none());
    }

    #[test]
    fn add_item_with_bad_url_uses_unknown_domain() {
        let mut store = signed_in();
        let item = store.add_item("New", "example dot com", "Misc").unwrap();
        assert_eq!(item.domain, UNKNOWN_DOMAIN);
        assert_eq!(item.url, "example dot com");
    }

    #[test]
    fn add_item_validation() {
        let mut store = signed_in();
        assert_eq!(
            store.add_item("", "https://a.com", "T").unwrap_err(),
            StoreError::Validation(ValidationError::EmptyField("title"))
        );
        assert_eq!(
            store.add_item("t", " ", "T").unwrap_err(),
            StoreError::Validation(ValidationError::EmptyField("url"))
        );
        assert_eq!(
            store.add_item("t", "https://a.com", "").unwrap_err(),
            StoreError::Validation(ValidationError::EmptyField("topic"))
        );
        assert!(store.items().is_empty());
    }

    #[test]
    fn add_item_requires_identity() {
        let mut store = Store::new();
        store.select_topic(Some("Design".into()));
        assert_eq!(
            store.add_item("t", "https://a.com", "T").unwrap_err(),
            StoreError::Validation(ValidationError::NotSignedIn)
        );
        assert!(store.items().is_empty());
        assert_eq!(store.selected_topic(), Some("Design"));
    }

    #[test]
    fn add_item_ids_are_unique() {
        let mut store = signed_in();
        let a = store.add_item("a", "https://a.com", "T").unwrap();
        let b = store.add_item("b", "https://b.com", "T").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn delete_selected_item_clears_selection() {
        let mut store = Store::new().with_items(vec![
            sample_item("1", 5, "Design"),
            sample_item("3", 4, "Design"),
        ]);
        store.select_item(&ItemId::from("3"));

        assert!(store.delete_item(&ItemId::from("3")));
        assert!(store.selected_item_id().is_none());
        assert!(store.selected_item().is_none());
        assert_eq!(order(&store), vec!["1"]);
    }

    #[test]
    fn delete_other_item_keeps_selection() {
        let mut store = Store::new().with_items(vec![
            sample_item("1", 5, "Design"),
            sample_item("3", 4, "Design"),
        ]);
        store.select_item(&ItemId::from("3"));
        store.delete_item(&ItemId::from("1"));
        assert_eq!(store.selected_item().unwrap().id.as_str(), "3");
    }

    #[test]
    fn delete_unknown_item_is_noop() {
        let mut store = Store::new().with_items(vec![sample_item("1", 5, "Design")]);
        assert!(!store.delete_item(&ItemId::from("9")));
        assert_eq!(store.items().len(), 1);
    }

    #[test]
    fn vote_resorts_by_votes() {
        let mut store = Store::new().with_items(vec![
            sample_item("A", 10, "T"),
            sample_item("B", 8, "T"),
            sample_item("C", 5, "T"),
        ]);
        assert_eq!(store.vote(&ItemId::from("C"), VoteDirection::Up), Some(6));
        assert_eq!(order(&store), vec!["A", "B", "C"]);

        for _ in 0..3 {
            store.vote(&ItemId::from("C"), VoteDirection::Up);
        }
        assert_eq!(order(&store), vec!["C", "A", "B"]);
    }

    #[test]
    fn vote_ties_keep_previous_order() {
        let mut store = Store::new().with_items(vec![
            sample_item("A", 10, "T"),
            sample_item("B", 10, "T"),
            sample_item("C", 5, "T"),
        ]);
        store.vote(&ItemId::from("C"), VoteDirection::Up);
        assert_eq!(order(&store), vec!["A", "B", "C"]);

        for _ in 0..4 {
            store.vote(&ItemId::from("C"), VoteDirection::Up);
        }
        assert_eq!(store.item(&ItemId::from("C")).unwrap().votes, 10);
        assert_eq!(order(&store), vec!["A", "B", "C"]);
    }

    #[test]
    fn vote_up_then_down_restores() {
        let mut store = Store::new().with_items(vec![
            sample_item("A", 12, "T"),
            sample_item("B", 9, "T"),
            sample_item("C", 4, "T"),
        ]);
        let id = ItemId::from("B");
        store.vote(&id, VoteDirection::Up);
        store.vote(&id, VoteDirection::Down);
        assert_eq!(store.item(&id).unwrap().votes, 9);
        assert_eq!(order(&store), vec!["A", "B", "C"]);
    }

    #[test]
    fn votes_may_go_negative() {
        let mut store = Store::new().with_items(vec![
            sample_item("A", 0, "T"),
            sample_item("B", -1, "T"),
        ]);
        assert_eq!(store.vote(&ItemId::from("A"), VoteDirection::Down), Some(-1));
        assert_eq!(store.vote(&ItemId::from("A"), VoteDirection::Down), Some(-2));
        assert_eq!(order(&store), vec!["B", "A"]);
    }

    #[test]
    fn vote_unknown_item_is_noop() {
        let mut store = Store::new().with_items(vec![sample_item("A", 1, "T")]);
        assert_eq!(store.vote(&ItemId::from("Z"), VoteDirection::Up), None);
        assert_eq!(store.items()[0].votes, 1);
    }
}

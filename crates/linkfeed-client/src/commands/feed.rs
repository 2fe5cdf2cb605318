use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;
use tracing::debug;

use linkfeed_shared::{Plan, ProFeature, SortOption};
use linkfeed_store::views::{
    activity_histogram, filtered_by_topic, sorted, unique_topics, ActivityBucket, FeedStats,
};

use crate::commands::links::{card, notify_selection, ItemCardDto};
use crate::error::ClientError;
use crate::state::{lock, SharedState};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FeedDto {
    pub heading: String,
    pub selected_topic: Option<String>,
    pub sort: Option<SortOption>,
    pub items: Vec<ItemCardDto>,
    /// Shown instead of the list when `items` is empty.
    pub empty_message: Option<String>,
}

/// The feed as currently filtered and ordered.
pub fn feed(state: &SharedState) -> Result<FeedDto, ClientError> {
    let guard = lock(state)?;
    let topic = guard.store.selected_topic();

    let filtered = filtered_by_topic(guard.store.items(), topic);
    let ordered = match guard.sort {
        Some(sort) => sorted(&filtered, sort),
        None => filtered,
    };
    let items: Vec<ItemCardDto> = ordered.into_iter().map(|item| card(&guard, item)).collect();

    let empty_message = items.is_empty().then(|| match topic {
        Some(topic) => format!("No links found for topic \"{topic}\"."),
        None => {
            "The feed is currently empty. Be the first to share something interesting!".to_string()
        }
    });

    Ok(FeedDto {
        heading: match topic {
            Some(topic) => format!("{topic} Feed"),
            None => "Daily Feed".to_string(),
        },
        selected_topic: topic.map(str::to_string),
        sort: guard.sort,
        items,
        empty_message,
    })
}

/// Topics for the sidebar.
pub fn topics(state: &SharedState) -> Result<Vec<String>, ClientError> {
    let guard = lock(state)?;
    Ok(unique_topics(guard.store.items()))
}

/// Filter the feed by topic; `None` shows everything.
pub fn select_topic(state: &SharedState, topic: Option<String>) -> Result<(), ClientError> {
    let mut guard = lock(state)?;
    debug!(topic = ?topic, "Topic selected");
    guard.store.select_topic(topic);
    notify_selection(&guard);
    Ok(())
}

/// Reorder the feed; `None` restores the vote ranking.
pub fn set_sort(state: &SharedState, sort: Option<SortOption>) -> Result<(), ClientError> {
    lock(state)?.sort = sort;
    Ok(())
}

pub fn stats(state: &SharedState) -> Result<FeedStats, ClientError> {
    let guard = lock(state)?;
    Ok(FeedStats::from_items(guard.store.items()))
}

/// Seven-day activity chart in the local time zone. Pro only.
pub fn analytics(state: &SharedState) -> Result<Vec<ActivityBucket>, ClientError> {
    analytics_at(state, &Local::now())
}

/// Seven-day activity chart ending on `reference`'s calendar day. Pro only.
pub fn analytics_at<Tz: TimeZone>(
    state: &SharedState,
    reference: &DateTime<Tz>,
) -> Result<Vec<ActivityBucket>, ClientError> {
    let guard = lock(state)?;
    let feature = ProFeature::AdvancedAnalytics;
    if !Plan::of(guard.store.identity()).allows(feature) {
        return Err(ClientError::ProRequired(feature.label()));
    }
    Ok(activity_histogram(guard.store.items(), reference))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::identity::sign_up;
    use crate::commands::links::{add_link, vote};
    use crate::commands::premium::upgrade;
    use crate::config::ClientConfig;
    use crate::state::AppState;
    use chrono::Utc;
    use linkfeed_shared::VoteDirection;

    fn seeded() -> SharedState {
        let config = ClientConfig {
            seed_demo: true,
            ..ClientConfig::default()
        };
        AppState::new(&config).into_shared()
    }

    fn ids(feed: &FeedDto) -> Vec<&str> {
        feed.items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn feed_filters_by_topic() {
        let state = seeded();
        assert_eq!(feed(&state).unwrap().heading, "Daily Feed");

        select_topic(&state, Some("Design".into())).unwrap();
        let design = feed(&state).unwrap();
        assert_eq!(design.heading, "Design Feed");
        assert_eq!(ids(&design), vec!["2", "4"]);
        assert!(design.empty_message.is_none());

        select_topic(&state, Some("Science".into())).unwrap();
        let science = feed(&state).unwrap();
        assert!(science.items.is_empty());
        assert_eq!(
            science.empty_message.as_deref(),
            Some("No links found for topic \"Science\".")
        );
    }

    #[test]
    fn empty_feed_message() {
        let state = AppState::default().into_shared();
        let feed = feed(&state).unwrap();
        assert!(feed.items.is_empty());
        assert!(feed.empty_message.unwrap().starts_with("The feed is currently empty"));
    }

    #[test]
    fn new_link_stays_on_top_until_sorted() {
        let state = seeded();
        sign_up(&state, "Alex").unwrap();
        let new = add_link(&state, "New", "https://new.example", "Technology").unwrap();
        assert_eq!(feed(&state).unwrap().items[0].id, new.id);

        set_sort(&state, Some(SortOption::Popular)).unwrap();
        assert_eq!(ids(&feed(&state).unwrap())[0], "3");

        set_sort(&state, Some(SortOption::Newest)).unwrap();
        assert_eq!(feed(&state).unwrap().items[0].id, new.id);
    }

    #[test]
    fn vote_reranks_feed() {
        let state = seeded();
        vote(&state, "4", VoteDirection::Up).unwrap();
        assert_eq!(ids(&feed(&state).unwrap()), vec!["3", "1", "5", "2", "4"]);
    }

    #[test]
    fn topics_and_stats() {
        let state = seeded();
        assert_eq!(topics(&state).unwrap(), vec!["Design", "Technology"]);
        let stats = stats(&state).unwrap();
        assert_eq!(stats.total_items, 5);
        assert_eq!(stats.total_votes, 124 + 89 + 256 + 45 + 112);
        assert_eq!(stats.total_comments, 3);
    }

    #[test]
    fn analytics_is_pro_only() {
        let state = seeded();
        sign_up(&state, "Alex").unwrap();
        assert!(matches!(analytics(&state), Err(ClientError::ProRequired(_))));

        upgrade(&state).unwrap();
        let buckets = analytics_at(&state, &Utc::now()).unwrap();
        assert_eq!(buckets.len(), 7);
    }
}

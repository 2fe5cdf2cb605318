//! Pure derivations over a slice of items.
//!
//! Nothing here is cached: callers recompute after every store mutation.

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, NaiveDate, TimeZone};
use serde::Serialize;

use linkfeed_shared::constants::HISTOGRAM_DAYS;
use linkfeed_shared::SortOption;

use crate::models::Item;

/// Distinct non-blank topics, sorted ascending.
pub fn unique_topics(items: &[Item]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.topic.as_str())
        .filter(|topic| !topic.trim().is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Items whose topic equals `topic` exactly, in feed order. `None` keeps
/// every item.
pub fn filtered_by_topic<'a>(items: &'a [Item], topic: Option<&str>) -> Vec<&'a Item> {
    match topic {
        None => items.iter().collect(),
        Some(topic) => items.iter().filter(|item| item.topic == topic).collect(),
    }
}

pub fn total_votes(items: &[Item]) -> i64 {
    items.iter().map(|item| item.votes).sum()
}

/// Reorder a feed. Every ordering is stable.
pub fn sorted<'a>(items: &[&'a Item], sort: SortOption) -> Vec<&'a Item> {
    let mut out = items.to_vec();
    match sort {
        SortOption::Popular => out.sort_by(|a, b| b.votes.cmp(&a.votes)),
        SortOption::Newest => out.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOption::Discussed => out.sort_by_key(|item| std::cmp::Reverse(item.thread_len())),
    }
    out
}

/// One calendar day of the activity chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityBucket {
    /// Short English weekday, e.g. `Mon`.
    pub label: String,
    pub date: NaiveDate,
    /// Items created on this day.
    pub item_count: usize,
    /// Current votes of those items.
    pub vote_sum: i64,
}

/// Activity over the seven calendar days ending on `reference`'s date,
/// oldest first.
///
/// Days are calendar dates in `reference`'s time zone; pass
/// `chrono::Local::now()` for the local zone. An item counts towards the day
/// it was created on, with the votes it has now.
pub fn activity_histogram<Tz: TimeZone>(items: &[Item], reference: &DateTime<Tz>) -> Vec<ActivityBucket> {
    let tz = reference.timezone();
    let today = reference.date_naive();

    let created: Vec<(NaiveDate, i64)> = items
        .iter()
        .map(|item| (item.created_at.with_timezone(&tz).date_naive(), item.votes))
        .collect();

    (0..HISTOGRAM_DAYS as i64)
        .rev()
        .map(|days_ago| {
            let date = today - Duration::days(days_ago);
            let (item_count, vote_sum) = created
                .iter()
                .filter(|(day, _)| *day == date)
                .fold((0usize, 0i64), |(count, sum), (_, votes)| (count + 1, sum + votes));
            ActivityBucket {
                label: date.format("%a").to_string(),
                date,
                item_count,
                vote_sum,
            }
        })
        .collect()
}

/// Headline numbers for the analytics panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedStats {
    pub total_items: usize,
    pub total_votes: i64,
    pub total_comments: usize,
}

impl FeedStats {
    pub fn from_items(items: &[Item]) -> Self {
        Self {
            total_items: items.len(),
            total_votes: total_votes(items),
            total_comments: items.iter().map(Item::thread_len).sum(),
        }
    }
}

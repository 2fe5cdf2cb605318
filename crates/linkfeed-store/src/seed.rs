//! Demo feed used when the client starts with seeding enabled.

use chrono::{DateTime, Duration, Utc};

use linkfeed_shared::{CommentId, Identity, ItemId, UserId};

use crate::models::{Comment, Item};

fn demo_user(id: &str, name: &str) -> Identity {
    Identity {
        id: UserId::from(id),
        display_name: name.to_string(),
        avatar: format!("https://picsum.photos/seed/{id}/32/32"),
        is_privileged: false,
    }
}

fn demo_comment(id: &str, author: &Identity, text: &str, created_at: DateTime<Utc>) -> Comment {
    Comment {
        id: CommentId::from(id),
        author: author.clone(),
        text: text.to_string(),
        created_at,
        replies: Vec::new(),
    }
}

#[allow(clippy::too_many_arguments)]
fn demo_item(
    id: &str,
    title: &str,
    url: &str,
    domain: &str,
    description: Option<&str>,
    votes: i64,
    author: &Identity,
    created_at: DateTime<Utc>,
    tags: &[&str],
    topic: &str,
    comments: Vec<Comment>,
) -> Item {
    Item {
        id: ItemId::from(id),
        title: title.to_string(),
        url: url.to_string(),
        domain: domain.to_string(),
        description: description.map(str::to_string),
        votes,
        author: author.clone(),
        created_at,
        comments,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        topic: topic.to_string(),
    }
}

/// Five demo links with creation times relative to `now`, in submission
/// order (not vote order).
pub fn demo_items(now: DateTime<Utc>) -> Vec<Item> {
    let alex = demo_user("u1", "Alex River");
    let jordan = demo_user("u2", "Jordan Lee");
    let casey = demo_user("u3", "Casey Smith");

    vec![
        demo_item(
            "1",
            "The Future of React Server Components",
            "https://react.dev/blog",
            "react.dev",
            Some("An in-depth look at how RSCs are changing the landscape of modern web development and what it means for hydration."),
            124,
            &alex,
            now - Duration::hours(2),
            &["React", "Frontend"],
            "Technology",
            vec![
                demo_comment(
                    "c1",
                    &jordan,
                    "Great read! The hydration parts were tricky but this explains it well.",
                    now - Duration::minutes(30),
                ),
                demo_comment(
                    "c2",
                    &casey,
                    "I still prefer client-side fetching for small apps.",
                    now - Duration::minutes(10),
                ),
            ],
        ),
        demo_item(
            "2",
            "Tailwind CSS v4.0 Alpha Release Notes",
            "https://tailwindcss.com",
            "tailwindcss.com",
            Some("The new engine is written in Rust and is incredibly fast. Here is what you need to know about the upgrade path."),
            89,
            &jordan,
            now - Duration::hours(5),
            &["CSS", "Design"],
            "Design",
            Vec::new(),
        ),
        demo_item(
            "3",
            "Understanding Distributed Systems Patterns",
            "https://martinfowler.com",
            "martinfowler.com",
            Some("Key patterns for building resilient distributed systems, including Circuit Breaker and Bulkhead."),
            256,
            &casey,
            now - Duration::hours(24),
            &["System Design", "Backend"],
            "Technology",
            vec![demo_comment(
                "c3",
                &alex,
                "Classic reference. Must read for seniors.",
                now - Duration::hours(12),
            )],
        ),
        demo_item(
            "4",
            "Why minimalist design is making a comeback",
            "https://uxdesign.cc",
            "uxdesign.cc",
            None,
            45,
            &alex,
            now - Duration::hours(48),
            &["UX", "Design"],
            "Design",
            Vec::new(),
        ),
        demo_item(
            "5",
            "TypeScript 5.4: NoInference Utility Type",
            "https://devblogs.microsoft.com/typescript",
            "microsoft.com",
            None,
            112,
            &jordan,
            now - Duration::hours(3),
            &["TypeScript", "Programming"],
            "Technology",
            Vec::new(),
        ),
    ]
}

#[cfg(test)]
pub(crate) fn sample_item(id: &str, votes: i64, topic: &str) -> Item {
    let author = demo_user("u-test", "Tester");
    demo_item(
        id,
        &format!("Item {id}"),
        "https://example.com",
        "example.com",
        None,
        votes,
        &author,
        Utc::now(),
        &[topic],
        topic,
        Vec::new(),
    )
}

#[cfg(test)]
pub(crate) fn sample_comment(id: &str) -> Comment {
    demo_comment(id, &demo_user("u-test", "Tester"), id, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::unique_topics;
    use std::collections::HashSet;

    #[test]
    fn demo_feed_shape() {
        let now = Utc::now();
        let items = demo_items(now);
        assert_eq!(items.len(), 5);

        let ids: HashSet<_> = items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids.len(), items.len());
        assert!(items.iter().all(|i| i.created_at <= now));
        assert_eq!(unique_topics(&items), vec!["Design", "Technology"]);
        assert_eq!(items[0].comment_count(), 2);
    }
}

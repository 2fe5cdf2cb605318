//! Scripted walkthrough of a Linkfeed session.
//!
//! Seeds the demo feed (unless `LINKFEED_SEED_DEMO=false`), signs up, posts
//! a link, votes and comments, then prints the resulting feed and analytics
//! as JSON.

use tracing::info;

use linkfeed_client::commands::{comments, feed, identity, links, premium};
use linkfeed_client::config::ClientConfig;
use linkfeed_shared::VoteDirection;

fn main() -> anyhow::Result<()> {
    linkfeed_client::init_tracing();

    let mut config = ClientConfig::from_env();
    if std::env::var("LINKFEED_SEED_DEMO").is_err() {
        config.seed_demo = true;
    }
    info!(?config, "Loaded configuration");

    let state = linkfeed_client::start(&config);

    let me = identity::sign_up(&state, "Demo User")?;
    info!(user = %me.display_name, "Signed in");

    let link = links::add_link(
        &state,
        "The Rust Programming Language",
        "https://www.rust-lang.org/learn",
        "Technology",
    )?;
    links::vote(&state, &link.id, VoteDirection::Up)?;
    links::open_detail(&state, &link.id)?;

    if let Some(comment) = comments::add_comment(&state, &link.id, "Still the best intro.", None)? {
        comments::add_comment(&state, &link.id, "Agreed, chapter 4 especially.", Some(comment.id.as_str()))?;
    }

    premium::upgrade(&state)?;

    let output = serde_json::json!({
        "identity": identity::current_identity(&state)?,
        "feed": feed::feed(&state)?,
        "topics": feed::topics(&state)?,
        "stats": feed::stats(&state)?,
        "analytics": feed::analytics(&state)?,
        "detail": links::get_detail(&state)?,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

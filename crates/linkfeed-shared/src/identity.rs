use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ValidationError;
use crate::types::UserId;

/// The single local actor of a session.
/// There is no backend account behind it: signup only captures a display name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: UserId,
    pub display_name: String,
    /// Avatar URL or data URI.
    pub avatar: String,
    pub is_privileged: bool,
}

impl Identity {
    /// Create a new identity from a display name.
    ///
    /// The id is derived from the signup instant and the avatar is a
    /// placeholder image generated by `avatar_service` from the name.
    pub fn sign_up(
        display_name: &str,
        avatar_service: &str,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let display_name = required_name(display_name)?;
        Ok(Self {
            id: UserId(format!("user-{}", now.timestamp_millis())),
            avatar: placeholder_avatar(avatar_service, &display_name),
            display_name,
            is_privileged: false,
        })
    }

    /// Replace name and avatar, keeping id and privilege flag.
    pub fn rename(&mut self, display_name: &str, avatar: &str) -> Result<(), ValidationError> {
        self.display_name = required_name(display_name)?;
        self.avatar = avatar.to_string();
        Ok(())
    }

    /// Flip to the Pro plan. There is no way back.
    pub fn upgrade(&mut self) {
        self.is_privileged = true;
    }

    /// Up to two uppercase initials, used when no avatar can be shown.
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

fn required_name(display_name: &str) -> Result<String, ValidationError> {
    let name = display_name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyField("display name"));
    }
    Ok(name.to_string())
}

/// Build the placeholder avatar URL for `name`.
pub fn placeholder_avatar(avatar_service: &str, name: &str) -> String {
    match Url::parse_with_params(avatar_service, &[("name", name), ("background", "random")]) {
        Ok(url) => url.to_string(),
        // Misconfigured service: fall back to plain concatenation.
        Err(_) => {
            let encoded: String = url::form_urlencoded::byte_serialize(name.as_bytes()).collect();
            format!("{avatar_service}?name={encoded}&background=random")
        }
    }
}

//! Client configuration loaded from environment variables.
//!
//! All settings have defaults so a session can start with zero
//! configuration.

use linkfeed_shared::constants::{DEFAULT_AVATAR_SERVICE, DEFAULT_SIDEBAR_WIDTH};
use linkfeed_shared::Theme;

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the placeholder avatar service used at signup.
    /// Env: `LINKFEED_AVATAR_SERVICE`
    /// Default: `https://ui-avatars.com/api/`
    pub avatar_service: String,

    /// Preload the demo feed at startup.
    /// Env: `LINKFEED_SEED_DEMO` (true/false)
    /// Default: `false`
    pub seed_demo: bool,

    /// Initial colour theme.
    /// Env: `LINKFEED_THEME` (light/dark)
    /// Default: `light`
    pub theme: Theme,

    /// Initial width of the analytics sidebar in pixels.
    /// Env: `LINKFEED_SIDEBAR_WIDTH`
    /// Default: `340`
    pub sidebar_width: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            avatar_service: DEFAULT_AVATAR_SERVICE.to_string(),
            seed_demo: false,
            theme: Theme::Light,
            sidebar_width: DEFAULT_SIDEBAR_WIDTH,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup("LINKFEED_AVATAR_SERVICE") {
            if !url.trim().is_empty() {
                config.avatar_service = url.trim().to_string();
            }
        }

        if let Some(val) = lookup("LINKFEED_SEED_DEMO") {
            config.seed_demo = val == "true" || val == "1";
        }

        if let Some(val) = lookup("LINKFEED_THEME") {
            match val.parse::<Theme>() {
                Ok(theme) => config.theme = theme,
                Err(e) => {
                    tracing::warn!(value = %val, error = %e, "Invalid LINKFEED_THEME, using default");
                }
            }
        }

        if let Some(val) = lookup("LINKFEED_SIDEBAR_WIDTH") {
            match val.trim().parse::<u32>() {
                Ok(width) => config.sidebar_width = width,
                Err(_) => {
                    tracing::warn!(value = %val, "Invalid LINKFEED_SIDEBAR_WIDTH, using default");
                }
            }
        }

        // RUST_LOG is handled directly by tracing-subscriber's EnvFilter.

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::from_lookup(|_| None);
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.avatar_service, DEFAULT_AVATAR_SERVICE);
        assert!(!config.seed_demo);
        assert_eq!(config.sidebar_width, 340);
    }

    #[test]
    fn test_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("LINKFEED_AVATAR_SERVICE", "https://avatars.local/api"),
            ("LINKFEED_SEED_DEMO", "1"),
            ("LINKFEED_THEME", "dark"),
            ("LINKFEED_SIDEBAR_WIDTH", "420"),
        ]));
        assert_eq!(config.avatar_service, "https://avatars.local/api");
        assert!(config.seed_demo);
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.sidebar_width, 420);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("LINKFEED_THEME", "sepia"),
            ("LINKFEED_SIDEBAR_WIDTH", "wide"),
            ("LINKFEED_SEED_DEMO", "yes please"),
        ]));
        assert_eq!(config, ClientConfig::default());
    }
}

/// Application name
pub const APP_NAME: &str = "Linkfeed";

/// Domain shown for links whose URL cannot be parsed
pub const UNKNOWN_DOMAIN: &str = "unknown.com";

/// Placeholder avatar service used at signup
pub const DEFAULT_AVATAR_SERVICE: &str = "https://ui-avatars.com/api/";

/// Length of generated item / comment ids
pub const TOKEN_LEN: usize = 9;

/// Number of calendar days covered by the activity histogram
pub const HISTOGRAM_DAYS: usize = 7;

/// Sidebar geometry (pixels)
pub const DEFAULT_SIDEBAR_WIDTH: u32 = 340;
pub const SIDEBAR_SNAP_WIDTH: u32 = 50;
pub const SIDEBAR_MAX_WIDTH: u32 = 600;

//! Names of the values persisted per browser.

/// Durable: anonymous visitor session id.
pub const VISITOR_SESSION_ID: &str = "visitor_session_id";

/// Session-scoped: last path recorded by the visitor tracker and when.
pub const VISITOR_LAST_TRACKED: &str = "visitor_last_tracked";

/// Durable: `true` while the demo identity is signed in.
pub const DEMO_MODE: &str = "demo_mode";

/// Durable: access token of the signed-in admin.
pub const ADMIN_ACCESS_TOKEN: &str = "admin_access_token";

/// Durable: theme and animation preferences.
pub const THEME_PREFERENCES: &str = "theme_preferences";

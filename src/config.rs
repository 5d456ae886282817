//! App Configuration
//!
//! Compile-time defaults. A few values can be overridden at build time
//! through environment variables (read with `option_env!`).

use log::LevelFilter;

/// Display name used in the header and as the logger tag
pub const APP_NAME: &str = "Leptos Concepts Playground";

/// Default base URL for the demo REST API
const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com";

/// localStorage key holding the selected theme
pub const THEME_STORAGE_KEY: &str = "theme";

/// How long cached user lists stay fresh
pub const USERS_STALE_TIME_MS: f64 = 60_000.0;

/// Artificial delay before the lazy panel resolves
pub const LAZY_DELAY_MS: u32 = 600;

/// Users shown by the effect demo card
pub const EFFECT_DEMO_USERS: usize = 4;

/// Users shown on the users page
pub const USERS_PAGE_LIMIT: usize = 6;

/// Lines shown by the log panel
pub const LOG_PANEL_LINES: usize = 30;

/// Bounds of the memo demo slider
pub const MEMO_MIN: u32 = 1;
pub const MEMO_MAX: u32 = 20;

pub fn api_base_url() -> &'static str {
    option_env!("PLAYGROUND_API_URL").unwrap_or(DEFAULT_API_URL)
}

pub fn users_url() -> String {
    format!("{}/users", api_base_url().trim_end_matches('/'))
}

pub fn log_level() -> LevelFilter {
    option_env!("PLAYGROUND_LOG")
        .map(console_logger::parse_level)
        .unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_url_has_single_slash() {
        assert!(users_url().ends_with("/users"));
        assert!(!users_url().contains("//users"));
    }
}

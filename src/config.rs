//! Application Configuration
//!
//! Build-time settings plus the auth token persisted by the login page.

use std::time::Duration;

use tracing::Level;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// How long the success modal stays up before navigating away
pub const SUCCESS_DELAY: Duration = Duration::from_millis(1500);

/// localStorage key written by the login page
pub const AUTH_TOKEN_KEY: &str = "authToken";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL every resource path is appended to (no trailing slash)
    pub api_base_url: String,
    pub success_delay: Duration,
    pub log_level: Level,
    /// Sent as `Authorization: Token <token>` when present
    pub auth_token: Option<String>,
}

impl AppConfig {
    /// Read `PM_API_BASE_URL` / `PM_LOG_LEVEL` baked in at compile time and
    /// the stored auth token.
    pub fn load() -> Self {
        Self::from_parts(
            option_env!("PM_API_BASE_URL"),
            option_env!("PM_LOG_LEVEL"),
            stored_auth_token(),
        )
    }

    fn from_parts(base_url: Option<&str>, log_level: Option<&str>, auth_token: Option<String>) -> Self {
        let api_base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        let log_level = log_level
            .and_then(|level| level.trim().parse::<Level>().ok())
            .unwrap_or(Level::INFO);

        Self {
            api_base_url,
            success_delay: SUCCESS_DELAY,
            log_level,
            auth_token: auth_token.filter(|token| !token.is_empty()),
        }
    }
}

fn stored_auth_token() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(AUTH_TOKEN_KEY).ok()?
}

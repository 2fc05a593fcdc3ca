//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::cookie::CookieConfig;
use platform::fetch::DEFAULT_FETCH_TIMEOUT;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Published CSV export of the shared user sheet
pub const DEFAULT_SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQGAIfCFRoDy98jQbbyvttdh0OtTJsLY-Scyt_7SODC1Wq_31JBP6JPbYL6yWG73zhebkdcylKgpg5a/pub?output=csv";

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Fixed session lifetime, counted from sign-in (30 minutes)
    pub session_ttl: Duration,
    /// Remote credential sheet; `None` disables the remote source entirely
    pub sheet_url: Option<String>,
    /// Timeout for the sheet fetch
    pub fetch_timeout: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "studio_session".to_string(),
            session_ttl: Duration::from_secs(30 * 60), // 30 minutes
            sheet_url: Some(DEFAULT_SHEET_URL.to_string()),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
        }
    }
}

impl AuthConfig {
    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Default::default()
        }
    }

    /// Replace the sheet reference
    pub fn with_sheet_url(mut self, sheet_url: Option<String>) -> Self {
        self.sheet_url = sheet_url;
        self
    }

    /// Session TTL as a chrono duration, for session timestamps
    pub fn session_ttl_chrono(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.session_ttl).unwrap_or(chrono::Duration::minutes(30))
    }

    /// Cookie attributes for the session cookie
    pub fn cookie_config(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            path: "/".to_string(),
            max_age_secs: Some(self.session_ttl.as_secs() as i64),
            secure: self.cookie_secure,
            same_site: self.cookie_same_site,
            http_only: true,
        }
    }
}

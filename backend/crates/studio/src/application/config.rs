//! Application Configuration
//!
//! Configuration for the Studio application layer.

use std::time::Duration;

use crate::domain::value_objects::SamplingParams;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Studio application configuration
#[derive(Debug, Clone)]
pub struct StudioConfig {
    /// Model name used in the generateContent path
    pub model: String,
    /// Backend origin, without trailing slash
    pub base_url: String,
    /// API key; a missing key makes every generation fail softly
    pub api_key: Option<String>,
    pub sampling: SamplingParams,
    /// Timeout for a single backend call
    pub request_timeout: Duration,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            sampling: SamplingParams::default(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl StudioConfig {
    /// Create config for development (key from the caller, defaults elsewhere)
    pub fn development(api_key: Option<String>) -> Self {
        Self {
            api_key,
            ..Default::default()
        }
    }

    /// `POST` endpoint of the configured model
    pub fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_url() {
        let config = StudioConfig::default();
        assert_eq!(
            config.generate_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );

        let config = StudioConfig {
            base_url: "http://127.0.0.1:9000/".into(),
            model: "test-model".into(),
            ..Default::default()
        };
        assert_eq!(
            config.generate_url(),
            "http://127.0.0.1:9000/v1beta/models/test-model:generateContent"
        );
    }
}

//! Server Configuration
//!
//! Everything the binary reads from the environment (after `.env`).

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use auth::AuthConfig;
use studio::StudioConfig;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub listen_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    /// Directory for persisted blobs; in-memory storage when unset
    pub data_dir: Option<PathBuf>,
    pub auth: AuthConfig,
    pub studio: StudioConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let listen_addr = lookup("LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse()
            .context("LISTEN_ADDR must be a socket address")?;

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let data_dir = lookup("DATA_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        let mut auth = if cfg!(debug_assertions) {
            AuthConfig::development()
        } else {
            AuthConfig::default()
        };
        // Set but empty disables the remote sheet
        if let Some(sheet_url) = lookup("SHEET_URL") {
            auth = auth.with_sheet_url(Some(sheet_url).filter(|url| !url.trim().is_empty()));
        }

        let api_key = lookup("GEMINI_API_KEY")
            .or_else(|| lookup("API_KEY"))
            .filter(|key| !key.is_empty());
        let mut studio = StudioConfig::development(api_key);
        if let Some(model) = lookup("GEMINI_MODEL") {
            studio.model = model;
        }
        if let Some(base_url) = lookup("GEMINI_BASE_URL") {
            studio.base_url = base_url;
        }

        Ok(Self {
            listen_addr,
            frontend_origins,
            data_dir,
            auth,
            studio,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<ServerConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.listen_addr.port(), 31113);
        assert_eq!(config.frontend_origins.len(), 2);
        assert!(config.data_dir.is_none());
        assert!(config.auth.sheet_url.is_some());
        assert!(config.studio.api_key.is_none());
        assert_eq!(config.studio.model, "gemini-2.5-flash");
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("LISTEN_ADDR", "127.0.0.1:8080"),
            ("DATA_DIR", "/var/lib/studio"),
            ("SHEET_URL", ""),
            ("API_KEY", "fallback-key"),
            ("GEMINI_MODEL", "gemini-pro"),
        ])
        .unwrap();
        assert_eq!(config.listen_addr.port(), 8080);
        assert_eq!(config.data_dir, Some(PathBuf::from("/var/lib/studio")));
        assert!(config.auth.sheet_url.is_none());
        assert_eq!(config.studio.api_key.as_deref(), Some("fallback-key"));
        assert_eq!(config.studio.model, "gemini-pro");
    }

    #[test]
    fn test_gemini_key_wins_over_api_key() {
        let config = config(&[("GEMINI_API_KEY", "primary"), ("API_KEY", "other")]).unwrap();
        assert_eq!(config.studio.api_key.as_deref(), Some("primary"));
    }

    #[test]
    fn test_bad_listen_addr() {
        assert!(config(&[("LISTEN_ADDR", "nope")]).is_err());
    }
}

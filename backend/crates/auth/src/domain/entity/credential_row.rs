//! Credential Row Entity
//!
//! One identifier/secret/role/status record from any of the three sources
//! (hardcoded accounts, local registrations, remote sheet).
//!
//! Secrets are plaintext and compared verbatim. The serialized field names
//! (`username`, `password`) are the ones the local registration blob has
//! always used.

use serde::{Deserialize, Serialize};

pub const DEFAULT_ROLE: &str = "viewer";
pub const ACTIVE_STATUS: &str = "active";

fn default_role() -> String {
    DEFAULT_ROLE.to_string()
}

fn default_status() -> String {
    ACTIVE_STATUS.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRow {
    #[serde(rename = "username")]
    pub identifier: String,
    #[serde(rename = "password")]
    pub secret: String,
    /// Free-form; classified with `UserRole::map_role` at admission
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default = "default_status")]
    pub status: String,
}

impl CredentialRow {
    pub fn new(
        identifier: impl Into<String>,
        secret: impl Into<String>,
        role: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
            role: role.into(),
            status: status.into(),
        }
    }

    /// Row for a self-service registration: always viewer, always active
    pub fn registered(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self::new(identifier, secret, DEFAULT_ROLE, ACTIVE_STATUS)
    }

    /// Exact, case-sensitive match on both identifier and secret
    #[inline]
    pub fn matches(&self, identifier: &str, secret: &str) -> bool {
        self.identifier == identifier && self.secret == secret
    }

    /// Only the exact status `"active"` admits a login
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == ACTIVE_STATUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_defaults() {
        let row = CredentialRow::registered("x", "pw");
        assert_eq!(row.role, "viewer");
        assert_eq!(row.status, "active");
        assert!(row.is_active());
    }

    #[test]
    fn test_matches_is_exact() {
        let row = CredentialRow::new("micro", "Micro@=1", "admin", "active");
        assert!(row.matches("micro", "Micro@=1"));
        assert!(!row.matches("Micro", "Micro@=1"));
        assert!(!row.matches("micro", "micro@=1"));
        assert!(!row.matches("micro ", "Micro@=1"));
    }

    #[test]
    fn test_status_is_exact() {
        assert!(!CredentialRow::new("a", "b", "viewer", "Active").is_active());
        assert!(!CredentialRow::new("a", "b", "viewer", "suspended").is_active());
    }

    #[test]
    fn test_blob_format() {
        let json = r#"[{"username":"x","password":"pw","role":"viewer","status":"active"},{"username":"y","password":"pw2"}]"#;
        let rows: Vec<CredentialRow> = serde_json::from_str(json).unwrap();
        assert_eq!(rows[0], CredentialRow::registered("x", "pw"));
        assert_eq!(rows[1], CredentialRow::registered("y", "pw2"));

        let out = serde_json::to_string(&rows[0]).unwrap();
        assert!(out.contains(r#""username":"x""#));
        assert!(out.contains(r#""password":"pw""#));
    }
}

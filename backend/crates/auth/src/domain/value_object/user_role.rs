use serde::{Deserialize, Serialize};

/// The three roles a session can carry.
///
/// Credential rows hold a free-form role string; [`UserRole::map_role`]
/// folds any string onto one of these.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[display("admin")]
    Admin,
    #[default]
    #[display("viewer")]
    Viewer,
    #[display("guest")]
    Guest,
}

impl UserRole {
    #[inline]
    pub const fn code(&self) -> &'static str {
        use UserRole::*;
        match self {
            Admin => "admin",
            Viewer => "viewer",
            Guest => "guest",
        }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Exact code lookup, `None` for anything unrecognised
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use UserRole::*;
        match code {
            "admin" => Some(Admin),
            "viewer" => Some(Viewer),
            "guest" => Some(Guest),
            _ => None,
        }
    }

    /// Lower-case and trim `role`, then classify. Unknown or empty → Viewer.
    pub fn map_role(role: &str) -> Self {
        let normalized = role.trim().to_lowercase();
        Self::from_code(&normalized).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_role_known() {
        assert_eq!(UserRole::map_role("admin"), UserRole::Admin);
        assert_eq!(UserRole::map_role("viewer"), UserRole::Viewer);
        assert_eq!(UserRole::map_role("guest"), UserRole::Guest);
    }

    #[test]
    fn test_map_role_normalizes() {
        assert_eq!(UserRole::map_role("  ADMIN "), UserRole::Admin);
        assert_eq!(UserRole::map_role("Guest"), UserRole::Guest);
        assert_eq!(UserRole::map_role("\tViewer\n"), UserRole::Viewer);
    }

    #[test]
    fn test_map_role_unknown_is_viewer() {
        assert_eq!(UserRole::map_role(""), UserRole::Viewer);
        assert_eq!(UserRole::map_role("   "), UserRole::Viewer);
        assert_eq!(UserRole::map_role("superuser"), UserRole::Viewer);
        assert_eq!(UserRole::map_role("moderator"), UserRole::Viewer);
    }

    #[test]
    fn test_map_role_is_stable_on_its_own_output() {
        for raw in ["admin", "GUEST", "viewer", "", "owner", " Admin "] {
            let role = UserRole::map_role(raw);
            assert_eq!(UserRole::map_role(&role.to_string()), role);
            assert_eq!(UserRole::map_role(role.code()), role);
        }
    }

    #[test]
    fn test_from_code_is_exact() {
        assert_eq!(UserRole::from_code("admin"), Some(UserRole::Admin));
        assert_eq!(UserRole::from_code("Admin"), None);
        assert_eq!(UserRole::from_code(""), None);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), r#""admin""#);
        let role: UserRole = serde_json::from_str(r#""guest""#).unwrap();
        assert_eq!(role, UserRole::Guest);
    }
}

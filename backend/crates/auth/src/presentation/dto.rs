//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::application::SessionInfoOutput;
use crate::domain::entity::credential_row::CredentialRow;

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request
///
/// Missing fields deserialize as empty so the form check can report them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignUpRequest {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

/// Sign up response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
    pub message: String,
}

// ============================================================================
// Sign In
// ============================================================================

/// Sign in request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub username: String,
    pub password: String,
}

// ============================================================================
// Session Status
// ============================================================================

/// Session status response (also returned by sign-in)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    pub username: Option<String>,
    pub role: Option<String>,
    pub logged_in_at_ms: Option<i64>,
    pub expires_at_ms: Option<i64>,
}

impl SessionStatusResponse {
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            username: None,
            role: None,
            logged_in_at_ms: None,
            expires_at_ms: None,
        }
    }
}

impl From<SessionInfoOutput> for SessionStatusResponse {
    fn from(info: SessionInfoOutput) -> Self {
        Self {
            authenticated: true,
            username: Some(info.identifier),
            role: Some(info.role),
            logged_in_at_ms: Some(info.logged_in_at_ms),
            expires_at_ms: Some(info.expires_at_ms),
        }
    }
}

// ============================================================================
// Account Directory (admin)
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountsQuery {
    #[serde(default)]
    pub reveal: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub username: String,
    pub password: String,
    pub role: String,
    pub status: String,
}

impl From<CredentialRow> for AccountResponse {
    fn from(row: CredentialRow) -> Self {
        Self {
            username: row.identifier,
            password: row.secret,
            role: row.role,
            status: row.status,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountsResponse {
    pub total: usize,
    pub accounts: Vec<AccountResponse>,
}

//! Check Session Use Case
//!
//! Resolves a session cookie value to the live session.

use kernel::id::SessionId;

use crate::domain::entity::session::Session;
use crate::error::{AuthError, AuthResult};
use crate::infra::session_registry::SessionRegistry;

/// Session info output
pub struct SessionInfoOutput {
    pub identifier: String,
    pub role: String,
    pub logged_in_at_ms: i64,
    pub expires_at_ms: i64,
}

impl From<&Session> for SessionInfoOutput {
    fn from(session: &Session) -> Self {
        Self {
            identifier: session.identifier.clone(),
            role: session.role.code().to_string(),
            logged_in_at_ms: session.logged_in_at.timestamp_millis(),
            expires_at_ms: session.expires_at.timestamp_millis(),
        }
    }
}

/// Parse the cookie value into a session handle
pub fn parse_session_token(token: &str) -> AuthResult<SessionId> {
    token.parse().map_err(|_| AuthError::SessionInvalid)
}

/// Check session use case
#[derive(Clone)]
pub struct CheckSessionUseCase {
    sessions: SessionRegistry,
}

impl CheckSessionUseCase {
    pub fn new(sessions: SessionRegistry) -> Self {
        Self { sessions }
    }

    /// Check if session is valid and return session info
    pub fn execute(&self, session_token: &str) -> AuthResult<SessionInfoOutput> {
        let session = self.get_session(session_token)?;
        Ok(SessionInfoOutput::from(&session))
    }

    /// Just check if session is valid (returns bool)
    pub fn is_valid(&self, session_token: &str) -> bool {
        self.get_session(session_token).is_ok()
    }

    /// Live session for `session_token`. Lookups never extend it.
    pub fn get_session(&self, session_token: &str) -> AuthResult<Session> {
        let session_id = parse_session_token(session_token)?;
        self.sessions
            .get(&session_id)
            .ok_or(AuthError::SessionInvalid)
    }
}

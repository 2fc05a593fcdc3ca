//! Sign Out Use Case
//!
//! Ends a session and cancels its expiry timer.

use crate::application::check_session::parse_session_token;
use crate::error::AuthResult;
use crate::infra::session_registry::SessionRegistry;

/// Sign out use case
pub struct SignOutUseCase {
    sessions: SessionRegistry,
}

impl SignOutUseCase {
    pub fn new(sessions: SessionRegistry) -> Self {
        Self { sessions }
    }

    /// Sign out from the session behind `session_token`.
    ///
    /// Signing out of an unknown or already expired session is not an error.
    pub fn execute(&self, session_token: &str) -> AuthResult<()> {
        let session_id = parse_session_token(session_token)?;

        if self.sessions.end(&session_id) {
            tracing::info!(session_id = %session_id, "User signed out");
        } else {
            tracing::debug!(session_id = %session_id, "Sign out for unknown session");
        }
        Ok(())
    }
}

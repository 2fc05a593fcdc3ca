//! Session Entity
//!
//! The authenticated-user context. Lives from successful admission until
//! explicit sign-out or until its fixed lifetime, counted from creation,
//! runs out. Activity never extends it.

use chrono::{DateTime, Duration, Utc};
use kernel::id::SessionId;

use crate::domain::value_object::user_role::UserRole;

#[derive(Debug, Clone)]
pub struct Session {
    /// Opaque handle, carried in the session cookie
    pub session_id: SessionId,
    pub identifier: String,
    /// Role resolved at admission
    pub role: UserRole,
    pub authenticated: bool,
    /// Login (creation) timestamp
    pub logged_in_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Create a session for an admitted identifier.
    ///
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn new(identifier: impl Into<String>, role: UserRole, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            session_id: SessionId::new(),
            identifier: identifier.into(),
            role,
            authenticated: true,
            logged_in_at: now,
            expires_at: now + ttl,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Time left before expiry, zero once expired
    pub fn remaining(&self) -> Duration {
        (self.expires_at - Utc::now()).max(Duration::zero())
    }

    pub fn lifetime(&self) -> Duration {
        self.expires_at - self.logged_in_at
    }
}

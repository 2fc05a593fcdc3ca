//! In-memory Session Registry
//!
//! Holds live sessions keyed by handle. Every session gets exactly one
//! fire-once expiry task scheduled at creation; sign-out aborts it, lookups
//! never reset it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use kernel::id::SessionId;
use tokio::task::AbortHandle;

use crate::domain::entity::session::Session;

struct Entry {
    session: Session,
    timer: AbortHandle,
}

type Entries = Arc<Mutex<HashMap<SessionId, Entry>>>;

#[derive(Clone)]
pub struct SessionRegistry {
    entries: Entries,
    ttl: Duration,
}

impl SessionRegistry {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn lock(entries: &Entries) -> MutexGuard<'_, HashMap<SessionId, Entry>> {
        entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Store `session` and schedule its expiry. Must run inside a tokio runtime.
    pub fn start(&self, session: Session) -> SessionId {
        let session_id = session.session_id;
        let entries = Arc::clone(&self.entries);
        let ttl = self.ttl;

        // Hold the map while scheduling so the timer can never fire before the insert
        let mut guard = Self::lock(&self.entries);
        let timer = tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            if let Some(entry) = Self::lock(&entries).remove(&session_id) {
                tracing::info!(
                    session_id = %session_id,
                    identifier = %entry.session.identifier,
                    "Session timed out"
                );
            }
        })
        .abort_handle();

        tracing::info!(
            session_id = %session_id,
            identifier = %session.identifier,
            ttl_secs = ttl.as_secs(),
            "Session started"
        );

        guard.insert(session_id, Entry { session, timer });
        session_id
    }

    /// Live session for `session_id`.
    ///
    /// A session past its expiry is absent even if its timer has not run yet.
    pub fn get(&self, session_id: &SessionId) -> Option<Session> {
        let entries = Self::lock(&self.entries);
        entries
            .get(session_id)
            .map(|entry| &entry.session)
            .filter(|session| !session.is_expired())
            .cloned()
    }

    /// Remove the session and cancel its timer. Returns whether it existed.
    pub fn end(&self, session_id: &SessionId) -> bool {
        match Self::lock(&self.entries).remove(session_id) {
            Some(entry) => {
                entry.timer.abort();
                tracing::info!(
                    session_id = %session_id,
                    identifier = %entry.session.identifier,
                    "Session ended"
                );
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        Self::lock(&self.entries).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every session and cancel all pending timers.
    pub fn shutdown(&self) {
        let drained: Vec<Entry> = Self::lock(&self.entries)
            .drain()
            .map(|(_, entry)| entry)
            .collect();
        for entry in &drained {
            entry.timer.abort();
        }
        tracing::info!(sessions = drained.len(), "Session registry shut down");
    }
}

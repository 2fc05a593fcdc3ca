//! Blob-backed Registration Store
//!
//! Registrations live as one JSON array under a single blob key, the same
//! shape the browser build kept in local storage.

use platform::storage::{BlobStore, StorageError};
use tokio::sync::Mutex;

use crate::domain::entity::credential_row::CredentialRow;
use crate::domain::repository::RegistrationRepository;
use crate::error::AuthResult;

/// Blob key of the registration list
pub const LOCAL_USERS_KEY: &str = "micro_ai_local_users";

pub struct BlobRegistrationStore<B>
where
    B: BlobStore,
{
    blobs: B,
    /// Serializes read-modify-write cycles
    write_lock: Mutex<()>,
}

impl<B> BlobRegistrationStore<B>
where
    B: BlobStore + Sync,
{
    pub fn new(blobs: B) -> Self {
        Self {
            blobs,
            write_lock: Mutex::new(()),
        }
    }

    /// Stored rows. Only an unparseable blob reads as empty; a failed read is
    /// an error.
    async fn read_rows(&self) -> Result<Vec<CredentialRow>, StorageError> {
        let Some(raw) = self.blobs.get(LOCAL_USERS_KEY).await? else {
            return Ok(Vec::new());
        };

        Ok(serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Local users blob is corrupt, treating as empty");
            Vec::new()
        }))
    }
}

impl<B> RegistrationRepository for BlobRegistrationStore<B>
where
    B: BlobStore + Sync,
{
    async fn list(&self) -> Vec<CredentialRow> {
        self.read_rows().await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to read local users");
            Vec::new()
        })
    }

    async fn insert_unique(&self, row: &CredentialRow) -> AuthResult<bool> {
        let _guard = self.write_lock.lock().await;

        // Never write over rows that could not be read
        let mut rows = self.read_rows().await?;
        if rows.iter().any(|r| r.identifier == row.identifier) {
            return Ok(false);
        }

        rows.push(row.clone());
        let encoded = serde_json::to_string(&rows)
            .map_err(|e| crate::error::AuthError::Internal(e.to_string()))?;
        self.blobs.set(LOCAL_USERS_KEY, &encoded).await?;

        Ok(true)
    }
}

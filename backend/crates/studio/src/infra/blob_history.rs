//! Blob-backed History Store
//!
//! Each owner's history lives as one JSON array, newest first, under its own
//! blob key derived from [`HISTORY_KEY`].

use std::fmt::Write;

use platform::storage::{BlobStore, StorageError};
use tokio::sync::Mutex;

use crate::domain::entities::HistoryEntry;
use crate::domain::repository::HistoryRepository;
use crate::domain::value_objects::HistoryOwner;
use crate::error::{StudioError, StudioResult};

/// Prefix of every history blob key
pub const HISTORY_KEY: &str = "micro_ai_history";

/// Blob key holding `owner`'s history.
///
/// Identifiers are free-form text, so they are hex-encoded to stay within the
/// blob key alphabet.
pub fn history_key(owner: &HistoryOwner) -> String {
    let mut key = String::with_capacity(HISTORY_KEY.len() + 1 + owner.as_str().len() * 2);
    key.push_str(HISTORY_KEY);
    key.push('_');
    for byte in owner.as_str().bytes() {
        let _ = write!(key, "{byte:02x}");
    }
    key
}

pub struct BlobHistoryStore<B>
where
    B: BlobStore,
{
    blobs: B,
    write_lock: Mutex<()>,
}

impl<B> BlobHistoryStore<B>
where
    B: BlobStore + Sync,
{
    pub fn new(blobs: B) -> Self {
        Self {
            blobs,
            write_lock: Mutex::new(()),
        }
    }

    /// Stored entries. Only an unparseable blob reads as empty; a failed read
    /// is an error.
    async fn read_entries(&self, key: &str) -> Result<Vec<HistoryEntry>, StorageError> {
        let Some(raw) = self.blobs.get(key).await? else {
            return Ok(Vec::new());
        };

        Ok(serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(key, error = %e, "History blob is corrupt, treating as empty");
            Vec::new()
        }))
    }

    async fn load(&self, owner: &HistoryOwner) -> Vec<HistoryEntry> {
        self.read_entries(&history_key(owner))
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(owner = %owner, error = %e, "Failed to read history");
                Vec::new()
            })
    }
}

impl<B> HistoryRepository for BlobHistoryStore<B>
where
    B: BlobStore + Sync,
{
    async fn list(&self, owner: &HistoryOwner) -> Vec<HistoryEntry> {
        self.load(owner).await
    }

    async fn record(&self, owner: &HistoryOwner, entry: &HistoryEntry) -> StudioResult<()> {
        let key = history_key(owner);
        let _guard = self.write_lock.lock().await;

        let mut entries = self.read_entries(&key).await?;
        entries.insert(0, entry.clone());

        let encoded =
            serde_json::to_string(&entries).map_err(|e| StudioError::Internal(e.to_string()))?;
        self.blobs.set(&key, &encoded).await?;
        Ok(())
    }

    async fn get(&self, owner: &HistoryOwner, id: &str) -> Option<HistoryEntry> {
        self.load(owner)
            .await
            .into_iter()
            .find(|entry| entry.id == id)
    }

    async fn clear(&self, owner: &HistoryOwner) -> StudioResult<()> {
        let _guard = self.write_lock.lock().await;
        self.blobs.remove(&history_key(owner)).await?;
        Ok(())
    }
}

//! History Use Case
//!
//! List, restore and clear recorded generations.

use std::sync::Arc;

use crate::domain::entities::HistoryEntry;
use crate::domain::repository::HistoryRepository;
use crate::domain::value_objects::HistoryOwner;
use crate::error::{StudioError, StudioResult};

pub struct HistoryUseCase<H>
where
    H: HistoryRepository,
{
    history: Arc<H>,
}

impl<H> HistoryUseCase<H>
where
    H: HistoryRepository + Sync,
{
    pub fn new(history: Arc<H>) -> Self {
        Self { history }
    }

    /// Newest first
    pub async fn list(&self, owner: &HistoryOwner) -> Vec<HistoryEntry> {
        self.history.list(owner).await
    }

    /// Entry to restore into the editor
    pub async fn restore(&self, owner: &HistoryOwner, id: &str) -> StudioResult<HistoryEntry> {
        self.history
            .get(owner, id)
            .await
            .ok_or_else(|| StudioError::HistoryNotFound(id.to_string()))
    }

    pub async fn clear(&self, owner: &HistoryOwner) -> StudioResult<()> {
        self.history.clear(owner).await?;
        tracing::info!(owner = %owner, "History cleared");
        Ok(())
    }
}

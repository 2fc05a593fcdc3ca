//! Repository Traits
//!
//! Interfaces for persisted history and the text-generation backend.
//! Implementations are in the infra layer.

use crate::domain::entities::HistoryEntry;
use crate::domain::value_objects::{GenerationRequest, HistoryOwner};
use crate::error::{BackendError, StudioResult};

/// Persisted generation history, newest first, kept apart per owner
#[trait_variant::make(HistoryRepository: Send)]
pub trait LocalHistoryRepository {
    /// All of `owner`'s entries, newest first. A corrupt or unreadable store
    /// reads as empty.
    async fn list(&self, owner: &HistoryOwner) -> Vec<HistoryEntry>;

    /// Prepend `entry` and persist. Fails without writing when the existing
    /// history cannot be read.
    async fn record(&self, owner: &HistoryOwner, entry: &HistoryEntry) -> StudioResult<()>;

    async fn get(&self, owner: &HistoryOwner, id: &str) -> Option<HistoryEntry>;

    /// Drop `owner`'s stored history entirely
    async fn clear(&self, owner: &HistoryOwner) -> StudioResult<()>;
}

/// Opaque text-completion service
#[trait_variant::make(GenerationBackend: Send)]
pub trait LocalGenerationBackend {
    /// Generated text; empty when the backend produced nothing
    async fn generate(&self, request: &GenerationRequest) -> Result<String, BackendError>;
}

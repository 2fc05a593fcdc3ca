//! Studio (AI Tools) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Tool catalog, history entries, text rules, repository traits
//! - `application/` - Generate, refine and history use cases
//! - `infra/` - Gemini REST backend and blob-backed history
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Behaviour
//! - Backend failures are never surfaced as errors; the user gets a fixed
//!   fallback text instead, and the generation is still recorded
//! - Refinements reuse the tool's instruction and are never recorded

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::StudioConfig;
pub use domain::value_objects::HistoryOwner;
pub use error::{BackendError, StudioError, StudioResult};
pub use infra::{BlobHistoryStore, GeminiBackend};
pub use presentation::router::studio_router;

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::tool::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

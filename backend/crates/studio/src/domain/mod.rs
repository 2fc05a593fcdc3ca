//! Domain Layer
//!
//! Tool catalog, history entries, text rules and repository traits.

pub mod entities;
pub mod repository;
pub mod services;
pub mod tool;
pub mod value_objects;

pub use entities::HistoryEntry;
pub use repository::{GenerationBackend, HistoryRepository};
pub use tool::{ToolCategory, ToolKind};
pub use value_objects::{GenerationRequest, HistoryOwner, RefineAction, SamplingParams};

//! Infrastructure Layer
//!
//! Gemini REST backend and blob-backed history.

pub mod blob_history;
pub mod gemini;

pub use blob_history::BlobHistoryStore;
pub use gemini::GeminiBackend;

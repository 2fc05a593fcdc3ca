//! Application Layer
//!
//! Use cases for the studio.

pub mod config;
pub mod generate;
pub mod history;
pub mod refine;

pub use config::StudioConfig;
pub use generate::{GenerateOutput, GenerateUseCase, generate_text};
pub use history::HistoryUseCase;
pub use refine::RefineUseCase;

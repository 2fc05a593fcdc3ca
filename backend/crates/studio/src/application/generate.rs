//! Generate Use Case
//!
//! Runs a tool against the backend and records the result in history.

use std::sync::Arc;

use crate::application::config::StudioConfig;
use crate::domain::entities::HistoryEntry;
use crate::domain::repository::{GenerationBackend, HistoryRepository};
use crate::domain::services::{BACKEND_FAILURE_TEXT, is_blank, output_or_placeholder};
use crate::domain::tool::ToolKind;
use crate::domain::value_objects::{GenerationRequest, HistoryOwner};
use crate::error::{StudioError, StudioResult};

/// Call the backend once for `tool` and `content`.
///
/// Never fails: backend errors become [`BACKEND_FAILURE_TEXT`] and empty
/// answers become the empty-output text. No retries.
pub async fn generate_text<G>(
    backend: &G,
    config: &StudioConfig,
    tool: ToolKind,
    content: &str,
) -> String
where
    G: GenerationBackend + Sync,
{
    let request = GenerationRequest {
        system_instruction: tool.system_instruction().to_string(),
        user_content: content.to_string(),
        params: config.sampling,
    };

    match backend.generate(&request).await {
        Ok(text) => output_or_placeholder(text),
        Err(e) => {
            tracing::error!(error = %e, tool = tool.id(), "Generation backend failed");
            BACKEND_FAILURE_TEXT.to_string()
        }
    }
}

pub struct GenerateOutput {
    pub output: String,
    pub entry: HistoryEntry,
}

/// Generate use case
pub struct GenerateUseCase<G, H>
where
    G: GenerationBackend,
    H: HistoryRepository,
{
    backend: Arc<G>,
    history: Arc<H>,
    config: Arc<StudioConfig>,
}

impl<G, H> GenerateUseCase<G, H>
where
    G: GenerationBackend + Sync,
    H: HistoryRepository + Sync,
{
    pub fn new(backend: Arc<G>, history: Arc<H>, config: Arc<StudioConfig>) -> Self {
        Self {
            backend,
            history,
            config,
        }
    }

    /// Generate for `tool` and record the result in `owner`'s history
    pub async fn execute(
        &self,
        owner: &HistoryOwner,
        tool: ToolKind,
        input: &str,
    ) -> StudioResult<GenerateOutput> {
        if is_blank(input) {
            return Err(StudioError::EmptyInput);
        }

        let output = generate_text(self.backend.as_ref(), &self.config, tool, input).await;

        let entry = HistoryEntry::new(tool, input, output.clone());
        if let Err(e) = self.history.record(owner, &entry).await {
            // The user still gets the output
            tracing::warn!(owner = %owner, error = %e, "Failed to record history entry");
        }

        tracing::info!(
            tool = tool.id(),
            input_chars = input.chars().count(),
            output_chars = output.chars().count(),
            "Generation completed"
        );

        Ok(GenerateOutput { output, entry })
    }
}

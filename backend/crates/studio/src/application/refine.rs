//! Refine Use Case
//!
//! Rewrites a previous output with one of the fixed actions. Refinements
//! are not recorded in history.

use std::sync::Arc;

use crate::application::config::StudioConfig;
use crate::application::generate::generate_text;
use crate::domain::repository::GenerationBackend;
use crate::domain::services::refine_prompt;
use crate::domain::tool::ToolKind;
use crate::domain::value_objects::RefineAction;
use crate::error::{StudioError, StudioResult};

pub struct RefineUseCase<G>
where
    G: GenerationBackend,
{
    backend: Arc<G>,
    config: Arc<StudioConfig>,
}

impl<G> RefineUseCase<G>
where
    G: GenerationBackend + Sync,
{
    pub fn new(backend: Arc<G>, config: Arc<StudioConfig>) -> Self {
        Self { backend, config }
    }

    pub async fn execute(
        &self,
        tool: ToolKind,
        previous_output: &str,
        action: RefineAction,
    ) -> StudioResult<String> {
        if previous_output.is_empty() {
            return Err(StudioError::EmptyOutput);
        }

        let prompt = refine_prompt(previous_output, action);
        let output = generate_text(self.backend.as_ref(), &self.config, tool, &prompt).await;

        tracing::info!(tool = tool.id(), action = %action, "Refinement completed");
        Ok(output)
    }
}

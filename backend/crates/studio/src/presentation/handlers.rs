//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::config::StudioConfig;
use crate::application::{GenerateUseCase, HistoryUseCase, RefineUseCase};
use crate::domain::repository::{GenerationBackend, HistoryRepository};
use crate::domain::services::add_chip;
use crate::domain::tool::ToolKind;
use crate::domain::value_objects::{HistoryOwner, RefineAction};
use crate::error::StudioResult;
use crate::presentation::dto::{
    GenerateRequest, GenerateResponse, HistoryEntryResponse, HistoryResponse, RefineRequest,
    RefineResponse, ToolResponse, ToolsResponse,
};

/// Shared state for studio handlers
pub struct StudioAppState<G, H>
where
    G: GenerationBackend + Sync + 'static,
    H: HistoryRepository + Sync + 'static,
{
    pub backend: Arc<G>,
    pub history: Arc<H>,
    pub config: Arc<StudioConfig>,
}

impl<G, H> Clone for StudioAppState<G, H>
where
    G: GenerationBackend + Sync + 'static,
    H: HistoryRepository + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            history: Arc::clone(&self.history),
            config: Arc::clone(&self.config),
        }
    }
}

/// GET /api/studio/tools
pub async fn list_tools() -> Json<ToolsResponse> {
    Json(ToolsResponse {
        default_tool: ToolKind::default().id(),
        tools: ToolKind::ALL.into_iter().map(ToolResponse::from).collect(),
        refine_actions: RefineAction::ALL.iter().map(|a| a.label()).collect(),
    })
}

/// POST /api/studio/generate
pub async fn generate<G, H>(
    State(state): State<StudioAppState<G, H>>,
    Extension(owner): Extension<HistoryOwner>,
    Json(req): Json<GenerateRequest>,
) -> StudioResult<Json<GenerateResponse>>
where
    G: GenerationBackend + Sync + 'static,
    H: HistoryRepository + Sync + 'static,
{
    let tool: ToolKind = req.tool.parse()?;
    let input = req
        .chips
        .iter()
        .fold(req.input, |input, chip| add_chip(&input, chip));

    let use_case = GenerateUseCase::new(
        state.backend.clone(),
        state.history.clone(),
        state.config.clone(),
    );

    let output = use_case.execute(&owner, tool, &input).await?;

    Ok(Json(GenerateResponse {
        output: output.output,
        history_entry: output.entry.into(),
    }))
}

/// POST /api/studio/refine
pub async fn refine<G, H>(
    State(state): State<StudioAppState<G, H>>,
    Json(req): Json<RefineRequest>,
) -> StudioResult<Json<RefineResponse>>
where
    G: GenerationBackend + Sync + 'static,
    H: HistoryRepository + Sync + 'static,
{
    let tool: ToolKind = req.tool.parse()?;
    let action: RefineAction = req.action.parse()?;

    let use_case = RefineUseCase::new(state.backend.clone(), state.config.clone());
    let output = use_case.execute(tool, &req.output, action).await?;

    Ok(Json(RefineResponse { output }))
}

/// GET /api/studio/history
pub async fn list_history<G, H>(
    State(state): State<StudioAppState<G, H>>,
    Extension(owner): Extension<HistoryOwner>,
) -> Json<HistoryResponse>
where
    G: GenerationBackend + Sync + 'static,
    H: HistoryRepository + Sync + 'static,
{
    let entries = HistoryUseCase::new(state.history.clone())
        .list(&owner)
        .await;

    Json(HistoryResponse {
        entries: entries.into_iter().map(Into::into).collect(),
    })
}

/// GET /api/studio/history/{id}
pub async fn restore_history<G, H>(
    State(state): State<StudioAppState<G, H>>,
    Extension(owner): Extension<HistoryOwner>,
    Path(id): Path<String>,
) -> StudioResult<Json<HistoryEntryResponse>>
where
    G: GenerationBackend + Sync + 'static,
    H: HistoryRepository + Sync + 'static,
{
    let entry = HistoryUseCase::new(state.history.clone())
        .restore(&owner, &id)
        .await?;
    Ok(Json(entry.into()))
}

/// DELETE /api/studio/history
pub async fn clear_history<G, H>(
    State(state): State<StudioAppState<G, H>>,
    Extension(owner): Extension<HistoryOwner>,
) -> StudioResult<StatusCode>
where
    G: GenerationBackend + Sync + 'static,
    H: HistoryRepository + Sync + 'static,
{
    HistoryUseCase::new(state.history.clone())
        .clear(&owner)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

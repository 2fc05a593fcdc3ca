//! Studio Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::StudioConfig;
use crate::domain::repository::{GenerationBackend, HistoryRepository};
use crate::presentation::handlers::{self, StudioAppState};

/// Create the Studio router.
///
/// The router itself is unauthenticated. The caller layers session checks
/// on top when nesting it, and must attach a [`HistoryOwner`] extension to
/// every request that reaches `/generate` or `/history`.
///
/// [`HistoryOwner`]: crate::domain::value_objects::HistoryOwner
pub fn studio_router<G, H>(backend: Arc<G>, history: Arc<H>, config: Arc<StudioConfig>) -> Router
where
    G: GenerationBackend + Sync + 'static,
    H: HistoryRepository + Sync + 'static,
{
    let state = StudioAppState {
        backend,
        history,
        config,
    };

    Router::new()
        .route("/tools", get(handlers::list_tools))
        .route("/generate", post(handlers::generate::<G, H>))
        .route("/refine", post(handlers::refine::<G, H>))
        .route(
            "/history",
            get(handlers::list_history::<G, H>).delete(handlers::clear_history::<G, H>),
        )
        .route("/history/{id}", get(handlers::restore_history::<G, H>))
        .with_state(state)
}

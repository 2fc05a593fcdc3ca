//! Auth Router

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use std::sync::Arc;

use platform::fetch::TextSource;

use crate::application::config::AuthConfig;
use crate::domain::repository::RegistrationRepository;
use crate::infra::session_registry::SessionRegistry;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthMiddlewareState, require_auth_session};

/// Create the Auth router.
///
/// `sessions` is shared with the caller so other routers can be guarded by
/// the same registry (see [`AuthMiddlewareState`]).
pub fn auth_router<S, R>(
    source: Arc<S>,
    registrations: Arc<R>,
    sessions: SessionRegistry,
    config: Arc<AuthConfig>,
) -> Router
where
    S: TextSource + Sync + 'static,
    R: RegistrationRepository + Sync + 'static,
{
    let guard = AuthMiddlewareState {
        sessions: sessions.clone(),
        config: config.clone(),
    };

    let state = AuthAppState {
        source,
        registrations,
        sessions,
        config,
    };

    let protected = Router::new()
        .route("/accounts", get(handlers::list_accounts::<S, R>))
        .route_layer(from_fn_with_state(guard, require_auth_session));

    Router::new()
        .route("/signup", post(handlers::sign_up::<S, R>))
        .route("/signin", post(handlers::sign_in::<S, R>))
        .route("/signout", post(handlers::sign_out::<S, R>))
        .route("/status", get(handlers::session_status::<S, R>))
        .merge(protected)
        .with_state(state)
}

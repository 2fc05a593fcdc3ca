//! Auth Middleware
//!
//! Middleware for requiring authentication on protected routes.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::entity::session::Session;
use crate::error::AuthError;
use crate::infra::session_registry::SessionRegistry;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub sessions: SessionRegistry,
    pub config: Arc<AuthConfig>,
}

/// The caller's live session, stored in request extensions
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Session);

/// Middleware that requires a live session.
///
/// On success the session is available to handlers as
/// `Extension<CurrentSession>`.
pub async fn require_auth_session(
    State(state): State<AuthMiddlewareState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let token = platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name)
        .ok_or(AuthError::SessionInvalid)?;

    let session = CheckSessionUseCase::new(state.sessions.clone()).get_session(&token)?;

    req.extensions_mut().insert(CurrentSession(session));

    Ok(next.run(req).await)
}

//! HTTP Handlers

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use std::sync::Arc;

use platform::cookie::{delete_cookie_header, extract_cookie, set_cookie_header};
use platform::fetch::TextSource;

use crate::application::config::AuthConfig;
use crate::application::{
    CheckSessionUseCase, ListAccountsUseCase, SessionInfoOutput, SignInInput, SignInUseCase,
    SignOutUseCase, SignUpInput, SignUpUseCase,
};
use crate::domain::repository::RegistrationRepository;
use crate::error::AuthResult;
use crate::infra::session_registry::SessionRegistry;
use crate::presentation::dto::{
    AccountsQuery, AccountsResponse, SessionStatusResponse, SignInRequest, SignUpRequest,
    SignUpResponse,
};
use crate::presentation::middleware::CurrentSession;

/// Shared state for auth handlers
pub struct AuthAppState<S, R>
where
    S: TextSource + Sync + 'static,
    R: RegistrationRepository + Sync + 'static,
{
    pub source: Arc<S>,
    pub registrations: Arc<R>,
    pub sessions: SessionRegistry,
    pub config: Arc<AuthConfig>,
}

impl<S, R> Clone for AuthAppState<S, R>
where
    S: TextSource + Sync + 'static,
    R: RegistrationRepository + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            registrations: Arc::clone(&self.registrations),
            sessions: self.sessions.clone(),
            config: Arc::clone(&self.config),
        }
    }
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/auth/signup
pub async fn sign_up<S, R>(
    State(state): State<AuthAppState<S, R>>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<impl IntoResponse>
where
    S: TextSource + Sync + 'static,
    R: RegistrationRepository + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.registrations.clone());

    let input = SignUpInput {
        identifier: req.username,
        secret: req.password,
        confirmation: req.confirm_password,
    };

    use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(SignUpResponse {
            message: "Account created! Please log in.".to_string(),
        }),
    ))
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /api/auth/signin
pub async fn sign_in<S, R>(
    State(state): State<AuthAppState<S, R>>,
    Json(req): Json<SignInRequest>,
) -> AuthResult<impl IntoResponse>
where
    S: TextSource + Sync + 'static,
    R: RegistrationRepository + Sync + 'static,
{
    let use_case = SignInUseCase::new(
        state.source.clone(),
        state.registrations.clone(),
        state.sessions.clone(),
        state.config.clone(),
    );

    let input = SignInInput {
        identifier: req.username,
        secret: req.password,
    };

    let output = use_case.execute(input).await?;

    let cookie = set_cookie_header(
        &state.config.cookie_config(),
        &output.session_id.to_string(),
    );

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(SessionStatusResponse::from(SessionInfoOutput::from(
            &output.session,
        ))),
    ))
}

// ============================================================================
// Sign Out
// ============================================================================

/// POST /api/auth/signout
pub async fn sign_out<S, R>(
    State(state): State<AuthAppState<S, R>>,
    headers: HeaderMap,
) -> impl IntoResponse
where
    S: TextSource + Sync + 'static,
    R: RegistrationRepository + Sync + 'static,
{
    if let Some(token) = extract_cookie(&headers, &state.config.session_cookie_name) {
        let use_case = SignOutUseCase::new(state.sessions.clone());
        // Ignore errors - just clear the cookie
        let _ = use_case.execute(&token);
    }

    let cookie = delete_cookie_header(&state.config.cookie_config());

    (StatusCode::NO_CONTENT, [(header::SET_COOKIE, cookie)])
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /api/auth/status
pub async fn session_status<S, R>(
    State(state): State<AuthAppState<S, R>>,
    headers: HeaderMap,
) -> Json<SessionStatusResponse>
where
    S: TextSource + Sync + 'static,
    R: RegistrationRepository + Sync + 'static,
{
    let use_case = CheckSessionUseCase::new(state.sessions.clone());

    let session_info = extract_cookie(&headers, &state.config.session_cookie_name)
        .and_then(|token| use_case.execute(&token).ok());

    match session_info {
        Some(info) => Json(SessionStatusResponse::from(info)),
        None => Json(SessionStatusResponse::anonymous()),
    }
}

// ============================================================================
// Account Directory (requires an admin session)
// ============================================================================

/// GET /api/auth/accounts?reveal=
pub async fn list_accounts<S, R>(
    State(state): State<AuthAppState<S, R>>,
    Extension(CurrentSession(caller)): Extension<CurrentSession>,
    Query(query): Query<AccountsQuery>,
) -> AuthResult<Json<AccountsResponse>>
where
    S: TextSource + Sync + 'static,
    R: RegistrationRepository + Sync + 'static,
{
    let use_case = ListAccountsUseCase::new(
        state.source.clone(),
        state.registrations.clone(),
        state.config.clone(),
    );

    let rows = use_case.execute(&caller, query.reveal).await?;

    Ok(Json(AccountsResponse {
        total: rows.len(),
        accounts: rows.into_iter().map(Into::into).collect(),
    }))
}

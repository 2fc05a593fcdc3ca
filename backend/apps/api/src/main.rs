//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod config;

use std::sync::Arc;

use auth::middleware::{AuthMiddlewareState, CurrentSession, require_auth_session};
use auth::{BlobRegistrationStore, SessionRegistry, auth_router};
use axum::{
    Extension, Router,
    extract::Request,
    http,
    http::{Method, header},
    middleware::{Next, from_fn, from_fn_with_state},
    response::Response,
};
use platform::fetch::HttpTextSource;
use platform::storage::{BlobStore, FileBlobStore, MemoryBlobStore};
use studio::{BlobHistoryStore, GeminiBackend, HistoryOwner, studio_router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,studio=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    if config.studio.api_key.is_none() {
        tracing::warn!("No GEMINI_API_KEY/API_KEY set, generations will return the error text");
    }
    if config.auth.sheet_url.is_none() {
        tracing::warn!("SHEET_URL is empty, only built-in and registered accounts can sign in");
    }

    let sessions = SessionRegistry::new(config.auth.session_ttl);

    let app = match &config.data_dir {
        Some(dir) => {
            let blobs = FileBlobStore::open(dir).await?;
            tracing::info!(data_dir = %dir.display(), "Using file blob storage");
            build_app(&config, sessions.clone(), blobs.clone(), blobs)?
        }
        None => {
            tracing::warn!("DATA_DIR not set, registrations and history are kept in memory");
            build_app(
                &config,
                sessions.clone(),
                MemoryBlobStore::new(),
                MemoryBlobStore::new(),
            )?
        }
    };

    // Start server
    tracing::info!("Listening on {}", config.listen_addr);

    let listener = TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    sessions.shutdown();
    tracing::info!("Server stopped");

    Ok(())
}

/// Assemble both routers, the session guard over the studio, CORS and tracing.
fn build_app<B>(
    config: &ServerConfig,
    sessions: SessionRegistry,
    user_blobs: B,
    history_blobs: B,
) -> anyhow::Result<Router>
where
    B: BlobStore + Sync + 'static,
{
    let auth_config = Arc::new(config.auth.clone());
    let studio_config = Arc::new(config.studio.clone());

    let source = Arc::new(HttpTextSource::new(auth_config.fetch_timeout)?);
    let registrations = Arc::new(BlobRegistrationStore::new(user_blobs));
    let backend = Arc::new(GeminiBackend::new(studio_config.clone())?);
    let history = Arc::new(BlobHistoryStore::new(history_blobs));

    let guard = AuthMiddlewareState {
        sessions: sessions.clone(),
        config: auth_config.clone(),
    };

    // CORS configuration
    let allowed_origins: Vec<http::HeaderValue> = config
        .frontend_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // The session guard runs first and hands its session to the owner mapping
    let studio = studio_router(backend, history, studio_config)
        .route_layer(from_fn(attach_history_owner))
        .route_layer(from_fn_with_state(guard, require_auth_session));

    Ok(Router::new()
        .nest(
            "/api/auth",
            auth_router(source, registrations, sessions, auth_config),
        )
        .nest("/api/studio", studio)
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}

/// Scope studio history to the signed-in identifier
async fn attach_history_owner(
    Extension(CurrentSession(session)): Extension<CurrentSession>,
    mut req: Request,
    next: Next,
) -> Response {
    req.extensions_mut()
        .insert(HistoryOwner::new(session.identifier));
    next.run(req).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_app() -> (Router, SessionRegistry) {
        // No sheet and no API key: nothing leaves the process
        let config = ServerConfig::from_lookup(|key| match key {
            "SHEET_URL" => Some(String::new()),
            _ => None,
        })
        .unwrap();
        let sessions = SessionRegistry::new(config.auth.session_ttl);
        let app = build_app(
            &config,
            sessions.clone(),
            MemoryBlobStore::new(),
            MemoryBlobStore::new(),
        )
        .unwrap();
        (app, sessions)
    }

    async fn sign_in(app: &Router, username: &str, password: &str) -> String {
        let body = serde_json::json!({ "username": username, "password": password });
        let response = app
            .clone()
            .oneshot(
                Request::post("/api/auth/signin")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }

    async fn history_len(app: &Router, cookie: &str) -> usize {
        let response = app
            .clone()
            .oneshot(
                Request::get("/api/studio/history")
                    .header(header::COOKIE, cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let listing: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        listing["entries"].as_array().unwrap().len()
    }

    #[tokio::test]
    async fn test_studio_requires_session() {
        let (app, _sessions) = test_app();
        let response = app
            .oneshot(
                Request::get("/api/studio/history")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_history_follows_signed_in_identifier() {
        let (app, sessions) = test_app();
        let micro = sign_in(&app, "micro", "Micro@=1").await;
        let admin = sign_in(&app, "admin", "password123").await;

        let response = app
            .clone()
            .oneshot(
                Request::post("/api/studio/generate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .header(header::COOKIE, &micro)
                    .body(Body::from(r#"{"tool":"youtube_seo","input":"cooking"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        assert_eq!(history_len(&app, &micro).await, 1);
        assert_eq!(history_len(&app, &admin).await, 0);

        sessions.shutdown();
    }
}

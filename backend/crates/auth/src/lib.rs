//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Credential rows, sessions, roles, admission rules
//! - `application/` - Use cases and application services
//! - `infra/` - Blob-backed registrations and the in-memory session registry
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Credential aggregate: built-in accounts, local registrations, remote sheet
//! - Sign in/up/out against the aggregate
//! - Server-side sessions with a fixed 30 minute lifetime
//! - Admin-only account directory
//!
//! ## Trust Model
//! - Secrets are plaintext and compared verbatim
//! - Session handles are random UUIDs carried in an HttpOnly cookie
//! - The only access rule enforced is the admin gate on the account directory

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::{BlobRegistrationStore, SessionRegistry};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}

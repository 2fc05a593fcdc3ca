//! Application Layer
//!
//! Use cases and application services.

pub mod check_session;
pub mod config;
pub mod list_accounts;
pub mod resolve_credentials;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;

// Re-exports
pub use check_session::{CheckSessionUseCase, SessionInfoOutput};
pub use config::AuthConfig;
pub use list_accounts::ListAccountsUseCase;
pub use resolve_credentials::ResolveCredentialsUseCase;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
pub use sign_up::{SignUpInput, SignUpUseCase, register};

//! Domain Layer
//!
//! Contains entities, value objects, pure services and repository traits.

pub mod entity;
pub mod repository;
pub mod services;
pub mod value_object;

// Re-exports
pub use entity::{credential_row::CredentialRow, session::Session};
pub use repository::RegistrationRepository;
pub use services::AdmissionFailure;
pub use value_object::user_role::UserRole;

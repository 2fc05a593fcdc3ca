//! Infrastructure Layer
//!
//! Persisted registrations and the in-memory session registry.

pub mod blob_registrations;
pub mod session_registry;

pub use blob_registrations::BlobRegistrationStore;
pub use session_registry::SessionRegistry;

//! Repository Traits
//!
//! Interfaces for persisted state. Implementations are in the infra layer.

use crate::domain::entity::credential_row::CredentialRow;
use crate::error::AuthResult;

/// Locally persisted self-service registrations
#[trait_variant::make(RegistrationRepository: Send)]
pub trait LocalRegistrationRepository {
    /// All registered rows in registration order.
    ///
    /// Total: unreadable or corrupt state reads as an empty list.
    async fn list(&self) -> Vec<CredentialRow>;

    /// Append `row` unless a registration with the same identifier exists.
    ///
    /// Returns `Ok(false)` on a duplicate. The check and the write happen
    /// under one lock so concurrent registrations cannot both succeed.
    async fn insert_unique(&self, row: &CredentialRow) -> AuthResult<bool>;
}

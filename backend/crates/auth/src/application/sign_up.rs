//! Sign Up Use Case
//!
//! Self-service registration. New accounts are always active viewers.

use std::sync::Arc;

use crate::domain::entity::credential_row::CredentialRow;
use crate::domain::repository::RegistrationRepository;
use crate::domain::services::is_system_identifier;
use crate::error::{AuthError, AuthResult};

/// Persist a registration for `identifier`.
///
/// Returns `false` when the identifier belongs to a built-in account, is
/// already registered, or the store could not be read or written.
pub async fn register<R>(registrations: &R, identifier: &str, secret: &str) -> bool
where
    R: RegistrationRepository + Sync,
{
    if is_system_identifier(identifier) {
        return false;
    }

    match registrations
        .insert_unique(&CredentialRow::registered(identifier, secret))
        .await
    {
        Ok(inserted) => inserted,
        Err(e) => {
            tracing::error!(error = %e, identifier, "Failed to persist registration");
            false
        }
    }
}

/// Sign up input, as entered in the registration form
pub struct SignUpInput {
    pub identifier: String,
    pub secret: String,
    pub confirmation: String,
}

/// Sign up use case
pub struct SignUpUseCase<R>
where
    R: RegistrationRepository,
{
    registrations: Arc<R>,
}

impl<R> SignUpUseCase<R>
where
    R: RegistrationRepository + Sync,
{
    pub fn new(registrations: Arc<R>) -> Self {
        Self { registrations }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<()> {
        if input.identifier.is_empty() || input.secret.is_empty() || input.confirmation.is_empty()
        {
            return Err(AuthError::MissingFields);
        }

        if input.secret != input.confirmation {
            return Err(AuthError::SecretMismatch);
        }

        if !register(self.registrations.as_ref(), &input.identifier, &input.secret).await {
            return Err(AuthError::DuplicateRegistration);
        }

        tracing::info!(identifier = %input.identifier, "User signed up");
        Ok(())
    }
}

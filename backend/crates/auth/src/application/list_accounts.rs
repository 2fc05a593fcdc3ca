//! List Accounts Use Case
//!
//! Admin view of the current credential aggregate.

use std::sync::Arc;

use platform::fetch::TextSource;

use crate::application::config::AuthConfig;
use crate::application::resolve_credentials::ResolveCredentialsUseCase;
use crate::domain::entity::credential_row::CredentialRow;
use crate::domain::entity::session::Session;
use crate::domain::repository::RegistrationRepository;
use crate::error::{AuthError, AuthResult};

/// Shown in place of a secret unless secrets are revealed
pub const SECRET_MASK: &str = "••••••••";

pub struct ListAccountsUseCase<S, R>
where
    S: TextSource,
    R: RegistrationRepository,
{
    resolver: ResolveCredentialsUseCase<S, R>,
    config: Arc<AuthConfig>,
}

impl<S, R> ListAccountsUseCase<S, R>
where
    S: TextSource + Sync,
    R: RegistrationRepository + Sync,
{
    pub fn new(source: Arc<S>, registrations: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self {
            resolver: ResolveCredentialsUseCase::new(source, registrations),
            config,
        }
    }

    /// Aggregate rows in aggregate order. Only admins may list.
    pub async fn execute(&self, caller: &Session, reveal: bool) -> AuthResult<Vec<CredentialRow>> {
        if !caller.role.is_admin() {
            return Err(AuthError::AccessDenied);
        }

        let mut rows = self.resolver.execute(self.config.sheet_url.as_deref()).await;
        if !reveal {
            for row in &mut rows {
                row.secret = SECRET_MASK.to_string();
            }
        }

        tracing::info!(
            caller = %caller.identifier,
            accounts = rows.len(),
            reveal,
            "Accounts listed"
        );
        Ok(rows)
    }
}

//! Sign In Use Case
//!
//! Runs the session gate against the current aggregate and starts a session.

use std::sync::Arc;

use kernel::id::SessionId;
use platform::fetch::TextSource;

use crate::application::config::AuthConfig;
use crate::application::resolve_credentials::ResolveCredentialsUseCase;
use crate::domain::entity::session::Session;
use crate::domain::repository::RegistrationRepository;
use crate::domain::services::authenticate;
use crate::error::AuthResult;
use crate::infra::session_registry::SessionRegistry;

/// Sign in input
pub struct SignInInput {
    pub identifier: String,
    pub secret: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    /// Handle for the session cookie
    pub session_id: SessionId,
    pub session: Session,
}

/// Sign in use case
pub struct SignInUseCase<S, R>
where
    S: TextSource,
    R: RegistrationRepository,
{
    resolver: ResolveCredentialsUseCase<S, R>,
    sessions: SessionRegistry,
    config: Arc<AuthConfig>,
}

impl<S, R> SignInUseCase<S, R>
where
    S: TextSource + Sync,
    R: RegistrationRepository + Sync,
{
    pub fn new(
        source: Arc<S>,
        registrations: Arc<R>,
        sessions: SessionRegistry,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            resolver: ResolveCredentialsUseCase::new(source, registrations),
            sessions,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let rows = self.resolver.execute(self.config.sheet_url.as_deref()).await;

        let session = authenticate(
            &input.identifier,
            &input.secret,
            &rows,
            self.config.session_ttl_chrono(),
        )?;

        let session_id = self.sessions.start(session.clone());

        tracing::info!(
            session_id = %session_id,
            identifier = %session.identifier,
            role = %session.role,
            "User signed in"
        );

        Ok(SignInOutput {
            session_id,
            session,
        })
    }
}

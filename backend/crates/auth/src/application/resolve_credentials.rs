//! Resolve Credentials Use Case
//!
//! Builds the ordered credential aggregate: built-in accounts, then local
//! registrations, then the remote sheet (or the fallback dataset when the
//! sheet cannot be fetched). Never fails; degraded paths only log.

use std::sync::Arc;

use platform::fetch::{TextSource, is_fetchable};

use crate::domain::entity::credential_row::CredentialRow;
use crate::domain::repository::RegistrationRepository;
use crate::domain::services::{FALLBACK_SHEET, parse_sheet, system_accounts};

pub struct ResolveCredentialsUseCase<S, R>
where
    S: TextSource,
    R: RegistrationRepository,
{
    source: Arc<S>,
    registrations: Arc<R>,
}

impl<S, R> ResolveCredentialsUseCase<S, R>
where
    S: TextSource + Sync,
    R: RegistrationRepository + Sync,
{
    pub fn new(source: Arc<S>, registrations: Arc<R>) -> Self {
        Self {
            source,
            registrations,
        }
    }

    /// Aggregate for `source_ref`.
    ///
    /// An absent or non-http reference contributes no remote rows and no
    /// fallback rows.
    pub async fn execute(&self, source_ref: Option<&str>) -> Vec<CredentialRow> {
        let mut rows = system_accounts();
        rows.extend(self.registrations.list().await);

        let Some(url) = source_ref.filter(|r| is_fetchable(r)) else {
            if let Some(reference) = source_ref {
                tracing::warn!(reference, "Sheet reference is not fetchable, skipping remote rows");
            }
            return rows;
        };

        match self.source.fetch_text(url).await {
            Ok(text) => {
                let remote = parse_sheet(&text);
                tracing::debug!(rows = remote.len(), "Loaded remote credential rows");
                rows.extend(remote);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Credential sheet unavailable, using fallback rows");
                rows.extend(parse_sheet(FALLBACK_SHEET));
            }
        }

        rows
    }
}

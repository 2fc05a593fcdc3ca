//! Domain Services
//!
//! Pure credential logic: the built-in account list, the sheet payload
//! parser and the admission decision. No I/O happens here.

use chrono::Duration;
use thiserror::Error;

use crate::domain::entity::{
    credential_row::{ACTIVE_STATUS, CredentialRow, DEFAULT_ROLE},
    session::Session,
};
use crate::domain::value_object::user_role::UserRole;

/// Column separator of sheet payloads
const SHEET_SEPARATOR: char = ',';

/// Dataset used in place of the remote sheet whenever fetching it fails
pub const FALLBACK_SHEET: &str = "User,Pass,Role,Status
viewer,viewer123,viewer,active
guest,guest123,guest,active
creator_lead,design2024,viewer,active";

/// Accounts that are present in every aggregate, ahead of all other sources.
pub fn system_accounts() -> Vec<CredentialRow> {
    vec![
        CredentialRow::new("micro", "Micro@=1", "admin", "active"),
        CredentialRow::new("admin", "password123", "admin", "active"),
    ]
}

/// Whether `identifier` belongs to a built-in account
pub fn is_system_identifier(identifier: &str) -> bool {
    system_accounts()
        .iter()
        .any(|row| row.identifier == identifier)
}

/// Parse a header-plus-rows sheet payload.
///
/// Carriage returns are stripped and the payload trimmed before splitting
/// into lines. The first line is always discarded. A line yields a row only
/// when it has at least two fields; every field is trimmed, and a missing or
/// blank role/status becomes `viewer`/`active`.
pub fn parse_sheet(text: &str) -> Vec<CredentialRow> {
    let cleaned = text.replace('\r', "");

    cleaned
        .trim()
        .split('\n')
        .skip(1)
        .filter_map(parse_sheet_line)
        .collect()
}

fn parse_sheet_line(line: &str) -> Option<CredentialRow> {
    let fields: Vec<&str> = line.split(SHEET_SEPARATOR).collect();
    if fields.len() < 2 {
        return None;
    }

    let optional = |index: usize, default: &str| {
        fields
            .get(index)
            .map(|field| field.trim())
            .filter(|field| !field.is_empty())
            .unwrap_or(default)
            .to_string()
    };

    Some(CredentialRow {
        identifier: fields[0].trim().to_string(),
        secret: fields[1].trim().to_string(),
        role: optional(2, DEFAULT_ROLE),
        status: optional(3, ACTIVE_STATUS),
    })
}

/// Why the gate refused admission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdmissionFailure {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account is inactive or suspended")]
    AccountInactive,
}

/// Decide admission for `identifier`/`secret` against `rows`.
///
/// The first row (in aggregate order) matching both fields exactly is
/// authoritative, even when a later row with the same identifier would be
/// active.
pub fn authenticate(
    identifier: &str,
    secret: &str,
    rows: &[CredentialRow],
    ttl: Duration,
) -> Result<Session, AdmissionFailure> {
    let row = rows
        .iter()
        .find(|row| row.matches(identifier, secret))
        .ok_or(AdmissionFailure::InvalidCredentials)?;

    if !row.is_active() {
        return Err(AdmissionFailure::AccountInactive);
    }

    Ok(Session::new(
        row.identifier.clone(),
        UserRole::map_role(&row.role),
        ttl,
    ))
}

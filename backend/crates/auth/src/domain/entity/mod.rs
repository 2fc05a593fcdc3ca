//! Entity Module

pub mod credential_row;
pub mod session;

pub use credential_row::CredentialRow;
pub use session::Session;

//! Shared Kernel - Domain-crossing minimal core
//!
//! Vocabulary shared by the `auth` and `studio` crates:
//! - Common error types and result aliases
//! - Typed ID wrappers (session handles)
//!
//! Only things with the same meaning in every crate belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;

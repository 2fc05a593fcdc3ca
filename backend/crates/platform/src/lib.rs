//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations for the service crates:
//! - Cookie management for the session handle
//! - Remote text fetching with cache busting (`reqwest`)
//! - Key/value blob storage standing in for browser-local storage

pub mod cookie;
pub mod fetch;
pub mod storage;

//! blogapi — environment-keyed API configuration and user fetch client
//! (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod client;
pub mod config;
pub mod constants;
pub mod env;

//! usercheck — fetch user records from an HTTP API and validate them (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod env;
pub mod fetch;
pub mod models;
pub mod output;
pub mod runner;
pub mod validate;

//! Configuration loading and layering.
//!
//! Handles `.usercheck.toml` loading, environment variable resolution,
//! and CLI flag merging with proper priority ordering.

pub mod loader;

pub use loader::{Config, ConfigError, FetchConfig, ValidateConfig};

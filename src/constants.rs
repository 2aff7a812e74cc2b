//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and the default endpoint so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "usercheck";

/// Crate version, as set in `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compilation target triple, exported by `build.rs`.
pub const TARGET: &str = env!("TARGET");

/// `User-Agent` header sent with every request.
pub const USER_AGENT: &str = concat!("usercheck/", env!("CARGO_PKG_VERSION"));

/// Local config filename (e.g. `.usercheck.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".usercheck.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "usercheck";

/// Endpoint serving the user list.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Total request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// TCP connect timeout in seconds.
pub const CONNECT_TIMEOUT_SECS: u64 = 5;

// ── Environment variable names ──────────────────────────────────────

pub const ENV_ENDPOINT: &str = "USERCHECK_ENDPOINT";
pub const ENV_TIMEOUT: &str = "USERCHECK_TIMEOUT";
pub const ENV_MODE: &str = "USERCHECK_MODE";
pub const ENV_FORMAT: &str = "USERCHECK_FORMAT";
pub const ENV_LOG: &str = "USERCHECK_LOG";

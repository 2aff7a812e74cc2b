//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.usercheck.toml` in the working directory
//! 4. `~/.config/usercheck/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

use crate::constants::{self, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use crate::env::Env;
use crate::models::ValidationMode;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchConfig,
    pub validate: ValidateConfig,
}

/// Where and how records are fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub endpoint: String,
    /// Total request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Validation behaviour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidateConfig {
    pub mode: ValidationMode,
}

/// One config file as written: only the keys it actually sets are `Some`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
struct ConfigLayer {
    fetch: FetchLayer,
    validate: ValidateLayer,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
struct FetchLayer {
    endpoint: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
struct ValidateLayer {
    mode: Option<ValidationMode>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads the global config, then the local one in `work_dir`, then
    /// applies environment variable overrides. CLI flags are applied by
    /// the caller afterwards, followed by [`Config::check`].
    pub fn load(work_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let global_path = Self::global_config_path();
        let local_path = work_dir.map(|dir| dir.join(constants::CONFIG_FILENAME));
        Self::load_layers(global_path.as_deref(), local_path.as_deref(), env)
    }

    /// Layer the given files (missing ones are skipped) and env over the defaults.
    fn load_layers(
        global_path: Option<&Path>,
        local_path: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        for path in [global_path, local_path].into_iter().flatten() {
            if path.exists() {
                let layer = Self::load_file(path)?;
                config.merge(layer);
            }
        }

        config.apply_env_vars(env);
        Ok(config)
    }

    /// Load a config layer from a specific file.
    fn load_file(path: &Path) -> Result<ConfigLayer, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Apply every key the layer sets, even when it equals the built-in default.
    fn merge(&mut self, layer: ConfigLayer) {
        if let Some(endpoint) = layer.fetch.endpoint {
            self.fetch.endpoint = endpoint;
        }
        if let Some(secs) = layer.fetch.timeout_secs {
            self.fetch.timeout_secs = secs;
        }
        if let Some(mode) = layer.validate.mode {
            self.validate.mode = mode;
        }
    }

    /// Apply environment variable overrides. Unparseable values are ignored.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(val) = env.get(constants::ENV_ENDPOINT) {
            self.fetch.endpoint = val;
        }

        match env.parsed::<u64>(constants::ENV_TIMEOUT) {
            Some(Ok(secs)) => self.fetch.timeout_secs = secs,
            Some(Err(raw)) => {
                warn!(var = constants::ENV_TIMEOUT, value = %raw, "ignoring invalid timeout");
            }
            None => {}
        }

        match env.parsed::<ValidationMode>(constants::ENV_MODE) {
            Some(Ok(mode)) => self.validate.mode = mode,
            Some(Err(raw)) => {
                warn!(var = constants::ENV_MODE, value = %raw, "ignoring invalid validation mode");
            }
            None => {}
        }
    }

    /// Reject values that would make a run meaningless.
    pub fn check(&self) -> Result<(), ConfigError> {
        let endpoint = self.fetch.endpoint.trim();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "endpoint must be an http(s) URL, got '{}'",
                self.fetch.endpoint
            )));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}

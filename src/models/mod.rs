//! Shared types used across all modules.
//!
//! This module defines the record shapes, violations, and the per-run
//! report. Other modules import from here rather than reaching into each
//! other's internals.

pub mod record;
pub mod report;
pub mod violation;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use record::{RawRecord, UserRecord};
pub use report::{Summary, ValidationReport};
pub use violation::{SchemaProblem, Violation};

/// How a validation run reacts to a violation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationMode {
    /// Stop at the first violation.
    #[default]
    FailFast,
    /// Check every record and report every violation.
    CollectAll,
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationMode::FailFast => write!(f, "fail-fast"),
            ValidationMode::CollectAll => write!(f, "collect-all"),
        }
    }
}

impl std::str::FromStr for ValidationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "fail-fast" => Ok(ValidationMode::FailFast),
            "collect-all" => Ok(ValidationMode::CollectAll),
            other => Err(format!(
                "unsupported validation mode: '{other}'. Supported: fail-fast, collect-all"
            )),
        }
    }
}

//! Outcome of a single validation run.

use serde::Serialize;

use super::{UserRecord, ValidationMode, Violation};

/// Counts for a validation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Records fetched.
    pub records: usize,
    /// Records examined before the run stopped.
    pub checked: usize,
    /// Records that passed every check.
    pub valid: usize,
    pub violations: usize,
}

/// Everything a validation run produced, in fetch order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub mode: ValidationMode,
    /// Number of records in the input.
    pub total: usize,
    /// Number of records examined. Less than `total` only when a fail-fast run stopped early.
    pub checked: usize,
    pub valid: Vec<UserRecord>,
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    /// `true` when no violation was recorded.
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn first_violation(&self) -> Option<&Violation> {
        self.violations.first()
    }

    pub fn summary(&self) -> Summary {
        Summary {
            records: self.total,
            checked: self.checked,
            valid: self.valid.len(),
            violations: self.violations.len(),
        }
    }

    /// Collapse to the fail-fast outcome: every valid record, or the first violation.
    pub fn into_result(self) -> Result<Vec<UserRecord>, Violation> {
        match self.violations.into_iter().next() {
            Some(first) => Err(first),
            None => Ok(self.valid),
        }
    }
}

//! Record validation: coercion, field checks, and identifier uniqueness.
//!
//! Each record goes through three stages in order:
//!
//! 1. **coerce** — required fields present with the right JSON types
//! 2. **fields** — `id > 0`, non-empty `name` and `username`, `@` in `email`
//! 3. **uniqueness** — `id` not seen earlier in the same run
//!
//! A record only reaches a stage if it passed the previous one. The set of
//! seen identifiers belongs to a single [`ValidationRun`], so two runs over
//! the same input always produce the same report.

pub mod coerce;

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::{debug, info};

use crate::models::{RawRecord, UserRecord, ValidationMode, ValidationReport, Violation};

pub use coerce::coerce;

/// Validate every record, stopping at the first violation.
pub fn validate_all(records: &[RawRecord]) -> Result<Vec<UserRecord>, Violation> {
    Validator::new(ValidationMode::FailFast)
        .run(records)
        .into_result()
}

/// Apply the field-level checks to a coerced record, in fixed order.
///
/// Every failing check is returned; callers that fail fast take the first.
pub fn check_fields(index: usize, record: &UserRecord) -> Vec<Violation> {
    let mut violations = Vec::new();
    let id = record.id();

    if id <= 0 {
        violations.push(Violation::NonPositiveIdentifier { index, id });
    }
    if record.name().is_empty() {
        violations.push(Violation::EmptyField {
            index,
            id,
            field: "name",
        });
    }
    if record.username().is_empty() {
        violations.push(Violation::EmptyField {
            index,
            id,
            field: "username",
        });
    }
    if !record.email().contains('@') {
        violations.push(Violation::MalformedEmail {
            index,
            id,
            email: record.email().to_string(),
        });
    }

    violations
}

/// Run-local state: identifiers seen so far, mapped to the index that introduced them.
#[derive(Debug, Default)]
pub struct ValidationRun {
    seen: HashMap<i64, usize>,
}

impl ValidationRun {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push one record through every stage.
    ///
    /// On failure returns the violations of the stage that failed, in check
    /// order. Only records that pass the field checks are recorded as seen.
    pub fn check(&mut self, index: usize, raw: &RawRecord) -> Result<UserRecord, Vec<Violation>> {
        let record = coerce(index, raw).map_err(|v| vec![v])?;

        let violations = check_fields(index, &record);
        if !violations.is_empty() {
            return Err(violations);
        }

        self.check_unique(index, &record).map_err(|v| vec![v])?;
        Ok(record)
    }

    fn check_unique(&mut self, index: usize, record: &UserRecord) -> Result<(), Violation> {
        match self.seen.entry(record.id()) {
            Entry::Occupied(first) => Err(Violation::DuplicateIdentifier {
                index,
                id: record.id(),
                first_index: *first.get(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(index);
                Ok(())
            }
        }
    }

    /// Number of distinct identifiers accepted so far.
    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }
}

/// Drives a [`ValidationRun`] over a record sequence in the chosen mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    mode: ValidationMode,
}

impl Validator {
    pub fn new(mode: ValidationMode) -> Self {
        Self { mode }
    }

    /// Validate `records` in order and build a report.
    pub fn run(&self, records: &[RawRecord]) -> ValidationReport {
        let mut run = ValidationRun::new();
        let mut report = ValidationReport {
            mode: self.mode,
            total: records.len(),
            checked: 0,
            valid: Vec::with_capacity(records.len()),
            violations: Vec::new(),
        };

        for (index, raw) in records.iter().enumerate() {
            report.checked += 1;
            match run.check(index, raw) {
                Ok(record) => {
                    debug!(index, id = record.id(), "record valid");
                    report.valid.push(record);
                }
                Err(violations) => {
                    debug!(index, count = violations.len(), "record rejected");
                    match self.mode {
                        ValidationMode::FailFast => {
                            report.violations.extend(violations.into_iter().take(1));
                            break;
                        }
                        ValidationMode::CollectAll => report.violations.extend(violations),
                    }
                }
            }
        }

        info!(
            mode = %self.mode,
            total = report.total,
            checked = report.checked,
            valid = report.valid.len(),
            violations = report.violations.len(),
            unique_ids = run.seen_count(),
            "validation finished"
        );
        report
    }
}

//! Violation types produced by a validation run.

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Why a raw record could not be coerced into a [`super::UserRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SchemaProblem {
    /// The field is absent from the record.
    Missing,
    /// The field is present but holds the wrong JSON type.
    WrongType {
        expected: &'static str,
        found: &'static str,
    },
    /// A number that is not representable as a signed 64-bit integer.
    OutOfRange { value: String },
}

impl fmt::Display for SchemaProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaProblem::Missing => write!(f, "is missing"),
            SchemaProblem::WrongType { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            SchemaProblem::OutOfRange { value } => {
                write!(f, "value {value} does not fit in a 64-bit integer")
            }
        }
    }
}

/// A single failed check. `index` is the record's position in the fetched list.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    #[error("schema violation for record #{index} (id {}): field `{field}` {problem}", describe_raw_id(.raw_id))]
    Schema {
        index: usize,
        raw_id: Option<Value>,
        field: &'static str,
        problem: SchemaProblem,
    },

    #[error("record #{index}: id must be positive, got {id}")]
    NonPositiveIdentifier { index: usize, id: i64 },

    #[error("record #{index} (id {id}): field `{field}` must not be empty")]
    EmptyField {
        index: usize,
        id: i64,
        field: &'static str,
    },

    #[error("record #{index} (id {id}): email {email:?} does not contain '@'")]
    MalformedEmail {
        index: usize,
        id: i64,
        email: String,
    },

    #[error("record #{index}: duplicate id {id} (first seen at record #{first_index})")]
    DuplicateIdentifier {
        index: usize,
        id: i64,
        first_index: usize,
    },
}

fn describe_raw_id(raw_id: &Option<Value>) -> String {
    match raw_id {
        Some(value) => value.to_string(),
        None => "<missing>".to_string(),
    }
}

impl Violation {
    /// Position of the offending record in the fetched list.
    pub fn index(&self) -> usize {
        match self {
            Violation::Schema { index, .. }
            | Violation::NonPositiveIdentifier { index, .. }
            | Violation::EmptyField { index, .. }
            | Violation::MalformedEmail { index, .. }
            | Violation::DuplicateIdentifier { index, .. } => *index,
        }
    }

    /// Short machine-readable name of the violation kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Violation::Schema { .. } => "schema",
            Violation::NonPositiveIdentifier { .. } => "non_positive_identifier",
            Violation::EmptyField { .. } => "empty_field",
            Violation::MalformedEmail { .. } => "malformed_email",
            Violation::DuplicateIdentifier { .. } => "duplicate_identifier",
        }
    }
}

//! Schema coercion: raw wire record → [`UserRecord`].
//!
//! Presence and primitive types only. Value-level rules (positive id,
//! non-empty names, email shape) live in the parent module.

use serde_json::Value;

use crate::models::{RawRecord, SchemaProblem, UserRecord, Violation};

/// Build a [`UserRecord`] from `raw`, or report the first field that does not fit.
///
/// Fields are checked in declaration order: `id`, `name`, `username`, `email`.
/// Unknown fields are ignored.
pub fn coerce(index: usize, raw: &RawRecord) -> Result<UserRecord, Violation> {
    let schema_error = |field: &'static str, problem: SchemaProblem| Violation::Schema {
        index,
        raw_id: raw.get("id").cloned(),
        field,
        problem,
    };

    let id = required_integer(raw, "id").map_err(|p| schema_error("id", p))?;
    let name = required_string(raw, "name").map_err(|p| schema_error("name", p))?;
    let username = required_string(raw, "username").map_err(|p| schema_error("username", p))?;
    let email = required_string(raw, "email").map_err(|p| schema_error("email", p))?;

    Ok(UserRecord::new(id, name, username, email))
}

/// Strict on purpose: numeric strings and integral floats are rejected, not converted.
fn required_integer(raw: &RawRecord, field: &str) -> Result<i64, SchemaProblem> {
    match raw.get(field) {
        None => Err(SchemaProblem::Missing),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(v) => Ok(v),
            // Integer that only fits in u64.
            None if n.is_u64() => Err(SchemaProblem::OutOfRange {
                value: n.to_string(),
            }),
            None => Err(SchemaProblem::WrongType {
                expected: "integer",
                found: "float",
            }),
        },
        Some(other) => Err(SchemaProblem::WrongType {
            expected: "integer",
            found: json_type_name(other),
        }),
    }
}

fn required_string(raw: &RawRecord, field: &str) -> Result<String, SchemaProblem> {
    match raw.get(field) {
        None => Err(SchemaProblem::Missing),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(SchemaProblem::WrongType {
            expected: "string",
            found: json_type_name(other),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

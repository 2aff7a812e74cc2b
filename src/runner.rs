//! One fetch-and-validate run.
//!
//! Fetches once from a [`RecordSource`], validates the result with a
//! fresh [`Validator`], and returns the report. A transport failure ends
//! the run before any record is examined.

use thiserror::Error;
use tracing::info;

use crate::fetch::{FetchError, RecordSource};
use crate::models::{ValidationMode, ValidationReport, Violation};
use crate::validate::Validator;

/// The single failure a run can end with.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("transport error: {0}")]
    Transport(#[from] FetchError),

    #[error("{0}")]
    Invalid(Violation),
}

/// Result of a completed run, including where the records came from.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub origin: String,
    pub report: ValidationReport,
}

impl CheckOutcome {
    /// Fail-fast view of the outcome: `Ok` with the record count, or the first violation.
    pub fn into_result(self) -> Result<usize, CheckError> {
        match self.report.violations.into_iter().next() {
            Some(first) => Err(CheckError::Invalid(first)),
            None => Ok(self.report.valid.len()),
        }
    }
}

/// Fetch and validate. Only transport errors are returned as `Err`;
/// violations are carried in the report so every mode can render them.
pub async fn run_check(
    source: &dyn RecordSource,
    mode: ValidationMode,
) -> Result<CheckOutcome, FetchError> {
    info!(origin = source.origin(), %mode, "starting check");

    let records = source.fetch_all().await?;
    let report = Validator::new(mode).run(&records);

    Ok(CheckOutcome {
        origin: source.origin().to_string(),
        report,
    })
}

/// Fetch and validate in fail-fast mode, collapsing every failure into one error.
pub async fn check(source: &dyn RecordSource) -> Result<usize, CheckError> {
    run_check(source, ValidationMode::FailFast)
        .await?
        .into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawRecord;
    use async_trait::async_trait;
    use serde_json::json;

    struct FixedSource(Result<Vec<RawRecord>, u16>);

    #[async_trait]
    impl RecordSource for FixedSource {
        fn origin(&self) -> &str {
            "fixture"
        }

        async fn fetch_all(&self) -> Result<Vec<RawRecord>, FetchError> {
            self.0.clone().map_err(|status| FetchError::Status {
                url: "fixture".into(),
                status,
            })
        }
    }

    fn users(value: serde_json::Value) -> FixedSource {
        FixedSource(Ok(serde_json::from_value(value).unwrap()))
    }

    #[tokio::test]
    async fn check_passes_valid_list() {
        let source = users(json!([
            {"id": 1, "name": "A", "username": "a", "email": "a@x.com"}
        ]));
        assert_eq!(check(&source).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn check_surfaces_transport_error() {
        let source = FixedSource(Err(503));
        let err = check(&source).await.unwrap_err();
        assert!(matches!(
            err,
            CheckError::Transport(FetchError::Status { status: 503, .. })
        ));
        assert!(err.to_string().starts_with("transport error"));
    }

    #[tokio::test]
    async fn check_surfaces_first_violation() {
        let source = users(json!([
            {"id": 1, "name": "A", "username": "", "email": "nope"}
        ]));
        let err = check(&source).await.unwrap_err();
        match err {
            CheckError::Invalid(Violation::EmptyField { field, .. }) => {
                assert_eq!(field, "username");
            }
            other => panic!("expected empty username, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn run_check_keeps_origin() {
        let source = users(json!([]));
        let outcome = run_check(&source, ValidationMode::CollectAll)
            .await
            .unwrap();
        assert_eq!(outcome.origin, "fixture");
        assert_eq!(outcome.report.mode, ValidationMode::CollectAll);
    }
}

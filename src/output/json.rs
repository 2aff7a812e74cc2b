//! JSON output renderer.
//!
//! Outputs `{"origin": ..., "mode": ..., "passed": ..., "summary": {...}, "violations": [...]}`.

use crate::output::OutputRenderer;
use crate::runner::CheckOutcome;

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render(&self, outcome: &CheckOutcome) -> String {
        let report = &outcome.report;

        let output = serde_json::json!({
            "origin": outcome.origin,
            "mode": report.mode,
            "passed": report.passed(),
            "summary": report.summary(),
            "violations": report.violations,
        });

        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ValidationMode, ValidationReport, Violation};

    fn outcome(violations: Vec<Violation>) -> CheckOutcome {
        CheckOutcome {
            origin: "https://example.test/users".into(),
            report: ValidationReport {
                mode: ValidationMode::CollectAll,
                total: 3,
                checked: 3,
                valid: vec![],
                violations,
            },
        }
    }

    #[test]
    fn render_json() {
        let output = JsonRenderer.render(&outcome(vec![Violation::MalformedEmail {
            index: 2,
            id: 3,
            email: "nope".into(),
        }]));
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["origin"], "https://example.test/users");
        assert_eq!(parsed["mode"], "collect-all");
        assert_eq!(parsed["passed"], false);
        assert_eq!(parsed["summary"]["records"], 3);
        assert_eq!(parsed["summary"]["violations"], 1);
        assert_eq!(parsed["violations"][0]["kind"], "malformed_email");
        assert_eq!(parsed["violations"][0]["email"], "nope");
    }

    #[test]
    fn render_passing_json() {
        let output = JsonRenderer.render(&outcome(vec![]));
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["passed"], true);
        assert_eq!(parsed["violations"].as_array().unwrap().len(), 0);
    }
}

//! Terminal renderer: one line per violation plus a summary.

use colored::Colorize;

use crate::models::ValidationMode;
use crate::output::OutputRenderer;
use crate::runner::CheckOutcome;

/// Terminal output renderer with colored, flowing text.
pub struct TerminalRenderer;

impl OutputRenderer for TerminalRenderer {
    fn render(&self, outcome: &CheckOutcome) -> String {
        let report = &outcome.report;
        let summary = report.summary();
        let mut output = String::new();

        output.push_str(&format!(
            " {} {}\n",
            "source:".dimmed(),
            outcome.origin
        ));

        if report.passed() {
            output.push_str(&format!(
                "{}\n",
                format!("  ✔ {} record(s) valid.", summary.valid).green()
            ));
            return output;
        }

        output.push('\n');
        for violation in &report.violations {
            output.push_str(&format!(
                " {} {} {}\n",
                "✖".red().bold(),
                violation.kind().red().bold(),
                violation
            ));
        }

        output.push_str(&format!("{}\n", "───────────────────────────────────".dimmed()));
        output.push_str(&format!(
            " {} checked of {}, {} valid, {} {}\n",
            summary.checked.to_string().bold(),
            summary.records,
            summary.valid.to_string().green().bold(),
            summary.violations.to_string().red().bold(),
            if summary.violations == 1 { "violation" } else { "violations" },
        ));
        if report.mode == ValidationMode::FailFast && summary.checked < summary.records {
            output.push_str(&format!(
                " {}\n",
                "stopped at first violation (use --mode collect-all to see all)".dimmed()
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ValidationReport, Violation};

    fn outcome(mode: ValidationMode, total: usize, violations: Vec<Violation>) -> CheckOutcome {
        CheckOutcome {
            origin: "https://example.test/users".into(),
            report: ValidationReport {
                mode,
                total,
                checked: if violations.is_empty() { total } else { 1 },
                valid: vec![],
                violations,
            },
        }
    }

    #[test]
    fn render_pass() {
        let output = TerminalRenderer.render(&outcome(ValidationMode::FailFast, 0, vec![]));
        assert!(output.contains("record(s) valid"));
        assert!(output.contains("https://example.test/users"));
    }

    #[test]
    fn render_fail_fast_hint() {
        let output = TerminalRenderer.render(&outcome(
            ValidationMode::FailFast,
            10,
            vec![Violation::NonPositiveIdentifier { index: 0, id: 0 }],
        ));
        assert!(output.contains("non_positive_identifier"));
        assert!(output.contains("id must be positive, got 0"));
        assert!(output.contains("checked of 10"));
        assert!(output.contains("collect-all"));
    }
}

//! Output renderers: terminal and JSON.

pub mod json;
pub mod terminal;

use crate::runner::CheckOutcome;

/// Trait for rendering a check outcome to an output format.
pub trait OutputRenderer {
    /// Render the outcome to a string.
    fn render(&self, outcome: &CheckOutcome) -> String;
}

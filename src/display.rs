//! Display snapshot handed to front ends.

use crate::calculator::Calculator;

/// A copy of both calculator displays, ready to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplaySnapshot {
    /// The equation typed so far.
    pub long: String,
    /// The number, operator or error message being shown.
    pub short: String,
    /// Whether `short` is an error message rather than a value.
    pub is_error: bool,
}

impl DisplaySnapshot {
    /// Take a snapshot of the calculator's current outputs.
    pub fn from_calculator(calc: &Calculator) -> Self {
        Self {
            long: calc.long_output().to_string(),
            short: calc.short_output().to_string(),
            is_error: calc.is_error(),
        }
    }

    /// Render both displays right-aligned to `width` columns, long output
    /// first. Content wider than `width` is never cut.
    pub fn render(&self, width: usize) -> String {
        format!("{:>width$}\n{:>width$}", self.long, self.short)
    }

    /// Render only the short display.
    pub fn render_short(&self, width: usize) -> String {
        format!("{:>width$}", self.short)
    }
}

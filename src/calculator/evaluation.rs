//! Equation evaluation.
//!
//! Reduces the accumulated operand and operator lists in two left-to-right
//! passes (`*` `/` first, then `+` `-`) and formats results for display.

use thiserror::Error;
use tracing::{debug, trace};

use super::key::Operator;

/// Error raised while reducing an equation.
///
/// The `Display` text doubles as what the calculator shows in place of a
/// result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("Error: div by 0")]
    DivisionByZero,
}

impl Operator {
    /// Combine two operands.
    pub fn apply(self, a: f64, b: f64) -> Result<f64, EvalError> {
        match self {
            Self::Add => Ok(a + b),
            Self::Subtract => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Divide if b == 0.0 => Err(EvalError::DivisionByZero),
            Self::Divide => Ok(a / b),
        }
    }
}

/// Reduce an equation to a single display string.
///
/// `operators[i]` sits between `operands[i]` and `operands[i + 1]`. Both
/// lists are spliced in place; on error they are left partially reduced.
/// With no operators the first operand is returned verbatim.
pub fn reduce(
    operands: &mut Vec<String>,
    operators: &mut Vec<Operator>,
) -> Result<String, EvalError> {
    debug!(?operands, ?operators, "evaluating equation");

    reduce_tier(operands, operators, Operator::is_multiplicative)?;
    reduce_tier(operands, operators, |op| !op.is_multiplicative())?;

    Ok(operands.first().cloned().unwrap_or_else(|| "0".to_string()))
}

/// Combine every operator matching `tier`, left to right.
fn reduce_tier(
    operands: &mut Vec<String>,
    operators: &mut Vec<Operator>,
    tier: impl Fn(Operator) -> bool,
) -> Result<(), EvalError> {
    let mut i = 0;
    while i < operators.len() && i + 1 < operands.len() {
        let op = operators[i];
        if !tier(op) {
            i += 1;
            continue;
        }

        let a = parse_operand(&operands[i]);
        let b = parse_operand(&operands[i + 1]);
        operators.remove(i);
        operands.remove(i + 1);

        let result = op.apply(a, b)?;
        trace!(a, b, op = %op.symbol(), result, "combined operands");
        // Same index again: the next operator has shifted into slot i.
        operands[i] = format_number(result);
    }
    Ok(())
}

/// Parse an operand literal. A literal that is not a number (a lone `-`)
/// counts as zero.
pub fn parse_operand(literal: &str) -> f64 {
    literal.parse().unwrap_or(0.0)
}

/// Format a number for display: six fixed decimals, trailing zeros and a
/// dangling decimal point removed. Infinities show as `+Inf`/`-Inf` and
/// NaN as `NaN`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() { "+Inf" } else { "-Inf" };
        return text.to_string();
    }

    let formatted = format!("{:.6}", value);
    let trimmed = formatted.trim_end_matches('0');
    trimmed.strip_suffix('.').unwrap_or(trimmed).to_string()
}

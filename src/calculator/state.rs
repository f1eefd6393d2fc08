//! The keystroke-driven calculator.
//!
//! [`Calculator`] accepts one character at a time and keeps two displays up
//! to date: the short output (the number or operator being edited) and the
//! long output (the equation typed so far). Typing `=` solves the whole
//! equation, multiplication and division before addition and subtraction.

use tracing::{debug, trace, warn};

use super::evaluation::{EvalError, reduce};
use super::key::{Key, Operator};
use crate::display::DisplaySnapshot;

/// What the calculator expects next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// The last accepted key was an operator or `=`.
    AwaitingOperand,
    /// A number is being typed, or nothing has been typed yet.
    #[default]
    AwaitingOperator,
}

/// Calculator state. Mutated only through [`Calculator::input`].
#[derive(Clone, Debug, PartialEq)]
pub struct Calculator {
    short: String,
    long: String,
    phase: Phase,
    operands: Vec<String>,
    operators: Vec<Operator>,
    error: Option<EvalError>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            short: "0".to_string(),
            long: String::new(),
            phase: Phase::default(),
            operands: Vec::new(),
            operators: Vec::new(),
            error: None,
        }
    }
}

impl Calculator {
    /// Create a calculator showing `"0"` and an empty equation.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number or operator currently being edited.
    pub fn short_output(&self) -> &str {
        &self.short
    }

    /// The equation entered so far, without the token in [`short_output`].
    ///
    /// [`short_output`]: Self::short_output
    pub fn long_output(&self) -> &str {
        &self.long
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the short output shows an evaluation error.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Copy both displays for rendering.
    pub fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot::from_calculator(self)
    }

    /// Feed every character of `keys` in order, as a button labelled
    /// `keys` would.
    pub fn input_str(&mut self, keys: &str) {
        for c in keys.chars() {
            self.input(c);
        }
    }

    /// Process one key.
    ///
    /// Accepts `0-9` and `.` to edit the current number, `+ - * /` for the
    /// operators, `=` to solve the equation, `C` to clear and `N` to negate
    /// the current number. Anything else is ignored.
    pub fn input(&mut self, c: char) {
        let Some(key) = Key::from_char(c) else {
            trace!(?c, "ignoring key");
            return;
        };
        trace!(key = %c, phase = ?self.phase, "input");

        if self.error.is_some() {
            self.reset();
        }

        match key {
            Key::Clear => {
                self.reset();
                return;
            }
            Key::Operator(Operator::Add | Operator::Multiply | Operator::Divide)
                if self.is_pristine() =>
            {
                return;
            }
            Key::Negate => {
                self.negate();
                return;
            }
            // A leading minus starts a negative number.
            Key::Operator(Operator::Subtract) if self.short == "0" => {
                self.short = "-".to_string();
                return;
            }
            _ => {}
        }

        if self.is_complete() {
            if key.is_numeric() {
                self.long.clear();
            } else {
                // Continue from the previous result.
                self.long = self.short.clone();
                self.operands = vec![self.short.clone()];
                self.operators.clear();
            }
            self.short = key.to_char().to_string();
        } else {
            match (self.phase, key.is_numeric()) {
                (Phase::AwaitingOperator, true) => self.extend_number(key),
                (Phase::AwaitingOperand, true) => {
                    self.finish_operator();
                    self.short = key.to_char().to_string();
                }
                (Phase::AwaitingOperator, false) => {
                    self.finish_operand();
                    self.short = key.to_char().to_string();
                }
                // Last operator wins.
                (Phase::AwaitingOperand, false) => self.short = key.to_char().to_string(),
            }
        }

        if self.short == "." {
            self.short = "0.".to_string();
        }

        if key == Key::Equals {
            self.evaluate();
        }

        self.phase = if key.is_operator() {
            Phase::AwaitingOperand
        } else {
            Phase::AwaitingOperator
        };
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn is_pristine(&self) -> bool {
        self.short == "0" && self.long.is_empty()
    }

    fn is_complete(&self) -> bool {
        self.long.ends_with('=')
    }

    fn negate(&mut self) {
        if self.is_complete() {
            // Keep the result, forget the equation that produced it.
            self.long.clear();
            self.phase = Phase::AwaitingOperator;
        }
        if self.short == "0" || self.phase == Phase::AwaitingOperand {
            return;
        }

        self.short = match self.short.strip_prefix('-') {
            Some("") => "0".to_string(),
            Some(rest) => rest.to_string(),
            None => format!("-{}", self.short),
        };
    }

    /// Move the number in the short output onto the equation.
    fn finish_operand(&mut self) {
        if let Some(stripped) = self.short.strip_suffix('.') {
            self.short = stripped.to_string();
        }
        self.long.push_str(&self.short);
        self.operands.push(std::mem::take(&mut self.short));
    }

    /// Move the pending operator in the short output onto the equation.
    fn finish_operator(&mut self) {
        match self.short.chars().next().and_then(Operator::from_char) {
            Some(op) => self.operators.push(op),
            None => warn!(short = %self.short, "pending token is not an operator"),
        }
        self.long.push_str(&self.short);
    }

    fn extend_number(&mut self, key: Key) {
        if self.short == "0" {
            self.short.clear();
        }
        if !(key == Key::Point && self.short.contains('.')) {
            self.short.push(key.to_char());
        }
    }

    fn evaluate(&mut self) {
        self.long.push('=');
        match reduce(&mut self.operands, &mut self.operators) {
            Ok(result) => {
                debug!(equation = %self.long, %result, "solved");
                self.short = result;
                self.operands.clear();
                self.operators.clear();
            }
            Err(err) => {
                debug!(equation = %self.long, %err, "evaluation failed");
                self.short = err.to_string();
                self.error = Some(err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Feed `keys` and check both displays afterwards.
    fn step(calc: &mut Calculator, keys: &str, long: &str, short: &str) {
        calc.input_str(keys);
        assert_eq!(
            (calc.long_output(), calc.short_output()),
            (long, short),
            "after {keys:?}"
        );
    }

    fn run(keys: &str, long: &str, short: &str) {
        step(&mut Calculator::new(), keys, long, short);
    }

    #[test]
    fn test_initial_state() {
        let calc = Calculator::new();
        assert_eq!(calc.short_output(), "0");
        assert_eq!(calc.long_output(), "");
        assert_eq!(calc.phase(), Phase::AwaitingOperator);
        assert!(!calc.is_error());
    }

    #[test]
    fn test_two_numbers_can_be_added() {
        let mut calc = Calculator::new();
        step(&mut calc, "1", "", "1");
        step(&mut calc, "+", "1", "+");
        step(&mut calc, "2", "1+", "2");
        step(&mut calc, "=", "1+2=", "3");
    }

    #[test]
    fn test_mul_and_div_come_before_plus_and_minus() {
        run("1+2*3=", "1+2*3=", "7");
        run("8-6/2=", "8-6/2=", "5");
    }

    #[test]
    fn test_equals_after_only_a_number() {
        run("=", "0=", "0");
        run("1=", "1=", "1");
    }

    #[test]
    fn test_last_entered_operator_is_used() {
        run("5+*-7=", "5-7=", "-2");
    }

    #[test]
    fn test_first_number_can_be_negative() {
        run("-22=", "-22=", "-22");
    }

    #[test]
    fn test_leading_operators_are_ignored_except_minus() {
        let mut calc = Calculator::new();
        step(&mut calc, "*", "", "0");
        step(&mut calc, "/", "", "0");
        step(&mut calc, "+", "", "0");
        step(&mut calc, "3=", "3=", "3");
        run("-", "", "-");
    }

    #[test]
    fn test_division_by_zero_is_error() {
        let mut calc = Calculator::new();
        step(&mut calc, "1/0=", "1/0=", "Error: div by 0");
        assert!(calc.is_error());
    }

    #[test]
    fn test_after_div_error_new_calculation_starts() {
        run("1/0=5+6=", "5+6=", "11");
        run("1/0=-5=", "-5=", "-5");
        run("1/0=C", "", "0");
        run("1/0=N", "", "0");
    }

    #[test]
    fn test_decimals_can_be_used() {
        let mut calc = Calculator::new();
        step(&mut calc, "1.", "", "1.");
        step(&mut calc, "5", "", "1.5");
        // second decimal point is ignored
        step(&mut calc, ".6", "", "1.56");
        step(&mut calc, "*2.0=", "1.56*2.0=", "3.12");
    }

    #[test]
    fn test_numbers_starting_with_decimal_get_leading_zero() {
        let mut calc = Calculator::new();
        step(&mut calc, ".", "", "0.");
        step(&mut calc, "5", "", "0.5");
        step(&mut calc, "=", "0.5=", "0.5");
        step(&mut calc, "+.1-.2=", "0.5+0.1-0.2=", "0.4");
    }

    #[test]
    fn test_trailing_decimal_point_is_dropped() {
        run("1.+2=", "1+2=", "3");
    }

    #[test]
    fn test_leading_zero_is_replaced() {
        run("07", "", "7");
        run("0.07", "", "0.07");
        run("100", "", "100");
    }

    #[test]
    fn test_trailing_operator_is_ignored() {
        run("1+2+=", "1+2=", "3");
    }

    #[test]
    fn test_number_after_equals_starts_over() {
        let mut calc = Calculator::new();
        step(&mut calc, "1+2=", "1+2=", "3");
        step(&mut calc, "50", "", "50");
    }

    #[test]
    fn test_operator_after_equals_continues_with_result() {
        let mut calc = Calculator::new();
        step(&mut calc, "2*3=", "2*3=", "6");
        step(&mut calc, "*", "6", "*");
        step(&mut calc, "3=", "6*3=", "18");
        step(&mut calc, "==", "18=", "18");
    }

    #[test]
    fn test_all_four_operators() {
        run("3+4=", "3+4=", "7");
        run("3-4=", "3-4=", "-1");
        run("3*4=", "3*4=", "12");
        run("3/4=", "3/4=", "0.75");
    }

    #[test]
    fn test_subtraction_works_left_to_right() {
        run("1-1-1=", "1-1-1=", "-1");
    }

    #[test]
    fn test_minus_after_zero_operand_starts_negative_number() {
        run("5+0-3=", "5+-3=", "2");
    }

    #[test]
    fn test_clearing_resets_calculator() {
        run("1+C", "", "0");
        run("1+2=C", "", "0");
    }

    #[test]
    fn test_negate_toggles_sign() {
        let mut calc = Calculator::new();
        step(&mut calc, "1", "", "1");
        step(&mut calc, "N", "", "-1");
        step(&mut calc, "N", "", "1");
    }

    #[test]
    fn test_negate_ignored_on_zero_and_operator() {
        run("N", "", "0");
        run("1+N", "1", "+");
    }

    #[test]
    fn test_negate_lone_minus_returns_to_zero() {
        run("-N", "", "0");
    }

    #[test]
    fn test_negate_after_equals_keeps_result() {
        let mut calc = Calculator::new();
        step(&mut calc, "1+2=N", "", "-3");
        assert_eq!(calc.phase(), Phase::AwaitingOperator);
        step(&mut calc, "+4=", "-3+4=", "1");
    }

    #[test]
    fn test_unknown_characters_are_ignored() {
        let mut calc = Calculator::new();
        calc.input_str("1+");
        let before = calc.clone();
        calc.input_str("abc ()%^,\n");
        assert_eq!(calc, before);
    }

    #[test]
    fn test_phase_transitions() {
        let mut calc = Calculator::new();
        calc.input('1');
        assert_eq!(calc.phase(), Phase::AwaitingOperator);
        calc.input('+');
        assert_eq!(calc.phase(), Phase::AwaitingOperand);
        calc.input('2');
        assert_eq!(calc.phase(), Phase::AwaitingOperator);
        calc.input('=');
        assert_eq!(calc.phase(), Phase::AwaitingOperand);
        calc.input('C');
        assert_eq!(calc.phase(), Phase::AwaitingOperator);
    }
}

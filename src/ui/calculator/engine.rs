// SPDX-License-Identifier: MPL-2.0
//! Calculator arithmetic state machine.
//!
//! The engine tracks the visible display register, the stashed operand, and
//! the pending operator. Operators chain: pressing an operator with a fold
//! already pending applies it first and shows the intermediate result.
//! Division by zero is reported to the caller, which keeps the stashed
//! operand as the fold result and surfaces the problem as a toast.

use std::fmt;

/// The four binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Returns the display symbol for this operator.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "−",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// Applies the operator to a pair of operands.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        match self {
            Operator::Add => Ok(lhs + rhs),
            Operator::Subtract => Ok(lhs - rhs),
            Operator::Multiply => Ok(lhs * rhs),
            Operator::Divide => {
                if rhs == 0.0 {
                    Err(CalcError::DivisionByZero)
                } else {
                    Ok(lhs / rhs)
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Arithmetic failures surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    DivisionByZero,
}

impl CalcError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CalcError::DivisionByZero => "notification-division-by-zero",
        }
    }
}

/// State of one calculator session.
#[derive(Debug, Clone)]
pub struct Engine {
    display: String,
    previous: Option<f64>,
    operator: Option<Operator>,
    reset_display: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            previous: None,
            operator: None,
            reset_display: false,
        }
    }

    /// The current display register.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The stashed operand and pending operator, if a fold is armed.
    #[must_use]
    pub fn pending(&self) -> Option<(f64, Operator)> {
        match (self.previous, self.operator) {
            (Some(previous), Some(operator)) => Some((previous, operator)),
            _ => None,
        }
    }

    /// Enters one digit. Replaces the display after a reset or while it
    /// shows a bare zero, appends otherwise.
    pub fn input_digit(&mut self, digit: u8) {
        let digit = digit.min(9);
        if self.display == "0" || self.reset_display {
            self.display = digit.to_string();
            self.reset_display = false;
        } else {
            self.display.push_str(&digit.to_string());
        }
    }

    /// Enters the decimal point, at most once per number.
    pub fn input_decimal(&mut self) {
        if self.reset_display {
            self.display = "0.".to_string();
            self.reset_display = false;
            return;
        }

        if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Arms `op`, folding any already pending pair first.
    ///
    /// On division by zero the stashed operand is kept as the fold result
    /// (mirroring what the display shows) and the error is returned for
    /// reporting.
    pub fn apply_operator(&mut self, op: Operator) -> Result<(), CalcError> {
        let current = self.current_value();
        let mut outcome = Ok(());

        match (self.previous, self.operator) {
            (None, _) => self.previous = Some(current),
            (Some(previous), Some(pending)) => {
                let result = match pending.apply(previous, current) {
                    Ok(value) => value,
                    Err(err) => {
                        outcome = Err(err);
                        previous
                    }
                };
                self.previous = Some(result);
                self.display = format_value(result);
            }
            (Some(_), None) => {}
        }

        self.operator = Some(op);
        self.reset_display = true;
        outcome
    }

    /// Folds the pending pair and clears the operator state. Does nothing
    /// without a pending fold.
    pub fn equals(&mut self) -> Result<(), CalcError> {
        let (Some(previous), Some(pending)) = (self.previous, self.operator) else {
            return Ok(());
        };

        let current = self.current_value();
        let mut outcome = Ok(());
        let result = match pending.apply(previous, current) {
            Ok(value) => value,
            Err(err) => {
                outcome = Err(err);
                previous
            }
        };

        self.display = format_value(result);
        self.previous = None;
        self.operator = None;
        self.reset_display = true;
        outcome
    }

    /// Resets the whole session.
    pub fn clear(&mut self) {
        self.display = "0".to_string();
        self.previous = None;
        self.operator = None;
        self.reset_display = false;
    }

    /// Deletes the last entered character, collapsing to zero when nothing
    /// meaningful remains.
    pub fn backspace(&mut self) {
        if self.display.len() == 1 || (self.display.len() == 2 && self.display.starts_with('-')) {
            self.display = "0".to_string();
        } else {
            self.display.pop();
        }
    }

    fn current_value(&self) -> f64 {
        self.display.parse().unwrap_or(0.0)
    }
}

/// Formats a result the way the display expects: integers without a
/// fractional part, everything else with the shortest round-trip form.
pub(crate) fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_digits(engine: &mut Engine, digits: &[u8]) {
        for &digit in digits {
            engine.input_digit(digit);
        }
    }

    #[test]
    fn starts_at_zero() {
        let engine = Engine::new();
        assert_eq!(engine.display(), "0");
        assert!(engine.pending().is_none());
    }

    #[test]
    fn digits_replace_leading_zero_then_append() {
        let mut engine = Engine::new();
        press_digits(&mut engine, &[0, 1, 2]);
        assert_eq!(engine.display(), "12");
    }

    #[test]
    fn decimal_point_is_entered_at_most_once() {
        let mut engine = Engine::new();
        engine.input_digit(3);
        engine.input_decimal();
        engine.input_digit(1);
        engine.input_decimal();
        engine.input_digit(4);
        assert_eq!(engine.display(), "3.14");
    }

    #[test]
    fn decimal_after_operator_starts_fresh_number() {
        let mut engine = Engine::new();
        engine.input_digit(7);
        engine.apply_operator(Operator::Add).expect("no error");
        engine.input_decimal();
        assert_eq!(engine.display(), "0.");
    }

    #[test]
    fn simple_addition() {
        let mut engine = Engine::new();
        press_digits(&mut engine, &[1, 2]);
        engine.apply_operator(Operator::Add).expect("no error");
        press_digits(&mut engine, &[3, 0]);
        engine.equals().expect("no error");
        assert_eq!(engine.display(), "42");
        assert!(engine.pending().is_none());
    }

    #[test]
    fn operators_chain_through_intermediate_results() {
        let mut engine = Engine::new();
        engine.input_digit(2);
        engine.apply_operator(Operator::Add).expect("no error");
        engine.input_digit(3);
        // Pressing another operator folds 2 + 3 first.
        engine.apply_operator(Operator::Multiply).expect("no error");
        assert_eq!(engine.display(), "5");
        assert_eq!(engine.pending().map(|(value, _)| value), Some(5.0));
        engine.input_digit(4);
        engine.equals().expect("no error");
        assert_eq!(engine.display(), "20");
    }

    #[test]
    fn division_produces_fractional_results() {
        let mut engine = Engine::new();
        engine.input_digit(7);
        engine.apply_operator(Operator::Divide).expect("no error");
        engine.input_digit(2);
        engine.equals().expect("no error");
        assert_eq!(engine.display(), "3.5");
    }

    #[test]
    fn division_by_zero_reports_and_keeps_previous() {
        let mut engine = Engine::new();
        engine.input_digit(8);
        engine.apply_operator(Operator::Divide).expect("no error");
        engine.input_digit(0);

        assert_eq!(engine.equals(), Err(CalcError::DivisionByZero));
        // The stashed operand is shown and the fold state is cleared.
        assert_eq!(engine.display(), "8");
        assert!(engine.pending().is_none());
    }

    #[test]
    fn division_by_zero_while_chaining_keeps_previous_armed() {
        let mut engine = Engine::new();
        engine.input_digit(9);
        engine.apply_operator(Operator::Divide).expect("no error");
        engine.input_digit(0);

        assert_eq!(
            engine.apply_operator(Operator::Add),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(engine.display(), "9");
        assert_eq!(engine.pending(), Some((9.0, Operator::Add)));
    }

    #[test]
    fn equals_without_pending_fold_is_a_no_op() {
        let mut engine = Engine::new();
        press_digits(&mut engine, &[4, 2]);
        engine.equals().expect("no error");
        assert_eq!(engine.display(), "42");
    }

    #[test]
    fn clear_resets_everything() {
        let mut engine = Engine::new();
        engine.input_digit(5);
        engine.apply_operator(Operator::Subtract).expect("no error");
        engine.input_digit(1);
        engine.clear();

        assert_eq!(engine.display(), "0");
        assert!(engine.pending().is_none());
    }

    #[test]
    fn backspace_trims_and_collapses_to_zero() {
        let mut engine = Engine::new();
        press_digits(&mut engine, &[1, 2, 3]);
        engine.backspace();
        assert_eq!(engine.display(), "12");
        engine.backspace();
        engine.backspace();
        assert_eq!(engine.display(), "0");
        engine.backspace();
        assert_eq!(engine.display(), "0");
    }

    #[test]
    fn backspace_collapses_negative_single_digit() {
        let mut engine = Engine::new();
        engine.input_digit(5);
        engine.apply_operator(Operator::Subtract).expect("no error");
        engine.input_digit(9);
        engine.equals().expect("no error");
        assert_eq!(engine.display(), "-4");
        engine.backspace();
        assert_eq!(engine.display(), "0");
    }

    #[test]
    fn digit_entry_after_equals_starts_fresh() {
        let mut engine = Engine::new();
        engine.input_digit(2);
        engine.apply_operator(Operator::Add).expect("no error");
        engine.input_digit(2);
        engine.equals().expect("no error");
        engine.input_digit(7);
        assert_eq!(engine.display(), "7");
    }

    #[test]
    fn format_value_drops_trailing_fraction_for_integers() {
        assert_eq!(format_value(4.0), "4");
        assert_eq!(format_value(-13.0), "-13");
        assert_eq!(format_value(0.5), "0.5");
    }

    #[test]
    fn operator_press_with_pending_fold_reuses_displayed_operand() {
        let mut engine = Engine::new();
        engine.input_digit(6);
        engine.apply_operator(Operator::Add).expect("no error");
        engine.apply_operator(Operator::Multiply).expect("no error");
        engine.input_digit(2);
        engine.equals().expect("no error");
        // 6 + 6 happened on the second operator press, then 12 * 2.
        assert_eq!(engine.display(), "24");
    }
}

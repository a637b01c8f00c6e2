//! The dispatch reducer.

use crate::config::{EngineConfig, LeadingDecimal};
use crate::core::{Action, CalculatorState, Digit, Operation};
use crate::engine::error::{CalculationError, Operand};
use crate::engine::format::{format_result, parse_operand};

/// Calculator engine bound to one configuration.
///
/// `dispatch` is pure: it takes a state and an action and returns the next
/// state. Actions that do not apply return the state unchanged.
///
/// # Example
///
/// ```rust
/// use tally::core::{Action, CalculatorState, Digit, Operation};
/// use tally::engine::Calculator;
///
/// let calculator = Calculator::default();
/// let digit = |n| Action::Number(Digit::new(n).unwrap());
///
/// let state = [digit(1), digit(2), Action::Operation(Operation::Add), digit(8), Action::Calculate]
///     .into_iter()
///     .fold(CalculatorState::new(), |state, action| calculator.dispatch(state, action));
///
/// assert_eq!(state.display(), "20");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    config: EngineConfig,
}

impl Calculator {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Apply one action, returning the next state.
    pub fn dispatch(&self, state: CalculatorState, action: Action) -> CalculatorState {
        match action {
            Action::Number(digit) => self.enter_digit(state, digit),
            Action::Decimal => self.enter_decimal(state),
            Action::Operation(op) => self.choose_operation(state, op),
            Action::Delete => self.delete(state),
            Action::Clear => CalculatorState::new(),
            Action::Calculate => self.calculate(state),
        }
    }

    /// Compute the pending operation without touching the state.
    pub fn evaluate(&self, state: &CalculatorState) -> Result<f64, CalculationError> {
        let op = state.operation.ok_or(CalculationError::MissingOperation)?;
        let a = operand_value(&state.number1, Operand::Left)?;
        let b = operand_value(&state.number2, Operand::Right)?;
        Ok(op.apply(a, b))
    }

    /// True while `number1` holds the error marker from a failed result.
    pub fn shows_error(&self, state: &CalculatorState) -> bool {
        state.operation.is_none() && state.number1 == self.config.error_label
    }

    fn enter_digit(&self, state: CalculatorState, digit: Digit) -> CalculatorState {
        let mut state = self.recover_from_error(state);
        let max = self.config.max_length;
        let buffer = active_buffer(&mut state);
        if buffer.len() < max {
            buffer.push(digit.as_char());
        }
        state
    }

    fn enter_decimal(&self, state: CalculatorState) -> CalculatorState {
        let mut state = self.recover_from_error(state);
        let max = self.config.max_length;
        let leading = self.config.leading_decimal;
        let buffer = active_buffer(&mut state);
        if buffer.contains('.') || buffer.len() >= max {
            return state;
        }
        if buffer.is_empty() && leading == LeadingDecimal::ZeroPrefix && max >= 2 {
            buffer.push_str("0.");
        } else {
            buffer.push('.');
        }
        state
    }

    fn choose_operation(&self, mut state: CalculatorState, op: Operation) -> CalculatorState {
        if state.number1.is_empty() || self.shows_error(&state) {
            return state;
        }
        state.operation = Some(op);
        state
    }

    fn delete(&self, mut state: CalculatorState) -> CalculatorState {
        if self.shows_error(&state) {
            return CalculatorState::new();
        }
        if !state.number2.is_empty() {
            state.number2.pop();
        } else if state.operation.is_some() {
            state.operation = None;
        } else {
            state.number1.pop();
        }
        state
    }

    fn calculate(&self, state: CalculatorState) -> CalculatorState {
        match self.evaluate(&state) {
            Ok(result) => CalculatorState {
                number1: format_result(result, &self.config),
                number2: String::new(),
                operation: None,
            },
            Err(error) => {
                tracing::debug!(%error, display = %state.display(), "calculate ignored");
                state
            }
        }
    }

    fn recover_from_error(&self, state: CalculatorState) -> CalculatorState {
        if self.shows_error(&state) {
            CalculatorState::new()
        } else {
            state
        }
    }
}

fn active_buffer(state: &mut CalculatorState) -> &mut String {
    if state.operation.is_some() {
        &mut state.number2
    } else {
        &mut state.number1
    }
}

fn operand_value(buffer: &str, operand: Operand) -> Result<f64, CalculationError> {
    if buffer.is_empty() {
        return Err(CalculationError::MissingOperand(operand));
    }
    parse_operand(buffer).ok_or_else(|| CalculationError::InvalidOperand {
        operand,
        value: buffer.to_string(),
    })
}

//! Calculator state: two operand buffers and a pending operation.
//!
//! State values are plain data. They are only ever replaced through the
//! engine's dispatch, never edited field by field by a host.

use super::operation::Operation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The state owned by one calculator screen.
///
/// `number1` holds the left operand (or the last result), `number2` the
/// right operand. Both are empty strings until input arrives.
///
/// # Example
///
/// ```rust
/// use tally::core::{CalculatorState, Operation, Phase};
///
/// let state = CalculatorState {
///     number1: "12".to_string(),
///     number2: "8".to_string(),
///     operation: Some(Operation::Add),
/// };
///
/// assert_eq!(state.display(), "12+8");
/// assert_eq!(state.phase(), Phase::SecondOperand);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct CalculatorState {
    pub number1: String,
    pub number2: String,
    pub operation: Option<Operation>,
}

impl CalculatorState {
    /// The initial state: both buffers empty, no pending operation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Single display line: `number1`, the operator symbol, then `number2`.
    pub fn display(&self) -> String {
        let symbol = self.operation.as_ref().map_or("", |op| op.symbol());
        format!("{}{}{}", self.number1, symbol, self.number2)
    }

    /// True for the canonical empty state.
    pub fn is_empty(&self) -> bool {
        self.number1.is_empty() && self.number2.is_empty() && self.operation.is_none()
    }

    /// The buffer that digit and decimal input currently targets.
    pub fn active_operand(&self) -> &str {
        if self.operation.is_some() {
            &self.number2
        } else {
            &self.number1
        }
    }

    /// Where the state sits in the input cycle.
    pub fn phase(&self) -> Phase {
        match (&self.operation, self.number2.is_empty()) {
            (Some(_), false) => Phase::SecondOperand,
            (Some(_), true) => Phase::OperatorPending,
            (None, _) if self.number1.is_empty() => Phase::Empty,
            (None, _) => Phase::FirstOperand,
        }
    }
}

impl fmt::Display for CalculatorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Coarse position of a [`CalculatorState`] in the input cycle.
///
/// Derived from the state, never stored. Used for logging and the
/// dispatch log.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing entered yet.
    Empty,
    /// Editing the left operand (or holding a result).
    FirstOperand,
    /// Operator chosen, right operand not started.
    OperatorPending,
    /// Editing the right operand.
    SecondOperand,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::FirstOperand => "FirstOperand",
            Self::OperatorPending => "OperatorPending",
            Self::SecondOperand => "SecondOperand",
        }
    }

    /// Phases in which `Calculate` can succeed.
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::SecondOperand)
    }
}

//! Calculation error types.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which side of the pending operation an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operand {
    Left,
    Right,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// Reasons a `Calculate` cannot produce a result.
///
/// Dispatch treats all of these as a no-op; [`evaluate`] surfaces them.
///
/// [`evaluate`]: crate::engine::evaluate
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    #[error("No pending operation")]
    MissingOperation,

    #[error("The {0} operand is empty")]
    MissingOperand(Operand),

    #[error("The {operand} operand '{value}' is not a number")]
    InvalidOperand { operand: Operand, value: String },
}

//! Binary operations the calculator can hold as pending.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A binary arithmetic operation.
///
/// Each variant carries the symbol shown on the display and the function
/// it applies to the two operands.
///
/// # Example
///
/// ```rust
/// use tally::core::Operation;
///
/// assert_eq!(Operation::Multiply.symbol(), "x");
/// assert_eq!(Operation::Subtract.apply(9.5, 2.0), 7.5);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Every operation, in keypad order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Symbol rendered between the two operands.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "x",
            Self::Divide => "/",
        }
    }

    /// Apply the operation to `a` and `b`.
    ///
    /// Division by zero is not guarded here; it yields an infinite or NaN
    /// value and the engine decides how to display it.
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

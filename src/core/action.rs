//! Discrete user input events.
//!
//! Every button press on the keypad becomes exactly one [`Action`]. The
//! engine reduces actions into state; nothing else mutates it.

use super::operation::Operation;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Raised when a value outside `0..=9` is turned into a [`Digit`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid digit '{0}', expected 0-9")]
pub struct InvalidDigit(pub String);

/// A single decimal digit, `0` through `9`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Create a digit, returning `None` when `value > 9`.
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// The ASCII character for this digit.
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = InvalidDigit;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| InvalidDigit(value.to_string()))
    }
}

impl TryFrom<char> for Digit {
    type Error = InvalidDigit;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .and_then(|d| Self::new(d as u8))
            .ok_or_else(|| InvalidDigit(c.to_string()))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One discrete user interaction with the calculator.
///
/// # Example
///
/// ```rust
/// use tally::core::{Action, Digit, Operation};
///
/// let presses: Vec<Action> = "12+8=".chars().filter_map(Action::from_key).collect();
/// assert_eq!(presses[2], Action::Operation(Operation::Add));
/// assert_eq!(presses[0], Action::Number(Digit::new(1).unwrap()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Action {
    Number(Digit),
    Decimal,
    Operation(Operation),
    Delete,
    Clear,
    Calculate,
}

impl Action {
    /// Map a key or button character to an action.
    ///
    /// Accepts digits, `.` and `,` for the decimal point, `+ - x X * /`,
    /// `=` or Enter for calculate, `c`/`C`/Escape for clear, and
    /// Backspace/Delete/`d` for delete.
    pub fn from_key(key: char) -> Option<Self> {
        if let Ok(digit) = Digit::try_from(key) {
            return Some(Self::Number(digit));
        }
        let action = match key {
            '.' | ',' => Self::Decimal,
            '+' => Self::Operation(Operation::Add),
            '-' => Self::Operation(Operation::Subtract),
            'x' | 'X' | '*' => Self::Operation(Operation::Multiply),
            '/' => Self::Operation(Operation::Divide),
            '=' | '\n' | '\r' => Self::Calculate,
            'c' | 'C' | '\u{1b}' => Self::Clear,
            'd' | '\u{8}' | '\u{7f}' => Self::Delete,
            _ => return None,
        };
        Some(action)
    }

    /// Caption for the keypad button that produces this action.
    pub fn label(&self) -> String {
        match self {
            Self::Number(digit) => digit.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operation(op) => op.symbol().to_string(),
            Self::Delete => "Del".to_string(),
            Self::Clear => "AC".to_string(),
            Self::Calculate => "=".to_string(),
        }
    }

    /// Short, stable name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Number(_) => "Number",
            Self::Decimal => "Decimal",
            Self::Operation(_) => "Operation",
            Self::Delete => "Delete",
            Self::Clear => "Clear",
            Self::Calculate => "Calculate",
        }
    }
}

//! Core calculator types.
//!
//! This module contains the plain data the engine works on:
//! - `CalculatorState` and its derived `Phase`
//! - `Operation` and `Action`, the closed sets of operators and inputs
//! - `DispatchLog`, the in-memory record of applied actions
//!
//! Nothing in here performs I/O or holds shared mutable state.

mod action;
mod history;
mod operation;
mod state;

pub use action::{Action, Digit, InvalidDigit};
pub use history::{DispatchLog, DispatchRecord};
pub use operation::Operation;
pub use state::{CalculatorState, Phase};

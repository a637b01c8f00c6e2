//! Calculator engine: the dispatch reducer and its owning session.
//!
//! The reducer is the pure core. `Session` is the thin shell that owns one
//! state, records what changed, and emits tracing events.
//!
//! # Key Concepts
//!
//! - **Calculator**: a configured reducer, `dispatch(state, action) -> state`
//! - **Session**: single owner of a state, the host's only entry point
//! - **Evaluation**: `Calculate` succeeds or leaves the state untouched;
//!   [`evaluate`] reports why it did not

mod calculator;
mod error;
pub(crate) mod format;
mod session;

pub use calculator::Calculator;
pub use error::{CalculationError, Operand};
pub use format::format_result;
pub use session::Session;

use crate::core::{Action, CalculatorState};

/// Apply one action with the default configuration.
///
/// # Example
///
/// ```rust
/// use tally::core::{Action, CalculatorState, Operation};
/// use tally::engine::dispatch;
///
/// let state = CalculatorState {
///     number1: "2".to_string(),
///     number2: "3".to_string(),
///     operation: Some(Operation::Add),
/// };
///
/// let state = dispatch(state, Action::Calculate);
/// assert_eq!(state.number1, "5");
/// assert!(state.operation.is_none());
/// ```
pub fn dispatch(state: CalculatorState, action: Action) -> CalculatorState {
    Calculator::default().dispatch(state, action)
}

/// Compute the pending operation with the default configuration.
pub fn evaluate(state: &CalculatorState) -> Result<f64, CalculationError> {
    Calculator::default().evaluate(state)
}

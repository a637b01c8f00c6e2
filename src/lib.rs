//! Tally: a pure functional calculator engine
//!
//! Tally models a pocket calculator as a small state machine. Button
//! presses become [`Action`] values; a single reducer turns the current
//! [`CalculatorState`] and one action into the next state. The reducer is
//! pure, and the only owner of a live state is a [`Session`].
//!
//! # Core Concepts
//!
//! - **State**: two operand buffers and an optional pending [`Operation`]
//! - **Actions**: digits, decimal point, operators, delete, clear, calculate
//! - **Dispatch**: `dispatch(state, action) -> state`, never fails
//! - **Session**: owns a state, logs dispatches, emits tracing events
//!
//! # Example
//!
//! ```rust
//! use tally::{Action, Digit, Operation, Session};
//!
//! let mut session = Session::default();
//! session.dispatch(Action::Number(Digit::new(1).unwrap()));
//! session.dispatch(Action::Number(Digit::new(2).unwrap()));
//! session.dispatch(Action::Operation(Operation::Add));
//! session.dispatch(Action::Number(Digit::new(8).unwrap()));
//! assert_eq!(session.display(), "12+8");
//!
//! session.dispatch(Action::Calculate);
//! assert_eq!(session.display(), "20");
//! ```

pub mod config;
pub mod converter;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::config::{EngineConfig, LeadingDecimal, NonFinitePolicy};
pub use crate::core::{Action, CalculatorState, Digit, Operation, Phase};
pub use crate::engine::{dispatch, Calculator, Session};

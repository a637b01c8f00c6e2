//! Single-owner handle around one calculator state.

use crate::config::EngineConfig;
use crate::core::{Action, CalculatorState, DispatchLog, DispatchRecord, Phase};
use crate::engine::calculator::Calculator;
use chrono::Utc;

/// Owns the state of one calculator screen.
///
/// The host creates a session when the screen is created, forwards every
/// button press to [`Session::dispatch`], and renders [`Session::display`].
/// Dispatch takes `&mut self`, so calls on one session are serialized;
/// hosts sharing a session across threads wrap it in a mutex.
///
/// # Example
///
/// ```rust
/// use tally::core::Action;
/// use tally::engine::Session;
///
/// let mut session = Session::default();
/// for key in "9.5-2=".chars() {
///     if let Some(action) = Action::from_key(key) {
///         session.dispatch(action);
///     }
/// }
///
/// assert_eq!(session.display(), "7.5");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    calculator: Calculator,
    state: CalculatorState,
    history: DispatchLog,
}

impl Session {
    /// Create a session in the initial state
    pub fn new(config: EngineConfig) -> Self {
        let history = DispatchLog::with_limit(config.history_limit);
        Self {
            calculator: Calculator::new(config),
            state: CalculatorState::new(),
            history,
        }
    }

    /// Apply one action and return the new state.
    /// Actions that change nothing are not recorded.
    pub fn dispatch(&mut self, action: Action) -> &CalculatorState {
        let from = self.state.phase();
        let span = tracing::debug_span!("dispatch", action = action.name(), from = from.name());
        let _guard = span.enter();

        let next = self.calculator.dispatch(self.state.clone(), action);
        if next == self.state {
            tracing::trace!(display = %self.state.display(), "action ignored");
            return &self.state;
        }

        let to = next.phase();
        let shown = next.display();
        tracing::debug!(to = to.name(), display = %shown, "state updated");

        self.history = self.history.record(DispatchRecord {
            action,
            from,
            to,
            display: shown,
            timestamp: Utc::now(),
        });
        self.state = next;
        &self.state
    }

    /// Apply several actions in order.
    pub fn dispatch_all<I>(&mut self, actions: I) -> &CalculatorState
    where
        I: IntoIterator<Item = Action>,
    {
        for action in actions {
            self.dispatch(action);
        }
        &self.state
    }

    /// Current state (pure)
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Current display line (pure)
    pub fn display(&self) -> String {
        self.state.display()
    }

    /// Current phase (pure)
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// True while the display shows the error label (pure)
    pub fn shows_error(&self) -> bool {
        self.calculator.shows_error(&self.state)
    }

    /// Dispatch log (pure)
    pub fn history(&self) -> &DispatchLog {
        &self.history
    }

    pub fn config(&self) -> &EngineConfig {
        self.calculator.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigBuilder;
    use crate::core::{Digit, Operation};

    fn digit(n: u8) -> Action {
        Action::Number(Digit::new(n).unwrap())
    }

    #[test]
    fn new_session_starts_empty() {
        let session = Session::default();
        assert!(session.state().is_empty());
        assert_eq!(session.phase(), Phase::Empty);
        assert!(session.history().is_empty());
    }

    #[test]
    fn dispatch_updates_state_and_history() {
        let mut session = Session::default();
        session.dispatch(digit(1));
        session.dispatch(digit(2));
        session.dispatch(Action::Operation(Operation::Add));

        assert_eq!(session.display(), "12+");
        assert_eq!(session.history().len(), 3);
        assert_eq!(
            session.history().get_path(),
            vec![
                Phase::Empty,
                Phase::FirstOperand,
                Phase::FirstOperand,
                Phase::OperatorPending
            ]
        );
    }

    #[test]
    fn ignored_actions_are_not_recorded() {
        let mut session = Session::default();
        session.dispatch(Action::Delete);
        session.dispatch(Action::Operation(Operation::Add));
        session.dispatch(Action::Calculate);

        assert!(session.history().is_empty());
    }

    #[test]
    fn calculate_is_recorded_with_result() {
        let mut session = Session::default();
        let state = session.dispatch_all([
            digit(1),
            digit(2),
            Action::Operation(Operation::Add),
            digit(8),
            Action::Calculate,
        ]);
        assert_eq!(state.display(), "20");

        let last = session.history().last().unwrap();
        assert_eq!(last.action, Action::Calculate);
        assert_eq!(last.from, Phase::SecondOperand);
        assert_eq!(last.to, Phase::FirstOperand);
        assert_eq!(last.display, "20");
    }

    #[test]
    fn history_limit_comes_from_config() {
        let config = ConfigBuilder::new().history_limit(2).build().unwrap();
        let mut session = Session::new(config);
        session.dispatch_all([digit(1), digit(2), digit(3)]);

        assert_eq!(session.history().len(), 2);
        assert_eq!(session.history().limit(), 2);
        assert_eq!(session.config().history_limit, 2);
    }

    #[test]
    fn division_by_zero_flags_error() {
        let mut session = Session::default();
        session.dispatch_all([
            digit(5),
            Action::Operation(Operation::Divide),
            digit(0),
            Action::Calculate,
        ]);

        assert!(session.shows_error());
        assert_eq!(session.display(), "Error");

        session.dispatch(Action::Clear);
        assert!(!session.shows_error());
        assert!(session.state().is_empty());
    }
}

//! In-memory log of dispatched actions.
//!
//! The log follows the same functional style as the rest of the core:
//! `record` returns a new log and leaves the original untouched. It lives
//! only as long as its session and is never written anywhere.

use super::action::Action;
use super::state::Phase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One dispatch that changed the calculator state.
///
/// # Example
///
/// ```rust
/// use tally::core::{Action, DispatchRecord, Phase};
/// use chrono::Utc;
///
/// let record = DispatchRecord {
///     action: Action::Clear,
///     from: Phase::FirstOperand,
///     to: Phase::Empty,
///     display: String::new(),
///     timestamp: Utc::now(),
/// };
/// assert!(record.changed_phase());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DispatchRecord {
    /// The action that was dispatched
    pub action: Action,
    /// Phase before the action
    pub from: Phase,
    /// Phase after the action
    pub to: Phase,
    /// Display line after the action
    pub display: String,
    /// When the action was applied
    pub timestamp: DateTime<Utc>,
}

impl DispatchRecord {
    pub fn changed_phase(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered, bounded log of [`DispatchRecord`]s.
///
/// Once `limit` records are held, recording a new one drops the oldest.
///
/// # Example
///
/// ```rust
/// use tally::core::{Action, DispatchLog, DispatchRecord, Phase};
/// use chrono::Utc;
///
/// let log = DispatchLog::with_limit(2);
/// let record = |display: &str| DispatchRecord {
///     action: Action::Decimal,
///     from: Phase::Empty,
///     to: Phase::FirstOperand,
///     display: display.to_string(),
///     timestamp: Utc::now(),
/// };
///
/// let log = log.record(record("a")).record(record("b")).record(record("c"));
///
/// assert_eq!(log.len(), 2);
/// assert_eq!(log.records()[0].display, "b");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DispatchLog {
    records: Vec<DispatchRecord>,
    limit: usize,
}

impl Default for DispatchLog {
    fn default() -> Self {
        Self::with_limit(Self::DEFAULT_LIMIT)
    }
}

impl DispatchLog {
    pub const DEFAULT_LIMIT: usize = 100;

    /// Create an empty log with the default limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty log holding at most `limit` records.
    ///
    /// A limit of zero keeps nothing.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            records: Vec::new(),
            limit,
        }
    }

    /// Record a dispatch, returning a new log.
    pub fn record(&self, record: DispatchRecord) -> Self {
        if self.limit == 0 {
            return self.clone();
        }
        let skip = (self.records.len() + 1).saturating_sub(self.limit);
        let mut records: Vec<DispatchRecord> = self.records.iter().skip(skip).cloned().collect();
        records.push(record);
        Self {
            records,
            limit: self.limit,
        }
    }

    /// Phases visited, starting with the `from` phase of the oldest record.
    pub fn get_path(&self) -> Vec<Phase> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(first.from);
        }
        path.extend(self.records.iter().map(|r| r.to));
        path
    }

    /// Time between the oldest and newest record.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn records(&self) -> &[DispatchRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&DispatchRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Digit, Operation};

    fn record(action: Action, from: Phase, to: Phase) -> DispatchRecord {
        DispatchRecord {
            action,
            from,
            to,
            display: String::new(),
            timestamp: Utc::now(),
        }
    }

    fn one() -> Action {
        Action::Number(Digit::new(1).unwrap())
    }

    #[test]
    fn new_log_is_empty() {
        let log = DispatchLog::new();
        assert!(log.is_empty());
        assert_eq!(log.limit(), DispatchLog::DEFAULT_LIMIT);
        assert!(log.get_path().is_empty());
        assert!(log.duration().is_none());
    }

    #[test]
    fn record_is_pure() {
        let log = DispatchLog::new();
        let new_log = log.record(record(one(), Phase::Empty, Phase::FirstOperand));

        assert_eq!(log.len(), 0);
        assert_eq!(new_log.len(), 1);
    }

    #[test]
    fn get_path_follows_phases() {
        let log = DispatchLog::new()
            .record(record(one(), Phase::Empty, Phase::FirstOperand))
            .record(record(
                Action::Operation(Operation::Add),
                Phase::FirstOperand,
                Phase::OperatorPending,
            ))
            .record(record(one(), Phase::OperatorPending, Phase::SecondOperand));

        assert_eq!(
            log.get_path(),
            vec![
                Phase::Empty,
                Phase::FirstOperand,
                Phase::OperatorPending,
                Phase::SecondOperand
            ]
        );
    }

    #[test]
    fn limit_drops_oldest_records() {
        let mut log = DispatchLog::with_limit(3);
        for _ in 0..5 {
            log = log.record(record(one(), Phase::FirstOperand, Phase::FirstOperand));
        }
        assert_eq!(log.len(), 3);

        let log = log.record(record(Action::Clear, Phase::FirstOperand, Phase::Empty));
        assert_eq!(log.len(), 3);
        assert_eq!(log.last().map(|r| r.action), Some(Action::Clear));
    }

    #[test]
    fn zero_limit_keeps_nothing() {
        let log = DispatchLog::with_limit(0).record(record(one(), Phase::Empty, Phase::FirstOperand));
        assert!(log.is_empty());
    }

    #[test]
    fn duration_spans_first_to_last() {
        let start = Utc::now();
        let mut first = record(one(), Phase::Empty, Phase::FirstOperand);
        first.timestamp = start;
        let mut second = record(Action::Clear, Phase::FirstOperand, Phase::Empty);
        second.timestamp = start + chrono::Duration::seconds(2);

        let log = DispatchLog::new().record(first).record(second);
        assert_eq!(log.duration(), Some(Duration::from_secs(2)));
    }

    #[test]
    fn changed_phase_detects_moves() {
        assert!(record(one(), Phase::Empty, Phase::FirstOperand).changed_phase());
        assert!(!record(one(), Phase::FirstOperand, Phase::FirstOperand).changed_phase());
    }

    #[test]
    fn log_roundtrips_through_json() {
        let log = DispatchLog::new().record(record(one(), Phase::Empty, Phase::FirstOperand));
        let json = serde_json::to_string(&log).unwrap();
        let deserialized: DispatchLog = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.records(), log.records());
    }
}

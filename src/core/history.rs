//! Per-object record of entered states.
//!
//! The machine never remembers where an object has been. Business objects
//! that want an audit trail embed a [`StateHistory`] and record into it from
//! their `on_enter` callback.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A state an object entered, and when.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub state: State,
    pub entered_at: DateTime<Utc>,
}

/// Ordered, immutable list of entered states.
///
/// `record` returns a new history with the entry appended and leaves the
/// original untouched.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{State, StateHistory};
///
/// let pending = State::new(0, "Pending");
/// let shipped = State::new(1, "Shipped");
///
/// let history = StateHistory::new().record(pending).record(shipped.clone());
///
/// assert_eq!(history.current(), Some(&shipped));
/// assert_eq!(history.path().len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateHistory {
    entries: Vec<HistoryEntry>,
}

impl StateHistory {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record entering `state` now, returning a new history.
    pub fn record(&self, state: State) -> Self {
        self.record_at(state, Utc::now())
    }

    /// Record entering `state` at a given time, returning a new history.
    pub fn record_at(&self, state: State, entered_at: DateTime<Utc>) -> Self {
        let mut entries = self.entries.clone();
        entries.push(HistoryEntry { state, entered_at });
        Self { entries }
    }

    /// Most recently entered state.
    pub fn current(&self) -> Option<&State> {
        self.entries.last().map(|e| &e.state)
    }

    /// States in the order they were entered.
    pub fn path(&self) -> Vec<&State> {
        self.entries.iter().map(|e| &e.state).collect()
    }

    /// Time between the first and last entry.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.entries.first()?, self.entries.last()?);
        last.entered_at
            .signed_duration_since(first.entered_at)
            .to_std()
            .ok()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

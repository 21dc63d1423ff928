//! Transition records.

use super::state::{Action, Event, State};
use serde::{Deserialize, Serialize};

/// A `(from, event) -> to` mapping with optional pre- and next-actions.
///
/// Transitions are plain values; a table is an ordered list of them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub from: State,
    pub event: Event,
    pub to: State,
    #[serde(default)]
    pub pre_action: Action,
    #[serde(default)]
    pub next_action: Action,
}

impl Transition {
    /// A transition without actions.
    pub fn new(from: State, event: Event, to: State) -> Self {
        Self {
            from,
            event,
            to,
            pre_action: Action::none(),
            next_action: Action::none(),
        }
    }

    pub fn with_pre_action(mut self, action: Action) -> Self {
        self.pre_action = action;
        self
    }

    pub fn with_next_action(mut self, action: Action) -> Self {
        self.next_action = action;
        self
    }

    /// Check whether this transition handles `event` while in `state`.
    ///
    /// States compare by id and name, events by id alone.
    pub fn matches(&self, state: &State, event: &Event) -> bool {
        self.from.id == state.id && self.from.name == state.name && self.event.id == event.id
    }

    /// Whether the transition stays in its source state.
    pub fn is_self_transition(&self) -> bool {
        self.from == self.to
    }
}

//! The ordered, immutable transition table.

use super::state::{Event, State};
use super::transition::Transition;
use serde::{Deserialize, Serialize};

/// Ordered list of transitions, frozen at construction.
///
/// Lookup returns the first transition in definition order whose source
/// state and event match. Duplicates are allowed; a later transition with the
/// same `(from, event)` key as an earlier one can never be selected.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{Event, State, Transition, TransitionTable};
///
/// let idle = State::new(0, "Idle");
/// let busy = State::new(1, "Busy");
/// let start = Event::new(1, "start");
///
/// let table = TransitionTable::new([Transition::new(idle.clone(), start.clone(), busy.clone())]);
///
/// assert_eq!(table.lookup(&idle, &start).map(|t| &t.to), Some(&busy));
/// assert!(table.lookup(&busy, &start).is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransitionTable {
    transitions: Box<[Transition]>,
}

impl TransitionTable {
    pub fn new(transitions: impl IntoIterator<Item = Transition>) -> Self {
        Self {
            transitions: transitions.into_iter().collect(),
        }
    }

    /// Find the first transition leaving `state` on `event`.
    pub fn lookup(&self, state: &State, event: &Event) -> Option<&Transition> {
        self.transitions.iter().find(|t| t.matches(state, event))
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transition> {
        self.transitions.iter()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Distinct state names in order of first appearance (source, then target).
    pub fn state_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for t in self.transitions.iter() {
            for name in [t.from.name(), t.to.name()] {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }
}

impl FromIterator<Transition> for TransitionTable {
    fn from_iter<I: IntoIterator<Item = Transition>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a TransitionTable {
    type Item = &'a Transition;
    type IntoIter = std::slice::Iter<'a, Transition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

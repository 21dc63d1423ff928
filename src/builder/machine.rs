//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Transition, TransitionTable};
use crate::engine::StateMachine;

/// Builder for constructing state machines with a fluent API.
///
/// Transitions keep the order in which they are added; that order decides
/// which of two overlapping transitions is taken.
pub struct StateMachineBuilder<D> {
    delegate: Option<D>,
    transitions: Vec<Transition>,
}

impl<D> StateMachineBuilder<D> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            delegate: None,
            transitions: Vec::new(),
        }
    }

    /// Set the delegate (required).
    pub fn delegate(mut self, delegate: D) -> Self {
        self.delegate = Some(delegate);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: impl IntoIterator<Item = Transition>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Add every transition of an existing table.
    pub fn table(self, table: &TransitionTable) -> Self {
        self.transitions(table.iter().cloned())
    }

    /// Build the state machine.
    /// Returns an error if the delegate is missing or no transitions were added.
    pub fn build(self) -> Result<StateMachine<D>, BuildError> {
        let delegate = self.delegate.ok_or(BuildError::MissingDelegate)?;

        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        Ok(StateMachine::new(delegate, self.transitions))
    }
}

impl<D> Default for StateMachineBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}

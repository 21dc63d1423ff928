//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{Action, Event, State, Transition};

/// Builder for constructing transitions with a fluent API.
#[derive(Clone, Debug, Default)]
pub struct TransitionBuilder {
    from: Option<State>,
    event: Option<Event>,
    to: Option<State>,
    stay: bool,
    pre_action: Option<Action>,
    next_action: Option<Action>,
}

impl TransitionBuilder {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source state (required).
    pub fn from(mut self, state: State) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the triggering event (required).
    pub fn on(mut self, event: Event) -> Self {
        self.event = Some(event);
        self
    }

    /// Set the target state (required unless `.stay()` is used).
    pub fn to(mut self, state: State) -> Self {
        self.to = Some(state);
        self.stay = false;
        self
    }

    /// Target the source state, making this a self-transition.
    pub fn stay(mut self) -> Self {
        self.to = None;
        self.stay = true;
        self
    }

    /// Action run before entering the target state (optional).
    pub fn pre_action(mut self, action: Action) -> Self {
        self.pre_action = Some(action);
        self
    }

    /// Action run after entering the target state (optional).
    pub fn next_action(mut self, action: Action) -> Self {
        self.next_action = Some(action);
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let event = self.event.ok_or(BuildError::MissingEvent)?;
        let to = match (self.to, self.stay) {
            (Some(to), _) => to,
            (None, true) => from.clone(),
            (None, false) => return Err(BuildError::MissingToState),
        };

        Ok(Transition {
            from,
            event,
            to,
            pre_action: self.pre_action.unwrap_or_default(),
            next_action: self.next_action.unwrap_or_default(),
        })
    }
}

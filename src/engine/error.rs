//! Errors returned by [`StateMachine::trigger`](crate::engine::StateMachine::trigger).

use crate::core::{Event, State};
use thiserror::Error;

/// No transition leaves the queried state on the given event.
///
/// The machine takes no position on whether this is a problem; callers can
/// ignore it, log it or escalate it.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("cannot find transition for event [{bad_event}] when in state [{current_state}]")]
pub struct UnmatchedTransition {
    bad_event: Event,
    current_state: State,
}

impl UnmatchedTransition {
    pub fn new(bad_event: Event, current_state: State) -> Self {
        Self {
            bad_event,
            current_state,
        }
    }

    /// The event that had no transition.
    pub fn bad_event(&self) -> &Event {
        &self.bad_event
    }

    /// The state the caller reported.
    pub fn current_state(&self) -> &State {
        &self.current_state
    }
}

/// Failure of a single `trigger` call.
///
/// `E` is the error type of the delegate; business action errors come back
/// exactly as the delegate returned them.
#[derive(Debug, Error)]
pub enum TriggerError<E> {
    #[error(transparent)]
    Unmatched(#[from] UnmatchedTransition),

    #[error(transparent)]
    Action(E),
}

impl<E> TriggerError<E> {
    pub fn unmatched(&self) -> Option<&UnmatchedTransition> {
        match self {
            Self::Unmatched(e) => Some(e),
            Self::Action(_) => None,
        }
    }

    pub fn action(&self) -> Option<&E> {
        match self {
            Self::Action(e) => Some(e),
            Self::Unmatched(_) => None,
        }
    }

    /// Take the business error out, if this was one.
    pub fn into_action(self) -> Option<E> {
        match self {
            Self::Action(e) => Some(e),
            Self::Unmatched(_) => None,
        }
    }

    pub fn is_unmatched(&self) -> bool {
        matches!(self, Self::Unmatched(_))
    }
}

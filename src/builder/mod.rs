//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders for assembling transition tables and
//! machines at configuration time, plus shorthand constructors for the most
//! common transition shapes.

pub mod error;
pub mod machine;
pub mod transition;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::{Action, Event, State, Transition};

/// Create a transition without actions.
///
/// # Example
///
/// ```
/// use switchyard::builder::simple_transition;
/// use switchyard::core::{Event, State};
///
/// let t = simple_transition(State::new(0, "Red"), Event::new(1, "timer"), State::new(1, "Green"));
/// assert!(t.pre_action.is_noop());
/// ```
pub fn simple_transition(from: State, event: Event, to: State) -> Transition {
    Transition::new(from, event, to)
}

/// Create a self-transition that only runs `action` as its pre-action.
///
/// # Example
///
/// ```
/// use switchyard::builder::internal_transition;
/// use switchyard::core::{Action, Event, State};
///
/// let t = internal_transition(
///     State::new(1, "Purchasing"),
///     Event::new(8, "not expired"),
///     Action::new(3, "check deadline"),
/// );
/// assert!(t.is_self_transition());
/// ```
pub fn internal_transition(state: State, event: Event, action: Action) -> Transition {
    Transition::new(state.clone(), event, state).with_pre_action(action)
}

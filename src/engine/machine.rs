//! Stateless state machine that routes events through a transition table.

use crate::core::{Event, State, Transition, TransitionTable};
use crate::engine::delegate::Delegate;
use crate::engine::error::{TriggerError, UnmatchedTransition};

/// A configured machine: a delegate plus an immutable transition table.
///
/// The machine does not know the state of any object. Callers pass the
/// current state into every [`trigger`](Self::trigger) call, and the
/// delegate writes the new state back onto the caller's object. One machine
/// can therefore serve any number of objects, from any number of threads.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{Action, Event, State, Transition};
/// use switchyard::engine::{DefaultDelegate, EventProcessor, StateMachine};
///
/// struct Door {
///     state: State,
/// }
///
/// struct DoorProcessor;
///
/// impl EventProcessor<Door> for DoorProcessor {
///     type Error = std::convert::Infallible;
///
///     fn on_enter(&self, to: &State, door: &mut Door) {
///         door.state = to.clone();
///     }
///
///     fn pre_action(&self, _: &Action, _: &State, _: &State, _: &mut Door) -> Result<(), Self::Error> {
///         Ok(())
///     }
///
///     fn next_action(&self, _: &Action, _: &State, _: &State, _: &mut Door) -> Result<(), Self::Error> {
///         Ok(())
///     }
/// }
///
/// let closed = State::new(0, "Closed");
/// let open = State::new(1, "Open");
/// let push = Event::new(1, "push");
///
/// let machine = StateMachine::new(
///     DefaultDelegate::new(DoorProcessor),
///     [Transition::new(closed.clone(), push.clone(), open.clone())],
/// );
///
/// let mut door = Door { state: closed };
/// let current = door.state.clone();
/// machine.trigger(&current, &push, &mut door).unwrap();
/// assert_eq!(door.state, open);
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine<D> {
    delegate: D,
    table: TransitionTable,
}

impl<D> StateMachine<D> {
    /// Create a machine from a delegate and transitions in priority order.
    pub fn new(delegate: D, transitions: impl IntoIterator<Item = Transition>) -> Self {
        Self::with_table(delegate, transitions.into_iter().collect())
    }

    pub fn with_table(delegate: D, table: TransitionTable) -> Self {
        Self { delegate, table }
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    /// The transition `trigger` would take, without running it.
    pub fn find_transition(&self, current: &State, event: &Event) -> Option<&Transition> {
        self.table.lookup(current, event)
    }

    /// Fire `event` for an object currently in `current`.
    ///
    /// On a match the delegate runs synchronously with the matched
    /// transition's actions, `current` as the source state and the
    /// transition's target. `args` reaches every callback untouched.
    ///
    /// Returns [`TriggerError::Unmatched`] when no transition applies, or
    /// [`TriggerError::Action`] carrying the delegate's error unchanged.
    pub fn trigger<A>(
        &self,
        current: &State,
        event: &Event,
        args: &mut A,
    ) -> Result<(), TriggerError<D::Error>>
    where
        A: ?Sized,
        D: Delegate<A>,
    {
        let Some(transition) = self.table.lookup(current, event) else {
            tracing::debug!(state = %current, event = %event, "transition.unmatched");
            return Err(UnmatchedTransition::new(event.clone(), current.clone()).into());
        };

        tracing::debug!(
            from = %current,
            to = %transition.to,
            event = %event,
            "transition.matched"
        );

        self.delegate
            .handle_event(
                &transition.pre_action,
                &transition.next_action,
                current,
                &transition.to,
                args,
            )
            .map_err(TriggerError::Action)
    }
}

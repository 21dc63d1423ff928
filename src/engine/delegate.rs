//! Callback protocol between the machine and the business layer.
//!
//! The machine hands every matched transition to a [`Delegate`]. Most
//! applications use [`DefaultDelegate`], which splits a transition into the
//! ordered phases of an [`EventProcessor`]:
//!
//! 1. `on_exit(from)` when the state changes
//! 2. `pre_action` when one is configured
//! 3. `on_enter(to)` when the state changes and the pre-action succeeded
//! 4. `next_action` when one is configured
//!
//! A failing action is reported once to `on_action_failure` and then
//! returned. Nothing that already ran is undone: a pre-action failure leaves
//! the object exited but not entered, and a next-action failure happens after
//! `on_enter` committed the new state.

use crate::core::{Action, State};

/// Receives matched transitions from the machine.
///
/// `A` is the opaque argument passed to `trigger`, usually the business
/// object whose state is changing.
pub trait Delegate<A: ?Sized> {
    type Error;

    fn handle_event(
        &self,
        pre_action: &Action,
        next_action: &Action,
        from: &State,
        to: &State,
        args: &mut A,
    ) -> Result<(), Self::Error>;
}

impl<A: ?Sized, D: Delegate<A> + ?Sized> Delegate<A> for &D {
    type Error = D::Error;

    fn handle_event(
        &self,
        pre_action: &Action,
        next_action: &Action,
        from: &State,
        to: &State,
        args: &mut A,
    ) -> Result<(), Self::Error> {
        (**self).handle_event(pre_action, next_action, from, to, args)
    }
}

impl<A: ?Sized, D: Delegate<A> + ?Sized> Delegate<A> for std::sync::Arc<D> {
    type Error = D::Error;

    fn handle_event(
        &self,
        pre_action: &Action,
        next_action: &Action,
        from: &State,
        to: &State,
        args: &mut A,
    ) -> Result<(), Self::Error> {
        (**self).handle_event(pre_action, next_action, from, to, args)
    }
}

/// Business callbacks for each phase of a transition.
///
/// Only the two actions are required. Exit, enter and failure notifications
/// default to doing nothing.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{Action, State};
/// use switchyard::engine::EventProcessor;
///
/// struct Order {
///     state: State,
/// }
///
/// struct OrderProcessor;
///
/// impl EventProcessor<Order> for OrderProcessor {
///     type Error = std::convert::Infallible;
///
///     fn on_enter(&self, to: &State, order: &mut Order) {
///         order.state = to.clone();
///     }
///
///     fn pre_action(&self, _: &Action, _: &State, _: &State, _: &mut Order) -> Result<(), Self::Error> {
///         Ok(())
///     }
///
///     fn next_action(&self, _: &Action, _: &State, _: &State, _: &mut Order) -> Result<(), Self::Error> {
///         Ok(())
///     }
/// }
/// ```
pub trait EventProcessor<A: ?Sized> {
    type Error;

    /// Leaving `from`. Cannot fail and cannot stop the transition.
    fn on_exit(&self, from: &State, args: &mut A) {
        let _ = (from, args);
    }

    fn pre_action(
        &self,
        action: &Action,
        from: &State,
        to: &State,
        args: &mut A,
    ) -> Result<(), Self::Error>;

    fn next_action(
        &self,
        action: &Action,
        from: &State,
        to: &State,
        args: &mut A,
    ) -> Result<(), Self::Error>;

    /// Called exactly once for a failing action, before the error is returned.
    fn on_action_failure(
        &self,
        action: &Action,
        from: &State,
        to: &State,
        args: &mut A,
        error: &Self::Error,
    ) {
        let _ = (action, from, to, args, error);
    }

    /// Entering `to`. This is where the new state is committed to `args`.
    fn on_enter(&self, to: &State, args: &mut A) {
        let _ = (to, args);
    }
}

/// Delegate that drives an [`EventProcessor`] through the phased protocol.
#[derive(Clone, Debug, Default)]
pub struct DefaultDelegate<P> {
    processor: P,
}

impl<P> DefaultDelegate<P> {
    pub fn new(processor: P) -> Self {
        Self { processor }
    }

    pub fn processor(&self) -> &P {
        &self.processor
    }

    pub fn into_inner(self) -> P {
        self.processor
    }

    fn run_action<A>(
        &self,
        phase: Phase,
        action: &Action,
        from: &State,
        to: &State,
        args: &mut A,
    ) -> Result<(), P::Error>
    where
        A: ?Sized,
        P: EventProcessor<A>,
    {
        tracing::trace!(phase = phase.as_str(), action = %action, "action.start");

        let result = match phase {
            Phase::PreAction => self.processor.pre_action(action, from, to, args),
            Phase::NextAction => self.processor.next_action(action, from, to, args),
        };

        if let Err(err) = result {
            tracing::warn!(
                phase = phase.as_str(),
                action = %action,
                from = %from,
                to = %to,
                "action.failed"
            );
            self.processor.on_action_failure(action, from, to, args, &err);
            return Err(err);
        }

        Ok(())
    }
}

#[derive(Clone, Copy, Debug)]
enum Phase {
    PreAction,
    NextAction,
}

impl Phase {
    fn as_str(self) -> &'static str {
        match self {
            Self::PreAction => "pre_action",
            Self::NextAction => "next_action",
        }
    }
}

impl<A, P> Delegate<A> for DefaultDelegate<P>
where
    A: ?Sized,
    P: EventProcessor<A>,
{
    type Error = P::Error;

    fn handle_event(
        &self,
        pre_action: &Action,
        next_action: &Action,
        from: &State,
        to: &State,
        args: &mut A,
    ) -> Result<(), Self::Error> {
        let changes_state = from != to;

        if changes_state {
            tracing::trace!(state = %from, "state.exit");
            self.processor.on_exit(from, args);
        }

        if !pre_action.is_noop() {
            self.run_action(Phase::PreAction, pre_action, from, to, args)?;
        }

        if changes_state {
            tracing::trace!(state = %to, "state.enter");
            self.processor.on_enter(to, args);
        }

        if !next_action.is_noop() {
            self.run_action(Phase::NextAction, next_action, from, to, args)?;
        }

        Ok(())
    }
}

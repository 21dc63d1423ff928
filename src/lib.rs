//! Switchyard: a stateless, table-driven state machine engine
//!
//! Switchyard routes an event to a transition without ever storing the state
//! of the objects it drives. Callers keep the current state on their own
//! objects and pass it in with every event, so one configured machine can
//! handle any number of objects at once.
//!
//! # Core Concepts
//!
//! - **Values**: `State`, `Event` and `Action` are plain literal values
//! - **Table**: an ordered, immutable list of `Transition`s; first match wins
//! - **Trigger**: a stateless lookup plus a synchronous call into a delegate
//! - **Delegate**: business callbacks for exit, pre-action, enter,
//!   next-action and action failure
//! - **Diagram**: the table rendered through Graphviz
//!
//! # Example
//!
//! ```rust
//! use switchyard::core::{Action, Event, State, Transition};
//! use switchyard::engine::{DefaultDelegate, EventProcessor, StateMachine};
//!
//! const GREEN: State = State::from_static(0, "Green");
//! const YELLOW: State = State::from_static(1, "Yellow");
//! const TIMER: Event = Event::from_static(1, "timer");
//!
//! struct Light {
//!     state: State,
//! }
//!
//! struct LightProcessor;
//!
//! impl EventProcessor<Light> for LightProcessor {
//!     type Error = std::convert::Infallible;
//!
//!     fn on_enter(&self, to: &State, light: &mut Light) {
//!         light.state = to.clone();
//!     }
//!
//!     fn pre_action(&self, _: &Action, _: &State, _: &State, _: &mut Light) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//!
//!     fn next_action(&self, _: &Action, _: &State, _: &State, _: &mut Light) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//! }
//!
//! let machine = StateMachine::new(
//!     DefaultDelegate::new(LightProcessor),
//!     [Transition::new(GREEN, TIMER, YELLOW)],
//! );
//!
//! let mut light = Light { state: GREEN };
//! machine.trigger(&GREEN, &TIMER, &mut light).unwrap();
//! assert_eq!(light.state, YELLOW);
//!
//! // Nothing leaves Yellow on a timer event.
//! let err = machine.trigger(&YELLOW, &TIMER, &mut light).unwrap_err();
//! assert_eq!(err.unmatched().unwrap().current_state(), &YELLOW);
//! ```

pub mod audit;
pub mod builder;
pub mod config;
pub mod core;
pub mod diagram;
pub mod engine;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder, TransitionBuilder};
pub use config::{ConfigError, MachineConfig};
pub use crate::core::{Action, Event, State, StateHistory, Transition, TransitionTable};
pub use diagram::{DiagramError, GraphvizRenderer, RenderOptions, Renderer};
pub use engine::{
    DefaultDelegate, Delegate, EventProcessor, StateMachine, TriggerError, UnmatchedTransition,
};

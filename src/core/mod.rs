//! Core value types and the transition table.
//!
//! This module contains the data the engine reads:
//! - `State`, `Event` and `Action` literal values
//! - `Transition` records and the ordered `TransitionTable`
//! - `StateHistory`, an optional trail business objects can keep for themselves
//!
//! Nothing here is mutated during dispatch.

mod history;
mod state;
mod table;
mod transition;

pub use history::{HistoryEntry, StateHistory};
pub use state::{Action, Event, State};
pub use table::TransitionTable;
pub use transition::Transition;

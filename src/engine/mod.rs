//! Dispatch engine and callback protocol.
//!
//! This module is the runtime half of the crate:
//! - [`StateMachine`] looks up `(state, event)` and hands the match to a delegate
//! - [`Delegate`] is the seam between the machine and business code
//! - [`DefaultDelegate`] drives an [`EventProcessor`] through exit, pre-action,
//!   enter and next-action phases
//!
//! Everything runs synchronously on the caller's thread. The machine holds no
//! mutable state, so a single instance may be shared freely.

mod delegate;
mod error;
mod machine;

pub use delegate::{DefaultDelegate, Delegate, EventProcessor};
pub use error::{TriggerError, UnmatchedTransition};
pub use machine::StateMachine;

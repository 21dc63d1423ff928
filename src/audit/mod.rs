//! Diagnostic audits for transition tables.
//!
//! Tables are accepted as configured: duplicates, self-loops and disabled
//! actions are all legal. An audit reports the entries that are probably
//! mistakes, using Stillwater's `Validation` so that every issue is reported
//! in one pass instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use switchyard::audit::{audit, TableIssue};
//! use switchyard::core::{Event, State, Transition, TransitionTable};
//! use stillwater::validation::Validation;
//!
//! let a = State::new(0, "A");
//! let b = State::new(1, "B");
//! let go = Event::new(1, "go");
//!
//! let table = TransitionTable::new([
//!     Transition::new(a.clone(), go.clone(), b.clone()),
//!     Transition::new(a.clone(), go.clone(), a.clone()),
//! ]);
//!
//! match audit(&table) {
//!     Validation::Failure(issues) => {
//!         assert!(issues
//!             .iter()
//!             .any(|i| matches!(i, TableIssue::Shadowed { index: 1, shadowed_by: 0 })));
//!     }
//!     Validation::Success(_) => panic!("expected the duplicate to be reported"),
//! }
//! ```

pub mod checks;
pub mod issues;

pub use checks::{
    audit, inert_self_loops, named_noop_actions, shadowed_transitions, AuditCheck, AuditResult,
    TableAudit,
};
pub use issues::TableIssue;

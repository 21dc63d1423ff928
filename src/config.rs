//! JSON configuration for transition tables.
//!
//! Catalogs and transitions can be kept in a document instead of code:
//!
//! ```json
//! {
//!   "transitions": [
//!     {
//!       "from": {"id": 0, "name": "Pending"},
//!       "event": {"id": 0, "name": "go to stall"},
//!       "to": {"id": 1, "name": "Purchasing"},
//!       "pre_action": {"id": 1, "name": "fetch result"}
//!     }
//!   ],
//!   "export": {"output": "purchase.svg", "format": "svg"}
//! }
//! ```
//!
//! Missing actions are no-ops and missing descriptions are empty. The
//! document is parsed once at startup; the resulting table is immutable.

use crate::core::{Transition, TransitionTable};
use crate::diagram::RenderOptions;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid machine configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A machine configuration document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Transitions in priority order
    pub transitions: Vec<Transition>,

    /// Diagram export settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export: Option<RenderOptions>,
}

impl MachineConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Freeze the configured transitions into a table.
    pub fn table(&self) -> TransitionTable {
        self.transitions.iter().cloned().collect()
    }

    pub fn into_table(self) -> TransitionTable {
        TransitionTable::new(self.transitions)
    }
}

impl TransitionTable {
    /// Load a table from a JSON configuration document.
    ///
    /// # Example
    ///
    /// ```rust
    /// use switchyard::core::{Event, State, TransitionTable};
    ///
    /// let table = TransitionTable::from_json(r#"{
    ///     "transitions": [{
    ///         "from": {"id": 0, "name": "Idle"},
    ///         "event": {"id": 1, "name": "start"},
    ///         "to": {"id": 1, "name": "Busy"}
    ///     }]
    /// }"#).unwrap();
    ///
    /// assert!(table.lookup(&State::new(0, "Idle"), &Event::new(1, "start")).is_some());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(MachineConfig::from_json(json)?.into_table())
    }
}

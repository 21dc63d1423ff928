//! Problems an audit can find in a transition table.

use thiserror::Error;

/// A suspicious entry in a transition table.
///
/// Indices refer to positions in definition order.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableIssue {
    #[error("transition #{index} can never fire: transition #{shadowed_by} matches the same state and event first")]
    Shadowed { index: usize, shadowed_by: usize },

    #[error("transition #{index} stays in its state and has no actions, so triggering it does nothing")]
    InertSelfLoop { index: usize },

    #[error("transition #{index} names action '{name}' but its id is not positive, so it never runs")]
    NamedNoOpAction { index: usize, name: String },

    #[error("Custom check failed: {message}")]
    Custom { message: String },
}

impl TableIssue {
    /// Position of the offending transition, when the issue has one.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Shadowed { index, .. }
            | Self::InertSelfLoop { index }
            | Self::NamedNoOpAction { index, .. } => Some(*index),
            Self::Custom { .. } => None,
        }
    }
}

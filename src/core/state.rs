//! Literal value types for states, events and actions.
//!
//! The engine identifies everything by value: a state is the pair
//! `(id, name)`, an event is matched by its `id`, and an action with a
//! non-positive `id` means "nothing configured". Catalogs of these values are
//! owned by the embedding application and handed to the machine at
//! configuration time.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A node in the transition graph.
///
/// Two states are the same state when both `id` and `name` are equal. The
/// description is informational and never takes part in comparisons.
///
/// # Example
///
/// ```rust
/// use switchyard::core::State;
///
/// const PENDING: State = State::from_static(0, "Pending");
///
/// let described = State::new(0, "Pending").with_description("waiting for a buyer");
/// assert_eq!(PENDING, described);
/// assert_ne!(PENDING, State::new(0, "Invalid"));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct State {
    pub id: i64,
    pub name: Cow<'static, str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Cow<'static, str>>,
}

impl State {
    /// Create a state without a description.
    pub fn new(id: i64, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
        }
    }

    /// Create a state from a static name, usable in `const` catalogs.
    pub const fn from_static(id: i64, name: &'static str) -> Self {
        Self {
            id,
            name: Cow::Borrowed(name),
            description: None,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<Cow<'static, str>>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name
    }
}

impl Eq for State {}

impl Hash for State {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.name.hash(state);
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.id)
    }
}

/// Something that happened to a business object.
///
/// Transition lookup matches events by `id` only; `name` is descriptive and
/// shows up in diagrams and diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub name: Cow<'static, str>,
}

impl Event {
    pub fn new(id: i64, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub const fn from_static(id: i64, name: &'static str) -> Self {
        Self {
            id,
            name: Cow::Borrowed(name),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.id)
    }
}

/// A business side effect attached to a transition.
///
/// An action whose `id` is zero or negative is the no-op marker: the
/// transition has no action in that slot and the callback is not invoked.
///
/// # Example
///
/// ```rust
/// use switchyard::core::Action;
///
/// assert!(Action::none().is_noop());
/// assert!(Action::new(-1, "disabled").is_noop());
/// assert!(!Action::new(3, "charge card").is_noop());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub id: i64,
    pub name: Cow<'static, str>,
}

impl Action {
    pub fn new(id: i64, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub const fn from_static(id: i64, name: &'static str) -> Self {
        Self {
            id,
            name: Cow::Borrowed(name),
        }
    }

    /// The "no action configured" marker.
    pub const fn none() -> Self {
        Self::from_static(0, "")
    }

    /// Whether this action slot is empty.
    pub fn is_noop(&self) -> bool {
        self.id <= 0
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.id)
    }
}

//! Newtype wrapper for layout-element identity
//!
//! Element ids cross the layout-document wire format, so unlike most
//! internal ids this one serializes as a plain JSON string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// The identifier of a placed layout element.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(Arc<str>);

impl ElementId {
    /// Creates a new ElementId from a string
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation of this element ID
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ElementId {
    // Imported documents may omit the id field; an empty id is still
    // addressable within its page, it just cannot be regenerated.
    fn default() -> Self {
        Self("".into())
    }
}

impl From<String> for ElementId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl From<Arc<str>> for ElementId {
    fn from(s: Arc<str>) -> Self {
        Self(s)
    }
}

impl AsRef<str> for ElementId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

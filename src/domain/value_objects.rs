//! # Domain Value Objects
//!
//! Immutable value types used at the boundary of the actor domain.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Identifier of the actor issuing a request.
///
/// Callers may send either a plain string or a list of strings. Both shapes
/// reduce to one lookup key through [`RequesterId::lookup_key`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequesterId {
    Single(String),
    Many(Vec<String>),
}

impl RequesterId {
    /// Separator used when a list form is collapsed into one key
    pub const SEPARATOR: &'static str = ",";

    /// Collapse the identifier into the key used for directory lookup.
    ///
    /// A list is joined with [`Self::SEPARATOR`], so a single-element list
    /// yields the same key as the plain string form.
    #[must_use]
    pub fn lookup_key(&self) -> Cow<'_, str> {
        match self {
            Self::Single(id) => Cow::Borrowed(id.as_str()),
            Self::Many(parts) => Cow::Owned(parts.join(Self::SEPARATOR)),
        }
    }
}

impl std::fmt::Display for RequesterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.lookup_key())
    }
}

impl From<String> for RequesterId {
    fn from(id: String) -> Self {
        Self::Single(id)
    }
}

impl From<&str> for RequesterId {
    fn from(id: &str) -> Self {
        Self::Single(id.to_string())
    }
}

impl From<Vec<String>> for RequesterId {
    fn from(parts: Vec<String>) -> Self {
        Self::Many(parts)
    }
}

//! Unique identifiers for users.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a user (node) in the social graph.
///
/// Identifiers are opaque strings and act as the primary key for a user.
/// They are ordered, so stores keyed by `UserId` iterate deterministically
/// in ascending identifier order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Create a new `UserId` from a raw string value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier and return the underlying string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_roundtrip() {
        let id = UserId::new("alice@example.com");
        assert_eq!(id.as_str(), "alice@example.com");
        assert_eq!(id.into_string(), "alice@example.com");
    }

    #[test]
    fn ids_are_ordered() {
        let a = UserId::new("alice");
        let b = UserId::new("bob");
        assert!(a < b);
    }

    #[test]
    fn display_matches_raw() {
        let id = UserId::new("carol");
        assert_eq!(id.to_string(), "carol");
    }
}

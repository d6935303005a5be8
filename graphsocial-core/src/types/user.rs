//! User record types for the social graph.

use serde::{Deserialize, Serialize};

use super::UserId;

/// A user (node payload) in the social graph.
///
/// The identifier is the user's identity; the remaining fields are opaque
/// profile strings the engine stores but never interprets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique identifier for this user.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Birthdate, as entered.
    pub birthdate: String,
    /// Phone number, as entered.
    pub phone: String,
    /// City of residence.
    pub city: String,
}

impl UserRecord {
    /// Create a new user record.
    #[must_use]
    pub fn new(
        id: impl Into<UserId>,
        name: impl Into<String>,
        birthdate: impl Into<String>,
        phone: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            birthdate: birthdate.into(),
            phone: phone.into(),
            city: city.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_construction() {
        let record =
            UserRecord::new("alice@example.com", "Alice", "1990-04-01", "555-0100", "Porto Alegre");

        assert_eq!(record.id, UserId::new("alice@example.com"));
        assert_eq!(record.name, "Alice");
        assert_eq!(record.birthdate, "1990-04-01");
        assert_eq!(record.phone, "555-0100");
        assert_eq!(record.city, "Porto Alegre");
    }
}

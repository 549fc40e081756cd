//! User model

use serde::{Deserialize, Serialize};

/// A registered user as supplied by the user registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Registry identifier
    pub id: String,

    /// Name shown on the leaderboard (the registry's full name)
    pub display_name: String,

    /// Login handle, when the registry provides one
    #[serde(default)]
    pub username: Option<String>,

    /// Whether the user may approve checkins
    #[serde(default)]
    pub admin: bool,
}

impl User {
    /// Create a new non-admin user
    #[must_use]
    pub const fn new(id: String, display_name: String) -> Self {
        Self {
            id,
            display_name,
            username: None,
            admin: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new("u1".to_string(), "Ada Lovelace".to_string());
        assert_eq!(user.id, "u1");
        assert_eq!(user.display_name, "Ada Lovelace");
        assert!(user.username.is_none());
        assert!(!user.admin);
    }
}

//! Player identity.
//!
//! A `Player` is created when a user first picks a name and persists across
//! the lobby and game lifecycle. The user name is unique and is the only key
//! the engine looks players up by; the display name is cosmetic.

use serde::{Deserialize, Serialize};

/// A connected user, identified by a unique user name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub user_name: String,
    pub display_name: String,
}

impl Player {
    /// Create a new player.
    ///
    /// ```
    /// use wonders_engine::core::Player;
    ///
    /// let player = Player::new("gameowner", "Game owner");
    /// assert_eq!(player.user_name, "gameowner");
    /// assert_eq!(player.to_string(), "Game owner (gameowner)");
    /// ```
    pub fn new(user_name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            display_name: display_name.into(),
        }
    }

    /// Whether this player answers to `user_name`.
    #[must_use]
    pub fn is(&self, user_name: &str) -> bool {
        self.user_name == user_name
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.display_name, self.user_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_basics() {
        let player = Player::new("testuser", "Test User");
        assert!(player.is("testuser"));
        assert!(!player.is("Test User"));
        assert!(!player.is(""));
    }

    #[test]
    fn test_player_equality_is_by_content() {
        assert_eq!(Player::new("a", "A"), Player::new("a", "A"));
        assert_ne!(Player::new("a", "A"), Player::new("a", "Other"));
    }

    #[test]
    fn test_player_serialization() {
        let player = Player::new("testuser", "Test User");
        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}

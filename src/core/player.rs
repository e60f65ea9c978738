//! Player identification and per-player records.
//!
//! ## PlayerId
//!
//! Opaque player identifier. IDs are allocated by the roster and never
//! reused within a game, so removing a player cannot make a stale guess
//! point at somebody else.
//!
//! ## Player
//!
//! A roster entry: display name, accumulated score, the role for the
//! current round and the card-reveal position.

use serde::{Deserialize, Serialize};

/// Opaque player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player({})", self.0)
    }
}

/// Round role. Exactly one of the two per assigned player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Knows nothing but the category; guesses the secret word.
    Impostor,
    /// Knows the secret word; guesses who the impostor is.
    Legitimate,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Impostor => write!(f, "impostor"),
            Role::Legitimate => write!(f, "legitimate"),
        }
    }
}

/// A single roster entry.
///
/// `role` is `None` until the first role assignment of the game and is
/// overwritten at the start of every round. `score` survives rounds and
/// only goes back to zero on an explicit reset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Display name, already trimmed.
    pub name: String,
    pub score: u32,
    pub role: Option<Role>,
    /// Position in this round's card-reveal order (0 = first to flip).
    pub turn_order: Option<usize>,
}

impl Player {
    /// Create a fresh player with score 0 and no role.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
            role: None,
            turn_order: None,
        }
    }

    #[must_use]
    pub fn is_impostor(&self) -> bool {
        self.role == Some(Role::Impostor)
    }

    #[must_use]
    pub fn is_legitimate(&self) -> bool {
        self.role == Some(Role::Legitimate)
    }

    /// Case-insensitive name comparison used for uniqueness checks.
    ///
    /// ```
    /// use lies_n_legends::core::{Player, PlayerId};
    ///
    /// let alice = Player::new(PlayerId::new(0), "Alice");
    /// assert!(alice.has_name("ALICE"));
    /// assert!(!alice.has_name("Alicia"));
    /// ```
    #[must_use]
    pub fn has_name(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }
}

/// Case-insensitive name equality.
#[must_use]
pub fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let id = PlayerId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(format!("{}", id), "Player(7)");
    }

    #[test]
    fn test_new_player_defaults() {
        let player = Player::new(PlayerId::new(1), "Bob");

        assert_eq!(player.name, "Bob");
        assert_eq!(player.score, 0);
        assert_eq!(player.role, None);
        assert_eq!(player.turn_order, None);
        assert!(!player.is_impostor());
        assert!(!player.is_legitimate());
    }

    #[test]
    fn test_role_flags_are_exclusive() {
        let mut player = Player::new(PlayerId::new(1), "Bob");

        player.role = Some(Role::Impostor);
        assert!(player.is_impostor());
        assert!(!player.is_legitimate());

        player.role = Some(Role::Legitimate);
        assert!(!player.is_impostor());
        assert!(player.is_legitimate());
    }

    #[test]
    fn test_names_match_ignores_case() {
        assert!(names_match("alice", "ALICE"));
        assert!(names_match("Émile", "émile"));
        assert!(!names_match("alice", "alice "));
    }

    #[test]
    fn test_player_serialization() {
        let mut player = Player::new(PlayerId::new(3), "Cleo");
        player.score = 4;
        player.role = Some(Role::Legitimate);

        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}

//! Player registry: the game's roster.
//!
//! Owns the list of players in join order, allocates `PlayerId`s and keeps
//! names unique (case-insensitively) at all times.
//!
//! ## Usage
//!
//! ```
//! use lies_n_legends::roster::PlayerRegistry;
//! use lies_n_legends::GameConfig;
//!
//! let mut registry = PlayerRegistry::new(&GameConfig::default());
//!
//! let alice = registry.add_player("  Alice ").unwrap();
//! assert_eq!(registry.get(alice).unwrap().name, "Alice");
//!
//! // Names are unique regardless of case
//! assert!(registry.add_player("ALICE").is_err());
//! assert_eq!(registry.len(), 1);
//! ```

use im::Vector;
use log::{debug, warn};

use crate::core::{names_match, GameConfig, Player, PlayerId};
use crate::error::{GameError, Result};

/// The roster.
///
/// Stored as an `im::Vector` so handing out snapshots is O(1).
#[derive(Clone, Debug)]
pub struct PlayerRegistry {
    players: Vector<Player>,
    next_id: u32,
    min_players: usize,
    max_players: usize,
}

impl PlayerRegistry {
    /// Create an empty roster with the bounds from `config`.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            players: Vector::new(),
            next_id: 0,
            min_players: config.min_players,
            max_players: config.max_players,
        }
    }

    /// Add a player.
    ///
    /// The name is trimmed first. Fails with `EmptyName` if nothing is left,
    /// `DuplicateName` on a case-insensitive collision and `RosterFull` once
    /// `max_players` is reached. Nothing changes on failure.
    pub fn add_player(&mut self, name: &str) -> Result<PlayerId> {
        let name = name.trim();

        if name.is_empty() {
            warn!("Rejected player with empty name");
            return Err(GameError::EmptyName);
        }

        if self.find_by_name(name).is_some() {
            warn!("Rejected duplicate player name '{}'", name);
            return Err(GameError::DuplicateName { name: name.to_string() });
        }

        if self.players.len() >= self.max_players {
            warn!("Rejected '{}': roster already has {} players", name, self.players.len());
            return Err(GameError::RosterFull { max: self.max_players });
        }

        let id = PlayerId::new(self.next_id);
        self.next_id += 1;
        self.players.push_back(Player::new(id, name));
        debug!("Added {} as {}", name, id);

        Ok(id)
    }

    /// Remove a player. Returns the removed record, `None` if absent.
    pub fn remove_player(&mut self, id: PlayerId) -> Option<Player> {
        let index = self.players.iter().position(|p| p.id == id)?;
        let removed = self.players.remove(index);
        debug!("Removed {} ({})", removed.name, id);
        Some(removed)
    }

    /// Empty the roster, dropping all scores and roles.
    pub fn clear_all(&mut self) {
        self.players.clear();
        self.next_id = 0;
    }

    /// Whether the roster may start a game: size within bounds and names
    /// pairwise unique.
    #[must_use]
    pub fn can_start_game(&self) -> bool {
        let size = self.players.len();
        if size < self.min_players || size > self.max_players {
            return false;
        }

        self.players.iter().enumerate().all(|(i, a)| {
            self.players.iter().skip(i + 1).all(|b| !names_match(&a.name, &b.name))
        })
    }

    /// Set every player's score to `value`, keeping the roster.
    pub fn reset_scores(&mut self, value: u32) {
        for player in self.players.iter_mut() {
            player.score = value;
        }
    }

    /// Get a player by ID.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Check if a player ID is on the roster.
    #[must_use]
    pub fn contains(&self, id: PlayerId) -> bool {
        self.get(id).is_some()
    }

    /// Find a player by name, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Player> {
        let name = name.trim();
        self.players.iter().find(|p| p.has_name(name))
    }

    /// Players in join order.
    #[must_use]
    pub fn players(&self) -> &Vector<Player> {
        &self.players
    }

    /// Iterate over players in join order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    #[must_use]
    pub fn max_players(&self) -> usize {
        self.max_players
    }

    /// Replace the roster with a snapshot derived from it (new roles or
    /// scores). Only the round controller publishes snapshots.
    pub(crate) fn publish(&mut self, players: Vector<Player>) {
        debug_assert_eq!(players.len(), self.players.len());
        self.players = players;
    }
}

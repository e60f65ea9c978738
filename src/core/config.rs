//! Game configuration.
//!
//! `GameConfig` holds the roster bounds, the role-assignment floor, the
//! number of decoy answers offered to the impostor and an optional fixed
//! seed. Defaults match the party game: 4 to 6 players, 5 decoys.

use serde::{Deserialize, Serialize};

/// Default smallest roster that may start a game.
pub const DEFAULT_MIN_PLAYERS: usize = 4;
/// Default largest roster.
pub const DEFAULT_MAX_PLAYERS: usize = 6;
/// Role assignment needs at least one legitimate player next to the impostor.
pub const DEFAULT_MIN_ASSIGN_PLAYERS: usize = 2;
/// Decoys shown next to the true word.
pub const DEFAULT_DECOY_COUNT: usize = 5;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Smallest roster for which `can_start_game` is true.
    pub min_players: usize,

    /// Largest roster; `add_player` refuses to grow past it.
    pub max_players: usize,

    /// Hard floor for role assignment, category pick and round start.
    pub min_assign_players: usize,

    /// Number of decoys in the impostor's answer options.
    pub decoy_count: usize,

    /// Fixed RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_players: DEFAULT_MIN_PLAYERS,
            max_players: DEFAULT_MAX_PLAYERS,
            min_assign_players: DEFAULT_MIN_ASSIGN_PLAYERS,
            decoy_count: DEFAULT_DECOY_COUNT,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the roster bounds.
    #[must_use]
    pub fn with_player_bounds(mut self, min: usize, max: usize) -> Self {
        assert!(min <= max, "min_players must not exceed max_players");
        assert!(max > 0, "max_players must be at least 1");
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Set the role-assignment floor.
    #[must_use]
    pub fn with_min_assign_players(mut self, min: usize) -> Self {
        assert!(min >= 2, "Role assignment needs at least 2 players");
        self.min_assign_players = min;
        self
    }

    /// Set the number of decoy answers.
    #[must_use]
    pub fn with_decoy_count(mut self, count: usize) -> Self {
        self.decoy_count = count;
        self
    }

    /// Use a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check whether a roster size lies within `min_players..=max_players`.
    #[must_use]
    pub fn roster_size_ok(&self, size: usize) -> bool {
        (self.min_players..=self.max_players).contains(&size)
    }
}

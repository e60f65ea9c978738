//! Core engine types: players, RNG, configuration.
//!
//! Everything the five round components share lives here.

pub mod player;
pub mod rng;
pub mod config;

pub use player::{names_match, Player, PlayerId, Role};
pub use rng::GameRng;
pub use config::GameConfig;

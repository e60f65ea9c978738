//! Error taxonomy.
//!
//! Every error is recoverable by the caller. Operations validate before
//! they mutate, so a returned error always means the session is unchanged.

use thiserror::Error;

use crate::core::{PlayerId, Role};
use crate::round::Phase;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("A player named '{name}' already exists")]
    DuplicateName { name: String },

    #[error("Player name must not be empty")]
    EmptyName,

    #[error("Roster is full ({max} players)")]
    RosterFull { max: usize },

    #[error("Need at least {required} players, have {actual}")]
    InsufficientPlayers { required: usize, actual: usize },

    #[error("Cannot {action} during {phase}")]
    InvalidTransition { action: &'static str, phase: Phase },

    #[error("Unknown player {0}")]
    UnknownPlayer(PlayerId),

    #[error("{player} is not the {expected} this round")]
    WrongRole { player: PlayerId, expected: Role },

    #[error("{missing} player(s) have not made a selection yet")]
    SelectionsIncomplete { missing: usize },

    #[error("Unknown category '{0}'")]
    UnknownCategory(String),
}

pub type Result<T> = std::result::Result<T, GameError>;

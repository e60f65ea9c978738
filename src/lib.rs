//! # lies-n-legends
//!
//! Round and scoring engine for a pass-the-device social deduction word game.
//!
//! Each round every player but one privately learns a secret word; the
//! remaining player, the impostor, only learns the category. After a round of
//! hints the legitimate players vote on who the impostor is while the
//! impostor guesses the word from a multiple-choice list.
//!
//! ## Design Principles
//!
//! 1. **Explicit Session**: All state lives in a `GameSession` the caller
//!    owns. No globals.
//!
//! 2. **Snapshots Over Shared Mutation**: Role assignment and scoring return
//!    new roster snapshots (`im::Vector`, O(1) clone); the session publishes
//!    them. Screens read `SessionSnapshot`s.
//!
//! 3. **Atomic Operations**: Every call validates first. An `Err` means
//!    nothing changed.
//!
//! 4. **Deterministic When Seeded**: `GameConfig::with_seed` makes role
//!    draws, reveal order and answer options reproducible.
//!
//! ## Modules
//!
//! - `core`: Player IDs, players, roles, RNG, configuration
//! - `roster`: Player registry (names, bounds)
//! - `roles`: Impostor selection and reveal order
//! - `ledger`: Per-round guesses
//! - `scoring`: Disqualification and reveal scoring, winners
//! - `round`: Session state machine and snapshots
//! - `words`: Word supplier boundary and answer options
//! - `error`: Error taxonomy

pub mod core;
pub mod error;
pub mod roster;
pub mod roles;
pub mod ledger;
pub mod scoring;
pub mod round;
pub mod words;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, Player, PlayerId, Role};

pub use crate::error::{GameError, Result};

pub use crate::roster::PlayerRegistry;

pub use crate::roles::{assign_roles, RoleAssignment};

pub use crate::ledger::SelectionLedger;

pub use crate::scoring::{score_round, AwardReason, RoundResult, ScoreAward, ScoringPath};

pub use crate::round::{GameSession, Phase, SessionSnapshot};

pub use crate::words::{answer_options, Category, CategoryDeck, WordSupplier};

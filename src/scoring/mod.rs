//! Round scoring: disqualification and normal reveal paths, winner sets.

pub mod engine;

pub use engine::{score_round, AwardReason, RoundResult, ScoreAward, ScoringPath};

//! Round scoring.
//!
//! Two mutually exclusive paths:
//!
//! - **Disqualification**: everybody except the disqualified player gets
//!   +1, the ledger is ignored.
//! - **Reveal**: the impostor gets +1 for guessing the secret word
//!   (case-sensitive match) and +1 more if no legitimate player picked them;
//!   each legitimate player who picked the impostor gets +1.
//!
//! On a reveal, winners are the players holding the top total after the
//! additions, so ties produce several winners. On a disqualification every
//! player but the disqualified one wins, whatever the totals. Scoring only
//! ever adds points.
//!
//! `score_round` is pure: it returns a new roster snapshot inside the
//! `RoundResult` and leaves its inputs alone. Guarding against scoring a
//! round twice is the round controller's job.

use im::Vector;
use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Player, PlayerId};
use crate::ledger::SelectionLedger;
use crate::roles::find_impostor;

/// Why a player earned a point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AwardReason {
    /// Legitimate player picked the impostor.
    CorrectSuspect,
    /// Impostor guessed the secret word.
    CorrectWord,
    /// Nobody picked the impostor.
    Undetected,
    /// Somebody else was disqualified this round.
    SurvivedDisqualification,
}

/// Points gained by one player this round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreAward {
    pub player: PlayerId,
    pub reasons: SmallVec<[AwardReason; 2]>,
}

impl ScoreAward {
    fn none(player: PlayerId) -> Self {
        Self { player, reasons: SmallVec::new() }
    }

    /// Points gained (one per reason).
    #[must_use]
    pub fn points(&self) -> u32 {
        self.reasons.len() as u32
    }
}

/// Which scoring path ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringPath {
    Disqualification {
        disqualified: PlayerId,
    },
    Reveal {
        /// `None` when roles were never assigned.
        impostor: Option<PlayerId>,
        /// At least one legitimate player picked the impostor.
        detected: bool,
        word_guessed: bool,
    },
}

/// Result of scoring one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub path: ScoringPath,
    /// One entry per player, in roster order.
    pub awards: Vec<ScoreAward>,
    /// Roster with updated scores.
    pub players: Vector<Player>,
    /// Round winners in roster order. Reveal: players holding `top_score`.
    /// Disqualification: everybody except the disqualified player.
    pub winners: SmallVec<[PlayerId; 8]>,
    /// Highest total among the winners (0 if there are none).
    pub top_score: u32,
}

impl RoundResult {
    /// Points a player gained this round (0 for unknown players).
    #[must_use]
    pub fn points_for(&self, player: PlayerId) -> u32 {
        self.awards
            .iter()
            .find(|a| a.player == player)
            .map_or(0, ScoreAward::points)
    }

    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winners.contains(&player)
    }

    /// False when the top score is zero: everybody "wins" with nothing,
    /// which a scoreboard shows as "no one won".
    #[must_use]
    pub fn has_scoring_winner(&self) -> bool {
        self.top_score > 0 && !self.winners.is_empty()
    }
}

/// Score one round.
///
/// `disqualified` selects the disqualification path; otherwise the ledger
/// is scored against `secret_word`. Players without an answer simply earn
/// nothing.
#[must_use]
pub fn score_round(
    players: &Vector<Player>,
    secret_word: &str,
    ledger: &SelectionLedger,
    disqualified: Option<PlayerId>,
) -> RoundResult {
    let mut awards: Vec<ScoreAward> = players.iter().map(|p| ScoreAward::none(p.id)).collect();

    let path = match disqualified {
        Some(out) => {
            for award in awards.iter_mut().filter(|a| a.player != out) {
                award.reasons.push(AwardReason::SurvivedDisqualification);
            }
            ScoringPath::Disqualification { disqualified: out }
        }
        None => score_reveal(players, secret_word, ledger, &mut awards),
    };

    let mut scored = players.clone();
    for (player, award) in scored.iter_mut().zip(&awards) {
        player.score += award.points();
    }

    let winners: SmallVec<[PlayerId; 8]> = match disqualified {
        Some(out) => scored.iter().map(|p| p.id).filter(|&id| id != out).collect(),
        None => {
            let top = scored.iter().map(|p| p.score).max().unwrap_or(0);
            scored.iter().filter(|p| p.score == top).map(|p| p.id).collect()
        }
    };
    let top_score = scored
        .iter()
        .filter(|p| winners.contains(&p.id))
        .map(|p| p.score)
        .max()
        .unwrap_or(0);

    debug!("Round scored via {:?}, top score {}", path, top_score);

    RoundResult {
        path,
        awards,
        players: scored,
        winners,
        top_score,
    }
}

fn score_reveal(
    players: &Vector<Player>,
    secret_word: &str,
    ledger: &SelectionLedger,
    awards: &mut [ScoreAward],
) -> ScoringPath {
    let Some(impostor) = find_impostor(players).map(|p| p.id) else {
        return ScoringPath::Reveal {
            impostor: None,
            detected: false,
            word_guessed: false,
        };
    };

    let mut detected = false;
    for (player, award) in players.iter().zip(awards.iter_mut()) {
        if player.is_legitimate() && ledger.suspect_guess(player.id) == Some(impostor) {
            award.reasons.push(AwardReason::CorrectSuspect);
            detected = true;
        }
    }

    let word_guessed = ledger.word_guess(impostor) == Some(secret_word);

    if let Some(award) = awards.iter_mut().find(|a| a.player == impostor) {
        if word_guessed {
            award.reasons.push(AwardReason::CorrectWord);
        }
        if !detected {
            award.reasons.push(AwardReason::Undetected);
        }
    }

    ScoringPath::Reveal {
        impostor: Some(impostor),
        detected,
        word_guessed,
    }
}

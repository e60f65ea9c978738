//! Round lifecycle phases.
//!
//! ```text
//! Setup         --pick_category-->            RoleAssigned
//! RoleAssigned  --pick_category-->            RoleAssigned   (re-pick)
//! RoleAssigned  --start_round-->              InRound
//! InRound       --reveal / disqualify-->      Revealed
//! Revealed      --continue_*-->               BetweenRounds
//! BetweenRounds --pick_category-->            RoleAssigned
//! any           --reset_for_new_game-->       Setup
//! ```

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Building the roster; no round played yet.
    #[default]
    Setup,
    /// Category and word chosen, roles dealt, cards being flipped.
    RoleAssigned,
    /// Hints given, guesses being collected.
    InRound,
    /// Round over and scored (normally or by disqualification).
    Revealed,
    /// Scores kept, waiting for the next category pick. Both `continue_*`
    /// operations land here; the next `pick_category` moves to `RoleAssigned`.
    BetweenRounds,
}

impl Phase {
    /// Roster edits are allowed only while no round is in flight.
    #[must_use]
    pub fn allows_roster_edits(self) -> bool {
        matches!(self, Phase::Setup | Phase::BetweenRounds)
    }

    /// A new category may be picked (re-picking before the round starts is fine).
    #[must_use]
    pub fn allows_category_pick(self) -> bool {
        matches!(self, Phase::Setup | Phase::BetweenRounds | Phase::RoleAssigned)
    }

    /// Guesses may be recorded until the reveal.
    #[must_use]
    pub fn allows_guesses(self) -> bool {
        matches!(self, Phase::RoleAssigned | Phase::InRound)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Setup => "setup",
            Phase::RoleAssigned => "role-assigned",
            Phase::InRound => "in-round",
            Phase::Revealed => "revealed",
            Phase::BetweenRounds => "between-rounds",
        };
        f.write_str(name)
    }
}

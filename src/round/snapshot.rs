//! Read-only view of a session for the presentation layer.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::phase::Phase;
use crate::core::{Player, PlayerId};
use crate::ledger::SelectionLedger;
use crate::scoring::RoundResult;

/// Everything a screen needs to render the current state.
///
/// Cheap to take: the roster is an `im::Vector`. Two sessions in the same
/// logical state produce equal snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub round_number: u32,
    pub category: Option<String>,
    pub word: Option<String>,
    pub players: Vector<Player>,
    pub ledger: SelectionLedger,
    pub selections_complete: bool,
    pub disqualified: Option<PlayerId>,
    pub round_result: Option<RoundResult>,
    pub answer_options: Vec<String>,
    pub turn_order: Vec<PlayerId>,
}

impl SessionSnapshot {
    /// Players in card-reveal order. Empty before the first category pick.
    pub fn players_in_turn_order(&self) -> impl Iterator<Item = &Player> {
        self.turn_order
            .iter()
            .filter_map(move |id| self.players.iter().find(|p| p.id == *id))
    }
}

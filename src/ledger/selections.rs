//! Per-round selection ledger.
//!
//! Two maps keyed by the guessing player:
//! - legitimate player -> suspected impostor
//! - impostor -> guessed secret word
//!
//! An absent key means "no answer yet". Writes are last-write-wins. The
//! ledger does not check roles or that a word was one of the offered
//! options; the round controller validates roles before writing.

use im::Vector;
use log::debug;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionLedger {
    suspects: FxHashMap<PlayerId, PlayerId>,
    word_guesses: FxHashMap<PlayerId, String>,
}

impl SelectionLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or overwrite) a legitimate player's impostor guess.
    pub fn record_suspect_guess(&mut self, guesser: PlayerId, suspect: PlayerId) {
        debug!("{} suspects {}", guesser, suspect);
        self.suspects.insert(guesser, suspect);
    }

    /// Record (or overwrite) the impostor's word guess.
    pub fn record_word_guess(&mut self, impostor: PlayerId, word: impl Into<String>) {
        debug!("{} submitted a word guess", impostor);
        self.word_guesses.insert(impostor, word.into());
    }

    #[must_use]
    pub fn suspect_guess(&self, guesser: PlayerId) -> Option<PlayerId> {
        self.suspects.get(&guesser).copied()
    }

    #[must_use]
    pub fn word_guess(&self, impostor: PlayerId) -> Option<&str> {
        self.word_guesses.get(&impostor).map(String::as_str)
    }

    /// Whether `player` has answered for their role.
    #[must_use]
    pub fn has_answered(&self, player: &Player) -> bool {
        if player.is_impostor() {
            self.word_guesses.contains_key(&player.id)
        } else if player.is_legitimate() {
            self.suspects.contains_key(&player.id)
        } else {
            false
        }
    }

    /// Number of role-holding players still without an answer.
    #[must_use]
    pub fn missing(&self, players: &Vector<Player>) -> usize {
        players
            .iter()
            .filter(|p| p.role.is_some() && !self.has_answered(p))
            .count()
    }

    /// True once every legitimate player has a suspect guess and every
    /// impostor has a word guess.
    #[must_use]
    pub fn is_complete(&self, players: &Vector<Player>) -> bool {
        self.missing(players) == 0
    }

    /// Drop every recorded answer.
    pub fn clear(&mut self) {
        self.suspects.clear();
        self.word_guesses.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.suspects.is_empty() && self.word_guesses.is_empty()
    }

    /// Iterate over (guesser, suspect) pairs.
    pub fn suspects(&self) -> impl Iterator<Item = (PlayerId, PlayerId)> + '_ {
        self.suspects.iter().map(|(&g, &s)| (g, s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Role;

    fn roster() -> Vector<Player> {
        let roles = [Role::Legitimate, Role::Legitimate, Role::Impostor, Role::Legitimate];
        roles
            .iter()
            .enumerate()
            .map(|(i, &role)| {
                let mut p = Player::new(PlayerId::new(i as u32), format!("P{}", i));
                p.role = Some(role);
                p
            })
            .collect()
    }

    #[test]
    fn test_last_write_wins() {
        let mut ledger = SelectionLedger::new();
        ledger.record_suspect_guess(PlayerId::new(0), PlayerId::new(1));
        ledger.record_suspect_guess(PlayerId::new(0), PlayerId::new(2));

        assert_eq!(ledger.suspect_guess(PlayerId::new(0)), Some(PlayerId::new(2)));

        ledger.record_word_guess(PlayerId::new(2), "Prince");
        ledger.record_word_guess(PlayerId::new(2), "Kem");
        assert_eq!(ledger.word_guess(PlayerId::new(2)), Some("Kem"));
    }

    #[test]
    fn test_completion() {
        let players = roster();
        let mut ledger = SelectionLedger::new();
        assert_eq!(ledger.missing(&players), 4);

        ledger.record_suspect_guess(PlayerId::new(0), PlayerId::new(2));
        ledger.record_suspect_guess(PlayerId::new(1), PlayerId::new(3));
        ledger.record_suspect_guess(PlayerId::new(3), PlayerId::new(2));
        assert!(!ledger.is_complete(&players));
        assert_eq!(ledger.missing(&players), 1);

        ledger.record_word_guess(PlayerId::new(2), "Ross");
        assert!(ledger.is_complete(&players));
    }

    #[test]
    fn test_wrong_map_does_not_count() {
        let players = roster();
        let mut ledger = SelectionLedger::new();

        // Impostor answering in the suspect map is not a word guess
        ledger.record_suspect_guess(PlayerId::new(2), PlayerId::new(0));
        let impostor = &players[2];
        assert!(!ledger.has_answered(impostor));
    }

    #[test]
    fn test_clear() {
        let mut ledger = SelectionLedger::new();
        ledger.record_suspect_guess(PlayerId::new(0), PlayerId::new(1));
        ledger.record_word_guess(PlayerId::new(1), "Soul Train");

        ledger.clear();

        assert!(ledger.is_empty());
        assert_eq!(ledger.suspect_guess(PlayerId::new(0)), None);
        assert_eq!(ledger.word_guess(PlayerId::new(1)), None);
    }

    #[test]
    fn test_unassigned_players_not_counted() {
        let players: Vector<Player> = (0..3)
            .map(|i| Player::new(PlayerId::new(i), format!("P{}", i)))
            .collect();

        assert_eq!(SelectionLedger::new().missing(&players), 0);
    }
}

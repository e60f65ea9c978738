//! Round controller: the game session.
//!
//! `GameSession` owns the roster, the RNG, the current round's category and
//! word, the selection ledger, the disqualification event and the scoring
//! result. It is the only mutator of roles and scores: the role assigner and
//! the scoring engine hand back new roster snapshots which the session
//! publishes.
//!
//! ## Round lifecycle
//!
//! ```
//! use lies_n_legends::{GameConfig, GameSession};
//!
//! let mut session = GameSession::new(GameConfig::new().with_seed(42));
//! for name in ["Ana", "Ben", "Cal", "Dee"] {
//!     session.add_player(name).unwrap();
//! }
//! assert!(session.can_start_game());
//!
//! session.pick_category("Motown", "Prince").unwrap();
//! session.start_round().unwrap();
//!
//! let impostor = session.impostor().unwrap().id;
//! for guesser in session.legitimates() {
//!     session.record_suspect_guess(guesser, impostor).unwrap();
//! }
//! session.record_word_guess(impostor, "Kem").unwrap();
//!
//! let result = session.reveal().unwrap();
//! assert_eq!(result.points_for(impostor), 0);
//!
//! session.continue_to_next_round().unwrap();
//! assert_eq!(session.round_number(), 2);
//! ```
//!
//! Every operation validates before it mutates, so an `Err` leaves the
//! session exactly as it was.

use log::{debug, info, warn};

use super::phase::Phase;
use super::snapshot::SessionSnapshot;
use crate::core::{GameConfig, GameRng, Player, PlayerId, Role};
use crate::error::{GameError, Result};
use crate::ledger::SelectionLedger;
use crate::roles::{assign_roles, find_impostor};
use crate::roster::PlayerRegistry;
use crate::scoring::{score_round, RoundResult};
use crate::words::WordSupplier;

/// A multi-round game on one shared device.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    registry: PlayerRegistry,
    rng: GameRng,

    phase: Phase,
    /// Starts at 1; only `continue_to_next_round` increments it.
    round_number: u32,
    category: Option<String>,
    word: Option<String>,
    answer_options: Vec<String>,
    turn_order: Vec<PlayerId>,

    ledger: SelectionLedger,
    disqualified: Option<PlayerId>,
    /// Doubles as the "scored" flag: `Some` once this round has been scored.
    round_result: Option<RoundResult>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl GameSession {
    /// Create a session in `Setup` with an empty roster.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = fresh_rng(&config);

        Self {
            registry: PlayerRegistry::new(&config),
            config,
            rng,
            phase: Phase::Setup,
            round_number: 1,
            category: None,
            word: None,
            answer_options: Vec::new(),
            turn_order: Vec::new(),
            ledger: SelectionLedger::new(),
            disqualified: None,
            round_result: None,
        }
    }

    // === Roster ===

    /// Add a player. Only between rounds or during setup.
    pub fn add_player(&mut self, name: &str) -> Result<PlayerId> {
        self.require(self.phase.allows_roster_edits(), "add a player")?;
        self.registry.add_player(name)
    }

    /// Remove a player. Absent IDs are a no-op returning `Ok(None)`.
    pub fn remove_player(&mut self, id: PlayerId) -> Result<Option<Player>> {
        self.require(self.phase.allows_roster_edits(), "remove a player")?;
        Ok(self.registry.remove_player(id))
    }

    /// Empty the roster. Only between rounds or during setup.
    pub fn clear_players(&mut self) -> Result<()> {
        self.require(self.phase.allows_roster_edits(), "clear the roster")?;
        self.registry.clear_all();
        self.turn_order.clear();
        Ok(())
    }

    /// Set every score to `value`, keeping the roster.
    pub fn reset_scores(&mut self, value: u32) -> Result<()> {
        self.require(self.phase.allows_roster_edits(), "reset scores")?;
        self.registry.reset_scores(value);
        info!("Scores reset to {}", value);
        Ok(())
    }

    /// Roster size within bounds and names unique.
    #[must_use]
    pub fn can_start_game(&self) -> bool {
        self.registry.can_start_game()
    }

    // === Round start ===

    /// Set the category and secret word and deal roles for a new round.
    ///
    /// Clears the ledger, any disqualification and the scored flag. May be
    /// called again before `start_round` to re-pick.
    pub fn pick_category(&mut self, category: &str, word: &str) -> Result<()> {
        self.check_can_pick()?;

        let assignment = assign_roles(self.registry.players(), &mut self.rng)?;
        self.registry.publish(assignment.players);
        self.turn_order = assignment.turn_order;

        self.category = Some(category.to_string());
        self.word = Some(word.to_string());
        self.answer_options.clear();
        self.ledger.clear();
        self.disqualified = None;
        self.round_result = None;
        self.phase = Phase::RoleAssigned;

        info!("Round {}: category '{}' picked, roles dealt", self.round_number, category);
        debug!("Round {} secret word: {}", self.round_number, word);
        Ok(())
    }

    /// Draw the word from a supplier, then behave like `pick_category`.
    ///
    /// Also generates the impostor's answer options for the round. A
    /// category the supplier cannot draw from (absent or without words)
    /// fails with `UnknownCategory`.
    pub fn pick_category_from<S>(&mut self, supplier: &mut S, category_id: &str) -> Result<()>
    where
        S: WordSupplier + ?Sized,
    {
        self.check_can_pick()?;

        let (name, word) = supplier
            .get_word(category_id)
            .ok_or_else(|| GameError::UnknownCategory(category_id.to_string()))?;
        let options = supplier.answer_options(category_id, &word, self.config.decoy_count);

        self.pick_category(&name, &word)?;
        self.answer_options = options;
        Ok(())
    }

    /// Move from card flipping to guessing.
    pub fn start_round(&mut self) -> Result<()> {
        self.require(self.phase == Phase::RoleAssigned, "start the round")?;
        self.require_players(self.config.min_assign_players)?;

        self.phase = Phase::InRound;
        info!("Round {} started", self.round_number);
        Ok(())
    }

    // === Guesses ===

    /// Record a legitimate player's guess at the impostor. Last write wins.
    pub fn record_suspect_guess(&mut self, guesser: PlayerId, suspect: PlayerId) -> Result<()> {
        self.require(self.phase.allows_guesses(), "record a guess")?;
        self.require_role(guesser, Role::Legitimate)?;
        if !self.registry.contains(suspect) {
            return Err(GameError::UnknownPlayer(suspect));
        }

        self.ledger.record_suspect_guess(guesser, suspect);
        Ok(())
    }

    /// Record the impostor's guess at the secret word. Last write wins.
    ///
    /// The word is not checked against the offered options.
    pub fn record_word_guess(&mut self, impostor: PlayerId, word: &str) -> Result<()> {
        self.require(self.phase.allows_guesses(), "record a guess")?;
        self.require_role(impostor, Role::Impostor)?;

        self.ledger.record_word_guess(impostor, word);
        Ok(())
    }

    /// Every legitimate player has picked a suspect and the impostor has
    /// picked a word.
    #[must_use]
    pub fn selections_complete(&self) -> bool {
        self.ledger.is_complete(self.registry.players())
    }

    // === Round end ===

    /// End the round because `player` broke secrecy.
    ///
    /// Everybody else scores +1; the ledger is left as it was but ignored.
    pub fn disqualify(&mut self, player: PlayerId) -> Result<&RoundResult> {
        self.require(self.phase == Phase::InRound, "disqualify a player")?;
        if !self.registry.contains(player) {
            return Err(GameError::UnknownPlayer(player));
        }

        self.disqualified = Some(player);
        self.phase = Phase::Revealed;
        info!("Round {}: {} disqualified", self.round_number, player);

        Ok(self.apply_scoring())
    }

    /// Reveal the impostor and score the round. Requires complete selections.
    pub fn reveal(&mut self) -> Result<&RoundResult> {
        self.require(self.phase == Phase::InRound, "reveal")?;
        let missing = self.ledger.missing(self.registry.players());
        if missing > 0 {
            warn!("Reveal refused: {} selection(s) missing", missing);
            return Err(GameError::SelectionsIncomplete { missing });
        }

        self.phase = Phase::Revealed;
        info!("Round {} revealed", self.round_number);

        Ok(self.apply_scoring())
    }

    /// The round's scoring result. Scoring happens once per round; calling
    /// this again returns the stored result without touching scores.
    pub fn score_round(&mut self) -> Result<&RoundResult> {
        self.require(self.phase == Phase::Revealed, "score the round")?;
        Ok(self.apply_scoring())
    }

    fn apply_scoring(&mut self) -> &RoundResult {
        let registry = &mut self.registry;
        let word = self.word.as_deref().unwrap_or_default();
        let ledger = &self.ledger;
        let disqualified = self.disqualified;

        self.round_result.get_or_insert_with(|| {
            let result = score_round(registry.players(), word, ledger, disqualified);
            registry.publish(result.players.clone());
            result
        })
    }

    // === Advancing ===

    /// Finish a normally scored round and bump the round number.
    pub fn continue_to_next_round(&mut self) -> Result<()> {
        self.require(
            self.phase == Phase::Revealed && self.disqualified.is_none(),
            "continue to next round",
        )?;

        self.round_number += 1;
        self.end_round();
        info!("Advanced to round {}", self.round_number);
        Ok(())
    }

    /// Finish a disqualified round. The round number stays the same.
    pub fn continue_after_disqualification(&mut self) -> Result<()> {
        self.require(
            self.phase == Phase::Revealed && self.disqualified.is_some(),
            "continue after disqualification",
        )?;

        self.end_round();
        info!("Replaying round {} after disqualification", self.round_number);
        Ok(())
    }

    fn end_round(&mut self) {
        self.ledger.clear();
        self.disqualified = None;
        self.round_result = None;
        self.category = None;
        self.word = None;
        self.answer_options.clear();
        self.phase = Phase::BetweenRounds;
    }

    /// Drop everything: roster, scores, round number, round state.
    ///
    /// The RNG is rebuilt as in `new`, so a seeded session deals the same
    /// roles after a reset as a freshly built one.
    pub fn reset_for_new_game(&mut self) {
        self.registry.clear_all();
        self.rng = fresh_rng(&self.config);
        self.round_number = 1;
        self.end_round();
        self.turn_order.clear();
        self.phase = Phase::Setup;
        info!("Game reset");
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    #[must_use]
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    /// The impostor's multiple-choice options (empty unless the category
    /// came from a `WordSupplier`).
    #[must_use]
    pub fn answer_options(&self) -> &[String] {
        &self.answer_options
    }

    #[must_use]
    pub fn players(&self) -> &im::Vector<Player> {
        self.registry.players()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.registry.get(id)
    }

    /// The current impostor, once roles have been dealt.
    #[must_use]
    pub fn impostor(&self) -> Option<&Player> {
        find_impostor(self.registry.players())
    }

    /// Legitimate players' IDs in roster order.
    #[must_use]
    pub fn legitimates(&self) -> Vec<PlayerId> {
        self.registry
            .iter()
            .filter(|p| p.is_legitimate())
            .map(|p| p.id)
            .collect()
    }

    /// Players in card-reveal order for the current round.
    pub fn turn_order(&self) -> impl Iterator<Item = &Player> {
        self.turn_order.iter().filter_map(move |id| self.registry.get(*id))
    }

    #[must_use]
    pub fn ledger(&self) -> &SelectionLedger {
        &self.ledger
    }

    #[must_use]
    pub fn disqualified(&self) -> Option<PlayerId> {
        self.disqualified
    }

    #[must_use]
    pub fn is_scored(&self) -> bool {
        self.round_result.is_some()
    }

    #[must_use]
    pub fn round_result(&self) -> Option<&RoundResult> {
        self.round_result.as_ref()
    }

    /// Immutable view for the presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            round_number: self.round_number,
            category: self.category.clone(),
            word: self.word.clone(),
            players: self.registry.players().clone(),
            ledger: self.ledger.clone(),
            selections_complete: self.selections_complete(),
            disqualified: self.disqualified,
            round_result: self.round_result.clone(),
            answer_options: self.answer_options.clone(),
            turn_order: self.turn_order.clone(),
        }
    }

    // === Guards ===

    fn require(&self, allowed: bool, action: &'static str) -> Result<()> {
        if allowed {
            Ok(())
        } else {
            warn!("Cannot {} during {}", action, self.phase);
            Err(GameError::InvalidTransition { action, phase: self.phase })
        }
    }

    fn require_players(&self, required: usize) -> Result<()> {
        let actual = self.registry.len();
        if actual < required {
            warn!("Need at least {} players, have {}", required, actual);
            return Err(GameError::InsufficientPlayers { required, actual });
        }
        Ok(())
    }

    fn require_role(&self, id: PlayerId, expected: Role) -> Result<()> {
        let player = self.registry.get(id).ok_or(GameError::UnknownPlayer(id))?;
        if player.role == Some(expected) {
            Ok(())
        } else {
            Err(GameError::WrongRole { player: id, expected })
        }
    }

    fn check_can_pick(&self) -> Result<()> {
        self.require(self.phase.allows_category_pick(), "pick a category")?;
        self.require_players(self.config.min_assign_players)
    }
}

fn fresh_rng(config: &GameConfig) -> GameRng {
    match config.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    }
}

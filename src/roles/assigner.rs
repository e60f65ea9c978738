//! Role assignment.
//!
//! Picks exactly one impostor uniformly at random over the whole roster and
//! marks everybody else legitimate. The result is a new roster snapshot;
//! the input roster is never touched.
//!
//! The same call also deals the card-reveal order: a shuffle of the roster
//! drawn from a forked RNG stream, so the reveal order cannot bias the
//! impostor draw.

use im::Vector;
use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameRng, Player, PlayerId, Role};
use crate::error::{GameError, Result};

/// Fewest players role assignment accepts.
pub const MIN_ROLE_PLAYERS: usize = 2;

/// Outcome of a role assignment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    /// Roster with roles and turn-order markers set.
    pub players: Vector<Player>,
    pub impostor: PlayerId,
    /// Everybody else, in roster order.
    pub legitimates: SmallVec<[PlayerId; 8]>,
    /// Card-reveal order.
    pub turn_order: Vec<PlayerId>,
}

/// Assign roles for a new round.
///
/// Fails with `InsufficientPlayers` for rosters smaller than two. Call it
/// once per round, at category pick.
///
/// ```
/// use im::Vector;
/// use lies_n_legends::core::{GameRng, Player, PlayerId};
/// use lies_n_legends::roles::assign_roles;
///
/// let players: Vector<Player> = ["A", "B", "C", "D"]
///     .iter()
///     .enumerate()
///     .map(|(i, name)| Player::new(PlayerId::new(i as u32), *name))
///     .collect();
///
/// let assignment = assign_roles(&players, &mut GameRng::new(42)).unwrap();
/// assert_eq!(assignment.legitimates.len(), 3);
/// assert_eq!(assignment.players.iter().filter(|p| p.is_impostor()).count(), 1);
/// ```
pub fn assign_roles(players: &Vector<Player>, rng: &mut GameRng) -> Result<RoleAssignment> {
    if players.len() < MIN_ROLE_PLAYERS {
        return Err(GameError::InsufficientPlayers {
            required: MIN_ROLE_PLAYERS,
            actual: players.len(),
        });
    }

    let impostor_index = rng.gen_index(players.len());
    let impostor = players[impostor_index].id;

    let mut turn_order: Vec<PlayerId> = players.iter().map(|p| p.id).collect();
    rng.fork().shuffle(&mut turn_order);

    let mut assigned = players.clone();
    for player in assigned.iter_mut() {
        player.role = Some(if player.id == impostor { Role::Impostor } else { Role::Legitimate });
        player.turn_order = turn_order.iter().position(|&id| id == player.id);
    }

    let legitimates = assigned
        .iter()
        .filter(|p| p.is_legitimate())
        .map(|p| p.id)
        .collect();

    debug!("Roles assigned: impostor {}, reveal order {:?}", impostor, turn_order);

    Ok(RoleAssignment {
        players: assigned,
        impostor,
        legitimates,
        turn_order,
    })
}

/// The impostor of a roster snapshot, if roles have been assigned.
#[must_use]
pub fn find_impostor(players: &Vector<Player>) -> Option<&Player> {
    players.iter().find(|p| p.is_impostor())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(n: usize) -> Vector<Player> {
        (0..n)
            .map(|i| Player::new(PlayerId::new(i as u32), format!("P{}", i)))
            .collect()
    }

    #[test]
    fn test_exactly_one_impostor() {
        let players = roster(5);
        let assignment = assign_roles(&players, &mut GameRng::new(1)).unwrap();

        let impostors: Vec<_> = assignment.players.iter().filter(|p| p.is_impostor()).collect();
        assert_eq!(impostors.len(), 1);
        assert_eq!(impostors[0].id, assignment.impostor);
        assert_eq!(assignment.legitimates.len(), 4);
        assert!(!assignment.legitimates.contains(&assignment.impostor));
        assert!(assignment.players.iter().all(|p| p.role.is_some()));
    }

    #[test]
    fn test_input_roster_untouched() {
        let players = roster(4);
        let _ = assign_roles(&players, &mut GameRng::new(1)).unwrap();

        assert!(players.iter().all(|p| p.role.is_none()));
    }

    #[test]
    fn test_previous_roles_reset() {
        let players = roster(4);
        let mut rng = GameRng::new(9);
        let first = assign_roles(&players, &mut rng).unwrap();

        for _ in 0..20 {
            let next = assign_roles(&first.players, &mut rng).unwrap();
            assert_eq!(next.players.iter().filter(|p| p.is_impostor()).count(), 1);
        }
    }

    #[test]
    fn test_turn_order_is_permutation() {
        let players = roster(6);
        let assignment = assign_roles(&players, &mut GameRng::new(3)).unwrap();

        let mut sorted = assignment.turn_order.clone();
        sorted.sort();
        let ids: Vec<_> = players.iter().map(|p| p.id).collect();
        assert_eq!(sorted, ids);

        for (position, id) in assignment.turn_order.iter().enumerate() {
            let player = assignment.players.iter().find(|p| p.id == *id).unwrap();
            assert_eq!(player.turn_order, Some(position));
        }
    }

    #[test]
    fn test_insufficient_players() {
        let err = assign_roles(&roster(1), &mut GameRng::new(1)).unwrap_err();
        assert_eq!(err, GameError::InsufficientPlayers { required: 2, actual: 1 });

        assert!(assign_roles(&roster(0), &mut GameRng::new(1)).is_err());
        assert!(assign_roles(&roster(2), &mut GameRng::new(1)).is_ok());
    }

    #[test]
    fn test_deterministic_with_seed() {
        let players = roster(5);
        let a = assign_roles(&players, &mut GameRng::new(77)).unwrap();
        let b = assign_roles(&players, &mut GameRng::new(77)).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_distribution_roughly_uniform() {
        let players = roster(4);
        let mut rng = GameRng::new(2024);
        let mut counts = [0usize; 4];

        for _ in 0..4000 {
            let assignment = assign_roles(&players, &mut rng).unwrap();
            counts[assignment.impostor.raw() as usize] += 1;
        }

        // Expected 1000 each; allow generous slack
        for count in counts {
            assert!((850..=1150).contains(&count), "counts: {:?}", counts);
        }
    }

    #[test]
    fn test_find_impostor() {
        let players = roster(3);
        assert!(find_impostor(&players).is_none());

        let assignment = assign_roles(&players, &mut GameRng::new(5)).unwrap();
        assert_eq!(find_impostor(&assignment.players).map(|p| p.id), Some(assignment.impostor));
    }
}

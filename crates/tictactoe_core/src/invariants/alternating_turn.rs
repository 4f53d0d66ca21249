//! Alternating turn invariant: sides alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Phase, Side};

/// Invariant: sides alternate turns, starting with First.
///
/// While a game is in progress the side to move is the one the history
/// says comes next.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        if let Some(first) = history.first()
            && first.side != Side::First
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].side == w[1].side) {
            return false;
        }

        if game.phase() != Phase::InProgress {
            return true;
        }

        let expected_next = if history.len() % 2 == 0 {
            Side::First
        } else {
            Side::Second
        };
        game.current_turn() == Some(expected_next)
    }

    fn description() -> &'static str {
        "Sides alternate turns (X, O, X, O, ...)"
    }
}

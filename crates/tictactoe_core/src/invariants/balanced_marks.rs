//! Mark balance invariant: X is never behind O and never two ahead.

use super::Invariant;
use crate::{GameState, Side};

/// Invariant: count of First marks minus count of Second marks is 0 or 1.
pub struct BalancedMarksInvariant;

impl Invariant<GameState> for BalancedMarksInvariant {
    fn holds(game: &GameState) -> bool {
        let board = game.board();
        let first = board.count(Side::First);
        let second = board.count(Side::Second);
        first == second || first == second + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}

//! History consistency invariant: replaying the history rebuilds the board.

use super::Invariant;
use crate::{Board, GameState};

/// Invariant: the move history, replayed on an empty board, yields exactly
/// the current board.
///
/// Every mark has a move behind it and no square was played twice.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let mut replayed = Board::new();
        for mv in game.history() {
            if replayed.place(mv.position, mv.side).is_err() {
                return false;
            }
        }
        replayed == *game.board()
    }

    fn description() -> &'static str {
        "Move history replays to the current board"
    }
}

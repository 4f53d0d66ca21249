//! Game rules for tic-tac-toe.
//!
//! Pure functions that classify a board. Rules are kept apart from board
//! storage so search and game orchestration can share them.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::check_winner;

use super::outcome::Outcome;
use super::types::Board;

/// Classifies `board` as a win, a draw or still in play.
///
/// Lines are scanned rows first, then columns, then diagonals, and the
/// first completed line decides the winner. Under alternating play only one
/// side can ever complete a line, so the order only matters for boards
/// built by hand.
pub fn evaluate_outcome(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Win(winner)
    } else if is_draw(board) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

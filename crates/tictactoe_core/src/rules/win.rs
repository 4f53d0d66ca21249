//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Side};

/// Checks if there is a winner on the board.
///
/// Returns `Some(side)` for the first line (rows, columns, diagonals) that
/// one side fills completely, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Side> {
    board.lines().into_iter().find_map(|[a, b, c]| match a {
        Cell::Occupied(side) if a == b && b == c => Some(side),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Side::First).unwrap();
        board.place(Position::TopCenter, Side::First).unwrap();
        board.place(Position::TopRight, Side::First).unwrap();
        assert_eq!(check_winner(&board), Some(Side::First));
    }

    #[test]
    fn test_winner_column() {
        let board: Board = ".OX/.OX/.O.".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Side::Second));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "XXO/.O./O.X".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Side::Second));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX./OO./...".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "XOX/.../...".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }
}

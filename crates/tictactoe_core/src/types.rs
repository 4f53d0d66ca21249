//! Core domain types for tic-tac-toe.

use super::error::{IllegalMoveError, ParseBoardError};
use super::position::{LINES, Position};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// One of the two players.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Side {
    /// Plays `X` and always moves first.
    #[strum(to_string = "X", serialize = "first")]
    First,
    /// Plays `O`.
    #[strum(to_string = "O", serialize = "second")]
    Second,
}

impl Side {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Mark drawn on the board for this side.
    pub fn symbol(self) -> char {
        match self {
            Side::First => 'X',
            Side::Second => 'O',
        }
    }
}

/// A single square of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark.
    Empty,
    /// Holds a side's mark.
    Occupied(Side),
}

impl Cell {
    /// Returns the side holding this cell, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(side) => Some(side),
        }
    }

    fn symbol(self) -> char {
        self.side().map_or('.', Side::symbol)
    }
}

/// Three cells along a row, column or diagonal.
pub type Line = [Cell; 3];

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Gets the cell at `(row, col)`, or `None` outside the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        Position::from_coords(row, col).ok().map(|pos| self.get(pos))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Checks if the cell at `pos` is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// True when no side has placed a mark yet.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| *c == Cell::Empty)
    }

    /// Places `side`'s mark at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMoveError::Occupied`] if the cell already holds a mark.
    /// The board is left untouched in that case.
    pub fn place(&mut self, pos: Position, side: Side) -> Result<(), IllegalMoveError> {
        if !self.is_empty(pos) {
            return Err(IllegalMoveError::Occupied(pos));
        }
        self.cells[pos.to_index()] = Cell::Occupied(side);
        Ok(())
    }

    /// Places `side`'s mark at `(row, col)`, rejecting coordinates off the board.
    #[instrument(skip(self))]
    pub fn place_at(
        &mut self,
        row: usize,
        col: usize,
        side: Side,
    ) -> Result<Position, IllegalMoveError> {
        let pos = Position::from_coords(row, col)?;
        self.place(pos, side)?;
        Ok(pos)
    }

    /// Writes `side`'s mark without checking the cell. Search pairs every
    /// call with [`Board::clear`].
    pub(crate) fn mark(&mut self, pos: Position, side: Side) {
        self.cells[pos.to_index()] = Cell::Occupied(side);
    }

    /// Empties the cell at `pos`.
    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.to_index()] = Cell::Empty;
    }

    /// Empty positions in board order (row-major).
    pub fn available_moves(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Number of marks `side` has on the board.
    pub fn count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(side))
            .count()
    }

    /// The three rows, top to bottom.
    pub fn rows(&self) -> [Line; 3] {
        [self.line(0), self.line(1), self.line(2)]
    }

    /// The three columns, left to right.
    pub fn columns(&self) -> [Line; 3] {
        [self.line(3), self.line(4), self.line(5)]
    }

    /// Main diagonal then anti-diagonal.
    pub fn diagonals(&self) -> [Line; 2] {
        [self.line(6), self.line(7)]
    }

    /// All eight lines: rows, then columns, then diagonals.
    pub fn lines(&self) -> [Line; 8] {
        std::array::from_fn(|i| self.line(i))
    }

    fn line(&self, i: usize) -> Line {
        LINES[i].map(|pos| self.get(pos))
    }

    /// Renders the board with empty cells numbered 1-9, for move prompts.
    pub fn numbered(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.cells[pos] {
                    Cell::Empty => char::from(b'1' + pos as u8),
                    Cell::Occupied(side) => side.symbol(),
                };
                result.push(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cells written as `X`, `O` and `.` or `_`.
    ///
    /// Whitespace and the separators `/`, `|`, `-` and `+` are ignored, so
    /// both `"XO./.X./..."`-style strings and the [`Display`](fmt::Display)
    /// output parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut filled = 0;
        for ch in s.chars() {
            let cell = match ch {
                'X' | 'x' => Cell::Occupied(Side::First),
                'O' | 'o' => Cell::Occupied(Side::Second),
                '.' | '_' => Cell::Empty,
                '/' | '|' | '-' | '+' => continue,
                c if c.is_whitespace() => continue,
                other => return Err(ParseBoardError::UnexpectedChar(other)),
            };
            if filled == 9 {
                return Err(ParseBoardError::WrongCellCount(filled + 1));
            }
            board.cells[filled] = cell;
            filled += 1;
        }
        if filled != 9 {
            return Err(ParseBoardError::WrongCellCount(filled));
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_moves_row_major() {
        let board: Board = "X.O/.X./...".parse().unwrap();
        assert_eq!(
            board.available_moves(),
            vec![
                Position::TopCenter,
                Position::MiddleLeft,
                Position::MiddleRight,
                Position::BottomLeft,
                Position::BottomCenter,
                Position::BottomRight,
            ]
        );
    }

    #[test]
    fn test_place_rejects_occupied_without_mutation() {
        let mut board = Board::new();
        board.place(Position::Center, Side::First).unwrap();
        let before = board;
        assert_eq!(
            board.place(Position::Center, Side::Second),
            Err(IllegalMoveError::Occupied(Position::Center))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_at_out_of_bounds() {
        let mut board = Board::new();
        assert_eq!(
            board.place_at(3, 0, Side::First),
            Err(IllegalMoveError::OutOfBounds { row: 3, col: 0 })
        );
        assert!(board.is_blank());
    }

    #[test]
    fn test_clear_restores_cell() {
        let mut board = Board::new();
        board.place(Position::TopRight, Side::Second).unwrap();
        board.clear(Position::TopRight);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_columns_and_diagonals_are_views() {
        let board: Board = "XO./.X./..X".parse().unwrap();
        let x = Cell::Occupied(Side::First);
        let o = Cell::Occupied(Side::Second);
        assert_eq!(board.columns()[1], [o, x, Cell::Empty]);
        assert_eq!(board.diagonals()[0], [x, x, x]);
        assert_eq!(board.rows()[0], [x, o, Cell::Empty]);
    }

    #[test]
    fn test_is_full() {
        assert!(!Board::new().is_full());
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert!(board.is_full());
        assert!(board.available_moves().is_empty());
    }

    #[test]
    fn test_display_parses_back() {
        let board: Board = "X.O/.X./O..".parse().unwrap();
        assert_eq!(board.to_string(), "X.O\n.X.\nO..");
        assert_eq!(board.to_string().parse::<Board>(), Ok(board));
    }

    #[test]
    fn test_numbered_display() {
        let mut board = Board::new();
        board.place(Position::Center, Side::First).unwrap();
        assert_eq!(board.numbered(), "1|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(ParseBoardError::WrongCellCount(2))
        );
        assert_eq!(
            "XOXOXOXOXO".parse::<Board>(),
            Err(ParseBoardError::WrongCellCount(10))
        );
        assert_eq!(
            "XOZ......".parse::<Board>(),
            Err(ParseBoardError::UnexpectedChar('Z'))
        );
    }

    #[test]
    fn test_side_parsing() {
        assert_eq!("x".parse::<Side>(), Ok(Side::First));
        assert_eq!("O".parse::<Side>(), Ok(Side::Second));
        assert_eq!("second".parse::<Side>(), Ok(Side::Second));
        assert!("z".parse::<Side>().is_err());
        assert_eq!(Side::First.to_string(), "X");
    }
}

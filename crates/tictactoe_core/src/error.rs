//! Error types for board and game operations.
//!
//! Every error here is recoverable: the call that produced it left the
//! board and game state exactly as they were.

use super::outcome::Outcome;
use super::position::Position;

/// A placement that the board cannot accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMoveError {
    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(Position),

    /// The coordinates are outside the 3x3 board.
    #[display("({row}, {col}) is outside the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

impl std::error::Error for IllegalMoveError {}

/// A request that is not allowed in the current game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidActionError {
    /// Sides can only change before the first mark of a game.
    #[display("You can change side only before a new game starts")]
    GameUnderway,

    /// No side has been chosen yet.
    #[display("Please select X or O first")]
    NoSideChosen,

    /// The game already ended; reset to play again.
    #[display("Game is already over ({})", _0)]
    GameOver(Outcome),

    /// The AI is to move.
    #[display("It is not your turn")]
    NotHumanTurn,

    /// The human is to move.
    #[display("It is not the AI's turn")]
    NotAiTurn,
}

impl std::error::Error for InvalidActionError {}

/// Any error returned by [`GameState`](crate::GameState) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum GameError {
    /// Rejected placement.
    #[display("Illegal move: {}", _0)]
    IllegalMove(IllegalMoveError),

    /// Rejected action.
    #[display("Invalid action: {}", _0)]
    InvalidAction(InvalidActionError),
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::IllegalMove(e) => Some(e),
            GameError::InvalidAction(e) => Some(e),
        }
    }
}

/// Failure to read a board from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// A character other than a mark, an empty marker or a separator.
    #[display("Unexpected character {:?} in board", _0)]
    UnexpectedChar(char),

    /// The text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(usize),
}

impl std::error::Error for ParseBoardError {}

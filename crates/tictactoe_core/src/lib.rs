//! Pure tic-tac-toe logic with an opponent that never loses.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid, its cells and derived lines.
//! - **Rules**: [`evaluate_outcome`] classifies a board as won, drawn or ongoing.
//! - **Search**: [`score`] runs minimax with alpha-beta pruning over the
//!   whole remaining tree; [`best_move`] picks the move to play.
//! - **Game**: [`GameState`] owns the board during play, enforces turn order
//!   and answers every human move with the AI's.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameState, Outcome, Side};
//!
//! let mut game = GameState::new();
//! game.choose_side(Side::First)?;
//! let turn = game.apply_human_move(0, 0)?;
//! assert_eq!(turn.moves().len(), 2);
//! assert_eq!(game.current_outcome(), Outcome::Ongoing);
//! # Ok::<(), tictactoe_core::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod game;
mod outcome;
mod position;
mod rules;
mod search;
mod tally;
mod types;

pub mod invariants;

pub use action::Move;
pub use error::{GameError, IllegalMoveError, InvalidActionError, ParseBoardError};
pub use game::{GameState, Phase, Turn};
pub use outcome::Outcome;
pub use position::{LINES, Position};
pub use rules::{check_winner, evaluate_outcome, is_draw};
pub use search::{
    DEPTH_HORIZON, MAX_BOUND, MIN_BOUND, Score, SearchStats, WIN_SCORE, best_move, is_win_score,
    rank_moves, score, score_with_stats,
};
pub use tally::Tally;
pub use types::{Board, Cell, Line, Side};

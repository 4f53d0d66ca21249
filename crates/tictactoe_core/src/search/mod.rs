//! Exhaustive game-tree search.
//!
//! [`score`] is plain minimax with alpha-beta pruning over the full tree;
//! [`best_move`] drives it once per legal move and picks the winner.
//!
//! Scores are from First's point of view: positive favours X, negative
//! favours O. A win is worth [`WIN_SCORE`] plus a bonus for every ply it
//! arrives ahead of [`DEPTH_HORIZON`], so faster wins (and slower losses)
//! are preferred.

mod minimax;
mod selector;

pub use minimax::{SearchStats, score, score_with_stats};
pub use selector::{best_move, rank_moves};

/// Evaluation of a position, from First's point of view.
pub type Score = i32;

/// Base value of a won position.
pub const WIN_SCORE: Score = 100;

/// Depth from which the speed bonus of a win is counted down.
pub const DEPTH_HORIZON: Score = 10;

/// Upper search bound. Strictly above every reachable score
/// (an immediate win scores `WIN_SCORE + DEPTH_HORIZON`).
pub const MAX_BOUND: Score = WIN_SCORE + DEPTH_HORIZON + 1;

/// Lower search bound, mirror of [`MAX_BOUND`].
pub const MIN_BOUND: Score = -MAX_BOUND;

/// True if `score` means the side it favours wins with correct play.
pub fn is_win_score(score: Score) -> bool {
    score.abs() >= WIN_SCORE
}

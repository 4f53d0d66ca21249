//! Minimax with alpha-beta pruning.

use super::{DEPTH_HORIZON, MAX_BOUND, MIN_BOUND, Score, WIN_SCORE};
use crate::rules::evaluate_outcome;
use crate::{Board, Outcome, Side};

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, terminal ones included.
    pub nodes: u64,
    /// Sibling loops abandoned because `beta <= alpha`.
    pub cutoffs: u64,
}

impl SearchStats {
    /// Adds another run's counters into this one.
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.cutoffs += other.cutoffs;
    }
}

/// Scores `board` with `side_to_move` to play, `depth` plies below the root.
///
/// First maximizes, Second minimizes. Candidates are tried in board order
/// and each is undone before the next, so `board` is identical before and
/// after the call.
pub fn score(
    board: &mut Board,
    depth: Score,
    side_to_move: Side,
    alpha: Score,
    beta: Score,
) -> Score {
    let mut stats = SearchStats::default();
    search(board, depth, side_to_move, alpha, beta, &mut stats)
}

/// Same as [`score`], also accumulating node and cutoff counts into `stats`.
pub fn score_with_stats(
    board: &mut Board,
    depth: Score,
    side_to_move: Side,
    alpha: Score,
    beta: Score,
    stats: &mut SearchStats,
) -> Score {
    search(board, depth, side_to_move, alpha, beta, stats)
}

fn search(
    board: &mut Board,
    depth: Score,
    side_to_move: Side,
    mut alpha: Score,
    mut beta: Score,
    stats: &mut SearchStats,
) -> Score {
    stats.nodes += 1;

    match evaluate_outcome(board) {
        Outcome::Win(Side::First) => return WIN_SCORE + (DEPTH_HORIZON - depth),
        Outcome::Win(Side::Second) => return -WIN_SCORE - (DEPTH_HORIZON - depth),
        Outcome::Draw => return 0,
        Outcome::Ongoing => {}
    }

    let moves = board.available_moves();

    match side_to_move {
        Side::First => {
            let mut max_eval = MIN_BOUND;
            for pos in moves {
                board.mark(pos, Side::First);
                let eval = search(board, depth + 1, Side::Second, alpha, beta, stats);
                board.clear(pos);

                max_eval = max_eval.max(eval);
                alpha = alpha.max(eval);
                if beta <= alpha {
                    stats.cutoffs += 1;
                    break;
                }
            }
            max_eval
        }
        Side::Second => {
            let mut min_eval = MAX_BOUND;
            for pos in moves {
                board.mark(pos, Side::Second);
                let eval = search(board, depth + 1, Side::First, alpha, beta, stats);
                board.clear(pos);

                min_eval = min_eval.min(eval);
                beta = beta.min(eval);
                if beta <= alpha {
                    stats.cutoffs += 1;
                    break;
                }
            }
            min_eval
        }
    }
}

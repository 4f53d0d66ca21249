//! Root move selection.

use super::minimax::{SearchStats, score_with_stats};
use super::{MAX_BOUND, MIN_BOUND, Score};
use crate::{Board, Position, Side};
use tracing::{debug, instrument, trace};

/// Scores every legal move for `side_to_move`, in board order.
///
/// Each candidate is searched with a full window, so the scores are exact
/// minimax values and can be compared across moves.
#[instrument(skip(board), fields(board = %board))]
pub fn rank_moves(board: &Board, side_to_move: Side) -> Vec<(Position, Score)> {
    let mut scratch = *board;
    let mut stats = SearchStats::default();

    let ranked: Vec<_> = board
        .available_moves()
        .into_iter()
        .map(|pos| {
            scratch.mark(pos, side_to_move);
            let mut branch = SearchStats::default();
            let score = score_with_stats(
                &mut scratch,
                0,
                side_to_move.opponent(),
                MIN_BOUND,
                MAX_BOUND,
                &mut branch,
            );
            scratch.clear(pos);
            trace!(position = ?pos, score, nodes = branch.nodes, "Scored candidate");
            stats.merge(&branch);
            (pos, score)
        })
        .collect();

    debug!(
        candidates = ranked.len(),
        nodes = stats.nodes,
        cutoffs = stats.cutoffs,
        "Search finished"
    );
    ranked
}

/// Picks the best move for `side_to_move`, or `None` on a full board.
///
/// Only a strictly better score replaces the running best (`>` for First,
/// `<` for Second), so among equal moves the first in board order wins and
/// the choice is reproducible. The board is not modified; applying the move
/// is up to the caller.
#[instrument(skip(board), fields(board = %board))]
pub fn best_move(board: &Board, side_to_move: Side) -> Option<Position> {
    let mut best: Option<(Position, Score)> = None;

    for (pos, score) in rank_moves(board, side_to_move) {
        let improves = match (best, side_to_move) {
            (None, _) => true,
            (Some((_, best_score)), Side::First) => score > best_score,
            (Some((_, best_score)), Side::Second) => score < best_score,
        };
        if improves {
            best = Some((pos, score));
        }
    }

    if let Some((pos, score)) = best {
        debug!(position = ?pos, score, side = %side_to_move, "Selected move");
    }
    best.map(|(pos, _)| pos)
}

//! Non-interactive commands: self-play and position analysis.

use anyhow::{Result, bail};
use std::io::Write;
use tictactoe_core::{Board, Outcome, Position, Side, best_move, evaluate_outcome, rank_moves};
use tracing::{info, instrument};

/// Side to move on `board`, judged by the mark counts.
///
/// X always opens, so equal counts mean X is to move and one extra X means O is.
pub fn side_to_move(board: &Board) -> Result<Side> {
    let xs = board.count(Side::First);
    let os = board.count(Side::Second);
    match xs.checked_sub(os) {
        Some(0) => Ok(Side::First),
        Some(1) => Ok(Side::Second),
        _ => bail!("Cannot tell whose turn it is with {xs} X and {os} O marks; pass --side"),
    }
}

/// Lets the engine play both sides and prints every move.
#[instrument(skip(out))]
pub fn run_selfplay(out: &mut impl Write) -> Result<Outcome> {
    let mut board = Board::new();
    let mut side = Side::First;

    let outcome = loop {
        let outcome = evaluate_outcome(&board);
        if outcome.is_terminal() {
            break outcome;
        }
        let Some(pos) = best_move(&board, side) else {
            break outcome;
        };
        board.place(pos, side)?;
        writeln!(out, "{side} -> {pos}")?;
        side = side.opponent();
    };

    writeln!(out, "{board}")?;
    writeln!(out, "{outcome}")?;
    info!(%outcome, "Self-play finished");
    Ok(outcome)
}

/// Prints the minimax score of every legal move and returns the pick.
///
/// Finished boards print their outcome and return `None`.
#[instrument(skip(board, out), fields(board = %board))]
pub fn run_analyze(
    board: &Board,
    side: Option<Side>,
    out: &mut impl Write,
) -> Result<Option<Position>> {
    writeln!(out, "{board}")?;

    let outcome = evaluate_outcome(board);
    if outcome.is_terminal() {
        writeln!(out, "{outcome}")?;
        return Ok(None);
    }

    let side = match side {
        Some(side) => side,
        None => side_to_move(board)?,
    };
    writeln!(out, "{side} to move")?;

    for (pos, score) in rank_moves(board, side) {
        writeln!(out, "  {:<20} {:>4}", pos.to_string(), score)?;
    }

    let best = best_move(board, side);
    if let Some(pos) = best {
        writeln!(out, "Best: {pos}")?;
    }
    Ok(best)
}

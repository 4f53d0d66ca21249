//! Game orchestration: one human against the search.
//!
//! [`GameState`] is the only owner of the authoritative board. It enforces
//! turn order and phase rules, asks the rules module whether a game is over
//! and delegates AI turns to the move selector.

use super::error::{GameError, InvalidActionError};
use super::invariants::{GameInvariants, InvariantSet};
use super::rules::evaluate_outcome;
use super::search::best_move;
use super::{Board, Cell, Move, Outcome, Position, Side, Tally};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Where the game is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// The human has not picked X or O yet.
    AwaitingSideSelection,
    /// Moves are being played.
    InProgress,
    /// The game ended; reset to play again.
    Terminal(Outcome),
}

/// What one call into [`GameState`] did to the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    moves: Vec<Move>,
    outcome: Outcome,
}

impl Turn {
    fn new() -> Self {
        Self {
            moves: Vec::new(),
            outcome: Outcome::Ongoing,
        }
    }

    /// Moves applied, in order (human first, then any AI reply).
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The AI's move, if it played during this call.
    pub fn ai_move(&self, human: Side) -> Option<Move> {
        self.moves.iter().copied().find(|mv| mv.side != human)
    }

    /// Outcome of the board after the call.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

/// State of an interactive session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) to_move: Side,
    pub(crate) human: Option<Side>,
    pub(crate) phase: Phase,
    pub(crate) history: Vec<Move>,
    pub(crate) tally: Tally,
}

impl GameState {
    /// Creates a session waiting for the human to pick a side.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Side::First,
            human: None,
            phase: Phase::AwaitingSideSelection,
            history: Vec::new(),
            tally: Tally::default(),
        }
    }

    /// Picks the human's side and starts a fresh game.
    ///
    /// Sides can only change on an empty board: before the first choice, or
    /// after [`reset`](Self::reset). If the AI plays First it opens
    /// immediately, and the returned [`Turn`] holds that move.
    ///
    /// # Errors
    ///
    /// [`InvalidActionError::GameUnderway`] if a side was already chosen and
    /// the board has any mark, finished games included.
    #[instrument(skip(self))]
    pub fn choose_side(&mut self, side: Side) -> Result<Turn, GameError> {
        if self.human.is_some() && !self.board.is_blank() {
            return Err(InvalidActionError::GameUnderway.into());
        }

        self.human = Some(side);
        info!(human = %side, "Side chosen");
        self.clear_board();

        let mut turn = Turn::new();
        if self.ai_side() == Some(Side::First) {
            self.play_ai(&mut turn)?;
        }
        Ok(turn)
    }

    /// Plays the human's mark at `(row, col)`, then lets the AI answer.
    ///
    /// # Errors
    ///
    /// - [`InvalidActionError::NoSideChosen`] before [`choose_side`](Self::choose_side).
    /// - [`InvalidActionError::GameOver`] once the game has ended.
    /// - [`InvalidActionError::NotHumanTurn`] if the AI is to move.
    /// - [`IllegalMoveError`](crate::IllegalMoveError) for coordinates off
    ///   the board or an occupied cell.
    #[instrument(skip(self))]
    pub fn apply_human_move(&mut self, row: usize, col: usize) -> Result<Turn, GameError> {
        let human = self.playable_side()?;
        if self.to_move != human {
            return Err(InvalidActionError::NotHumanTurn.into());
        }

        let position = self.board.place_at(row, col, human)?;

        let mut turn = Turn::new();
        self.record(Move::new(human, position), &mut turn);

        if self.phase == Phase::InProgress && self.to_move != human {
            self.play_ai(&mut turn)?;
        }
        Ok(turn)
    }

    /// Lets the AI play its move.
    ///
    /// [`apply_human_move`](Self::apply_human_move) and
    /// [`choose_side`](Self::choose_side) trigger it on their own. After a
    /// [`reset`](Self::reset) that leaves the AI to open, the host calls it.
    ///
    /// # Errors
    ///
    /// [`InvalidActionError::NoSideChosen`], [`InvalidActionError::GameOver`]
    /// or [`InvalidActionError::NotAiTurn`].
    #[instrument(skip(self))]
    pub fn apply_ai_move(&mut self) -> Result<Turn, GameError> {
        let human = self.playable_side()?;
        if self.to_move == human {
            return Err(InvalidActionError::NotAiTurn.into());
        }

        let mut turn = Turn::new();
        self.play_ai(&mut turn)?;
        Ok(turn)
    }

    /// Clears the board and starts over with the same sides.
    ///
    /// The board stays empty even when the AI plays First, so the human may
    /// still switch sides; [`apply_ai_move`](Self::apply_ai_move) plays the
    /// opening.
    ///
    /// # Errors
    ///
    /// [`InvalidActionError::NoSideChosen`] before any side was picked.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<(), GameError> {
        if self.human.is_none() {
            return Err(InvalidActionError::NoSideChosen.into());
        }
        self.clear_board();
        Ok(())
    }

    /// Empty positions in board order.
    pub fn available_moves(&self) -> Vec<Position> {
        self.board.available_moves()
    }

    /// Outcome of the current board.
    pub fn current_outcome(&self) -> Outcome {
        evaluate_outcome(&self.board)
    }

    /// Side to move while a game is in progress.
    pub fn current_turn(&self) -> Option<Side> {
        match self.phase {
            Phase::InProgress => Some(self.to_move),
            Phase::AwaitingSideSelection | Phase::Terminal(_) => None,
        }
    }

    /// Cell at `(row, col)`, or `None` outside the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.cell(row, col)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The human's side, once chosen.
    pub fn human_side(&self) -> Option<Side> {
        self.human
    }

    /// The AI's side, once the human has chosen.
    pub fn ai_side(&self) -> Option<Side> {
        self.human.map(Side::opponent)
    }

    /// Moves of the current game, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Results of every finished game this session.
    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// The human's side, provided a game is in progress.
    fn playable_side(&self) -> Result<Side, InvalidActionError> {
        match (self.phase, self.human) {
            (Phase::Terminal(outcome), _) => Err(InvalidActionError::GameOver(outcome)),
            (Phase::InProgress, Some(human)) => Ok(human),
            _ => Err(InvalidActionError::NoSideChosen),
        }
    }

    fn clear_board(&mut self) {
        self.board = Board::new();
        self.history.clear();
        self.to_move = Side::First;
        self.phase = Phase::InProgress;
        debug!("New game");
    }

    fn play_ai(&mut self, turn: &mut Turn) -> Result<(), GameError> {
        let side = self.to_move;
        let Some(position) = best_move(&self.board, side) else {
            return Ok(());
        };
        self.board.place(position, side)?;
        info!(side = %side, position = ?position, "AI moved");
        self.record(Move::new(side, position), turn);
        Ok(())
    }

    /// Books a move that is already on the board and advances the phase.
    fn record(&mut self, mv: Move, turn: &mut Turn) {
        self.history.push(mv);
        turn.moves.push(mv);

        let outcome = evaluate_outcome(&self.board);
        turn.outcome = outcome;
        if outcome.is_terminal() {
            self.phase = Phase::Terminal(outcome);
            if let Some(human) = self.human {
                self.tally.record(outcome, human);
            }
            info!(%outcome, tally = %self.tally, "Game over");
        } else {
            self.to_move = mv.side.opponent();
        }

        self.assert_invariants();
    }

    fn assert_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = GameInvariants::check_all(self)
        {
            for violation in &violations {
                warn!(description = %violation.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "Game invariants violated");
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IllegalMoveError;

    fn started(side: Side) -> GameState {
        let mut game = GameState::new();
        game.choose_side(side).unwrap();
        game
    }

    #[test]
    fn test_new_game_awaits_side() {
        let game = GameState::new();
        assert_eq!(game.phase(), Phase::AwaitingSideSelection);
        assert_eq!(game.current_turn(), None);
        assert_eq!(game.current_outcome(), Outcome::Ongoing);
        assert_eq!(game.available_moves().len(), 9);
    }

    #[test]
    fn test_moves_rejected_before_side_chosen() {
        let mut game = GameState::new();
        assert_eq!(
            game.apply_human_move(0, 0),
            Err(InvalidActionError::NoSideChosen.into())
        );
        assert_eq!(game.apply_ai_move(), Err(InvalidActionError::NoSideChosen.into()));
        assert_eq!(game.reset(), Err(InvalidActionError::NoSideChosen.into()));
        assert!(game.board().is_blank());
    }

    #[test]
    fn test_human_first_gets_ai_reply() {
        let mut game = started(Side::First);
        assert_eq!(game.current_turn(), Some(Side::First));

        let turn = game.apply_human_move(0, 0).unwrap();
        assert_eq!(turn.moves().len(), 2);
        assert_eq!(turn.moves()[0], Move::new(Side::First, Position::TopLeft));
        assert_eq!(
            turn.ai_move(Side::First),
            Some(Move::new(Side::Second, Position::Center))
        );
        assert_eq!(turn.outcome(), Outcome::Ongoing);
        assert_eq!(game.current_turn(), Some(Side::First));
    }

    #[test]
    fn test_ai_opens_when_human_is_second() {
        let mut game = GameState::new();
        let turn = game.choose_side(Side::Second).unwrap();
        assert_eq!(turn.moves().len(), 1);
        assert_eq!(turn.moves()[0].side, Side::First);
        assert_eq!(game.board().count(Side::First), 1);
        assert_eq!(game.current_turn(), Some(Side::Second));
        assert_eq!(game.ai_side(), Some(Side::First));
    }

    #[test]
    fn test_occupied_cell_rejected_without_mutation() {
        let mut game = started(Side::First);
        game.apply_human_move(0, 0).unwrap();
        let board = *game.board();
        let history = game.history().to_vec();

        assert_eq!(
            game.apply_human_move(1, 1),
            Err(IllegalMoveError::Occupied(Position::Center).into())
        );
        assert_eq!(*game.board(), board);
        assert_eq!(game.history(), history.as_slice());
        assert_eq!(game.current_turn(), Some(Side::First));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut game = started(Side::First);
        assert_eq!(
            game.apply_human_move(0, 3),
            Err(IllegalMoveError::OutOfBounds { row: 0, col: 3 }.into())
        );
        assert!(game.board().is_blank());
    }

    #[test]
    fn test_ai_move_rejected_on_human_turn() {
        let mut game = started(Side::First);
        assert_eq!(game.apply_ai_move(), Err(InvalidActionError::NotAiTurn.into()));
        assert!(game.board().is_blank());
    }

    #[test]
    fn test_change_side_mid_game_rejected() {
        let mut game = started(Side::First);
        game.apply_human_move(2, 2).unwrap();
        let before = *game.board();
        assert_eq!(
            game.choose_side(Side::Second),
            Err(InvalidActionError::GameUnderway.into())
        );
        assert_eq!(game.human_side(), Some(Side::First));
        assert_eq!(*game.board(), before);
    }

    #[test]
    fn test_change_side_on_fresh_board() {
        let mut game = started(Side::First);
        game.choose_side(Side::Second).unwrap();
        assert_eq!(game.human_side(), Some(Side::Second));
    }

    #[test]
    fn test_change_side_after_ai_opening_rejected() {
        let mut game = started(Side::Second);
        let opened = *game.board();
        assert!(!opened.is_blank());

        assert_eq!(
            game.choose_side(Side::First),
            Err(InvalidActionError::GameUnderway.into())
        );
        assert_eq!(*game.board(), opened);
        assert_eq!(game.human_side(), Some(Side::Second));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_change_side_after_reset() {
        let mut game = started(Side::Second);
        game.reset().unwrap();
        assert!(game.board().is_blank());

        game.choose_side(Side::First).unwrap();
        assert_eq!(game.human_side(), Some(Side::First));
        assert_eq!(game.current_turn(), Some(Side::First));
        assert!(game.board().is_blank());
    }

    #[test]
    fn test_finished_game_is_counted_and_locked() {
        let mut game = started(Side::First);
        let mut last = game.apply_human_move(0, 1).unwrap();
        for (row, col) in [(1, 0), (2, 1), (1, 2), (0, 0), (0, 2), (2, 0), (2, 2), (1, 1)] {
            if last.outcome().is_terminal() {
                break;
            }
            if game.cell(row, col) != Some(Cell::Empty) {
                continue;
            }
            last = game.apply_human_move(row, col).unwrap();
        }

        assert_eq!(last.outcome(), game.current_outcome());
        assert!(matches!(game.phase(), Phase::Terminal(_)));
        assert_ne!(game.current_outcome().winner(), Some(Side::First));
        assert_eq!(game.tally().games(), 1);
        assert_eq!(game.tally().wins(), 0);
        assert_eq!(game.current_turn(), None);

        assert!(matches!(
            game.apply_human_move(0, 0),
            Err(GameError::InvalidAction(InvalidActionError::GameOver(_)))
        ));
        assert!(matches!(
            game.apply_ai_move(),
            Err(GameError::InvalidAction(InvalidActionError::GameOver(_)))
        ));

        // The finished board stays locked until reset.
        let finished = *game.board();
        assert_eq!(
            game.choose_side(Side::Second),
            Err(InvalidActionError::GameUnderway.into())
        );
        assert_eq!(*game.board(), finished);
        assert_eq!(game.human_side(), Some(Side::First));

        game.reset().unwrap();
        let turn = game.choose_side(Side::Second).unwrap();
        assert_eq!(turn.moves().len(), 1);
        assert_eq!(game.phase(), Phase::InProgress);
        assert_eq!(game.tally().games(), 1);
    }

    #[test]
    fn test_reset_keeps_side_and_waits_for_ai_opening() {
        let mut game = started(Side::Second);
        game.reset().unwrap();
        assert_eq!(game.phase(), Phase::InProgress);
        assert!(game.history().is_empty());
        assert_eq!(game.human_side(), Some(Side::Second));
        assert_eq!(game.current_turn(), Some(Side::First));
        assert_eq!(game.tally().games(), 0);

        assert_eq!(game.apply_human_move(0, 0), Err(InvalidActionError::NotHumanTurn.into()));
        let turn = game.apply_ai_move().unwrap();
        assert_eq!(turn.moves(), &[Move::new(Side::First, Position::TopLeft)]);
        assert_eq!(game.current_turn(), Some(Side::Second));
    }
}

//! Line-oriented terminal front end.
//!
//! Reads commands from any [`BufRead`], renders to any [`Write`], and keeps
//! every rule inside [`GameState`]. Errors from the game are shown to the
//! player and the loop carries on.

use crate::config::PlayConfig;
use anyhow::Result;
use derive_more::Display;
use std::io::{BufRead, Write};
use tictactoe_core::{GameState, Move, Outcome, Phase, Position, Side, rank_moves};
use tracing::{debug, instrument, warn};

const HELP: &str =
    "Commands: x | o (choose side), 1-9 or \"row col\" (move), go (AI opens), reset, help, quit";

/// One parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Pick a side (and start a fresh game).
    Choose(Side),
    /// Place a mark at zero-based `(row, col)`.
    Place {
        /// Row, 0-2.
        row: usize,
        /// Column, 0-2.
        col: usize,
    },
    /// Let the AI play its opening after a reset.
    Go,
    /// Start the next game with the same sides.
    Reset,
    /// Show the command list.
    Help,
    /// Leave the program.
    Quit,
}

/// Input that isn't a command.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("Unrecognised input {:?}. {}", _0, HELP)]
pub struct InputError(String);

impl std::error::Error for InputError {}

/// Parses a line typed by the player.
///
/// Cells are numbered 1-9 row by row, as in [`Board::numbered`](tictactoe_core::Board::numbered);
/// `"row col"` takes zero-based coordinates.
pub fn parse_input(line: &str) -> Result<Input, InputError> {
    let trimmed = line.trim();
    let lower = trimmed.to_ascii_lowercase();
    match lower.as_str() {
        "reset" | "r" | "restart" => return Ok(Input::Reset),
        "go" | "g" | "ai" => return Ok(Input::Go),
        "help" | "h" | "?" => return Ok(Input::Help),
        "quit" | "q" | "exit" => return Ok(Input::Quit),
        _ => {}
    }
    if let Ok(side) = lower.parse::<Side>() {
        return Ok(Input::Choose(side));
    }

    let numbers: Vec<usize> = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(str::parse)
        .collect::<Result<_, _>>()
        .map_err(|_| InputError(trimmed.to_string()))?;

    match numbers.as_slice() {
        [cell @ 1..=9] => Ok(Input::Place {
            row: (cell - 1) / 3,
            col: (cell - 1) % 3,
        }),
        [row, col] => Ok(Input::Place { row: *row, col: *col }),
        _ => Err(InputError(trimmed.to_string())),
    }
}

/// An interactive session bound to an input and an output stream.
pub struct Console<R, W> {
    input: R,
    output: W,
    game: GameState,
    show_scores: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console for the given streams and settings.
    pub fn new(input: R, output: W, config: &PlayConfig) -> Self {
        Self {
            input,
            output,
            game: GameState::new(),
            show_scores: *config.show_scores(),
        }
        .with_side(*config.human_side())
    }

    fn with_side(mut self, side: Option<Side>) -> Self {
        if let Some(side) = side
            && let Err(e) = self.game.choose_side(side)
        {
            warn!(error = %e, "Preselected side rejected");
        }
        self
    }

    /// The game being played.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Runs until the player quits or input ends.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Tic Tac Toe | Minimax AI")?;
        writeln!(self.output, "{HELP}")?;
        match self.game.human_side() {
            Some(side) => {
                writeln!(self.output, "You are {side}")?;
                let opening = self.game.history().to_vec();
                self.render_turn(&opening)?;
            }
            None => writeln!(self.output, "Select your symbol: x or o")?,
        }

        let mut line = String::new();
        loop {
            self.prompt()?;
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("Input closed");
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            let input = match parse_input(&line) {
                Ok(input) => input,
                Err(e) => {
                    writeln!(self.output, "{e}")?;
                    continue;
                }
            };
            debug!(?input, "Player input");

            let result = match input {
                Input::Quit => break,
                Input::Help => {
                    writeln!(self.output, "{HELP}")?;
                    continue;
                }
                Input::Choose(side) => {
                    let result = self.game.choose_side(side);
                    if result.is_ok() {
                        writeln!(self.output, "You are {side}")?;
                    }
                    result
                }
                Input::Reset => {
                    match self.game.reset() {
                        Ok(()) => self.render_turn(&[])?,
                        Err(e) => writeln!(self.output, "! {e}")?,
                    }
                    continue;
                }
                Input::Go => self.game.apply_ai_move(),
                Input::Place { row, col } => self.game.apply_human_move(row, col),
            };

            match result {
                Ok(turn) => self.render_turn(turn.moves())?,
                Err(e) => writeln!(self.output, "! {e}")?,
            }
        }

        writeln!(self.output, "{}", self.game.tally())?;
        self.output.flush()?;
        Ok(())
    }

    fn prompt(&mut self) -> Result<()> {
        let text = match self.game.phase() {
            Phase::AwaitingSideSelection => "side> ",
            Phase::Terminal(_) => "reset> ",
            Phase::InProgress if self.ai_to_open() => "go or x/o> ",
            Phase::InProgress => "move> ",
        };
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    fn render_turn(&mut self, moves: &[Move]) -> Result<()> {
        let human = self.game.human_side();
        for mv in moves {
            if Some(mv.side) != human {
                writeln!(self.output, "AI plays {}", mv.position)?;
                if self.show_scores {
                    self.print_scores(mv.side, mv.position)?;
                }
            }
        }
        writeln!(self.output, "{}", self.game.board().numbered())?;

        if let (Phase::Terminal(outcome), Some(human)) = (self.game.phase(), human) {
            writeln!(self.output, "{}", verdict(outcome, human))?;
            writeln!(self.output, "{}", self.game.tally())?;
        } else if self.ai_to_open() {
            writeln!(self.output, "AI opens: type go, or x/o to switch sides")?;
        }
        Ok(())
    }

    /// Empty board with the AI to move, which only follows a reset.
    fn ai_to_open(&self) -> bool {
        self.game.board().is_blank()
            && self.game.current_turn().is_some()
            && self.game.current_turn() == self.game.ai_side()
    }

    /// Scores the AI saw on the board it moved from.
    fn print_scores(&mut self, side: Side, played: Position) -> Result<()> {
        let mut before = *self.game.board();
        before.clear(played);
        for (pos, score) in rank_moves(&before, side) {
            let marker = if pos == played { " *" } else { "" };
            writeln!(self.output, "  {:<20} {:>4}{marker}", pos.to_string(), score)?;
        }
        Ok(())
    }
}

/// Result line shown to the human.
pub fn verdict(outcome: Outcome, human: Side) -> &'static str {
    match outcome {
        Outcome::Win(side) if side == human => "You won!",
        Outcome::Win(_) => "You lost.",
        Outcome::Draw => "Draw.",
        Outcome::Ongoing => "Game in progress.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numbered_cells() {
        assert_eq!(parse_input("1"), Ok(Input::Place { row: 0, col: 0 }));
        assert_eq!(parse_input(" 5 \n"), Ok(Input::Place { row: 1, col: 1 }));
        assert_eq!(parse_input("9"), Ok(Input::Place { row: 2, col: 2 }));
    }

    #[test]
    fn test_parse_coordinates() {
        assert_eq!(parse_input("2 0"), Ok(Input::Place { row: 2, col: 0 }));
        assert_eq!(parse_input("0,2"), Ok(Input::Place { row: 0, col: 2 }));
        // Range checks belong to the game.
        assert_eq!(parse_input("3 3"), Ok(Input::Place { row: 3, col: 3 }));
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_input("X"), Ok(Input::Choose(Side::First)));
        assert_eq!(parse_input("o"), Ok(Input::Choose(Side::Second)));
        assert_eq!(parse_input("reset"), Ok(Input::Reset));
        assert_eq!(parse_input("go"), Ok(Input::Go));
        assert_eq!(parse_input("Quit"), Ok(Input::Quit));
        assert_eq!(parse_input("?"), Ok(Input::Help));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_input("0").is_err());
        assert!(parse_input("10").is_err());
        assert!(parse_input("1 2 3").is_err());
        assert!(parse_input("center").is_err());
    }

    #[test]
    fn test_verdict_is_from_human_view() {
        assert_eq!(verdict(Outcome::Win(Side::Second), Side::Second), "You won!");
        assert_eq!(verdict(Outcome::Win(Side::First), Side::Second), "You lost.");
        assert_eq!(verdict(Outcome::Draw, Side::First), "Draw.");
    }
}

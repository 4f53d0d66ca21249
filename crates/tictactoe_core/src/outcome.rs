//! Result of evaluating a board.

use super::types::Side;
use serde::{Deserialize, Serialize};

/// Classification of a board position.
///
/// Always derived from a board on demand, never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A side has three in a row.
    Win(Side),
    /// The board is full with no winner.
    Draw,
    /// Moves remain and nobody has won.
    Ongoing,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::Win(side) => Some(*side),
            Outcome::Draw | Outcome::Ongoing => None,
        }
    }

    /// True for wins and draws.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(side) => write!(f, "{side} wins"),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::Ongoing => write!(f, "In progress"),
        }
    }
}

//! Running results across games.

use super::{Outcome, Side};
use serde::{Deserialize, Serialize};

/// Wins, losses and draws counted from the human's side of the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    wins: u32,
    losses: u32,
    draws: u32,
}

impl Tally {
    /// Counts a finished game. Ongoing outcomes are ignored.
    pub fn record(&mut self, outcome: Outcome, human: Side) {
        match outcome {
            Outcome::Win(side) if side == human => self.wins += 1,
            Outcome::Win(_) => self.losses += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Ongoing => {}
        }
    }

    /// Games the human won.
    pub fn wins(&self) -> u32 {
        self.wins
    }

    /// Games the AI won.
    pub fn losses(&self) -> u32 {
        self.losses
    }

    /// Drawn games.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Finished games.
    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Wins: {} | Losses: {} | Draws: {}",
            self.wins, self.losses, self.draws
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_human_perspective() {
        let mut tally = Tally::default();
        tally.record(Outcome::Win(Side::Second), Side::Second);
        tally.record(Outcome::Win(Side::First), Side::Second);
        tally.record(Outcome::Draw, Side::Second);
        tally.record(Outcome::Ongoing, Side::Second);
        assert_eq!((tally.wins(), tally.losses(), tally.draws()), (1, 1, 1));
        assert_eq!(tally.games(), 3);
        assert_eq!(tally.to_string(), "Wins: 1 | Losses: 1 | Draws: 1");
    }
}

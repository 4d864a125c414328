//! Per-side state and the match scoreboard.

use core::cmp::Ordering;

use crate::hand::Hand;
use crate::result::{MatchWinner, RoundOutcome};

/// One side of the table: the round's hand plus match-long counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Player {
    /// Cards held this round.
    pub hand: Hand,
    /// Rounds won this match.
    pub wins: u32,
    /// Rounds lost by going over 21 this match.
    pub busts: u32,
}

impl Player {
    /// Creates a player with no cards and no score.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(),
            wins: 0,
            busts: 0,
        }
    }
}

/// Match-level state for the human and the computer.
///
/// A fresh scoreboard is created per match and handed to every round, which
/// records its outcome here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    /// The human player.
    pub human: Player,
    /// The computer opponent.
    pub computer: Player,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            human: Player::new(),
            computer: Player::new(),
        }
    }

    /// Clears both hands at the start of a round.
    pub fn reset_hands(&mut self) {
        self.human.hand.clear();
        self.computer.hand.clear();
    }

    /// Updates the counters for a finished round.
    pub fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::HumanTwentyOne
            | RoundOutcome::HumanCloser
            | RoundOutcome::HumanFewerCards => {
                self.human.wins += 1;
            }
            RoundOutcome::ComputerBust => {
                self.computer.busts += 1;
                self.human.wins += 1;
            }
            RoundOutcome::HumanBust => {
                self.human.busts += 1;
                self.computer.wins += 1;
            }
            RoundOutcome::ComputerCloser | RoundOutcome::ComputerOnCardCount => {
                self.computer.wins += 1;
            }
            RoundOutcome::Tie => {}
        }
    }

    /// Decides the match: most wins, then fewest busts.
    #[must_use]
    pub fn winner(&self) -> MatchWinner {
        let by_busts = || match self.human.busts.cmp(&self.computer.busts) {
            Ordering::Less => MatchWinner::Human,
            Ordering::Greater => MatchWinner::Computer,
            Ordering::Equal => MatchWinner::Tie,
        };

        match self.human.wins.cmp(&self.computer.wins) {
            Ordering::Greater => MatchWinner::Human,
            Ordering::Less => MatchWinner::Computer,
            Ordering::Equal => by_busts(),
        }
    }
}

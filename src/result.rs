//! Round and match result types.

use core::fmt;

use crate::player::Scoreboard;

/// How a single round was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The human reached exactly 21.
    HumanTwentyOne,
    /// The human went over 21.
    HumanBust,
    /// The computer went over 21.
    ComputerBust,
    /// The human finished closer to 21.
    HumanCloser,
    /// The computer finished closer to 21.
    ComputerCloser,
    /// Equal tallies; the human held fewer cards.
    HumanFewerCards,
    /// Equal tallies; the computer held fewer or as many cards.
    ComputerOnCardCount,
    /// Equal tallies with a human hand under three cards.
    Tie,
}

impl RoundOutcome {
    /// Returns the line announced for this outcome.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::HumanTwentyOne => "21! You win!",
            Self::HumanBust => "Bust!",
            Self::ComputerBust => "Computer busts! Player wins!",
            Self::HumanCloser => "Player wins off tally!",
            Self::ComputerCloser => "Computer wins off tally!",
            Self::HumanFewerCards => "Player wins off card count!",
            Self::ComputerOnCardCount => "Computer wins off card count!",
            Self::Tie => "It's a tie!",
        }
    }
}

/// Snapshot of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// How the round was decided.
    pub outcome: RoundOutcome,
    /// The human's final tally.
    pub human_tally: u8,
    /// Cards in the human's hand.
    pub human_cards: usize,
    /// The computer's final tally, if the computer played.
    pub computer_tally: Option<u8>,
    /// Cards the computer drew.
    pub computer_cards: usize,
}

/// Overall match winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchWinner {
    /// The human won more rounds, or as many with fewer busts.
    Human,
    /// The computer won more rounds, or as many with fewer busts.
    Computer,
    /// Same wins and same busts.
    Tie,
}

impl fmt::Display for MatchWinner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Human => "You win!",
            Self::Computer => "Computer wins!",
            Self::Tie => "It's a tie!",
        })
    }
}

/// Result of a whole match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Final counters for both sides.
    pub score: Scoreboard,
    /// Rounds played, including the final split round.
    pub rounds: usize,
    /// Whether the final split round was played.
    pub split_round_played: bool,
    /// The match winner.
    pub winner: MatchWinner,
}

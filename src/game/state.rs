//! Round phase types.

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundPhase {
    /// No round in progress.
    #[default]
    Waiting,
    /// Dealing the opening cards.
    Dealing,
    /// Waiting for the human to hit or sit.
    AwaitingDecision,
    /// The computer draws its hand.
    ComputerPlay,
    /// Comparing both hands.
    Adjudication,
    /// Round has ended and the scoreboard is updated.
    RoundOver,
}

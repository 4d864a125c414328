//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors that can occur when dealing a new round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards in the deck to deal the opening hand.
    #[error("not enough cards in the deck: {remaining} left")]
    NotEnoughCards {
        /// Cards left in the deck when the deal was attempted.
        remaining: usize,
    },
}

impl From<DeckError> for DealError {
    fn from(_: DeckError) -> Self {
        Self::NotEnoughCards { remaining: 0 }
    }
}

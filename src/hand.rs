//! Hands and their running tally.

use crate::card::{Card, TWENTY_ONE};

/// Reorders cards so every Ace comes after every other card.
///
/// Non-Aces keep their relative order, as do the Aces.
#[must_use]
pub fn aces_last(cards: &[Card]) -> Vec<Card> {
    let (mut ordered, aces): (Vec<Card>, Vec<Card>) =
        cards.iter().copied().partition(|card| !card.is_ace());
    ordered.extend(aces);
    ordered
}

/// Tallies cards in sequence, valuing each against the tally before it.
#[must_use]
pub fn tally_of(cards: &[Card]) -> u8 {
    cards
        .iter()
        .fold(0, |tally, card| tally.saturating_add(card.value_for(tally)))
}

/// Status of a hand's tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Under 21, the hand can keep drawing.
    Active,
    /// Exactly 21.
    TwentyOne,
    /// Over 21.
    Bust,
}

/// One side's cards for the current round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, Aces last.
    cards: Vec<Card>,
    /// Running tally.
    tally: u8,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            tally: 0,
        }
    }

    /// Builds a hand from a batch of cards.
    ///
    /// The cards are put Aces-last and tallied in that order, so every Ace
    /// sees the full contribution of the other cards.
    ///
    /// # Example
    ///
    /// ```
    /// use bjvs::{Card, Hand, Rank, Suit};
    ///
    /// let hand = Hand::from_cards(&[
    ///     Card::new(Rank::Ace, Suit::Spades),
    ///     Card::new(Rank::King, Suit::Hearts),
    /// ]);
    /// assert_eq!(hand.tally(), 21);
    /// ```
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        let cards = aces_last(cards);
        let tally = tally_of(&cards);
        Self { cards, tally }
    }

    /// Adds a drawn card to the hand.
    ///
    /// Only the new card's value is added to the running tally; earlier cards
    /// keep the value they were given. The hand is re-sorted when the card is
    /// an Ace. Returns the value the card contributed.
    pub fn add_card(&mut self, card: Card) -> u8 {
        let value = card.value_for(self.tally);
        self.tally = self.tally.saturating_add(value);
        self.cards.push(card);
        if card.is_ace() {
            self.cards = aces_last(&self.cards);
        }
        value
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the running tally.
    #[must_use]
    pub const fn tally(&self) -> u8 {
        self.tally
    }

    /// Returns how far the tally is from 21, or `None` once it is over.
    #[must_use]
    pub const fn distance(&self) -> Option<u8> {
        TWENTY_ONE.checked_sub(self.tally)
    }

    /// Returns the status of the tally.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        if self.tally > TWENTY_ONE {
            HandStatus::Bust
        } else if self.tally == TWENTY_ONE {
            HandStatus::TwentyOne
        } else {
            HandStatus::Active
        }
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.tally = 0;
    }
}

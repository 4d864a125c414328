//! The shuffled deck a match is played from.

use log::debug;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// A single 52-card deck.
///
/// Cards are drawn from the end of the underlying vector. The deck is never
/// replenished, so it only shrinks over the course of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck shuffled with a [`ChaCha8Rng`] seeded from `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjvs::Deck;
    ///
    /// let deck = Deck::from_seed(7);
    /// assert_eq!(deck.remaining(), 52);
    /// assert_eq!(deck, Deck::from_seed(7));
    /// ```
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        debug!("shuffling deck with seed {seed}");
        Self::shuffled(&mut rng)
    }

    /// Creates a full deck shuffled with the given random source.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Self::fresh_cards();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Creates a deck holding exactly `cards`.
    ///
    /// The last element is the top of the deck and is drawn first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Every rank and suit combination, unshuffled.
    fn fresh_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        cards
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Removes every remaining card, in index order.
    pub fn take_all(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.cards)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards; the top card is last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

//! Card types and scoring values.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
}

impl Suit {
    /// All four suits in deck construction order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Clubs, Self::Diamonds, Self::Hearts];

    const fn name(self) -> &'static str {
        match self {
            Self::Spades => "Spades",
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
        }
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace, worth 11 or 1.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All thirteen ranks in deck construction order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }
}

/// Highest tally that is not a bust.
pub const TWENTY_ONE: u8 = 21;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns whether the card is an Ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        matches!(self.rank, Rank::Ace)
    }

    /// Returns the scoring value of the card given the tally accumulated so far.
    ///
    /// An Ace counts 11 when that keeps `running_tally` at or under 21, and 1
    /// otherwise. The choice is made against the partial tally only, so a later
    /// card never turns a soft Ace hard again.
    ///
    /// # Example
    ///
    /// ```
    /// use bjvs::{Card, Rank, Suit};
    ///
    /// let ace = Card::new(Rank::Ace, Suit::Spades);
    /// assert_eq!(ace.value_for(10), 11);
    /// assert_eq!(ace.value_for(11), 1);
    /// ```
    #[must_use]
    pub const fn value_for(&self, running_tally: u8) -> u8 {
        match self.rank {
            Rank::Ace => {
                if running_tally.saturating_add(11) <= TWENTY_ONE {
                    11
                } else {
                    1
                }
            }
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank.name(), self.suit.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pip_and_face_values() {
        for (rank, expected) in Rank::ALL.iter().skip(1).zip(2..=10) {
            assert_eq!(Card::new(*rank, Suit::Hearts).value_for(0), expected);
        }
        for rank in [Rank::Jack, Rank::Queen, Rank::King] {
            assert_eq!(Card::new(rank, Suit::Clubs).value_for(15), 10);
        }
    }

    #[test]
    fn ace_is_soft_only_while_it_fits() {
        let ace = Card::new(Rank::Ace, Suit::Diamonds);
        assert_eq!(ace.value_for(0), 11);
        assert_eq!(ace.value_for(10), 11);
        assert_eq!(ace.value_for(11), 1);
        assert_eq!(ace.value_for(20), 1);
        assert_eq!(ace.value_for(u8::MAX), 1);
    }

    #[test]
    fn display_names_rank_and_suit() {
        assert_eq!(
            Card::new(Rank::Queen, Suit::Hearts).to_string(),
            "Queen of Hearts"
        );
        assert_eq!(Card::new(Rank::Seven, Suit::Spades).to_string(), "7 of Spades");
    }
}

//! A text-mode blackjack match against a scripted computer opponent.
//!
//! The crate provides a [`Game`] type that runs a whole match from one shuffled
//! deck: dealing, the human's hit/sit decisions, the computer's fixed strategy,
//! round adjudication, and the final split of the last few cards.
//!
//! # Example
//!
//! ```no_run
//! use bjvs::{Game, MatchOptions, StdConsole};
//!
//! let mut game = Game::new(MatchOptions::default(), 42, StdConsole);
//! let result = game.play_match();
//! let _ = result.winner;
//! ```

pub mod card;
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, TWENTY_ONE};
pub use console::{Console, ScriptedConsole, StdConsole};
pub use deck::Deck;
pub use error::{DealError, DeckError};
pub use game::{FINAL_SPLIT_LIMIT, Game, RoundPhase, adjudicate};
pub use hand::{Hand, HandStatus, aces_last, tally_of};
pub use options::{DEFAULT_HIT_TOKEN, MatchOptions};
pub use player::{Player, Scoreboard};
pub use result::{MatchResult, MatchWinner, RoundOutcome, RoundResult};

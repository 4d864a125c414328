//! Match engine and round flow.

use log::{info, warn};

use crate::console::Console;
use crate::deck::Deck;
use crate::options::MatchOptions;
use crate::player::Scoreboard;
use crate::result::MatchResult;

mod computer;
mod round;
pub mod state;

pub use computer::adjudicate;
pub use state::RoundPhase;

/// Regular rounds are dealt while more cards than this remain.
pub const FINAL_SPLIT_LIMIT: usize = 4;

/// A blackjack match between one human and the computer.
///
/// The game owns the deck and the console. Match counters live in a
/// [`Scoreboard`] that is passed into every round.
pub struct Game<C: Console> {
    /// Cards left for this match.
    deck: Deck,
    /// Session options.
    options: MatchOptions,
    /// Current round phase.
    phase: RoundPhase,
    /// Text session collaborator.
    console: C,
}

impl<C: Console> Game<C> {
    /// Creates a new game with a deck shuffled from `seed`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bjvs::{Game, MatchOptions, StdConsole};
    ///
    /// let mut game = Game::new(MatchOptions::default(), 42, StdConsole);
    /// let result = game.play_match();
    /// println!("{}", result.winner);
    /// ```
    #[must_use]
    pub fn new(options: MatchOptions, seed: u64, console: C) -> Self {
        Self::with_deck(options, Deck::from_seed(seed), console)
    }

    /// Creates a new game playing from a prepared deck.
    #[must_use]
    pub const fn with_deck(options: MatchOptions, deck: Deck, console: C) -> Self {
        Self {
            deck,
            options,
            phase: RoundPhase::Waiting,
            console,
        }
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Returns the options.
    #[must_use]
    pub const fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Returns the current round phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns the console.
    #[must_use]
    pub const fn console(&self) -> &C {
        &self.console
    }

    /// Consumes the game and returns its console.
    #[must_use]
    pub fn into_console(self) -> C {
        self.console
    }

    /// Plays rounds until the deck runs low, then the final split round, and
    /// announces the winner.
    pub fn play_match(&mut self) -> MatchResult {
        self.console.say("");
        self.console.say("Welcome to Blackjack.");
        self.console
            .say("Try to get as close to 21 as possible without going over.");
        self.console.say("");

        let mut score = Scoreboard::new();
        let mut rounds = 0;

        while self.deck.remaining() > FINAL_SPLIT_LIMIT {
            if let Err(err) = self.play_round(&mut score) {
                warn!("stopping regular rounds: {err}");
                break;
            }
            rounds += 1;

            if self.options.pause_between_rounds {
                self.console.say("");
                let _ = self.console.ask("Press enter to continue.");
            }
        }

        let split_round_played = self.play_final_split(&mut score).is_some();
        if split_round_played {
            rounds += 1;
        }

        self.print_score(&score);

        let winner = score.winner();
        self.console.say("");
        self.console.say(&winner.to_string());
        self.console.say("");
        self.console.say("Thanks for playing.");
        info!(
            "match over after {rounds} rounds: {winner:?} (human {}/{}, computer {}/{})",
            score.human.wins, score.human.busts, score.computer.wins, score.computer.busts
        );

        MatchResult {
            score,
            rounds,
            split_round_played,
            winner,
        }
    }

    /// Prints wins and busts for both sides and the cards left.
    pub(crate) fn print_score(&mut self, score: &Scoreboard) {
        let remaining = self.deck.remaining();
        self.console.say("Player: ");
        self.console.say(&format!(
            "{} wins, {} busts!",
            score.human.wins, score.human.busts
        ));
        self.console.say("Computer: ");
        self.console.say(&format!(
            "{} wins, {} busts!",
            score.computer.wins, score.computer.busts
        ));
        self.console.say(&format!("Cards remaining: {remaining}"));
    }
}

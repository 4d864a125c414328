use log::trace;

use crate::card::TWENTY_ONE;
use crate::console::Console;
use crate::hand::Hand;
use crate::result::RoundOutcome;

use super::Game;

/// The computer keeps drawing while its tally is below this.
pub const COMPUTER_STANDS_AT: u8 = 16;

/// With fewer cards than this left, the computer takes all but the last one.
pub const DRAIN_BELOW: usize = 3;

/// Human hands smaller than this tie on equal tallies.
const SMALL_HAND: usize = 3;

/// Decides a round in which both sides stopped drawing.
///
/// A computer bust hands the round to the human. Otherwise the tally closer
/// to 21 wins. Equal tallies are a tie when the human holds fewer than three
/// cards; past that the side with fewer cards wins and equal counts go to the
/// computer.
///
/// # Example
///
/// ```
/// use bjvs::{RoundOutcome, adjudicate};
///
/// assert_eq!(adjudicate(18, 2, 19, 3), RoundOutcome::ComputerCloser);
/// assert_eq!(adjudicate(20, 2, 20, 4), RoundOutcome::Tie);
/// ```
#[must_use]
pub const fn adjudicate(
    human_tally: u8,
    human_cards: usize,
    computer_tally: u8,
    computer_cards: usize,
) -> RoundOutcome {
    if human_tally > TWENTY_ONE {
        return RoundOutcome::HumanBust;
    }
    if computer_tally > TWENTY_ONE {
        return RoundOutcome::ComputerBust;
    }

    let human_distance = TWENTY_ONE - human_tally;
    let computer_distance = TWENTY_ONE - computer_tally;

    if human_distance < computer_distance {
        RoundOutcome::HumanCloser
    } else if computer_distance < human_distance {
        RoundOutcome::ComputerCloser
    } else if human_cards < SMALL_HAND {
        RoundOutcome::Tie
    } else if human_cards < computer_cards {
        RoundOutcome::HumanFewerCards
    } else {
        RoundOutcome::ComputerOnCardCount
    }
}

impl<C: Console> Game<C> {
    /// Draws the computer's hand.
    ///
    /// The computer hits below 16. Near the end of the deck (fewer than three
    /// cards) it instead takes every card but the last, whatever its tally.
    pub(crate) fn computer_play(&mut self, hand: &mut Hand) {
        let remaining = self.deck.remaining();

        if remaining < DRAIN_BELOW {
            for _ in 0..remaining.saturating_sub(1) {
                let Ok(card) = self.deck.draw() else {
                    break;
                };
                hand.add_card(card);
                trace!(
                    "computer takes {card} from the last cards, tally {}",
                    hand.tally()
                );
            }
            return;
        }

        while hand.tally() < COMPUTER_STANDS_AT {
            let Ok(card) = self.deck.draw() else {
                break;
            };
            hand.add_card(card);
            trace!("computer hits {card}, tally {}", hand.tally());
        }
    }

    /// Announces both hands and adjudicates them.
    pub(crate) fn showdown(&mut self, human: &Hand, computer: &Hand) -> RoundOutcome {
        self.console.say(&format!(
            "AI got {} in {} cards.",
            computer.tally(),
            computer.len()
        ));

        let outcome = adjudicate(
            human.tally(),
            human.len(),
            computer.tally(),
            computer.len(),
        );
        if outcome == RoundOutcome::ComputerBust {
            self.console.say(outcome.message());
            return outcome;
        }

        self.console.say(&format!(
            "Player got {} in {} cards.",
            human.tally(),
            human.len()
        ));
        self.console.say("");
        outcome
    }
}

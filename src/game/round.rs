use log::{debug, info};

use crate::console::Console;
use crate::error::DealError;
use crate::hand::{Hand, HandStatus};
use crate::player::Scoreboard;
use crate::result::{RoundOutcome, RoundResult};

use super::{FINAL_SPLIT_LIMIT, Game, RoundPhase};

/// Cards dealt to the human at the start of a round.
const OPENING_CARDS: usize = 2;

/// Ends the human's turn once the hand reaches or passes 21.
const fn settle_human(hand: &Hand) -> Option<RoundOutcome> {
    match hand.status() {
        HandStatus::Active => None,
        HandStatus::TwentyOne => Some(RoundOutcome::HumanTwentyOne),
        HandStatus::Bust => Some(RoundOutcome::HumanBust),
    }
}

impl<C: Console> Game<C> {
    /// Plays one regular round and records it on `score`.
    ///
    /// The human is dealt two cards, then hits until they sit, reach 21, go
    /// bust, or the deck runs out. Unless the human already reached 21 or went
    /// bust, the computer then draws and both hands are compared.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if fewer than two cards remain.
    pub fn play_round(&mut self, score: &mut Scoreboard) -> Result<RoundResult, DealError> {
        let remaining = self.deck.remaining();
        if remaining < OPENING_CARDS {
            return Err(DealError::NotEnoughCards { remaining });
        }

        score.reset_hands();
        self.phase = RoundPhase::Dealing;
        self.console.say("Dealing cards... ");

        let mut opening = Vec::with_capacity(OPENING_CARDS);
        for _ in 0..OPENING_CARDS {
            let card = self.deck.draw()?;
            self.console.say(&card.to_string());
            opening.push(card);
        }
        score.human.hand = Hand::from_cards(&opening);
        debug!(
            "dealt {:?}, tally {}",
            score.human.hand.cards(),
            score.human.hand.tally()
        );

        if let Some(outcome) = settle_human(&score.human.hand) {
            return Ok(self.finish(score, outcome));
        }

        self.console.say(&format!(
            "Your current tally is {}",
            score.human.hand.tally()
        ));
        self.console.say("");

        self.phase = RoundPhase::AwaitingDecision;
        if let Some(outcome) = self.human_turn(&mut score.human.hand) {
            return Ok(self.finish(score, outcome));
        }

        self.phase = RoundPhase::ComputerPlay;
        self.console.say("Tallying scores... ");
        self.computer_play(&mut score.computer.hand);

        self.phase = RoundPhase::Adjudication;
        let outcome = self.showdown(&score.human.hand, &score.computer.hand);
        Ok(self.finish(score, outcome))
    }

    /// Asks the human to hit or sit until the turn ends.
    ///
    /// Returns the outcome if the hand reached 21 or went bust. Sitting, or an
    /// empty deck, returns `None`.
    fn human_turn(&mut self, hand: &mut Hand) -> Option<RoundOutcome> {
        let token = self.options.hit_token;

        while !self.deck.is_empty() {
            self.console
                .say(&format!("Type {token} to hit, or press enter to sit."));
            let answer = self.console.ask("What would you like to do? ");
            self.console.say("");
            if answer != token {
                break;
            }

            self.console.say("Dealt... ");
            let Ok(card) = self.deck.draw() else {
                break;
            };
            self.console.say(&card.to_string());
            hand.add_card(card);
            debug!("human hits {card}, tally {}", hand.tally());

            if let Some(outcome) = settle_human(hand) {
                return Some(outcome);
            }
            self.console
                .say(&format!("Your current tally is {}", hand.tally()));
        }

        None
    }

    /// Splits what is left of a nearly empty deck between both sides.
    ///
    /// Runs only when between one and four cards remain and the count is
    /// even. The first half by index goes to the human, the rest to the
    /// computer, and neither side hits. Returns `None` when skipped.
    pub fn play_final_split(&mut self, score: &mut Scoreboard) -> Option<RoundResult> {
        let remaining = self.deck.remaining();
        if remaining == 0 || remaining > FINAL_SPLIT_LIMIT || remaining % 2 != 0 {
            debug!("skipping final split with {remaining} cards left");
            return None;
        }

        score.reset_hands();
        self.phase = RoundPhase::Dealing;
        self.console.say("Splitting the remaining cards... ");

        let cards = self.deck.take_all();
        let (human, computer) = cards.split_at(remaining / 2);
        for card in human {
            self.console.say(&card.to_string());
        }
        score.human.hand = Hand::from_cards(human);
        score.computer.hand = Hand::from_cards(computer);

        self.phase = RoundPhase::Adjudication;
        let outcome = match settle_human(&score.human.hand) {
            Some(outcome) => outcome,
            None => self.showdown(&score.human.hand, &score.computer.hand),
        };
        Some(self.finish(score, outcome))
    }

    /// Records the outcome, announces it, and closes the round.
    fn finish(&mut self, score: &mut Scoreboard, outcome: RoundOutcome) -> RoundResult {
        let computer_played = self.phase == RoundPhase::Adjudication;
        score.record(outcome);

        match outcome {
            RoundOutcome::HumanBust => self.console.say(&format!(
                "Bust! You got {}!",
                score.human.hand.tally()
            )),
            // Already announced during the showdown.
            RoundOutcome::ComputerBust => {}
            _ => self.console.say(outcome.message()),
        }
        self.console.say("");
        if self.options.show_score {
            self.print_score(score);
        }

        self.phase = RoundPhase::RoundOver;
        info!(
            "round over: {outcome:?}, human {} in {} cards, {} cards left",
            score.human.hand.tally(),
            score.human.hand.len(),
            self.deck.remaining()
        );

        RoundResult {
            outcome,
            human_tally: score.human.hand.tally(),
            human_cards: score.human.hand.len(),
            computer_tally: computer_played.then_some(score.computer.hand.tally()),
            computer_cards: score.computer.hand.len(),
        }
    }
}

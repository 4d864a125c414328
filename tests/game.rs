//! Game integration tests.

use bjvs::{
    Card, DealError, Deck, FINAL_SPLIT_LIMIT, Game, MatchOptions, MatchWinner, Rank, RoundOutcome,
    RoundPhase, Scoreboard, ScriptedConsole, Suit,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Builds a deck that hands out `draws` in order.
fn deck_from_draws(draws: &[Card]) -> Deck {
    let mut cards: Vec<Card> = draws.to_vec();
    cards.reverse();
    Deck::from_cards(cards)
}

fn quiet() -> MatchOptions {
    MatchOptions::default().with_pause_between_rounds(false)
}

fn game(draws: &[Card], inputs: &[&str]) -> Game<ScriptedConsole> {
    Game::with_deck(
        quiet(),
        deck_from_draws(draws),
        ScriptedConsole::new(inputs.iter().copied()),
    )
}

const FILLER: [Card; 3] = [
    card(Rank::Two, Suit::Hearts),
    card(Rank::Two, Suit::Diamonds),
    card(Rank::Two, Suit::Clubs),
];

fn with_filler(draws: &[Card]) -> Vec<Card> {
    let mut cards = draws.to_vec();
    cards.extend(FILLER);
    cards
}

#[test]
fn options_builder_sets_fields() {
    let options = MatchOptions::default()
        .with_hit_token("hit")
        .with_pause_between_rounds(false)
        .with_show_score(false);

    assert_eq!(options.hit_token, "hit");
    assert!(!options.pause_between_rounds);
    assert!(!options.show_score);
    assert_eq!(MatchOptions::default().hit_token, "h");
}

#[test]
fn natural_twenty_one_wins_without_a_prompt() {
    let draws = with_filler(&[
        card(Rank::Ace, Suit::Spades),
        card(Rank::King, Suit::Hearts),
    ]);
    let mut game = game(&draws, &[]);
    let mut score = Scoreboard::new();

    let result = game.play_round(&mut score).unwrap();

    assert_eq!(result.outcome, RoundOutcome::HumanTwentyOne);
    assert_eq!(result.human_tally, 21);
    assert_eq!(result.computer_tally, None);
    assert_eq!(score.human.wins, 1);
    assert_eq!(score.computer.wins, 0);
    assert_eq!(game.console().prompts(), 0);
    assert!(game.console().printed("21! You win!"));
    assert_eq!(game.phase(), RoundPhase::RoundOver);
}

#[test]
fn hitting_past_twenty_one_busts_without_computer_play() {
    let draws = with_filler(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Six, Suit::Clubs),
        card(Rank::Nine, Suit::Spades),
    ]);
    let mut game = game(&draws, &["h"]);
    let mut score = Scoreboard::new();

    let result = game.play_round(&mut score).unwrap();

    assert_eq!(result.outcome, RoundOutcome::HumanBust);
    assert_eq!(result.human_tally, 25);
    assert_eq!(score.human.busts, 1);
    assert_eq!(score.computer.wins, 1);
    assert!(score.computer.hand.is_empty());
    assert_eq!(game.cards_remaining(), FILLER.len());
    assert!(game.console().printed("Bust! You got 25!"));
    assert!(!game.console().printed("Tallying scores"));
}

#[test]
fn sitting_lets_the_computer_draw_to_sixteen() {
    let draws = with_filler(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Eight, Suit::Clubs),
        card(Rank::Nine, Suit::Spades),
        card(Rank::Ten, Suit::Diamonds),
    ]);
    let mut game = game(&draws, &[""]);
    let mut score = Scoreboard::new();

    let result = game.play_round(&mut score).unwrap();

    assert_eq!(result.outcome, RoundOutcome::ComputerCloser);
    assert_eq!(result.human_tally, 18);
    assert_eq!(result.computer_tally, Some(19));
    assert_eq!(result.computer_cards, 2);
    assert_eq!(score.computer.wins, 1);
    assert_eq!(game.cards_remaining(), FILLER.len());
    assert!(game.console().printed("AI got 19 in 2 cards."));
}

#[test]
fn hit_token_is_case_sensitive() {
    let draws = with_filler(&[
        card(Rank::Five, Suit::Hearts),
        card(Rank::Six, Suit::Clubs),
        card(Rank::Ten, Suit::Spades),
        card(Rank::Nine, Suit::Diamonds),
    ]);
    let mut game = game(&draws, &["H"]);
    let mut score = Scoreboard::new();

    let result = game.play_round(&mut score).unwrap();

    assert_eq!(result.human_cards, 2);
    assert_eq!(result.outcome, RoundOutcome::ComputerCloser);
    assert_eq!(game.console().prompts(), 1);
}

#[test]
fn custom_hit_token_is_honored() {
    let draws = with_filler(&[
        card(Rank::Five, Suit::Hearts),
        card(Rank::Six, Suit::Clubs),
        card(Rank::Ten, Suit::Spades),
    ]);
    let mut game = Game::with_deck(
        quiet().with_hit_token("hit"),
        deck_from_draws(&draws),
        ScriptedConsole::new(["hit"]),
    );
    let mut score = Scoreboard::new();

    let result = game.play_round(&mut score).unwrap();

    assert_eq!(result.outcome, RoundOutcome::HumanTwentyOne);
    assert_eq!(result.human_cards, 3);
}

#[test]
fn computer_bust_credits_the_human() {
    let draws = with_filler(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Nine, Suit::Clubs),
        card(Rank::Ten, Suit::Spades),
        card(Rank::Five, Suit::Diamonds),
        card(Rank::King, Suit::Clubs),
    ]);
    let mut game = game(&draws, &[""]);
    let mut score = Scoreboard::new();

    let result = game.play_round(&mut score).unwrap();

    assert_eq!(result.outcome, RoundOutcome::ComputerBust);
    assert_eq!(result.computer_tally, Some(25));
    assert_eq!(score.computer.busts, 1);
    assert_eq!(score.human.wins, 1);
    assert!(game.console().printed("Computer busts! Player wins!"));
}

#[test]
fn equal_tallies_with_two_card_hand_tie() {
    let draws = with_filler(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Queen, Suit::Clubs),
        card(Rank::King, Suit::Spades),
        card(Rank::Queen, Suit::Diamonds),
    ]);
    let mut game = game(&draws, &[""]);
    let mut score = Scoreboard::new();

    let result = game.play_round(&mut score).unwrap();

    assert_eq!(result.outcome, RoundOutcome::Tie);
    assert_eq!((score.human.wins, score.computer.wins), (0, 0));
    assert_eq!((score.human.busts, score.computer.busts), (0, 0));
    assert!(game.console().printed("It's a tie!"));
}

#[test]
fn drawn_ace_goes_last_and_card_count_decides() {
    let draws = with_filler(&[
        card(Rank::Five, Suit::Hearts),
        card(Rank::Four, Suit::Clubs),
        card(Rank::Ace, Suit::Spades),
        card(Rank::King, Suit::Spades),
        card(Rank::Queen, Suit::Diamonds),
    ]);
    let mut game = game(&draws, &["h", ""]);
    let mut score = Scoreboard::new();

    let result = game.play_round(&mut score).unwrap();

    assert_eq!(result.human_tally, 20);
    assert_eq!(
        score.human.hand.cards().last(),
        Some(&card(Rank::Ace, Suit::Spades))
    );
    // Three cards against two on equal tallies.
    assert_eq!(result.outcome, RoundOutcome::ComputerOnCardCount);
    assert_eq!(score.computer.wins, 1);
}

#[test]
fn fewer_cards_win_equal_tallies_for_the_human() {
    let draws = with_filler(&[
        card(Rank::Five, Suit::Hearts),
        card(Rank::Four, Suit::Clubs),
        card(Rank::Ace, Suit::Spades),
        card(Rank::Two, Suit::Spades),
        card(Rank::Three, Suit::Diamonds),
        card(Rank::Four, Suit::Diamonds),
        card(Rank::Five, Suit::Clubs),
        card(Rank::Six, Suit::Clubs),
    ]);
    let mut game = game(&draws, &["h", ""]);
    let mut score = Scoreboard::new();

    let result = game.play_round(&mut score).unwrap();

    assert_eq!(result.computer_tally, Some(20));
    assert_eq!(result.computer_cards, 5);
    assert_eq!(result.outcome, RoundOutcome::HumanFewerCards);
    assert_eq!(score.human.wins, 1);
}

#[test]
fn empty_deck_ends_the_hit_loop() {
    let draws = [
        card(Rank::Two, Suit::Hearts),
        card(Rank::Three, Suit::Clubs),
        card(Rank::Four, Suit::Spades),
    ];
    let mut game = game(&draws, &["h", "h"]);
    let mut score = Scoreboard::new();

    let result = game.play_round(&mut score).unwrap();

    assert_eq!(game.console().prompts(), 1);
    assert_eq!(result.human_tally, 9);
    assert_eq!(result.computer_cards, 0);
    assert_eq!(result.outcome, RoundOutcome::HumanCloser);
    assert!(game.deck().is_empty());
}

#[test]
fn dealing_needs_two_cards() {
    let mut game = game(&[card(Rank::Two, Suit::Hearts)], &[]);
    let mut score = Scoreboard::new();

    assert_eq!(
        game.play_round(&mut score).unwrap_err(),
        DealError::NotEnoughCards { remaining: 1 }
    );
    assert_eq!(game.cards_remaining(), 1);
}

#[test]
fn four_cards_left_are_split() {
    let deck = Deck::from_cards(vec![
        card(Rank::King, Suit::Hearts),
        card(Rank::Nine, Suit::Clubs),
        card(Rank::Ten, Suit::Spades),
        card(Rank::Seven, Suit::Diamonds),
    ]);
    let mut game = Game::with_deck(quiet(), deck, ScriptedConsole::default());

    let result = game.play_match();

    assert!(result.split_round_played);
    assert_eq!(result.rounds, 1);
    assert_eq!(result.score.human.hand.tally(), 19);
    assert_eq!(result.score.computer.hand.tally(), 17);
    assert_eq!(result.score.human.wins, 1);
    assert_eq!(result.winner, MatchWinner::Human);
    assert!(game.deck().is_empty());
    assert_eq!(game.console().prompts(), 0);
}

#[test]
fn odd_remainder_skips_the_split() {
    let deck = Deck::from_cards(vec![
        card(Rank::King, Suit::Hearts),
        card(Rank::Nine, Suit::Clubs),
        card(Rank::Ten, Suit::Spades),
    ]);
    let mut game = Game::with_deck(quiet(), deck, ScriptedConsole::default());

    let result = game.play_match();

    assert!(!result.split_round_played);
    assert_eq!(result.rounds, 0);
    assert_eq!(result.winner, MatchWinner::Tie);
    assert_eq!(game.cards_remaining(), 3);

    let console = game.into_console();
    assert!(console.printed("It's a tie!"));
    assert_eq!(
        console.output().last().map(String::as_str),
        Some("Thanks for playing.")
    );
}

#[test]
fn rounds_pause_for_enter() {
    let draws = [
        card(Rank::Ace, Suit::Spades),
        card(Rank::King, Suit::Hearts),
        card(Rank::Two, Suit::Hearts),
        card(Rank::Three, Suit::Clubs),
        card(Rank::Four, Suit::Spades),
    ];
    let mut game = Game::with_deck(
        MatchOptions::default(),
        deck_from_draws(&draws),
        ScriptedConsole::new(["ignored"]),
    );

    let result = game.play_match();

    assert_eq!(result.rounds, 1);
    assert_eq!(result.winner, MatchWinner::Human);
    assert_eq!(game.console().prompts(), 1);
    assert!(game.console().printed("Press enter to continue."));
}

#[test]
fn seeded_match_plays_out_the_deck() {
    let mut game = Game::new(quiet(), 2024, ScriptedConsole::default());

    let result = game.play_match();

    assert!(result.rounds >= 1);
    assert!(game.cards_remaining() <= FINAL_SPLIT_LIMIT);
    if result.split_round_played {
        assert!(game.deck().is_empty());
    }
    assert_eq!(result.winner, result.score.winner());
    assert!(game.console().printed("Cards remaining:"));
}

#[test]
fn same_seed_same_match() {
    let play = |seed| {
        let mut game = Game::new(quiet(), seed, ScriptedConsole::new(["h", "", "h", "h"]));
        let result = game.play_match();
        (result, game.into_console().output().to_vec())
    };

    assert_eq!(play(11), play(11));
}

//! Interactive blackjack against the computer.

use std::time::{SystemTime, UNIX_EPOCH};

use bjvs::{Game, MatchOptions, StdConsole};

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64;
    log::debug!("match seed {seed}");

    let mut game = Game::new(MatchOptions::default(), seed, StdConsole);
    game.play_match();
}

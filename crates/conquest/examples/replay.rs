//! Play a synthetic game and print the score after each word.
//!
//! Usage:
//!   cargo run -p conquest --example replay -- [turns] [seed]
//!
//! Prints one line per turn: word, disk point, score, delta, hull vertex count.

use std::sync::Arc;

use conquest::api::{synthetic_vocabulary, synthetic_word, Game, SyntheticCfg};

fn main() {
    let mut args = std::env::args().skip(1);
    let turns: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(20);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);
    let cfg = SyntheticCfg {
        words: turns,
        half_width: 3.0,
    };
    let vocab = match synthetic_vocabulary(cfg, seed) {
        Ok(v) => Arc::new(v),
        Err(e) => {
            eprintln!("replay: {e}");
            return;
        }
    };
    let mut game = Game::new(vocab);
    for i in 0..turns {
        let word = synthetic_word(i);
        let Ok(turn) = game.try_submit(&word) else {
            continue;
        };
        let hull_len = game.state().hull.as_ref().map_or(0, |h| h.len());
        println!(
            "{word}: ({:+.3}, {:+.3}) score={} ({:+}) hull={}",
            turn.point.x, turn.point.y, turn.score, turn.score_delta, hull_len
        );
    }
}

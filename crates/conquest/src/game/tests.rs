use super::*;
use crate::cfg::GameCfg;
use crate::embed::rand::{synthetic_vocabulary, synthetic_word, SyntheticCfg};
use crate::embed::Vocabulary;
use std::sync::Arc;
use std::thread;

fn abc_game() -> Game {
    // a → (0,0), b → (0.5,0), c → (0,0.5)
    let vocab =
        Vocabulary::from_entries([("a", [0.0, 0.0]), ("b", [1.0, 0.0]), ("c", [0.0, 1.0])])
            .unwrap();
    Game::new(Arc::new(vocab))
}

fn synthetic_game(words: usize, seed: u64) -> Game {
    let cfg = SyntheticCfg {
        words,
        half_width: 3.0,
    };
    Game::new(Arc::new(synthetic_vocabulary(cfg, seed).unwrap()))
}

#[test]
fn triangle_scores_area_times_ten_thousand() {
    let mut g = abc_game();
    assert_eq!(g.submit("a").score, 0);
    assert_eq!(g.submit("b").score, 0);
    let r = g.submit("c");
    assert!(r.accepted);
    assert_eq!(r.score, 1250);
    assert_eq!(r.score_delta, 1250);
    assert_eq!(r.hull.len(), 3);
    assert_eq!(r.points.len(), 3);
    assert_eq!(r.error_message, None);
}

#[test]
fn resubmitting_a_word_adds_a_point_but_not_area() {
    let mut g = abc_game();
    for w in ["a", "b", "c"] {
        g.submit(w);
    }
    let r = g.submit("C");
    assert!(r.accepted);
    assert_eq!(g.state().history.len(), 4);
    assert_eq!(r.score, 1250);
    assert_eq!(r.score_delta, 0);
    assert_eq!(r.points[3].word, "C");
}

#[test]
fn unknown_word_leaves_state_untouched() {
    let mut g = abc_game();
    for w in ["a", "b", "c"] {
        g.submit(w);
    }
    let before = g.snapshot();
    let hull_before = g.state().hull.clone();

    let r = g.submit("bird");
    assert!(!r.accepted);
    assert_eq!(r.score, before.score);
    assert_eq!(r.score_delta, before.score_delta);
    assert_eq!(r.hull, before.hull);
    assert_eq!(r.points, before.points);
    assert_eq!(g.state().hull, hull_before);
    assert_eq!(
        r.error_message.as_deref(),
        Some("The word \"bird\" was not found in the vocabulary. Please try another word.")
    );
    assert_eq!(
        g.state().last_error,
        Some(GameError::WordNotFound {
            word: "bird".into()
        })
    );
}

#[test]
fn next_accepted_word_clears_error() {
    let mut g = abc_game();
    assert!(g.try_submit("zebra").is_err());
    assert!(!g.snapshot().accepted);
    let turn = g.try_submit("a").unwrap();
    assert_eq!(turn.score, 0);
    assert!(g.state().last_error.is_none());
    assert!(g.snapshot().accepted);
}

#[test]
fn first_rejection_on_empty_game() {
    let mut g = abc_game();
    let r = g.submit("nope");
    assert!(!r.accepted);
    assert!(r.hull.is_empty());
    assert!(r.points.is_empty());
    assert!(g.state().hull.is_none());
}

#[test]
fn reset_starts_a_fresh_session() {
    let mut g = abc_game();
    for w in ["a", "b", "c", "x"] {
        g.submit(w);
    }
    g.reset();
    let s = g.state();
    assert!(s.history.is_empty());
    assert!(s.hull.is_none());
    assert_eq!((s.score, s.score_delta), (0, 0));
    assert!(s.last_error.is_none());
    assert!(g.vocabulary().contains("a"));
}

#[test]
fn score_never_drops_with_shipped_concavity() {
    let mut g = synthetic_game(300, 5);
    let mut last = 0u64;
    for i in 0..300 {
        let turn = g.try_submit(&synthetic_word(i)).unwrap();
        assert!(turn.score_delta >= 0, "word {i}: delta {}", turn.score_delta);
        assert_eq!(turn.score as i64 - last as i64, turn.score_delta);
        assert!(turn.point.norm() < 1.0);
        last = turn.score;
    }
    // Hull of many points spread over the disk covers a good part of it.
    assert!(last > 10_000);
}

#[test]
fn custom_concavity_hull_encloses_history() {
    let cfg = GameCfg {
        concavity: 0.2,
        ..GameCfg::default()
    };
    let vocab = synthetic_vocabulary(
        SyntheticCfg {
            words: 80,
            half_width: 2.0,
        },
        17,
    )
    .unwrap();
    let mut g = Game::with_cfg(Arc::new(vocab), cfg);
    for i in 0..80 {
        g.submit(&synthetic_word(i));
    }
    let hull = g.state().hull.as_ref().unwrap();
    for e in g.state().history.entries() {
        assert!(hull.contains(e.point));
    }
}

#[test]
fn response_serializes_with_camel_case_keys() {
    let mut g = abc_game();
    g.submit("a");
    let ok = serde_json::to_value(g.submit("b")).unwrap();
    assert_eq!(ok["accepted"], true);
    assert_eq!(ok["scoreDelta"], 0);
    assert!(ok.get("errorMessage").is_none());
    assert_eq!(ok["points"][1]["word"], "b");
    assert_eq!(ok["points"][1]["x"], 0.5);

    let bad = serde_json::to_value(g.submit("??")).unwrap();
    assert_eq!(bad["accepted"], false);
    assert!(bad["errorMessage"].as_str().unwrap().contains("\"??\""));
}

#[test]
fn shared_game_serializes_concurrent_submissions() {
    let shared = SharedGame::new(synthetic_game(100, 23));
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let s = shared.clone();
            thread::spawn(move || {
                for i in 0..25 {
                    assert!(s.submit(&synthetic_word(t * 25 + i)).accepted);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    // Hull depends only on the point set, so any interleaving ends at the same score.
    let mut sequential = synthetic_game(100, 23);
    for i in 0..100 {
        sequential.submit(&synthetic_word(i));
    }
    let snap = shared.snapshot();
    assert_eq!(snap.points.len(), 100);
    assert_eq!(snap.score, sequential.state().score);
    assert_eq!(shared.with(|g| g.state().history.len()), 100);
}

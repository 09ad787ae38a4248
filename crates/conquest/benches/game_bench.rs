//! Criterion benchmark for a full game: N submissions, hull rebuilt after each.

use std::sync::Arc;

use conquest::api::{synthetic_vocabulary, synthetic_word, Game, SyntheticCfg};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_game(c: &mut Criterion) {
    let cfg = SyntheticCfg {
        words: 200,
        half_width: 3.0,
    };
    let vocab = Arc::new(synthetic_vocabulary(cfg, 2025).expect("finite half_width"));
    let mut group = c.benchmark_group("game");
    for &turns in &[10usize, 50, 200] {
        group.bench_with_input(BenchmarkId::new("replay", turns), &turns, |b, &turns| {
            b.iter(|| {
                let mut g = Game::new(vocab.clone());
                for i in 0..turns {
                    g.submit(&synthetic_word(i));
                }
                g.state().score
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_game);
criterion_main!(benches);

//! Seeded synthetic vocabularies for demos, benches and tests.
//!
//! Model
//! - Word `index` is named `w{index:04}` and gets a coordinate drawn uniformly
//!   from `[-half_width, half_width]²`.
//! - Every coordinate comes from its own replay token `(seed, index)`, so word
//!   `k` is the same no matter how many words are generated.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::vocab::{VocabError, Vocabulary};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Synthetic vocabulary parameters.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticCfg {
    pub words: usize,
    /// Half side length of the sampling square (raw, pre-projection units).
    pub half_width: f64,
}

impl Default for SyntheticCfg {
    fn default() -> Self {
        Self {
            words: 1_000,
            half_width: 3.0,
        }
    }
}

/// Name of the `index`-th synthetic word.
#[inline]
pub fn synthetic_word(index: usize) -> String {
    format!("w{index:04}")
}

/// Raw coordinate of one synthetic word.
pub fn synthetic_coord(cfg: SyntheticCfg, tok: ReplayToken) -> Vector2<f64> {
    let mut rng = tok.to_std_rng();
    let h = cfg.half_width.abs();
    Vector2::new(
        (rng.gen::<f64>() * 2.0 - 1.0) * h,
        (rng.gen::<f64>() * 2.0 - 1.0) * h,
    )
}

/// Build `cfg.words` synthetic entries. Fails only for a non-finite `half_width`.
pub fn synthetic_vocabulary(cfg: SyntheticCfg, seed: u64) -> Result<Vocabulary, VocabError> {
    Vocabulary::from_entries((0..cfg.words).map(|i| {
        let c = synthetic_coord(
            cfg,
            ReplayToken {
                seed,
                index: i as u64,
            },
        );
        (synthetic_word(i), [c.x, c.y])
    }))
}

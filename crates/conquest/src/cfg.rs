//! Fixed game-balance constants.
//!
//! Policy
//! - These are part of the game rules, not user settings. The CLI never exposes
//!   them; `GameCfg` only exists so tests and benches can build hulls with other
//!   concavities without touching call sites.

/// Longest boundary edge the concave hull keeps without trying to dig it in.
///
/// Measured in disk units. Every disk edge is shorter than 2, so the shipped
/// game effectively scores the convex hull.
pub const CONCAVITY: f64 = 10.0;

/// Hull area (disk units²) → integer score.
pub const SCORE_SCALE: f64 = 10_000.0;

/// Game configuration; `Default` uses the shipped constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameCfg {
    pub concavity: f64,
    pub score_scale: f64,
}

impl Default for GameCfg {
    fn default() -> Self {
        Self {
            concavity: CONCAVITY,
            score_scale: SCORE_SCALE,
        }
    }
}

//! Word conquest core: words → disk points → hull → score.
//!
//! Pipeline per accepted word
//! - `embed`: normalize, look up, project into the open unit disk.
//! - `game`: append to the session history.
//! - `geom2`: rebuild the concave hull over all points and take its area.
//! - `game`: score = floor(area · `cfg::SCORE_SCALE`), delta against the last score.
//!
//! Everything past the vocabulary lookup is total; the only error a player can
//! see is `GameError::WordNotFound`.

pub mod api;
pub mod cfg;
pub mod embed;
pub mod game;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{GameCfg, CONCAVITY, SCORE_SCALE};
    pub use crate::embed::{project_raw, Vocabulary};
    pub use crate::game::{Game, GameError, SharedGame, SubmitResponse};
    pub use crate::geom2::{concave_hull, polygon_area, DiskPoint, HullKind, HullPolygon};
    pub use nalgebra::Vector2 as Vec2;
}

//! Curated surface for front ends (CLI, bindings, servers).
//!
//! Prefer these re-exports over reaching into submodules; internal layout may
//! move without notice.

// Embedding
pub use crate::embed::rand::{
    synthetic_vocabulary, synthetic_word, ReplayToken, SyntheticCfg,
};
pub use crate::embed::{normalize_word, project_raw, VocabError, Vocabulary};
// Geometry
pub use crate::geom2::{
    concave_hull, convex_hull, convex_hull_polygon, polygon_area, score_from_area, signed_area,
    DiskPoint, HullKind, HullPolygon,
};
// Game
pub use crate::cfg::{GameCfg, CONCAVITY, SCORE_SCALE};
pub use crate::game::{
    Game, GameError, GameState, History, HistoryEntry, PlacedWord, SharedGame, SubmitResponse,
    Turn, Xy,
};

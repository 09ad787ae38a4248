//! Word embedding: vocabulary lookup plus projection into the unit disk.
//!
//! - `Vocabulary`: immutable store of raw 2D coordinates, keyed by normalized word.
//! - `project_raw`: `c ↦ c / (1 + |c|)`, direction kept, magnitude compressed.
//! - `rand`: seeded synthetic vocabularies.

mod disk;
pub mod rand;
mod vocab;

pub use disk::{normalize_word, project_raw};
pub use vocab::{VocabError, Vocabulary};

//! Read-only word → coordinate store.
//!
//! Keys are stored normalized (`normalize_word`), so lookups accept any casing
//! and surrounding whitespace. The store never changes after construction; share
//! it between sessions behind an `Arc`.

use std::collections::HashMap;
use std::fmt;

use nalgebra::Vector2;

use super::disk::{normalize_word, project_raw};
use crate::geom2::DiskPoint;

/// Rejected vocabulary entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabError {
    /// Key is empty after trimming.
    EmptyWord,
    /// Key contains a control character.
    ControlCharacter { word: String },
    /// Coordinate is NaN or infinite.
    NonFiniteCoordinate { word: String },
    /// Two entries normalize to the same key.
    DuplicateWord { word: String },
}

impl fmt::Display for VocabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWord => write!(f, "vocabulary word is empty"),
            Self::ControlCharacter { word } => {
                write!(f, "vocabulary word {word:?} contains a control character")
            }
            Self::NonFiniteCoordinate { word } => {
                write!(f, "vocabulary word {word:?} has a non-finite coordinate")
            }
            Self::DuplicateWord { word } => write!(f, "duplicate vocabulary word {word:?}"),
        }
    }
}

impl std::error::Error for VocabError {}

/// Immutable mapping from normalized word to raw 2D coordinate.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    words: HashMap<String, Vector2<f64>>,
}

impl Vocabulary {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(word, [x, y])` pairs; the first invalid entry aborts.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, VocabError>
    where
        I: IntoIterator<Item = (S, [f64; 2])>,
        S: AsRef<str>,
    {
        let mut vocab = Self::new();
        for (word, coord) in entries {
            vocab.insert(word.as_ref(), coord)?;
        }
        Ok(vocab)
    }

    /// Add one entry. Only used while building; the game holds the store immutably.
    pub fn insert(&mut self, word: &str, coord: [f64; 2]) -> Result<(), VocabError> {
        let key = normalize_word(word);
        if key.is_empty() {
            return Err(VocabError::EmptyWord);
        }
        if key.chars().any(char::is_control) {
            return Err(VocabError::ControlCharacter { word: key });
        }
        if !(coord[0].is_finite() && coord[1].is_finite()) {
            return Err(VocabError::NonFiniteCoordinate { word: key });
        }
        if self.words.contains_key(&key) {
            return Err(VocabError::DuplicateWord { word: key });
        }
        self.words.insert(key, Vector2::new(coord[0], coord[1]));
        Ok(())
    }

    /// Raw coordinate of `word` (normalized before lookup).
    #[inline]
    pub fn get(&self, word: &str) -> Option<Vector2<f64>> {
        self.words.get(&normalize_word(word)).copied()
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Lookup followed by disk projection; `None` means the word is unknown.
    #[inline]
    pub fn project(&self, word: &str) -> Option<DiskPoint> {
        self.get(word).map(project_raw)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Normalized keys, unordered.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(String::as_str)
    }
}

//! Game controller: one `submit` transition over an owned session state.
//!
//! Transition
//! - Unknown word: record the error, leave history, hull and score untouched.
//! - Known word: rebuild the hull over history plus the new point, rescore,
//!   then commit error/history/score/delta/hull together.
//!
//! Nothing after the lookup can fail, so a submission is either fully applied
//! or not applied at all.

use std::fmt;
use std::sync::Arc;

use crate::cfg::GameCfg;
use crate::embed::Vocabulary;
use crate::geom2::{concave_hull, score_from_area, DiskPoint, HullPolygon};

use super::history::{History, HistoryEntry};
use super::response::{PlacedWord, SubmitResponse, Xy};

/// The only gameplay error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// `word` is the text as submitted, before normalization.
    WordNotFound { word: String },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordNotFound { word } => write!(
                f,
                "The word \"{word}\" was not found in the vocabulary. Please try another word."
            ),
        }
    }
}

impl std::error::Error for GameError {}

/// Session state; owned by `Game`, changed only by `submit`.
#[derive(Clone, Debug, Default)]
pub struct GameState {
    pub history: History,
    pub hull: Option<HullPolygon>,
    pub score: u64,
    pub score_delta: i64,
    pub last_error: Option<GameError>,
}

/// Result of an accepted submission.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Turn {
    pub point: DiskPoint,
    pub score: u64,
    pub score_delta: i64,
}

/// One game session over a shared, read-only vocabulary.
#[derive(Clone, Debug)]
pub struct Game {
    vocab: Arc<Vocabulary>,
    cfg: GameCfg,
    state: GameState,
}

impl Game {
    pub fn new(vocab: Arc<Vocabulary>) -> Self {
        Self::with_cfg(vocab, GameCfg::default())
    }

    pub fn with_cfg(vocab: Arc<Vocabulary>, cfg: GameCfg) -> Self {
        Self {
            vocab,
            cfg,
            state: GameState::default(),
        }
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    #[inline]
    pub fn cfg(&self) -> GameCfg {
        self.cfg
    }

    /// Submit a word and report the transition as a `Result`.
    pub fn try_submit(&mut self, raw: &str) -> Result<Turn, GameError> {
        let Some(point) = self.vocab.project(raw) else {
            tracing::info!(word = raw, "word not found");
            let err = GameError::WordNotFound {
                word: raw.to_string(),
            };
            self.state.last_error = Some(err.clone());
            return Err(err);
        };

        let mut points = self.state.history.points();
        points.push(point);
        let hull = concave_hull(&points, self.cfg.concavity);
        let score = score_from_area(hull.area(), self.cfg.score_scale);
        let score_delta = score as i64 - self.state.score as i64;
        if score_delta < 0 {
            // A growing point set should never shrink the hull.
            tracing::warn!(
                word = raw,
                score,
                score_delta,
                kind = ?hull.kind,
                "hull area decreased"
            );
        }
        tracing::debug!(
            word = raw,
            x = point.x,
            y = point.y,
            score,
            score_delta,
            hull_vertices = hull.len(),
            "word accepted"
        );

        self.state.last_error = None;
        self.state.history.append(HistoryEntry {
            word: raw.to_string(),
            point,
        });
        self.state.score = score;
        self.state.score_delta = score_delta;
        self.state.hull = Some(hull);
        Ok(Turn {
            point,
            score,
            score_delta,
        })
    }

    /// Submit a word and return the presentation view.
    pub fn submit(&mut self, raw: &str) -> SubmitResponse {
        let accepted = self.try_submit(raw).is_ok();
        self.response(accepted)
    }

    /// Current view without submitting; `accepted` reflects the last submission.
    pub fn snapshot(&self) -> SubmitResponse {
        self.response(self.state.last_error.is_none())
    }

    /// Start over with the same vocabulary and configuration.
    pub fn reset(&mut self) {
        self.state = GameState::default();
    }

    fn response(&self, accepted: bool) -> SubmitResponse {
        let hull = self
            .state
            .hull
            .as_ref()
            .map(|h| h.vertices.iter().copied().map(Xy::from).collect())
            .unwrap_or_default();
        let points = self
            .state
            .history
            .entries()
            .iter()
            .map(|e| PlacedWord {
                word: e.word.clone(),
                x: e.point.x,
                y: e.point.y,
            })
            .collect();
        SubmitResponse {
            accepted,
            score: self.state.score,
            score_delta: self.state.score_delta,
            hull,
            points,
            error_message: self.state.last_error.as_ref().map(ToString::to_string),
        }
    }
}

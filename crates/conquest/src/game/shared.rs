//! Per-session mutation lock for callers that serve a game from several threads.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::controller::Game;
use super::response::SubmitResponse;

/// Cloneable handle to one game session.
///
/// `submit` holds the lock for the whole transition, so the hull is always
/// rebuilt from a history no other submission is appending to.
#[derive(Clone, Debug)]
pub struct SharedGame {
    inner: Arc<Mutex<Game>>,
}

impl SharedGame {
    pub fn new(game: Game) -> Self {
        Self {
            inner: Arc::new(Mutex::new(game)),
        }
    }

    pub fn submit(&self, raw: &str) -> SubmitResponse {
        self.lock().submit(raw)
    }

    pub fn snapshot(&self) -> SubmitResponse {
        self.lock().snapshot()
    }

    pub fn reset(&self) {
        self.lock().reset();
    }

    /// Run `f` with exclusive access to the session.
    pub fn with<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        f(&mut self.lock())
    }

    // State is committed in one step at the end of `submit`, so a poisoned
    // guard still holds a consistent game.
    fn lock(&self) -> MutexGuard<'_, Game> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

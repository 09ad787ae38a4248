//! Game session: history, controller and the response handed to front ends.
//!
//! Code cross-refs: `Game::submit`, `SharedGame`, `crate::geom2::concave_hull`

mod controller;
mod history;
mod response;
mod shared;

pub use controller::{Game, GameError, GameState, Turn};
pub use history::{History, HistoryEntry};
pub use response::{PlacedWord, SubmitResponse, Xy};
pub use shared::SharedGame;

#[cfg(test)]
mod tests;

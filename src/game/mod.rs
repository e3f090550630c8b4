//! Game state and the word validation engine
//!
//! `GameState` holds one round: the root word, accepted words and score.
//! The `engine` module decides whether a candidate is accepted and how much
//! it is worth.

pub mod engine;
mod score;
mod state;

pub use engine::{ValidationOutcome, check, submit, validate};
pub use score::{MIN_WORD_LENGTH, score_for};
pub use state::{GameError, GameState};

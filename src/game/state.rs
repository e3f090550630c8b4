//! Per-round game state

use crate::core::{LetterPool, normalize};
use rand::Rng;
use rand::seq::IndexedRandom;
use thiserror::Error;

/// Failures that prevent a round from starting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// No root word could be drawn
    #[error("no root words available to start a round")]
    EmptyWordList,
}

/// State of the current round
///
/// Accepted words are stored newest first. The score accumulates across
/// rounds; only the used-word list is cleared when a new root word is drawn.
#[derive(Debug, Clone, Default)]
pub struct GameState {
    root_word: String,
    pool: LetterPool,
    used_words: Vec<String>,
    score: f64,
    round: usize,
}

impl GameState {
    /// Fresh state with no round in progress and a zero score
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State already positioned on a known root word
    ///
    /// Used for one-off checks and tests where no random draw is wanted.
    #[must_use]
    pub fn with_root(root_word: &str) -> Self {
        let mut state = Self::new();
        state.begin(root_word);
        state
    }

    /// Draw a random root word and begin a new round
    ///
    /// Blank entries are never drawn. Used words are cleared; the score is
    /// left untouched.
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyWordList` if `candidates` holds no usable
    /// word. The state is left unchanged in that case.
    pub fn start_round<S, R>(&mut self, candidates: &[S], rng: &mut R) -> Result<&str, GameError>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let usable: Vec<&str> = candidates
            .iter()
            .map(|c| c.as_ref().trim())
            .filter(|c| !c.is_empty())
            .collect();

        let root = usable.choose(rng).ok_or(GameError::EmptyWordList)?;
        self.begin(root);

        tracing::info!(round = self.round, root = %self.root_word, "round started");
        Ok(&self.root_word)
    }

    fn begin(&mut self, root_word: &str) {
        self.root_word = normalize(root_word);
        self.pool = LetterPool::new(&self.root_word);
        self.used_words.clear();
        self.round += 1;
    }

    /// Record a word the engine has already accepted
    ///
    /// No validation happens here.
    pub fn record_accepted_word(&mut self, word: impl Into<String>, score_delta: f64) {
        self.used_words.insert(0, word.into());
        self.score += score_delta;
    }

    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Letters of the root word
    #[must_use]
    pub const fn pool(&self) -> &LetterPool {
        &self.pool
    }

    /// Accepted words, newest first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    #[must_use]
    pub fn is_used(&self, word: &str) -> bool {
        self.used_words.iter().any(|w| w == word)
    }

    #[must_use]
    pub const fn score(&self) -> f64 {
        self.score
    }

    /// Number of rounds started so far
    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }
}

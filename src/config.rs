//! Runtime configuration
//!
//! Resolves the word sources, dictionary language and random seed chosen on
//! the command line into ready-to-use game inputs.

use crate::dictionary::{DEFAULT_LANGUAGE, WordListDictionary};
use crate::wordlists::loader::{load_from_file, words_from_slice};
use crate::wordlists::{DICTIONARY_WORDS, START_WORDS, WordListError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Where a word list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// List compiled into the binary
    Embedded,
    /// Newline-delimited file on disk
    File(PathBuf),
}

impl WordSource {
    /// Parse a command line value: `embedded` or a path
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "embedded" | "builtin" | "default" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }

    fn load(&self, embedded: &[&str]) -> Result<Vec<String>, WordListError> {
        match self {
            Self::Embedded => Ok(words_from_slice(embedded)),
            Self::File(path) => load_from_file(path),
        }
    }
}

/// Everything a game session needs besides its state
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Dictionary language passed to every lookup
    pub language: String,
    /// Root words a round may start with
    pub start_words: Vec<String>,
    /// Spell checker used for the real-word check
    pub dictionary: WordListDictionary,
    /// Fixed seed for reproducible root word draws
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Load word lists from their sources
    ///
    /// # Errors
    ///
    /// Returns an error if a file source is missing, unreadable or empty.
    /// An unusable start-word list is fatal for the game, so callers are
    /// expected to abort startup on error.
    pub fn load(
        start_words: &WordSource,
        dictionary: &WordSource,
        language: &str,
        seed: Option<u64>,
    ) -> Result<Self, WordListError> {
        let start_words = start_words.load(START_WORDS)?;
        let dictionary_words = dictionary.load(DICTIONARY_WORDS)?;

        tracing::debug!(
            start_words = start_words.len(),
            dictionary_words = dictionary_words.len(),
            language,
            "configuration loaded"
        );

        Ok(Self {
            language: language.to_string(),
            start_words,
            dictionary: WordListDictionary::new(language, dictionary_words),
            seed,
        })
    }

    /// Random source for root word draws
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            start_words: words_from_slice(START_WORDS),
            dictionary: WordListDictionary::embedded(),
            seed: None,
        }
    }
}

//! Root word analysis command
//!
//! Finds every dictionary word a player could score with a given root word.

use crate::dictionary::{SpellChecker, WordListDictionary};
use crate::game::{GameState, check, score_for};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Every acceptable word for one root
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub root: String,
    /// Acceptable words, longest first then alphabetical
    pub words: Vec<String>,
    /// Acceptable words grouped by letter count
    pub by_length: BTreeMap<usize, Vec<String>>,
    /// Score for finding every acceptable word in one round
    pub max_score: f64,
}

impl AnalysisResult {
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Longest acceptable word, if any
    #[must_use]
    pub fn best_word(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }
}

/// Analyze `root` against the whole dictionary
///
/// A word is listed when the engine would accept it at the start of a round,
/// i.e. with no words used yet.
#[must_use]
pub fn analyze_root(root: &str, dictionary: &WordListDictionary, language: &str) -> AnalysisResult {
    let words: Vec<&str> = dictionary.words().collect();
    analyze_words(root, &words, dictionary, language)
}

/// Analyze `root` against an explicit list of candidate words
#[must_use]
pub fn analyze_words<D>(
    root: &str,
    candidates: &[&str],
    dictionary: &D,
    language: &str,
) -> AnalysisResult
where
    D: SpellChecker + Sync + ?Sized,
{
    let state = GameState::with_root(root);
    let max_len = state.pool().len();

    let mut words: Vec<String> = candidates
        .par_iter()
        .filter(|w| w.chars().count() <= max_len)
        .filter(|&&w| check(w, &state, dictionary, language).is_ok())
        .map(|&w| w.to_string())
        .collect();

    words.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    words.dedup();

    let mut by_length: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for word in &words {
        by_length
            .entry(word.chars().count())
            .or_default()
            .push(word.clone());
    }
    for group in by_length.values_mut() {
        group.sort();
    }

    let max_score = words.iter().map(|w| score_for(w)).sum();

    AnalysisResult {
        root: state.root_word().to_string(),
        words,
        by_length,
        max_score,
    }
}

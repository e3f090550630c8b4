//! Word validation and scoring
//!
//! A candidate passes through a fixed sequence of checks and is rejected at
//! the first one it fails:
//!
//! 1. not already used this round
//! 2. spellable from the root word's letters
//! 3. recognized by the dictionary
//! 4. at least three letters long
//! 5. not the root word itself
//!
//! The order decides which single reason the player sees when a word breaks
//! several rules at once.

use super::score::{MIN_WORD_LENGTH, score_for};
use super::state::GameState;
use crate::core::{Rejection, normalize};
use crate::dictionary::SpellChecker;

/// Result of validating a non-empty candidate
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    /// The word counts; `score_delta` points are due
    Accepted { word: String, score_delta: f64 },
    /// The word was turned down
    Rejected(Rejection),
}

impl ValidationOutcome {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// The rejection reason, if any
    #[must_use]
    pub const fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected(reason) => Some(*reason),
        }
    }
}

/// Validate a raw candidate against the current round
///
/// The candidate is lowercased and trimmed first. Input that is empty after
/// trimming yields `None`: nothing to accept and nothing to reject.
///
/// The state is not modified; call [`GameState::record_accepted_word`] (or
/// use [`submit`]) to apply an accepted word.
///
/// # Examples
/// ```
/// use word_scramble::core::Rejection;
/// use word_scramble::dictionary::WordListDictionary;
/// use word_scramble::game::{GameState, ValidationOutcome, validate};
///
/// let state = GameState::with_root("alphabet");
/// let dict = WordListDictionary::new("en", ["bat", "alphabet"]);
///
/// assert_eq!(
///     validate("Bat ", &state, &dict, "en"),
///     Some(ValidationOutcome::Accepted { word: "bat".into(), score_delta: 1.0 })
/// );
/// assert_eq!(
///     validate("xyz", &state, &dict, "en"),
///     Some(ValidationOutcome::Rejected(Rejection::ImpossibleLetters))
/// );
/// assert_eq!(validate("   ", &state, &dict, "en"), None);
/// ```
pub fn validate<D>(
    candidate: &str,
    state: &GameState,
    dictionary: &D,
    language: &str,
) -> Option<ValidationOutcome>
where
    D: SpellChecker + ?Sized,
{
    let word = normalize(candidate);
    if word.is_empty() {
        return None;
    }

    let outcome = match check(&word, state, dictionary, language) {
        Ok(()) => {
            let score_delta = score_for(&word);
            ValidationOutcome::Accepted { word, score_delta }
        }
        Err(reason) => {
            tracing::debug!(word = %word, reason = reason.code(), "word rejected");
            ValidationOutcome::Rejected(reason)
        }
    };

    Some(outcome)
}

/// Run the ordered checks on an already-normalized word
///
/// Returns the first failing reason. Unlike [`validate`] this neither
/// normalizes nor logs.
///
/// # Errors
///
/// Returns the `Rejection` of the first check the word fails.
pub fn check<D>(word: &str, state: &GameState, dictionary: &D, language: &str) -> Result<(), Rejection>
where
    D: SpellChecker + ?Sized,
{
    if state.is_used(word) {
        return Err(Rejection::AlreadyUsed);
    }

    if !state.pool().can_spell(word) {
        return Err(Rejection::ImpossibleLetters);
    }

    if !dictionary.is_recognized_word(word, language) {
        return Err(Rejection::NotAWord);
    }

    if word.chars().count() < MIN_WORD_LENGTH {
        return Err(Rejection::TooShort);
    }

    if word == state.root_word() {
        return Err(Rejection::SameAsRoot);
    }

    Ok(())
}

/// Validate a candidate and apply it to the state if accepted
///
/// Returns the same value as [`validate`].
pub fn submit<D>(
    state: &mut GameState,
    candidate: &str,
    dictionary: &D,
    language: &str,
) -> Option<ValidationOutcome>
where
    D: SpellChecker + ?Sized,
{
    let outcome = validate(candidate, state, dictionary, language)?;

    if let ValidationOutcome::Accepted { word, score_delta } = &outcome {
        state.record_accepted_word(word.clone(), *score_delta);
        tracing::info!(
            word = %word,
            points = *score_delta,
            score = state.score(),
            "word accepted"
        );
    }

    Some(outcome)
}

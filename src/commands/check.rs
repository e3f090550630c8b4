//! One-shot word check
//!
//! Validates a single candidate against a given root word without starting
//! an interactive session.

use crate::dictionary::SpellChecker;
use crate::game::{GameState, ValidationOutcome, score_for, validate};

/// Result of checking one candidate
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    pub root: String,
    pub candidate: String,
    /// `None` when the candidate was blank
    pub outcome: Option<ValidationOutcome>,
}

impl CheckResult {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.outcome
            .as_ref()
            .is_some_and(ValidationOutcome::is_accepted)
    }
}

/// Check `candidate` against `root`, treating `used` as already accepted
pub fn check_word<D>(
    root: &str,
    used: &[String],
    candidate: &str,
    dictionary: &D,
    language: &str,
) -> CheckResult
where
    D: SpellChecker + ?Sized,
{
    let mut state = GameState::with_root(root);
    // Oldest first so the state ends up newest first
    for word in used.iter().rev() {
        let word = crate::core::normalize(word);
        let points = score_for(&word);
        state.record_accepted_word(word, points);
    }

    CheckResult {
        root: state.root_word().to_string(),
        candidate: candidate.to_string(),
        outcome: validate(candidate, &state, dictionary, language),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rejection;
    use crate::dictionary::WordListDictionary;

    #[test]
    fn check_accepts_derived_word() {
        let dict = WordListDictionary::embedded();
        let result = check_word("alphabet", &[], "bat", &dict, "en");
        assert!(result.is_accepted());
        assert_eq!(result.root, "alphabet");
    }

    #[test]
    fn check_respects_used_words() {
        let dict = WordListDictionary::embedded();
        let used = vec!["Bat".to_string()];
        let result = check_word("alphabet", &used, "bat", &dict, "en");
        assert_eq!(
            result.outcome.and_then(|o| o.rejection()),
            Some(Rejection::AlreadyUsed)
        );
    }

    #[test]
    fn check_blank_candidate() {
        let dict = WordListDictionary::embedded();
        let result = check_word("alphabet", &[], "  ", &dict, "en");
        assert!(result.outcome.is_none());
        assert!(!result.is_accepted());
    }
}

//! Dictionary lookups
//!
//! The engine only needs a yes/no answer for "is this a real word in this
//! language". `SpellChecker` is that seam; `WordListDictionary` answers it
//! from an in-memory word set.

use crate::core::normalize;
use crate::wordlists::DICTIONARY_WORDS;
use rustc_hash::FxHashSet;

/// Language tag of the embedded dictionary
pub const DEFAULT_LANGUAGE: &str = "en";

/// Decides whether a string is a recognized word
pub trait SpellChecker {
    /// Returns `true` if `word` is a recognized word in `language`
    fn is_recognized_word(&self, word: &str, language: &str) -> bool;
}

impl<T: SpellChecker + ?Sized> SpellChecker for &T {
    fn is_recognized_word(&self, word: &str, language: &str) -> bool {
        (**self).is_recognized_word(word, language)
    }
}

/// Spell checker backed by a single-language word set
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Build a dictionary for `language` from any word source
    ///
    /// Words are normalized like player input; blanks are dropped.
    pub fn new<I, S>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();

        Self {
            language: language.into(),
            words,
        }
    }

    /// English dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(DEFAULT_LANGUAGE, DICTIONARY_WORDS.iter().copied())
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All known words, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl SpellChecker for WordListDictionary {
    fn is_recognized_word(&self, word: &str, language: &str) -> bool {
        language.eq_ignore_ascii_case(&self.language) && self.words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_known_words() {
        let dict = WordListDictionary::new("en", ["bat", "tab"]);
        assert!(dict.is_recognized_word("bat", "en"));
        assert!(dict.is_recognized_word("tab", "en"));
        assert!(!dict.is_recognized_word("tba", "en"));
    }

    #[test]
    fn other_language_is_never_recognized() {
        let dict = WordListDictionary::new("en", ["bat"]);
        assert!(!dict.is_recognized_word("bat", "fr"));
        assert!(dict.is_recognized_word("bat", "EN"));
    }

    #[test]
    fn new_normalizes_entries() {
        let dict = WordListDictionary::new("en", ["  Bat ", "", "TAB\r"]);
        assert_eq!(dict.len(), 2);
        assert!(dict.is_recognized_word("bat", "en"));
        assert!(dict.is_recognized_word("tab", "en"));
    }

    #[test]
    fn embedded_dictionary_is_english() {
        let dict = WordListDictionary::embedded();
        assert_eq!(dict.language(), DEFAULT_LANGUAGE);
        assert!(!dict.is_empty());
        assert!(dict.is_recognized_word("alphabet", "en"));
        assert!(!dict.is_recognized_word("xyz", "en"));
    }

    #[test]
    fn works_through_references() {
        fn check<C: SpellChecker>(checker: C) -> bool {
            checker.is_recognized_word("bat", "en")
        }

        let dict = WordListDictionary::new("en", ["bat"]);
        assert!(check(&dict));
    }
}

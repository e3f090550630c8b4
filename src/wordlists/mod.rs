//! Word lists for the word scramble game
//!
//! Provides embedded word lists compiled into the binary, plus a loader for
//! replacing them with files at startup.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY_WORDS, DICTIONARY_WORDS_COUNT, START_WORDS, START_WORDS_COUNT};
pub use loader::WordListError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_count_matches_const() {
        assert_eq!(START_WORDS.len(), START_WORDS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY_WORDS.len(), DICTIONARY_WORDS_COUNT);
    }

    #[test]
    fn start_words_are_lowercase_and_nonblank() {
        for &word in START_WORDS {
            assert!(!word.is_empty(), "Blank start word embedded");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Start word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn start_words_are_in_dictionary() {
        // Otherwise a root word could never trigger the same-as-root check
        let dictionary: std::collections::HashSet<_> = DICTIONARY_WORDS.iter().collect();

        for word in START_WORDS {
            assert!(
                dictionary.contains(word),
                "Start word '{word}' not in dictionary"
            );
        }
    }

    #[test]
    fn dictionary_has_short_words() {
        assert!(DICTIONARY_WORDS.contains(&"bat"));
        assert!(DICTIONARY_WORDS.contains(&"ab"));
    }
}

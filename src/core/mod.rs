//! Core domain types for the word scramble game
//!
//! Pure types with no I/O: the letter pool of a root word and the closed set
//! of rejection reasons.

mod letters;
mod rejection;

use unicode_normalization::UnicodeNormalization;

pub use letters::LetterPool;
pub use rejection::Rejection;

/// Normalize raw player input into a candidate word
///
/// Lowercases, strips leading/trailing whitespace (newlines included) and
/// composes the result to NFC, so `e` + combining acute and the precomposed
/// `é` are the same letter.
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Bat\n"), "bat");
/// assert_eq!(normalize(" \t "), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().trim().nfc().collect()
}

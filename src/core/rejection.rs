//! Rejection reasons for submitted words
//!
//! Every rejected candidate carries exactly one reason. The reasons form a
//! closed set, each with a title and message shown to the player.

use std::fmt;

/// Why a candidate word was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// The word was already accepted this round
    AlreadyUsed,
    /// The word needs letters the root word does not have
    ImpossibleLetters,
    /// The dictionary does not recognize the word
    NotAWord,
    /// The word has fewer than three letters
    TooShort,
    /// The word is the root word itself
    SameAsRoot,
}

impl Rejection {
    /// All reasons in the order the engine checks them
    pub const ALL: [Self; 5] = [
        Self::AlreadyUsed,
        Self::ImpossibleLetters,
        Self::NotAWord,
        Self::TooShort,
        Self::SameAsRoot,
    ];

    /// Stable machine-readable reason code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::AlreadyUsed => "ALREADY_USED",
            Self::ImpossibleLetters => "IMPOSSIBLE_LETTERS",
            Self::NotAWord => "NOT_A_WORD",
            Self::TooShort => "TOO_SHORT",
            Self::SameAsRoot => "SAME_AS_ROOT",
        }
    }

    /// Short headline for the error popup
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::AlreadyUsed => "Word already used",
            Self::ImpossibleLetters => "Word not possible",
            Self::NotAWord => "Not a real word",
            Self::TooShort | Self::SameAsRoot => "Too easy",
        }
    }

    /// Hint telling the player what to do instead
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::AlreadyUsed => "Be more original!",
            Self::ImpossibleLetters => "Use just the letters from the original word!",
            Self::NotAWord => "Use just words that exist in the dictionary!",
            Self::TooShort => "Use words with 3 letters or more!",
            Self::SameAsRoot => "You can't use the same word!",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn codes_are_unique() {
        let codes: FxHashSet<_> = Rejection::ALL.iter().map(|r| r.code()).collect();
        assert_eq!(codes.len(), Rejection::ALL.len());
    }

    #[test]
    fn every_reason_is_distinguishable_to_the_player() {
        let shown: FxHashSet<_> = Rejection::ALL
            .iter()
            .map(|r| (r.title(), r.message()))
            .collect();
        assert_eq!(shown.len(), Rejection::ALL.len());
    }

    #[test]
    fn short_and_same_share_a_title() {
        assert_eq!(Rejection::TooShort.title(), Rejection::SameAsRoot.title());
        assert_ne!(Rejection::TooShort.message(), Rejection::SameAsRoot.message());
    }

    #[test]
    fn display_joins_title_and_message() {
        assert_eq!(
            Rejection::AlreadyUsed.to_string(),
            "Word already used: Be more original!"
        );
    }
}

//! Word scoring

/// Shortest word length the engine accepts
pub const MIN_WORD_LENGTH: usize = 3;

/// Points awarded for an accepted word
///
/// Doubles with every letter past the minimum: 3 letters score 1,
/// 4 letters score 2, 5 letters score 4 and so on.
///
/// # Examples
/// ```
/// use word_scramble::game::score_for;
///
/// assert_eq!(score_for("bat"), 1.0);
/// assert_eq!(score_for("bath"), 2.0);
/// assert_eq!(score_for("alpha"), 4.0);
/// ```
#[must_use]
pub fn score_for(word: &str) -> f64 {
    let length = word.chars().count() as i32;
    2f64.powi(length - MIN_WORD_LENGTH as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_doubles_per_letter() {
        assert_eq!(score_for("cat"), 1.0);
        assert_eq!(score_for("cats"), 2.0);
        assert_eq!(score_for("plate"), 4.0);
        assert_eq!(score_for("alphabet"), 32.0);
    }

    #[test]
    fn score_counts_characters_not_bytes() {
        assert_eq!(score_for("café"), 2.0);
    }
}

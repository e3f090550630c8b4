//! Letter pool representation
//!
//! A `LetterPool` is the multiset of letters in a root word. A candidate is
//! feasible when it can be spelled by drawing letters from the pool without
//! replacement.

use rustc_hash::FxHashMap;
use std::fmt;

/// Multiset of the letters available in a root word
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterPool {
    counts: FxHashMap<char, usize>,
    len: usize,
}

impl LetterPool {
    /// Build a pool from every character of `word`
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::new("alphabet");
    /// assert_eq!(pool.count_of('a'), 2);
    /// assert_eq!(pool.count_of('z'), 0);
    /// ```
    #[must_use]
    pub fn new(word: &str) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        let mut len = 0;
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
            len += 1;
        }
        Self { counts, len }
    }

    /// Number of times `letter` occurs in the pool
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of letters, duplicates included
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check whether `candidate` can be spelled from this pool
    ///
    /// Walks the candidate in order, removing one occurrence of each letter
    /// from a working copy of the pool. Fails as soon as a letter is missing,
    /// so no letter may be used more often than it occurs in the root word.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::new("alphabet");
    /// assert!(pool.can_spell("bat"));
    /// assert!(pool.can_spell("alpha"));
    /// assert!(!pool.can_spell("xyz"));
    /// assert!(!pool.can_spell("aaa")); // only two a's available
    /// ```
    #[must_use]
    pub fn can_spell(&self, candidate: &str) -> bool {
        let mut available = self.counts.clone();

        for letter in candidate.chars() {
            match available.get_mut(&letter) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return false,
            }
        }

        true
    }

    /// Letters of the pool that `candidate` does not use up
    ///
    /// Returns `None` when the candidate is not spellable from the pool.
    #[must_use]
    pub fn remaining_after(&self, candidate: &str) -> Option<Self> {
        let mut remaining = self.clone();

        for letter in candidate.chars() {
            let count = remaining.counts.get_mut(&letter)?;
            if *count == 0 {
                return None;
            }
            *count -= 1;
            remaining.len -= 1;
        }

        remaining.counts.retain(|_, count| *count > 0);
        Some(remaining)
    }
}

impl fmt::Display for LetterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut letters: Vec<char> = self
            .counts
            .iter()
            .flat_map(|(&ch, &count)| std::iter::repeat_n(ch, count))
            .collect();
        letters.sort_unstable();
        let text: String = letters.into_iter().collect();
        write!(f, "{text}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_counts_duplicates() {
        let pool = LetterPool::new("alphabet");
        assert_eq!(pool.len(), 8);
        assert_eq!(pool.count_of('a'), 2);
        assert_eq!(pool.count_of('l'), 1);
        assert_eq!(pool.count_of('x'), 0);
    }

    #[test]
    fn can_spell_subset() {
        let pool = LetterPool::new("alphabet");
        assert!(pool.can_spell("bat"));
        assert!(pool.can_spell("heap"));
        assert!(pool.can_spell("alphabet"));
    }

    #[test]
    fn can_spell_respects_multiplicity() {
        let pool = LetterPool::new("alphabet");
        assert!(pool.can_spell("aa"));
        assert!(!pool.can_spell("aaa"));
        assert!(!pool.can_spell("bb"));
    }

    #[test]
    fn can_spell_rejects_missing_letters() {
        let pool = LetterPool::new("alphabet");
        assert!(!pool.can_spell("xyz"));
        assert!(!pool.can_spell("bats"));
    }

    #[test]
    fn can_spell_does_not_consume_pool() {
        let pool = LetterPool::new("cat");
        assert!(pool.can_spell("cat"));
        assert!(pool.can_spell("cat"));
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn empty_candidate_is_spellable() {
        let pool = LetterPool::new("cat");
        assert!(pool.can_spell(""));
        assert!(LetterPool::new("").can_spell(""));
        assert!(!LetterPool::new("").can_spell("a"));
    }

    #[test]
    fn remaining_after_removes_used_letters() {
        let pool = LetterPool::new("alphabet");
        let rest = pool.remaining_after("bat").unwrap();
        assert_eq!(rest.len(), 5);
        assert_eq!(rest.count_of('a'), 1);
        assert_eq!(rest.count_of('b'), 0);
        assert_eq!(rest.to_string(), "aehlp");
    }

    #[test]
    fn remaining_after_infeasible_is_none() {
        let pool = LetterPool::new("alphabet");
        assert!(pool.remaining_after("zebra").is_none());
        assert!(pool.remaining_after("bbb").is_none());
    }

    #[test]
    fn display_is_sorted() {
        assert_eq!(LetterPool::new("scramble").to_string(), "abcelmrs");
    }
}

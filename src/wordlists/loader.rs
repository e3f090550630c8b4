//! Word list loading utilities
//!
//! Word lists are plain UTF-8 text, one word per line, no header.

use crate::core::normalize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to obtain a usable word list
#[derive(Debug, Error)]
pub enum WordListError {
    /// The file could not be opened or read
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was readable but held no words
    #[error("word list {path} contains no words")]
    Empty { path: PathBuf },
}

/// Load words from a file
///
/// Lines are trimmed and lowercased; blank lines are skipped.
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read and
/// `WordListError::Empty` if it contains no words.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_lines(&content);
    if words.is_empty() {
        return Err(WordListError::Empty {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Split newline-delimited text into normalized words
#[must_use]
pub fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(normalize)
        .filter(|word| !word.is_empty())
        .collect()
}

/// Convert embedded string slice to owned words
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_all() {
        let input = &["alphabet", "scramble"];
        let words = words_from_slice(input);
        assert_eq!(words, vec!["alphabet", "scramble"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn parse_lines_skips_blanks_and_normalizes() {
        let words = parse_lines("Alphabet\n\n  scramble  \r\n\n");
        assert_eq!(words, vec!["alphabet", "scramble"]);
    }

    #[test]
    fn load_from_file_reads_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "silkworm").unwrap();
        writeln!(file, "rainbows").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words, vec!["silkworm", "rainbows"]);
    }

    #[test]
    fn load_from_file_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_file(dir.path().join("start.txt"));
        assert!(matches!(result, Err(WordListError::Io { .. })));
    }

    #[test]
    fn load_from_file_blank_is_empty_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "\n   \n").unwrap();

        let result = load_from_file(file.path());
        assert!(matches!(result, Err(WordListError::Empty { .. })));
    }
}

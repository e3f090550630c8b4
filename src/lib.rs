//! Word Scramble
//!
//! A word game: make as many words as you can from the letters of a randomly
//! drawn root word. Longer words are worth exponentially more.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::dictionary::WordListDictionary;
//! use word_scramble::game::{GameState, ValidationOutcome, submit};
//!
//! let dictionary = WordListDictionary::embedded();
//! let mut state = GameState::with_root("alphabet");
//!
//! let outcome = submit(&mut state, "bat", &dictionary, "en");
//! assert!(matches!(outcome, Some(ValidationOutcome::Accepted { .. })));
//! assert_eq!(state.score(), 1.0);
//! ```

// Core domain types
pub mod core;

// Round state and the validation engine
pub mod game;

// Spell checking
pub mod dictionary;

// Word lists
pub mod wordlists;

// Runtime configuration
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

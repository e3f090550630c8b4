//! TUI application state and logic

use crate::config::GameConfig;
use crate::core::{LetterPool, Rejection, normalize};
use crate::game::{GameState, ValidationOutcome, submit};
use crate::output::formatters::format_score;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest input the text field accepts
const MAX_INPUT_LEN: usize = 32;

/// Application state
pub struct App<'a> {
    pub config: &'a GameConfig,
    pub game: GameState,
    rng: StdRng,
    pub input_buffer: String,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing a word
    Typing,
    /// A rejection popup is showing
    Alert(Rejection),
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Create the app and draw the first root word
    ///
    /// # Errors
    ///
    /// Returns an error if the configured start-word list is empty.
    pub fn new(config: &'a GameConfig) -> Result<Self> {
        let mut app = Self {
            config,
            game: GameState::new(),
            rng: config.rng(),
            input_buffer: String::new(),
            input_mode: InputMode::Typing,
            messages: Vec::new(),
            should_quit: false,
        };

        app.game.start_round(&config.start_words, &mut app.rng)?;
        app.add_message(
            "Welcome! Make words from the letters of the root word.",
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Draw a new root word, keeping the score
    pub fn shuffle(&mut self) {
        match self.game.start_round(&self.config.start_words, &mut self.rng) {
            Ok(root) => {
                let text = format!("New word: {}", root.to_uppercase());
                self.input_buffer.clear();
                self.input_mode = InputMode::Typing;
                self.add_message(&text, MessageStyle::Info);
            }
            // Only possible with an empty start list
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Submit the text field as a word
    ///
    /// Accepted words clear the field. Rejected words stay in the field and
    /// raise a popup. Blank input does nothing.
    pub fn submit_input(&mut self) {
        let outcome = submit(
            &mut self.game,
            &self.input_buffer,
            &self.config.dictionary,
            &self.config.language,
        );

        match outcome {
            None => {}
            Some(ValidationOutcome::Accepted { word, score_delta }) => {
                self.input_buffer.clear();
                self.add_message(
                    &format!("{word} +{}", format_score(score_delta)),
                    MessageStyle::Success,
                );
            }
            Some(ValidationOutcome::Rejected(reason)) => {
                self.input_mode = InputMode::Alert(reason);
                self.add_message(reason.title(), MessageStyle::Error);
            }
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.input_mode = InputMode::Typing;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Root letters not yet used by the text field
    ///
    /// `None` when the field already asks for letters the root lacks.
    #[must_use]
    pub fn remaining_letters(&self) -> Option<LetterPool> {
        self.game.pool().remaining_after(&normalize(&self.input_buffer))
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Alert(_) => match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => self.dismiss_alert(),
                _ => {}
            },
            InputMode::Typing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab => self.shuffle(),
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.shuffle();
                }
                KeyCode::Enter => self.submit_input(),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    if self.input_buffer.chars().count() < MAX_INPUT_LEN {
                        self.input_buffer.push(c);
                    }
                }
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match res {
        Ok(score) => {
            println!("👋 Thanks for playing! Final score: {}", format_score(score));
            Ok(())
        }
        Err(err) => {
            tracing::error!(error = %err, "tui session failed");
            Err(err)
        }
    }
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<f64> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.game.score())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;

    fn config() -> GameConfig {
        GameConfig {
            language: "en".to_string(),
            start_words: vec!["alphabet".to_string()],
            dictionary: WordListDictionary::new("en", ["bat", "heap", "alphabet"]),
            seed: Some(5),
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn new_app_starts_a_round() {
        let config = config();
        let app = App::new(&config).unwrap();
        assert_eq!(app.game.root_word(), "alphabet");
        assert_eq!(app.game.round(), 1);
    }

    #[test]
    fn new_app_fails_without_start_words() {
        let config = GameConfig {
            start_words: vec![],
            ..config()
        };
        assert!(App::new(&config).is_err());
    }

    #[test]
    fn accepted_word_clears_input() {
        let config = config();
        let mut app = App::new(&config).unwrap();
        type_word(&mut app, "heap");

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.game.used_words(), ["heap"]);
        assert_eq!(app.game.score(), 2.0);
        assert_eq!(app.input_mode, InputMode::Typing);
    }

    #[test]
    fn rejected_word_shows_alert_and_keeps_input() {
        let config = config();
        let mut app = App::new(&config).unwrap();
        type_word(&mut app, "xyz");

        assert_eq!(app.input_mode, InputMode::Alert(Rejection::ImpossibleLetters));
        assert_eq!(app.input_buffer, "xyz");

        // Typing is ignored until the alert is dismissed
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.input_buffer, "xyz");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Typing);
    }

    #[test]
    fn blank_submit_does_nothing() {
        let config = config();
        let mut app = App::new(&config).unwrap();
        let before = app.messages.len();
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Typing);
        assert_eq!(app.messages.len(), before);
    }

    #[test]
    fn tab_shuffles_and_keeps_score() {
        let config = config();
        let mut app = App::new(&config).unwrap();
        type_word(&mut app, "bat");
        press(&mut app, KeyCode::Tab);

        assert_eq!(app.game.round(), 2);
        assert!(app.game.used_words().is_empty());
        assert_eq!(app.game.score(), 1.0);
    }

    #[test]
    fn remaining_letters_tracks_input() {
        let config = config();
        let mut app = App::new(&config).unwrap();
        app.input_buffer = "bat".to_string();
        assert_eq!(app.remaining_letters().unwrap().to_string(), "aehlp");

        app.input_buffer = "bbb".to_string();
        assert!(app.remaining_letters().is_none());
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let config = config();
        let mut app = App::new(&config).unwrap();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = App::new(&config).unwrap();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn control_chords_do_not_type() {
        let config = config();
        let mut app = App::new(&config).unwrap();
        for c in ['w', 'a', 'u'] {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
        }
        assert!(app.input_buffer.is_empty());

        app.handle_key(KeyEvent::new(KeyCode::Char('B'), KeyModifiers::SHIFT));
        assert_eq!(app.input_buffer, "B");

        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));
        assert_eq!(app.game.round(), 2);
    }

    #[test]
    fn messages_are_capped() {
        let config = config();
        let mut app = App::new(&config).unwrap();
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "message 9");
    }
}

//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: one word per line, commands start with
//! a colon.

use crate::config::GameConfig;
use crate::game::{GameState, ValidationOutcome, submit};
use crate::output::formatters::{format_score, letter_badge, spaced_letters};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if the first round cannot start (no root words) or on
/// an I/O error reading input or writing output.
pub fn run_simple(config: &GameConfig) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut rng = config.rng();
    play(config, &mut rng, stdin.lock(), stdout.lock())
}

/// Play a line-based session reading from `input` and writing to `output`
///
/// Ends on `:quit` or end of input.
///
/// # Errors
///
/// Returns an error if a round cannot start or on an I/O error.
pub fn play<R, I, O>(config: &GameConfig, rng: &mut R, mut input: I, mut output: O) -> anyhow::Result<()>
where
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    let mut state = GameState::new();
    state.start_round(&config.start_words, rng)?;

    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                   Word Scramble - Simple Mode                ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "Make as many words as you can from the letters of the root word.")?;
    writeln!(output, "Longer words score more: 3 letters = 1 point, each extra letter doubles it.\n")?;
    writeln!(output, "Commands: ':new' for a new word, ':words' to list your words,")?;
    writeln!(output, "          ':score' for your score, ':quit' to exit\n")?;
    print_root(&mut output, &state)?;

    let mut line = String::new();
    loop {
        write!(output, "Word: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        match line.trim() {
            ":quit" | ":q" | ":exit" => break,
            ":new" | ":n" | ":shuffle" => {
                state.start_round(&config.start_words, rng)?;
                writeln!(output, "\n🔄 New root word!\n")?;
                print_root(&mut output, &state)?;
            }
            ":words" | ":w" => print_words(&mut output, &state)?,
            ":score" | ":s" => {
                writeln!(output, "Score: {}\n", format_score(state.score()).bright_yellow())?;
            }
            ":help" | ":h" => {
                writeln!(output, "Commands: :new, :words, :score, :quit\n")?;
            }
            raw => match submit(&mut state, raw, &config.dictionary, &config.language) {
                None => {}
                Some(ValidationOutcome::Accepted { word, score_delta }) => {
                    writeln!(
                        output,
                        "{} {} {}  Score: {}\n",
                        "✓".green().bold(),
                        word.bright_white().bold(),
                        format!("(+{})", format_score(score_delta)).green(),
                        format_score(state.score()).bright_yellow()
                    )?;
                }
                Some(ValidationOutcome::Rejected(reason)) => {
                    writeln!(
                        output,
                        "{} {}\n  {}\n",
                        "✗".red().bold(),
                        reason.title().red().bold(),
                        reason.message()
                    )?;
                }
            },
        }
    }

    writeln!(
        output,
        "👋 Thanks for playing! Final score: {}",
        format_score(state.score())
    )?;
    Ok(())
}

fn print_root<O: Write>(output: &mut O, state: &GameState) -> io::Result<()> {
    writeln!(output, "────────────────────────────────────────────────────────────")?;
    writeln!(
        output,
        "Round {}: {}",
        state.round(),
        spaced_letters(state.root_word()).bright_cyan().bold()
    )?;
    writeln!(output, "────────────────────────────────────────────────────────────")
}

fn print_words<O: Write>(output: &mut O, state: &GameState) -> io::Result<()> {
    if state.used_words().is_empty() {
        return writeln!(output, "No words yet.\n");
    }

    for word in state.used_words() {
        writeln!(output, "  {} {word}", letter_badge(word))?;
    }
    writeln!(output)
}

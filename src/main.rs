//! Word Scramble - CLI
//!
//! Word scramble game with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use word_scramble::{
    commands::{analyze_root, check_word, print_survey_statistics, run_simple, run_survey},
    config::{GameConfig, WordSource},
    dictionary::DEFAULT_LANGUAGE,
    logging,
    output::{print_analysis_result, print_check_result},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make words from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root word list: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 's', long, global = true, default_value = "embedded")]
    start_words: String,

    /// Dictionary: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Dictionary language
    #[arg(short = 'l', long, global = true, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Seed for reproducible root word draws
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG overrides
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode (no TUI)
    Simple,

    /// Check one word against a root word
    Check {
        /// The word to check
        word: String,

        /// Root word to check against
        #[arg(short, long)]
        root: String,

        /// Words already used this round
        #[arg(short, long, num_args = 1..)]
        used: Vec<String>,
    },

    /// List every acceptable word for a root word
    Analyze {
        /// Root word to analyze
        root: String,

        /// Print the words, not just the counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze every root word in the start list
    Survey {
        /// Limit number of root words to survey
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    logging::init(&cli.log_level, cli.log_file.as_deref())?;

    let config = load_config(&cli).inspect_err(|err| {
        tracing::error!(error = %err, "cannot start: word lists unavailable");
    })?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config)?,
        Commands::Simple => run_simple(&config)?,
        Commands::Check { word, root, used } => {
            return Ok(run_check_command(&config, &word, &root, &used));
        }
        Commands::Analyze { root, verbose } => {
            let result = analyze_root(&root, &config.dictionary, &config.language);
            print_analysis_result(&result, verbose);
        }
        Commands::Survey { limit } => {
            let stats = run_survey(&config.start_words, &config.dictionary, &config.language, limit);
            print_survey_statistics(&stats);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Resolve word lists from the -s/-d flags
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let start_words = WordSource::parse(&cli.start_words);
    let dictionary = WordSource::parse(&cli.dictionary);

    GameConfig::load(&start_words, &dictionary, &cli.language, cli.seed)
        .context("failed to load word lists")
}

/// Exit status reflects the verdict: failure for a rejected or blank word
fn run_check_command(config: &GameConfig, word: &str, root: &str, used: &[String]) -> ExitCode {
    let result = check_word(root, used, word, &config.dictionary, &config.language);
    print_check_result(&result);

    if result.is_accepted() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let app = App::new(config)?;
    run_tui(app)
}

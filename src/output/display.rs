//! Display functions for command results

use super::formatters::{create_progress_bar, format_score, letter_badge, spaced_letters};
use crate::commands::{AnalysisResult, CheckResult};
use crate::game::ValidationOutcome;
use colored::Colorize;

/// Print the result of checking a single word
pub fn print_check_result(result: &CheckResult) {
    println!(
        "Root: {}",
        spaced_letters(&result.root).bright_cyan().bold()
    );

    match &result.outcome {
        None => println!("{}", "Nothing to check: the word is blank.".bright_black()),
        Some(ValidationOutcome::Accepted { word, score_delta }) => {
            println!(
                "{} {} {}",
                "✅ Accepted:".green().bold(),
                word.bright_white().bold(),
                format!("(+{})", format_score(*score_delta)).green()
            );
        }
        Some(ValidationOutcome::Rejected(reason)) => {
            println!(
                "{} {} [{}]",
                "❌ Rejected:".red().bold(),
                reason.title().red(),
                reason.code().bright_black()
            );
            println!("   {}", reason.message());
        }
    }
}

/// Print every acceptable word for a root
pub fn print_analysis_result(result: &AnalysisResult, verbose: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ROOT ANALYSIS:".bright_cyan().bold(),
        spaced_letters(&result.root).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {} acceptable words", result.word_count());
    println!(
        "   Max score:   {}",
        format_score(result.max_score).bright_yellow().bold()
    );
    if let Some(best) = result.best_word() {
        println!("   Best word:   {} {}", letter_badge(best), best.bright_green());
    }

    if result.by_length.is_empty() {
        return;
    }

    println!("\n📈 {}", "By length:".bright_cyan().bold());
    let max_count = result
        .by_length
        .values()
        .map(Vec::len)
        .max()
        .unwrap_or(1);
    for (length, words) in result.by_length.iter().rev() {
        let bar = create_progress_bar(words.len() as f64, max_count as f64, 30);
        println!("   {length:2}: {} {:4}", bar.green(), words.len());
        if verbose {
            for chunk in words.chunks(8) {
                println!("       {}", chunk.join(" ").bright_black());
            }
        }
    }
}

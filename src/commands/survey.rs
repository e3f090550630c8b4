//! Survey every root word
//!
//! Analyzes each start word against the dictionary and reports which roots
//! make for rich or poor rounds.

use super::analyze::{AnalysisResult, analyze_root};
use crate::dictionary::WordListDictionary;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Summary of one root word
#[derive(Debug, Clone, PartialEq)]
pub struct RootSummary {
    pub root: String,
    pub word_count: usize,
    pub max_score: f64,
    pub best_word: Option<String>,
}

impl From<&AnalysisResult> for RootSummary {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            root: result.root.clone(),
            word_count: result.word_count(),
            max_score: result.max_score,
            best_word: result.best_word().map(str::to_string),
        }
    }
}

/// Statistics across all surveyed roots
#[derive(Debug)]
pub struct SurveyStatistics {
    pub roots_tested: usize,
    pub total_words: usize,
    pub average_words: f64,
    pub average_max_score: f64,
    /// Acceptable words across all roots, by letter count
    pub length_distribution: BTreeMap<usize, usize>,
    /// Roots with the most acceptable words, richest first
    pub richest: Vec<RootSummary>,
    /// Roots with the fewest acceptable words, poorest first
    pub poorest: Vec<RootSummary>,
    /// Roots that allow no word at all
    pub dead_roots: Vec<String>,
    pub total_time: Duration,
}

/// Analyze every root in `roots` (or the first `limit` of them)
pub fn run_survey(
    roots: &[String],
    dictionary: &WordListDictionary,
    language: &str,
    limit: Option<usize>,
) -> SurveyStatistics {
    let roots: Vec<&String> = roots.iter().take(limit.unwrap_or(roots.len())).collect();

    println!("🔎 Surveying {} root words...", roots.len());

    let pb = ProgressBar::new(roots.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut summaries: Vec<RootSummary> = Vec::with_capacity(roots.len());
    let mut length_distribution: BTreeMap<usize, usize> = BTreeMap::new();

    for root in roots {
        let result = analyze_root(root, dictionary, language);
        for (length, words) in &result.by_length {
            *length_distribution.entry(*length).or_insert(0) += words.len();
        }
        pb.set_message(format!("{root}: {} words", result.word_count()));
        summaries.push(RootSummary::from(&result));
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let stats = summarize(summaries, length_distribution, start.elapsed());
    tracing::info!(
        roots = stats.roots_tested,
        words = stats.total_words,
        "survey finished"
    );
    stats
}

fn summarize(
    mut summaries: Vec<RootSummary>,
    length_distribution: BTreeMap<usize, usize>,
    total_time: Duration,
) -> SurveyStatistics {
    let roots_tested = summaries.len();
    let total_words: usize = summaries.iter().map(|s| s.word_count).sum();
    let total_score: f64 = summaries.iter().map(|s| s.max_score).sum();

    let (average_words, average_max_score) = if roots_tested > 0 {
        (
            total_words as f64 / roots_tested as f64,
            total_score / roots_tested as f64,
        )
    } else {
        (0.0, 0.0)
    };

    let dead_roots = summaries
        .iter()
        .filter(|s| s.word_count == 0)
        .map(|s| s.root.clone())
        .collect();

    summaries.sort_by(|a, b| {
        b.word_count
            .cmp(&a.word_count)
            .then_with(|| a.root.cmp(&b.root))
    });
    let richest: Vec<RootSummary> = summaries.iter().take(5).cloned().collect();
    let poorest: Vec<RootSummary> = summaries.iter().rev().take(5).cloned().collect();

    SurveyStatistics {
        roots_tested,
        total_words,
        average_words,
        average_max_score,
        length_distribution,
        richest,
        poorest,
        dead_roots,
        total_time,
    }
}

/// Print survey statistics
pub fn print_survey_statistics(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Survey Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overview".bright_cyan().bold());
    println!("  Roots surveyed:      {}", stats.roots_tested);
    println!("  Acceptable words:    {}", stats.total_words);
    println!(
        "  Words per root:      {}",
        format!("{:.1}", stats.average_words).bright_yellow().bold()
    );
    println!("  Max score per root:  {:.1}", stats.average_max_score);
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Word Lengths".bright_cyan().bold());
    let max_count = stats
        .length_distribution
        .values()
        .copied()
        .max()
        .unwrap_or(1)
        .max(1);
    for (length, count) in &stats.length_distribution {
        let bar_len = (count * 40 / max_count).max(usize::from(*count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {length:2} letters: {bar} {count:5}");
    }

    if !stats.richest.is_empty() {
        println!("\n✨ {}", "Richest Roots".green().bold());
        for summary in &stats.richest {
            print_summary_line(summary);
        }
    }

    if !stats.poorest.is_empty() {
        println!("\n😰 {}", "Poorest Roots".yellow().bold());
        for summary in &stats.poorest {
            print_summary_line(summary);
        }
    }

    if !stats.dead_roots.is_empty() {
        println!("\n❌ {}", "Roots With No Words".red().bold());
        for root in &stats.dead_roots {
            println!("  {}", root.to_uppercase().red());
        }
    }
}

fn print_summary_line(summary: &RootSummary) {
    println!(
        "  {:<12} {:4} words, max {:>6} points{}",
        summary.root.to_uppercase(),
        summary.word_count,
        summary.max_score,
        summary
            .best_word
            .as_deref()
            .map(|w| format!(" (best: {w})"))
            .unwrap_or_default()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict() -> WordListDictionary {
        WordListDictionary::new("en", ["bat", "tab", "heap", "cat", "act", "scat"])
    }

    #[test]
    fn survey_counts_words_per_root() {
        let roots = vec!["alphabet".to_string(), "cats".to_string(), "zzz".to_string()];
        let stats = run_survey(&roots, &dict(), "en", None);

        assert_eq!(stats.roots_tested, 3);
        // alphabet: bat, tab, heap; cats: cat, act, scat (scat uses s,c,a,t)
        assert_eq!(stats.total_words, 6);
        assert_eq!(stats.dead_roots, vec!["zzz"]);
        assert_eq!(stats.length_distribution[&3], 4);
        assert_eq!(stats.length_distribution[&4], 2);
    }

    #[test]
    fn survey_ranks_roots() {
        let roots = vec!["zzz".to_string(), "alphabet".to_string()];
        let stats = run_survey(&roots, &dict(), "en", None);

        assert_eq!(stats.richest[0].root, "alphabet");
        assert_eq!(stats.richest[0].best_word.as_deref(), Some("heap"));
        assert_eq!(stats.poorest[0].root, "zzz");
    }

    #[test]
    fn survey_honors_limit() {
        let roots = vec!["alphabet".to_string(), "cats".to_string()];
        let stats = run_survey(&roots, &dict(), "en", Some(1));
        assert_eq!(stats.roots_tested, 1);
        assert_eq!(stats.total_words, 3);
    }

    #[test]
    fn survey_of_nothing_is_zero() {
        let stats = run_survey(&[], &dict(), "en", None);
        assert_eq!(stats.roots_tested, 0);
        assert_eq!(stats.average_words, 0.0);
        assert!(stats.richest.is_empty());
    }
}

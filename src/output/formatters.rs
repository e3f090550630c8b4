//! Formatting utilities for terminal output

const SIGNIFICANT_DIGITS: usize = 6;

/// Format a score the way C's `%g` does
///
/// Six significant digits, trailing zeros dropped, exponent notation once the
/// decimal exponent leaves `-4..6`.
///
/// # Examples
/// ```
/// use word_scramble::output::formatters::format_score;
///
/// assert_eq!(format_score(3.0), "3");
/// assert_eq!(format_score(0.5), "0.5");
/// assert_eq!(format_score(1_048_576.0), "1.04858e+06");
/// ```
#[must_use]
pub fn format_score(score: f64) -> String {
    if score == 0.0 || !score.is_finite() {
        return format!("{score}");
    }

    let precision = SIGNIFICANT_DIGITS - 1;
    let scientific = format!("{score:.precision$e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (-4..SIGNIFICANT_DIGITS as i32).contains(&exponent) {
        let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{score:.decimals$}")).to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs())
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Circled letter count shown next to each accepted word
///
/// Falls back to a bracketed number past twenty letters.
#[must_use]
pub fn letter_badge(word: &str) -> String {
    let count = word.chars().count();
    match count {
        1..=20 => char::from_u32(0x2460 + count as u32 - 1)
            .map_or_else(|| format!("({count})"), String::from),
        _ => format!("({count})"),
    }
}

/// Uppercase a word and space its letters out for display
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    word.to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_score_whole_numbers() {
        assert_eq!(format_score(0.0), "0");
        assert_eq!(format_score(1.0), "1");
        assert_eq!(format_score(1024.0), "1024");
    }

    #[test]
    fn format_score_fractions() {
        assert_eq!(format_score(2.5), "2.5");
        assert_eq!(format_score(0.0001), "0.0001");
        assert_eq!(format_score(1.0 / 3.0), "0.333333");
    }

    #[test]
    fn format_score_switches_to_exponent() {
        assert_eq!(format_score(123_456.0), "123456");
        assert_eq!(format_score(1_048_576.0), "1.04858e+06");
        assert_eq!(format_score(999_999.5), "1e+06");
        assert_eq!(format_score(2f64.powi(40)), "1.09951e+12");
        assert_eq!(format_score(0.00001), "1e-05");
    }

    #[test]
    fn letter_badge_circles_small_counts() {
        assert_eq!(letter_badge("bat"), "③");
        assert_eq!(letter_badge("alphabet"), "⑧");
        assert_eq!(letter_badge("a"), "①");
    }

    #[test]
    fn letter_badge_large_counts() {
        assert_eq!(letter_badge(&"a".repeat(21)), "(21)");
        assert_eq!(letter_badge(""), "(0)");
    }

    #[test]
    fn spaced_letters_uppercases() {
        assert_eq!(spaced_letters("bat"), "B A T");
        assert_eq!(spaced_letters(""), "");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}

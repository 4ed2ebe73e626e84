//! Output formatting for the non-interactive commands.
//!
//! Pure functions — (data, OutputFormat) → String.
//! No I/O, no side effects.

use serde::Serialize;

use crate::types::{GuessResult, OutputFormat, WordList};

/// One classification, as printed by `check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub expected: String,
    pub guess: String,
    pub result: GuessResult,
}

/// Format a word list for output.
pub fn format_words(words: &WordList, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_words_human(words),
        OutputFormat::Json => to_json(words),
    }
}

/// Format a single classification for output.
pub fn format_check(report: &CheckReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_check_human(report),
        OutputFormat::Json => to_json(report),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_words_human(words: &WordList) -> String {
    let width = words.len().to_string().len();
    let term_width = words.iter().map(|w| w.word.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    out.push_str("=== Words ===\n");
    for (i, w) in words.iter().enumerate() {
        out.push_str(&format!(
            "{:>width$}. {:<term_width$}  →  {}\n",
            i + 1,
            w.word,
            w.word_translation,
        ));
    }
    out.push('\n');
    out.push_str(&format!("Total: {}\n", words.len()));
    out
}

fn format_check_human(report: &CheckReport) -> String {
    let mut out = format!("{}\n", report.result);
    if report.result.reveals_answer() {
        out.push_str(&format!("  Guess:    {}\n", report.guess));
        out.push_str(&format!("  Expected: {}\n", report.expected));
    }
    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    let mut json = serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        // Plain strings and enums; cannot fail in practice
        panic!("Failed to serialize to JSON: {}", e)
    });
    json.push('\n');
    json
}

// ============================================================================
// TESTS
// ============================================================================

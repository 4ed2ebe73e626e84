//! Guess classification.
//!
//! Pure functions — no I/O, easily testable.

use crate::types::GuessResult;

/// Classify a guess against the expected translation.
///
/// Both strings are lowercased and trimmed first. Equal → `Match`;
/// either one containing the other → `PartialMatch`; otherwise
/// `Incorrect`. Total and symmetric in its two arguments.
///
/// # Examples
/// - `("Casa", "casa ")` → `Match`
/// - `("Hola", "Ho")` → `PartialMatch`
/// - `("Hola", "Adios")` → `Incorrect`
pub fn classify(expected: &str, guess: &str) -> GuessResult {
    let expected = normalize(expected);
    let guess = normalize(guess);

    if guess == expected {
        return GuessResult::Match;
    }

    if expected.contains(guess.as_str()) || guess.contains(expected.as_str()) {
        return GuessResult::PartialMatch;
    }

    GuessResult::Incorrect
}

/// Lowercase, then strip surrounding whitespace.
///
/// Unicode lowercase mapping, not locale-aware.
pub fn normalize(s: &str) -> String {
    s.to_lowercase().trim().to_string()
}

// ============================================================================
// TESTS
// ============================================================================

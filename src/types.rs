//! Domain types for lingo-drill.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::WordListError;

// ============================================================================
// WORDS
// ============================================================================

/// A source term and its expected translation.
///
/// No identity beyond its position in a [`WordList`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    /// The term shown to the learner.
    pub word: String,
    /// The translation the learner is expected to type.
    pub word_translation: String,
}

impl Word {
    pub fn new(word: impl Into<String>, word_translation: impl Into<String>) -> Self {
        Word {
            word: word.into(),
            word_translation: word_translation.into(),
        }
    }
}

/// Ordered, non-empty practice list.
///
/// Non-emptiness is what lets the session keep a valid current index
/// without ever returning `Option<&Word>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WordList(Vec<Word>);

impl WordList {
    /// Build a list, rejecting empty input and blank entries.
    pub fn new(words: Vec<Word>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty);
        }

        if let Some(pos) = words
            .iter()
            .position(|w| w.word.trim().is_empty() || w.word_translation.trim().is_empty())
        {
            return Err(WordListError::BlankEntry { position: pos + 1 });
        }

        Ok(WordList(words))
    }

    /// Wrap a list already known to be valid (the bundled constants).
    pub(crate) fn from_trusted(words: Vec<Word>) -> Self {
        debug_assert!(!words.is_empty());
        WordList(words)
    }

    /// Number of words. Always at least one.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; present for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Highest valid index.
    pub fn last_index(&self) -> usize {
        self.0.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Word> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Word] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ============================================================================
// OUTCOMES
// ============================================================================

/// Classification of a guess against the expected translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuessResult {
    /// Same text after normalization.
    Match,
    /// One normalized string contains the other.
    PartialMatch,
    /// Neither equal nor contained.
    Incorrect,
}

impl GuessResult {
    /// Wire name, as used in JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            GuessResult::Match => "match",
            GuessResult::PartialMatch => "partial-match",
            GuessResult::Incorrect => "incorrect",
        }
    }

    /// Whether this outcome reveals the expected translation.
    pub fn reveals_answer(self) -> bool {
        !matches!(self, GuessResult::Match)
    }
}

impl std::fmt::Display for GuessResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            GuessResult::Match => "Match",
            GuessResult::PartialMatch => "Partial match",
            GuessResult::Incorrect => "Incorrect",
        };
        f.write_str(label)
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Delay between a correct guess and the automatic move to the next word.
pub const AUTO_ADVANCE_DELAY: Duration = Duration::from_millis(300);

/// Output format for non-interactive commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

/// Configuration for an interactive practice session.
#[derive(Debug, Clone)]
pub struct PracticeConfig {
    /// Word list file (None = default location, then the built-in list).
    pub words_path: Option<PathBuf>,
    /// Requested starting position, 1-based as displayed. Clamped.
    pub start: Option<i64>,
    /// How long a correct guess stays on screen before advancing.
    pub advance_delay: Duration,
}

impl Default for PracticeConfig {
    fn default() -> Self {
        Self {
            words_path: None,
            start: None,
            advance_delay: AUTO_ADVANCE_DELAY,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

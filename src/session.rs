//! Practice session state machine.
//!
//! Holds the current word, the guess being typed and the last outcome.
//! Pure and synchronous: timing (the pause after a correct guess) belongs
//! to the caller, which asks [`Session::auto_advance_pending`] and calls
//! [`Session::advance`] when its delay elapses.
//!
//! ```text
//!   AwaitingGuess ──submit──▶ ShowingResult(r) ──advance──▶ AwaitingGuess (next word)
//!                                              └─advance──▶ Completed     (past last word)
//!   any state ──jump_to──▶ AwaitingGuess (clamped index)
//! ```

use crate::classify::classify;
use crate::types::{GuessResult, Word, WordList};

// ============================================================================
// TYPES
// ============================================================================

/// Where the session is in the per-word cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Guess input is open for the current word.
    AwaitingGuess,
    /// A guess was classified; input is locked.
    ShowingResult(GuessResult),
    /// Advanced past the last word. Terminal until a jump or restart.
    Completed,
}

/// Outcome of [`Session::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the word at this index.
    Next(usize),
    /// The list is exhausted. This is the completion signal.
    Completed,
    /// Nothing to advance from (no result showing).
    Ignored,
}

/// One practice run through a word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    words: WordList,
    index: usize,
    guess: String,
    phase: Phase,
}

// ============================================================================
// INDEX CLAMPING
// ============================================================================

/// Clamp a requested 0-based index into `[0, len - 1]`.
///
/// `len` must be non-zero; [`WordList`] guarantees it.
pub fn clamp_index(requested: i64, len: usize) -> usize {
    if requested <= 0 {
        return 0;
    }
    let last = len.saturating_sub(1);
    usize::try_from(requested).map_or(last, |i| i.min(last))
}

// ============================================================================
// SESSION
// ============================================================================

impl Session {
    /// Start at the first word with an empty guess.
    pub fn new(words: WordList) -> Self {
        Session {
            words,
            index: 0,
            guess: String::new(),
            phase: Phase::AwaitingGuess,
        }
    }

    /// Start at a requested 0-based index, clamped into range.
    pub fn starting_at(words: WordList, requested: i64) -> Self {
        let mut session = Session::new(words);
        session.index = clamp_index(requested, session.words.len());
        session
    }

    /// Start at a 1-based position as given on the command line.
    ///
    /// None starts at the first word; out-of-range positions are clamped.
    pub fn starting_at_position(words: WordList, position: Option<i64>) -> Self {
        let requested = position.map_or(0, |p| p.saturating_sub(1));
        Session::starting_at(words, requested)
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    /// Current 0-based index. Always valid.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Current 1-based position, as displayed.
    pub fn position(&self) -> usize {
        self.index + 1
    }

    pub fn current_word(&self) -> &Word {
        &self.words.as_slice()[self.index]
    }

    pub fn guess(&self) -> &str {
        &self.guess
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Result of the last submission for the current word, if any.
    pub fn last_result(&self) -> Option<GuessResult> {
        match self.phase {
            Phase::ShowingResult(result) => Some(result),
            _ => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.phase == Phase::Completed
    }

    /// Whether the guess field accepts input.
    pub fn accepts_input(&self) -> bool {
        self.phase == Phase::AwaitingGuess
    }

    /// A correct guess is showing and should advance on its own.
    pub fn auto_advance_pending(&self) -> bool {
        self.phase == Phase::ShowingResult(GuessResult::Match)
    }

    /// A miss is showing; only an explicit continue moves on.
    pub fn awaiting_continue(&self) -> bool {
        matches!(self.phase, Phase::ShowingResult(r) if r.reveals_answer())
    }

    /// The expected translation, exposed only while a miss is showing.
    pub fn revealed_translation(&self) -> Option<&str> {
        if self.awaiting_continue() {
            Some(&self.current_word().word_translation)
        } else {
            None
        }
    }

    // ------------------------------------------------------------------------
    // Guess editing
    // ------------------------------------------------------------------------

    /// Replace the guess text. Ignored while input is locked.
    pub fn set_guess(&mut self, input: impl Into<String>) {
        if self.accepts_input() {
            self.guess = input.into();
        }
    }

    /// Append a character to the guess. Ignored while input is locked.
    pub fn push_char(&mut self, c: char) {
        if self.accepts_input() {
            self.guess.push(c);
        }
    }

    /// Remove the last character of the guess. Ignored while input is locked.
    pub fn pop_char(&mut self) {
        if self.accepts_input() {
            self.guess.pop();
        }
    }

    // ------------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------------

    /// Submit `input` as the guess for the current word.
    ///
    /// Returns the classification, or None when a result is already
    /// showing or the session is completed (the form is locked).
    pub fn submit(&mut self, input: &str) -> Option<GuessResult> {
        if !self.accepts_input() {
            return None;
        }
        self.guess = input.to_string();
        let result = classify(&self.current_word().word_translation, &self.guess);
        self.phase = Phase::ShowingResult(result);
        Some(result)
    }

    /// Submit the guess typed so far.
    pub fn submit_guess(&mut self) -> Option<GuessResult> {
        let input = self.guess.clone();
        self.submit(&input)
    }

    /// Move past the result that is showing.
    ///
    /// Past the last word the index stays put and the session completes.
    pub fn advance(&mut self) -> Advance {
        if !matches!(self.phase, Phase::ShowingResult(_)) {
            return Advance::Ignored;
        }

        if self.index >= self.words.last_index() {
            self.phase = Phase::Completed;
            return Advance::Completed;
        }

        self.index += 1;
        self.reset_word();
        Advance::Next(self.index)
    }

    /// Jump to a requested 0-based index, clamped into range.
    ///
    /// Resets the guess and reopens input, also from `Completed`.
    /// Returns the index actually landed on.
    pub fn jump_to(&mut self, requested: i64) -> usize {
        self.index = clamp_index(requested, self.words.len());
        self.reset_word();
        self.index
    }

    /// Jump to a 1-based position as typed in the word-number field.
    pub fn jump_to_position(&mut self, position: i64) -> usize {
        self.jump_to(position.saturating_sub(1))
    }

    /// Start over from the first word.
    pub fn restart(&mut self) {
        self.jump_to(0);
    }

    fn reset_word(&mut self) {
        self.guess.clear();
        self.phase = Phase::AwaitingGuess;
    }
}

// ============================================================================
// TESTS
// ============================================================================

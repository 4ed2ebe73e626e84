//! TUI state algebra: pure types, zero effects.
//!
//! The practice progression itself lives in [`Session`]. This module adds
//! only what the screen needs on top of it: which field has focus, the
//! word-number draft, and the ticket of the pending auto-advance.

use std::time::Duration;

use crossterm::event::KeyEvent;

use crate::session::{Phase, Session};

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// Two kinds of producers feed a single mpsc channel:
/// - A key reader thread sends `Key` variants
/// - One-shot timer threads send `AdvanceDue` when a correct guess
///   has been on screen long enough
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event from the crossterm reader thread.
    Key(KeyEvent),
    /// The auto-advance scheduled under this ticket is due.
    AdvanceDue { ticket: u64 },
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Which input field receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The translation guess.
    #[default]
    Guess,
    /// The 1-based word number selector.
    WordNumber,
}

/// How raw keys should be interpreted.
///
/// Derived from the App, never stored: letters are text while a field
/// is editable and commands otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMode {
    Typing,
    Command,
}

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// The practice session being driven.
    pub session: Session,

    /// Field receiving typed input.
    pub focus: Focus,

    /// Text in the word-number field while it has focus.
    pub index_draft: String,

    /// Ticket of the auto-advance currently scheduled, if any.
    pub pending_advance: Option<u64>,

    /// Last ticket handed out. Tickets are never reused.
    pub last_ticket: u64,

    /// How long a correct guess stays on screen.
    pub advance_delay: Duration,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Type a character into the focused field.
    Insert(char),
    /// Delete the last character of the focused field.
    Backspace,
    /// Submit the focused field (guess or word number).
    Submit,
    /// Move past a miss that is showing.
    Continue,
    /// Switch focus between the guess and the word number.
    ToggleFocus,
    /// Jump to the previous word.
    PreviousWord,
    /// Jump to the next word.
    NextWord,
    /// Start over from the first word.
    Restart,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
///
/// State changes are applied to the App in place; this tells the
/// effects boundary what else, if anything, has to happen.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Nothing beyond re-rendering.
    Stay,
    /// Quit the application.
    Quit,
    /// Execute a side effect.
    Effect(Effect),
}

/// Side effect requested by a pure transition.
#[derive(Debug, PartialEq)]
pub enum Effect {
    /// Fire `AppEvent::AdvanceDue { ticket }` after `delay`.
    ScheduleAdvance { ticket: u64, delay: Duration },
    /// The last word was advanced past.
    Completed { total: usize },
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// Create an App driving `session`, guess field focused.
    pub fn new(session: Session, advance_delay: Duration) -> Self {
        App {
            session,
            focus: Focus::Guess,
            index_draft: String::new(),
            pending_advance: None,
            last_ticket: 0,
            advance_delay,
            should_quit: false,
        }
    }

    /// Current key interpretation mode.
    pub fn key_mode(&self) -> KeyMode {
        match self.focus {
            Focus::WordNumber => KeyMode::Typing,
            Focus::Guess if self.session.phase() == Phase::AwaitingGuess => KeyMode::Typing,
            Focus::Guess => KeyMode::Command,
        }
    }

    /// Hand out a fresh auto-advance ticket and mark it pending.
    pub fn schedule_advance(&mut self) -> u64 {
        self.last_ticket += 1;
        self.pending_advance = Some(self.last_ticket);
        self.last_ticket
    }

    /// Drop any pending auto-advance.
    pub fn cancel_advance(&mut self) {
        self.pending_advance = None;
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Word, WordList, AUTO_ADVANCE_DELAY};

    fn app() -> App {
        let words = WordList::new(vec![Word::new("hello", "hola"), Word::new("house", "casa")]).unwrap();
        App::new(Session::new(words), AUTO_ADVANCE_DELAY)
    }

    #[test]
    fn new_app_focuses_guess_and_types() {
        let app = app();
        assert_eq!(app.focus, Focus::Guess);
        assert_eq!(app.key_mode(), KeyMode::Typing);
        assert!(app.pending_advance.is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn showing_result_switches_to_command_mode() {
        let mut app = app();
        app.session.submit("nope");
        assert_eq!(app.key_mode(), KeyMode::Command);
    }

    #[test]
    fn word_number_focus_always_types() {
        let mut app = app();
        app.session.submit("nope");
        app.focus = Focus::WordNumber;
        assert_eq!(app.key_mode(), KeyMode::Typing);
    }

    #[test]
    fn tickets_are_unique_and_pending() {
        let mut app = app();
        let first = app.schedule_advance();
        let second = app.schedule_advance();
        assert_ne!(first, second);
        assert_eq!(app.pending_advance, Some(second));
        app.cancel_advance();
        assert!(app.pending_advance.is_none());
    }

    #[test]
    fn transition_variants_are_distinguishable() {
        let t1 = Transition::Stay;
        let t2 = Transition::Quit;
        let t3 = Transition::Effect(Effect::Completed { total: 2 });
        assert_ne!(t1, t2);
        assert_ne!(t2, t3);
    }
}

//! TUI color semantics and style constants.
//!
//! Pure data — consumed by the rendering layer for visual consistency.
//!
//! Color semantics:
//! - Green: correct guess, completion
//! - Yellow: partial match
//! - Red: incorrect guess
//! - Cyan: interactive elements (focused field, keybinding hints)
//! - Dim: de-emphasized (locked input, labels)

use ratatui::style::{Color, Modifier, Style};

use crate::types::GuessResult;

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Correct guess — green.
pub const STYLE_MATCH: Style = Style::new().fg(Color::Green);

/// Partial match — yellow.
pub const STYLE_PARTIAL: Style = Style::new().fg(Color::Yellow);

/// Incorrect guess — red.
pub const STYLE_INCORRECT: Style = Style::new().fg(Color::Red);

/// Interactive element / keybinding hint — cyan.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// De-emphasized labels — dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// The word being practiced.
pub const STYLE_WORD: Style = Style::new().add_modifier(Modifier::BOLD);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Border of the focused input field.
pub const STYLE_FOCUSED: Style = Style::new().fg(Color::Cyan);

/// Border of an unfocused or locked field.
pub const STYLE_UNFOCUSED: Style = Style::new().fg(Color::DarkGray);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

/// Word card border color for a classification (None = no result yet).
pub fn result_style(result: Option<GuessResult>) -> Style {
    match result {
        Some(GuessResult::Match) => STYLE_MATCH,
        Some(GuessResult::PartialMatch) => STYLE_PARTIAL,
        Some(GuessResult::Incorrect) => STYLE_INCORRECT,
        None => STYLE_UNFOCUSED,
    }
}

// ============================================================================
// TESTS
// ============================================================================

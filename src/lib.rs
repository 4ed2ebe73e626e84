//! lingo-drill: Flashcard practice for vocabulary, in the terminal.

pub mod classify;
pub mod error;
pub mod report;
pub mod session;
pub mod tui;
pub mod types;
pub mod words;

//! Pure rendering: map App state to ratatui widget trees.
//!
//! The screen is a word-number selector above a word card. The card's
//! border color carries the classification; a miss reveals the expected
//! translation next to the word. Widget-building functions are pure
//! (state in, widgets out); the only effect is Frame::render_widget().

use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use crate::session::{Phase, Session};
use crate::types::GuessResult;

use super::state::{App, Focus, KeyMode};
use super::theme;

/// Shown when the last word has been advanced past.
pub const COMPLETION_MESSAGE: &str = "Congrats, you practiced all words!";

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the practice screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Common layout: title bar at top, content in middle, help at bottom
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // content
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_title(&app.session), chunks[0]);
    frame.render_widget(render_help(app), chunks[2]);

    let content = Layout::vertical([
        Constraint::Length(3), // word number selector
        Constraint::Min(0),    // word card
    ])
    .split(chunks[1]);

    render_word_number(app, frame, content[0]);

    if app.session.is_completed() {
        render_completed(&app.session, frame, content[1]);
    } else {
        render_word_card(app, frame, content[1]);
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

/// Title bar: app name and progress through the list.
fn render_title(session: &Session) -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled("Practice", theme::STYLE_TITLE),
        Span::styled(
            format!("  word {} of {}", session.position(), session.words().len()),
            theme::STYLE_DIM,
        ),
    ]))
}

/// Help line showing available keybindings for the current mode.
fn render_help(app: &App) -> Paragraph<'static> {
    let help_text = match (app.focus, app.session.phase()) {
        (Focus::WordNumber, _) => "[0-9] word #  [Enter] go  [↑/↓] step  [Tab] back to guess  [Esc] quit",
        (Focus::Guess, Phase::AwaitingGuess) => {
            "[Enter] check  [Tab] word #  [↑/↓] previous/next word  [Esc] quit"
        }
        (Focus::Guess, Phase::ShowingResult(GuessResult::Match)) => "Correct! Moving on...",
        (Focus::Guess, Phase::ShowingResult(_)) => "[Enter] continue  [↑/↓] previous/next word  [q] quit",
        (Focus::Guess, Phase::Completed) => "[r] practice again  [Tab] word #  [q] quit",
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

// ============================================================================
// WORD NUMBER SELECTOR
// ============================================================================

fn render_word_number(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::horizontal([
        Constraint::Length(12), // field
        Constraint::Min(0),     // "of N"
    ])
    .split(area);

    let focused = app.focus == Focus::WordNumber;
    let text = if focused {
        app.index_draft.clone()
    } else {
        app.session.position().to_string()
    };

    let block = Block::bordered()
        .title("Word #")
        .border_style(if focused { theme::STYLE_FOCUSED } else { theme::STYLE_UNFOCUSED });
    let inner = block.inner(chunks[0]);
    frame.render_widget(Paragraph::new(text.clone()).block(block), chunks[0]);

    // Align with the field's text row
    let total_area = Rect {
        y: chunks[1].y.saturating_add(1),
        height: 1,
        ..chunks[1]
    }
    .intersection(area);
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" of {}", app.session.words().len()),
            theme::STYLE_DIM,
        )),
        total_area,
    );

    if focused {
        place_cursor(frame, inner, &text);
    }
}

// ============================================================================
// WORD CARD
// ============================================================================

fn render_word_card(app: &App, frame: &mut Frame, area: Rect) {
    let session = &app.session;
    let result = session.last_result();

    let card = Block::bordered()
        .title("Word")
        .border_style(theme::result_style(result));
    let inner = card.inner(area);
    frame.render_widget(card, area);

    let chunks = Layout::vertical([
        Constraint::Length(3), // word (+ reveal) and result label
        Constraint::Length(3), // guess field
        Constraint::Length(1), // continue action
        Constraint::Min(0),
    ])
    .split(inner);

    frame.render_widget(
        Paragraph::new(word_lines(session)).wrap(Wrap { trim: false }),
        chunks[0],
    );

    render_guess_field(app, frame, chunks[1]);

    if session.awaiting_continue() {
        let action = Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled("[Enter]", theme::STYLE_INTERACTIVE),
            Span::raw(" Continue ›"),
        ]));
        frame.render_widget(action, chunks[2]);
    }
}

/// The word, the revealed translation on a miss, and the result label.
fn word_lines(session: &Session) -> Vec<Line<'static>> {
    let word = session.current_word();
    let result = session.last_result();

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(word.word.clone(), theme::STYLE_WORD),
    ];
    if let Some(translation) = session.revealed_translation() {
        spans.push(Span::raw("  →  "));
        spans.push(Span::styled(
            translation.to_string(),
            theme::result_style(result),
        ));
    }

    let label = match result {
        Some(GuessResult::Match) => Span::styled(" ✓ Correct", theme::STYLE_MATCH),
        Some(GuessResult::PartialMatch) => Span::styled(" ~ Almost", theme::STYLE_PARTIAL),
        Some(GuessResult::Incorrect) => Span::styled(" ✗ Incorrect", theme::STYLE_INCORRECT),
        None => Span::raw(""),
    };

    vec![Line::from(""), Line::from(spans), Line::from(label)]
}

fn render_guess_field(app: &App, frame: &mut Frame, area: Rect) {
    let session = &app.session;
    let editing = app.key_mode() == KeyMode::Typing && app.focus == Focus::Guess;

    let border = if editing { theme::STYLE_FOCUSED } else { theme::STYLE_UNFOCUSED };
    let block = Block::bordered().title("Translation").border_style(border);
    let inner = block.inner(area);

    let text_style = if session.accepts_input() {
        Style::new()
    } else {
        theme::STYLE_DIM
    };
    let field = Paragraph::new(Span::styled(session.guess().to_string(), text_style)).block(block);
    frame.render_widget(field, area);

    if editing {
        place_cursor(frame, inner, session.guess());
    }
}

// ============================================================================
// COMPLETED
// ============================================================================

fn render_completed(session: &Session, frame: &mut Frame, area: Rect) {
    let total = session.words().len();
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  ✓ {}", COMPLETION_MESSAGE), theme::STYLE_MATCH)),
        Line::from(""),
        Line::from(Span::styled(
            format!("    {} word{} practiced", total, if total == 1 { "" } else { "s" }),
            theme::STYLE_DIM,
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  [r] ", theme::STYLE_INTERACTIVE),
            Span::raw("Practice again    "),
            Span::styled("[q] ", theme::STYLE_INTERACTIVE),
            Span::raw("Quit"),
        ]),
    ];

    let card = Block::bordered().title("Done").border_style(theme::STYLE_MATCH);
    let paragraph = Paragraph::new(lines).block(card).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

// ============================================================================
// HELPERS
// ============================================================================

/// Put the terminal cursor after `text` inside a field, clipped to the field.
fn place_cursor(frame: &mut Frame, inner: Rect, text: &str) {
    if inner.width == 0 || inner.height == 0 {
        return;
    }
    let offset = u16::try_from(Span::raw(text).width()).unwrap_or(u16::MAX);
    let x = inner.x.saturating_add(offset).min(inner.right().saturating_sub(1));
    frame.set_cursor_position(Position::new(x, inner.y));
}

// ============================================================================
// TESTS
// ============================================================================

//! State transitions: (App, Action) → Transition. No I/O.
//!
//! This is the core logic of the TUI. Fully testable without a terminal.
//! Each mode defines which actions it accepts; unhandled actions leave
//! the App unchanged.

use crate::session::{Advance, Phase};

use super::state::{Action, App, AppEvent, Effect, Focus, Transition};

/// State transition function.
///
/// Mutates `app` in place (no I/O) and reports what the effects
/// boundary still has to do.
pub fn update(app: &mut App, action: &Action) -> Transition {
    match action {
        Action::Quit => return Transition::Quit,
        Action::ToggleFocus => return toggle_focus(app),
        Action::PreviousWord => return step_word(app, -1),
        Action::NextWord => return step_word(app, 1),
        _ => {}
    }

    match app.focus {
        Focus::WordNumber => update_word_number(app, action),
        Focus::Guess => match app.session.phase() {
            Phase::AwaitingGuess => update_awaiting_guess(app, action),
            Phase::ShowingResult(_) => update_showing_result(app, action),
            Phase::Completed => update_completed(app, action),
        },
    }
}

/// Handle an event from a background producer (the auto-advance timer).
///
/// A timer only counts if its ticket is still the pending one and the
/// correct guess it was scheduled for is still showing.
pub fn handle_background_event(app: &mut App, event: AppEvent) -> Transition {
    match event {
        AppEvent::AdvanceDue { ticket } => {
            if app.pending_advance != Some(ticket) || !app.session.auto_advance_pending() {
                return Transition::Stay;
            }
            advance(app)
        }
        // Keys go through map_key → update, never here
        AppEvent::Key(_) => Transition::Stay,
    }
}

// ============================================================================
// SHARED
// ============================================================================

/// Move past the current result, cancelling any pending timer.
fn advance(app: &mut App) -> Transition {
    app.cancel_advance();
    let advanced = app.session.advance();
    sync_index_draft(app);
    match advanced {
        Advance::Completed => Transition::Effect(Effect::Completed {
            total: app.session.words().len(),
        }),
        Advance::Next(_) | Advance::Ignored => Transition::Stay,
    }
}

/// Keep an open word-number field in step with the session index.
fn sync_index_draft(app: &mut App) {
    if app.focus == Focus::WordNumber {
        app.index_draft = app.session.position().to_string();
    }
}

/// Jump relative to the current word. Lands in the guess field.
fn step_word(app: &mut App, delta: i64) -> Transition {
    let target = app.session.index() as i64 + delta;
    app.session.jump_to(target);
    app.cancel_advance();
    sync_index_draft(app);
    Transition::Stay
}

fn toggle_focus(app: &mut App) -> Transition {
    app.focus = match app.focus {
        Focus::Guess => {
            app.index_draft = app.session.position().to_string();
            Focus::WordNumber
        }
        Focus::WordNumber => {
            app.index_draft.clear();
            Focus::Guess
        }
    };
    Transition::Stay
}

// ============================================================================
// PER-MODE HANDLERS
// ============================================================================

/// Word-number field: digits (and a leading minus) edit the draft,
/// Submit jumps to the clamped position and returns to the guess.
fn update_word_number(app: &mut App, action: &Action) -> Transition {
    match action {
        Action::Insert(c) if c.is_ascii_digit() || (*c == '-' && app.index_draft.is_empty()) => {
            app.index_draft.push(*c);
        }
        Action::Backspace => {
            app.index_draft.pop();
        }
        Action::Submit => {
            // Unparseable drafts ("", "-") leave the index alone
            if let Ok(position) = app.index_draft.parse::<i64>() {
                app.session.jump_to_position(position);
                app.cancel_advance();
            }
            app.index_draft.clear();
            app.focus = Focus::Guess;
        }
        _ => {}
    }
    Transition::Stay
}

/// Guess field open: edit and submit.
fn update_awaiting_guess(app: &mut App, action: &Action) -> Transition {
    match action {
        Action::Insert(c) => app.session.push_char(*c),
        Action::Backspace => app.session.pop_char(),
        Action::Submit => {
            if let Some(result) = app.session.submit_guess() {
                if !result.reveals_answer() {
                    let ticket = app.schedule_advance();
                    return Transition::Effect(Effect::ScheduleAdvance {
                        ticket,
                        delay: app.advance_delay,
                    });
                }
            }
        }
        _ => {}
    }
    Transition::Stay
}

/// Result showing: Continue only moves past a miss. A correct guess
/// waits for its timer.
fn update_showing_result(app: &mut App, action: &Action) -> Transition {
    match action {
        Action::Continue if app.session.awaiting_continue() => advance(app),
        _ => Transition::Stay,
    }
}

/// Completed: only a restart (or a jump, handled above) reopens the list.
fn update_completed(app: &mut App, action: &Action) -> Transition {
    if *action == Action::Restart {
        app.session.restart();
    }
    Transition::Stay
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use crate::types::{GuessResult, Word, WordList};
    use std::time::Duration;

    const DELAY: Duration = Duration::from_millis(300);

    fn app() -> App {
        let words = WordList::new(vec![
            Word::new("hello", "Hola"),
            Word::new("house", "Casa"),
            Word::new("goodbye", "Adios"),
        ])
        .unwrap();
        App::new(Session::new(words), DELAY)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            update(app, &Action::Insert(c));
        }
    }

    // -- Guess entry --

    #[test]
    fn typing_edits_the_guess() {
        let mut app = app();
        type_str(&mut app, "hox");
        update(&mut app, &Action::Backspace);
        assert_eq!(app.session.guess(), "ho");
    }

    #[test]
    fn correct_guess_schedules_auto_advance() {
        let mut app = app();
        type_str(&mut app, "hola");
        let result = update(&mut app, &Action::Submit);
        assert_eq!(
            result,
            Transition::Effect(Effect::ScheduleAdvance { ticket: 1, delay: DELAY })
        );
        assert_eq!(app.pending_advance, Some(1));
        assert_eq!(app.session.phase(), Phase::ShowingResult(GuessResult::Match));
    }

    #[test]
    fn auto_advance_moves_to_next_word_without_continue() {
        let mut app = app();
        type_str(&mut app, "hola");
        update(&mut app, &Action::Submit);

        let result = handle_background_event(&mut app, AppEvent::AdvanceDue { ticket: 1 });
        assert_eq!(result, Transition::Stay);
        assert_eq!(app.session.index(), 1);
        assert_eq!(app.session.phase(), Phase::AwaitingGuess);
        assert!(app.pending_advance.is_none());
    }

    #[test]
    fn continue_is_unavailable_for_a_match() {
        let mut app = app();
        type_str(&mut app, "hola");
        update(&mut app, &Action::Submit);
        update(&mut app, &Action::Continue);
        assert_eq!(app.session.index(), 0);
        assert!(app.session.auto_advance_pending());
    }

    #[test]
    fn miss_waits_for_continue() {
        let mut app = app();
        type_str(&mut app, "adios");
        assert_eq!(update(&mut app, &Action::Submit), Transition::Stay);
        assert!(app.pending_advance.is_none());
        assert_eq!(app.session.revealed_translation(), Some("Hola"));

        update(&mut app, &Action::Continue);
        assert_eq!(app.session.index(), 1);
        assert_eq!(app.session.guess(), "");
    }

    #[test]
    fn input_is_locked_while_result_showing() {
        let mut app = app();
        type_str(&mut app, "ho");
        update(&mut app, &Action::Submit);
        type_str(&mut app, "la");
        update(&mut app, &Action::Submit);
        assert_eq!(app.session.guess(), "ho");
        assert_eq!(app.session.last_result(), Some(GuessResult::PartialMatch));
    }

    // -- Timer tickets --

    #[test]
    fn stale_ticket_is_ignored() {
        let mut app = app();
        type_str(&mut app, "hola");
        update(&mut app, &Action::Submit);
        // Jump away and come back, then match again: ticket 1 is stale
        update(&mut app, &Action::NextWord);
        update(&mut app, &Action::PreviousWord);
        type_str(&mut app, "hola");
        update(&mut app, &Action::Submit);

        handle_background_event(&mut app, AppEvent::AdvanceDue { ticket: 1 });
        assert_eq!(app.session.index(), 0);
        assert!(app.session.auto_advance_pending());

        handle_background_event(&mut app, AppEvent::AdvanceDue { ticket: 2 });
        assert_eq!(app.session.index(), 1);
    }

    #[test]
    fn timer_after_jump_is_ignored() {
        let mut app = app();
        type_str(&mut app, "hola");
        update(&mut app, &Action::Submit);
        update(&mut app, &Action::NextWord);

        handle_background_event(&mut app, AppEvent::AdvanceDue { ticket: 1 });
        assert_eq!(app.session.index(), 1);
        assert_eq!(app.session.phase(), Phase::AwaitingGuess);
    }

    // -- Completion --

    #[test]
    fn advancing_past_last_word_emits_completed() {
        let mut app = app();
        app.session.jump_to(2);
        type_str(&mut app, "adios");
        update(&mut app, &Action::Submit);

        let result = handle_background_event(&mut app, AppEvent::AdvanceDue { ticket: 1 });
        assert_eq!(result, Transition::Effect(Effect::Completed { total: 3 }));
        assert!(app.session.is_completed());
        assert_eq!(app.session.index(), 2);
    }

    #[test]
    fn continue_on_last_miss_emits_completed() {
        let mut app = app();
        app.session.jump_to(2);
        type_str(&mut app, "nope");
        update(&mut app, &Action::Submit);
        assert_eq!(
            update(&mut app, &Action::Continue),
            Transition::Effect(Effect::Completed { total: 3 })
        );
    }

    #[test]
    fn restart_reopens_completed_session() {
        let mut app = app();
        app.session.jump_to(2);
        type_str(&mut app, "nope");
        update(&mut app, &Action::Submit);
        update(&mut app, &Action::Continue);

        update(&mut app, &Action::Restart);
        assert_eq!(app.session.index(), 0);
        assert_eq!(app.session.phase(), Phase::AwaitingGuess);
    }

    #[test]
    fn restart_is_ignored_mid_session() {
        let mut app = app();
        app.session.jump_to(1);
        type_str(&mut app, "nope");
        update(&mut app, &Action::Submit);
        update(&mut app, &Action::Restart);
        assert_eq!(app.session.index(), 1);
    }

    // -- Word number selector --

    #[test]
    fn toggle_focus_seeds_draft_with_position() {
        let mut app = app();
        app.session.jump_to(1);
        update(&mut app, &Action::ToggleFocus);
        assert_eq!(app.focus, Focus::WordNumber);
        assert_eq!(app.index_draft, "2");

        update(&mut app, &Action::ToggleFocus);
        assert_eq!(app.focus, Focus::Guess);
        assert!(app.index_draft.is_empty());
    }

    #[test]
    fn word_number_submit_jumps_one_based() {
        let mut app = app();
        update(&mut app, &Action::ToggleFocus);
        update(&mut app, &Action::Backspace);
        type_str(&mut app, "3");
        update(&mut app, &Action::Submit);
        assert_eq!(app.session.index(), 2);
        assert_eq!(app.focus, Focus::Guess);
    }

    #[test]
    fn word_number_clamps_out_of_range() {
        let mut app = app();
        update(&mut app, &Action::ToggleFocus);
        update(&mut app, &Action::Backspace);
        type_str(&mut app, "99");
        update(&mut app, &Action::Submit);
        assert_eq!(app.session.index(), 2);

        update(&mut app, &Action::ToggleFocus);
        update(&mut app, &Action::Backspace);
        type_str(&mut app, "-5");
        update(&mut app, &Action::Submit);
        assert_eq!(app.session.index(), 0);
    }

    #[test]
    fn auto_advance_refreshes_open_word_number() {
        let mut app = app();
        type_str(&mut app, "hola");
        update(&mut app, &Action::Submit);
        update(&mut app, &Action::ToggleFocus);
        assert_eq!(app.index_draft, "1");

        handle_background_event(&mut app, AppEvent::AdvanceDue { ticket: 1 });
        assert_eq!(app.session.index(), 1);
        assert_eq!(app.index_draft, "2");

        // Enter on the untouched field stays on the advanced word
        update(&mut app, &Action::Submit);
        assert_eq!(app.session.index(), 1);
        assert_eq!(app.focus, Focus::Guess);
    }

    #[test]
    fn word_number_ignores_letters() {
        let mut app = app();
        update(&mut app, &Action::ToggleFocus);
        type_str(&mut app, "a-b");
        assert_eq!(app.index_draft, "1");
    }

    #[test]
    fn empty_word_number_keeps_index() {
        let mut app = app();
        app.session.jump_to(1);
        update(&mut app, &Action::ToggleFocus);
        update(&mut app, &Action::Backspace);
        update(&mut app, &Action::Submit);
        assert_eq!(app.session.index(), 1);
        assert_eq!(app.focus, Focus::Guess);
    }

    #[test]
    fn word_number_typing_does_not_touch_guess() {
        let mut app = app();
        type_str(&mut app, "ho");
        update(&mut app, &Action::ToggleFocus);
        type_str(&mut app, "2");
        assert_eq!(app.session.guess(), "ho");
    }

    // -- Stepping --

    #[test]
    fn step_clamps_at_both_ends() {
        let mut app = app();
        update(&mut app, &Action::PreviousWord);
        assert_eq!(app.session.index(), 0);
        for _ in 0..5 {
            update(&mut app, &Action::NextWord);
        }
        assert_eq!(app.session.index(), 2);
    }

    #[test]
    fn step_while_selecting_updates_draft() {
        let mut app = app();
        update(&mut app, &Action::ToggleFocus);
        update(&mut app, &Action::NextWord);
        assert_eq!(app.index_draft, "2");
    }

    #[test]
    fn quit_always_quits() {
        let mut app = app();
        assert_eq!(update(&mut app, &Action::Quit), Transition::Quit);
        update(&mut app, &Action::ToggleFocus);
        assert_eq!(update(&mut app, &Action::Quit), Transition::Quit);
    }
}

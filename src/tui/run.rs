//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! Architecture: producer threads feed a single mpsc channel.
//! - Key reader thread: forwards crossterm key events
//! - Timer threads: one per correct guess, fire once after the delay
//! The event loop consumes from the channel, dispatching to pure handlers.

use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::session::Session;

use super::state::{Action, App, AppEvent, Effect, KeyMode, Transition};
use super::update::{handle_background_event, update};
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// In `Typing` mode printable characters are text; in `Command` mode
/// they are shortcuts. Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent, mode: KeyMode) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    // Shared navigation
    match key.code {
        KeyCode::Up | KeyCode::PageUp => return Some(Action::PreviousWord),
        KeyCode::Down | KeyCode::PageDown => return Some(Action::NextWord),
        KeyCode::Tab | KeyCode::BackTab => return Some(Action::ToggleFocus),
        KeyCode::Esc => return Some(Action::Quit),
        _ => {}
    }

    match mode {
        KeyMode::Typing => match key.code {
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(Action::Insert(c))
            }
            _ => None,
        },
        KeyMode::Command => match key.code {
            KeyCode::Enter | KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('c') => {
                Some(Action::Continue)
            }
            KeyCode::Char('k') => Some(Action::PreviousWord),
            KeyCode::Char('j') => Some(Action::NextWord),
            KeyCode::Char('r') => Some(Action::Restart),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards key presses to the channel.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if tx.send(AppEvent::Key(key)).is_err() {
                        break; // receiver dropped, TUI is shutting down
                    }
                }
                Ok(_) => {} // ignore releases, mouse, resize, etc.
                Err(_) => break,
            }
        }
    });
}

/// Spawn a one-shot timer that reports the auto-advance as due.
///
/// Never cancelled directly: a stale ticket is dropped by the pure handler.
fn spawn_advance_timer(ticket: u64, delay: Duration, tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        thread::sleep(delay);
        // Receiver gone means the TUI already exited
        let _ = tx.send(AppEvent::AdvanceDue { ticket });
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the practice screen until the user quits.
///
/// Returns the session as it stood on exit.
pub fn run(session: Session, advance_delay: Duration) -> io::Result<Session> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new(session, advance_delay);

    log::info!(
        "practice started at word {} of {}",
        app.session.position(),
        app.session.words().len()
    );

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_key_reader(tx.clone());

    loop {
        terminal.draw(|frame| render(&app, frame))?;

        if app.should_quit {
            break;
        }

        // Block on next event from any producer
        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => break, // all senders dropped
        };

        let transition = match event {
            AppEvent::Key(key) => match map_key(key, app.key_mode()) {
                Some(action) => update(&mut app, &action),
                None => Transition::Stay,
            },
            background_event => handle_background_event(&mut app, background_event),
        };

        match transition {
            Transition::Stay => {}
            Transition::Quit => app.should_quit = true,
            Transition::Effect(effect) => handle_effect(effect, &tx),
        }
    }

    restore_terminal()?;
    log::info!("practice stopped at word {}", app.session.position());
    Ok(app.session)
}

// ============================================================================
// EFFECT HANDLING
// ============================================================================

/// Handle a side effect requested by a pure transition.
fn handle_effect(effect: Effect, tx: &mpsc::Sender<AppEvent>) {
    match effect {
        Effect::ScheduleAdvance { ticket, delay } => {
            log::debug!("auto-advance #{} in {:?}", ticket, delay);
            spawn_advance_timer(ticket, delay, tx.clone());
        }
        Effect::Completed { total } => {
            log::info!("all {} words practiced", total);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

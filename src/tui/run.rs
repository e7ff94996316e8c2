//! Prompt effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal: all intelligence lives in the pure layers.
//!
//! Architecture: a key reader thread feeds an mpsc channel. The event loop
//! consumes one event at a time and draws each frame before reading the
//! next one. Frames are drawn into an inline viewport, so the prompt lives
//! in the normal scrollback instead of an alternate screen.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::{Arc, Once};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{cursor, ExecutableCommand};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::widgets::{Paragraph, Widget};
use ratatui::{Terminal, TerminalOptions, Viewport};

use crate::error::{PromptError, Result};
use crate::types::PromptConfig;

use super::state::{Action, AppEvent, Outcome, SelectPrompt};
use super::view::{max_height, Frame};

/// Frames go to stderr so stdout carries only the answer.
type PromptTerminal = Terminal<CrosstermBackend<io::Stderr>>;

/// How often the key reader wakes up to check whether it should stop.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

static PANIC_HOOK: Once = Once::new();

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Interrupt),
            KeyCode::Char('p') => Some(Action::MoveUp),
            KeyCode::Char('n') => Some(Action::MoveDown),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Esc => Some(Action::Interrupt),
        KeyCode::Char(c @ '0'..='9') => Some(Action::Jump(c as u8 - b'0')),
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Raw mode for as long as the guard lives.
///
/// Dropping it shows the cursor and leaves raw mode, on every exit path
/// including a failed terminal setup.
struct RawGuard;

impl RawGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(RawGuard)
    }
}

impl Drop for RawGuard {
    fn drop(&mut self) {
        let _ = io::stderr().execute(cursor::Show);
        let _ = disable_raw_mode();
    }
}

/// Open an inline viewport `height` rows tall. Raw mode must already be on.
fn setup_terminal(height: u16) -> io::Result<PromptTerminal> {
    let backend = CrosstermBackend::new(io::stderr());
    Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(height),
        },
    )
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stderr().execute(cursor::Show)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
///
/// Only the first call installs it; later prompts reuse the same hook.
fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));
    });
}

// ============================================================================
// KEY READER
// ============================================================================

/// Spawn a thread that forwards key presses and resizes to the channel.
///
/// Polls so it can notice `stop` and exit instead of swallowing input
/// meant for whatever runs after the prompt. A failed poll or read is sent
/// as [`AppEvent::Error`] and ends the thread.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>, stop: Arc<AtomicBool>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        while !stop.load(Ordering::Relaxed) {
            match event::poll(POLL_INTERVAL) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "terminal event poll failed");
                    let _ = tx.send(AppEvent::Error(e));
                    break;
                }
            }

            let event = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                Ok(Event::Resize(..)) => AppEvent::Resize,
                Ok(_) => continue,
                Err(e) => {
                    tracing::warn!(error = %e, "terminal event read failed");
                    let _ = tx.send(AppEvent::Error(e));
                    break;
                }
            };

            if tx.send(event).is_err() {
                break; // receiver dropped, prompt is finished
            }
        }
    })
}

// ============================================================================
// DRAWING
// ============================================================================

/// Push a frame to the terminal.
///
/// Interactive frames are drawn into the viewport. The final frame is
/// inserted above it so it stays in scrollback, and the cursor comes back.
fn present<B: Backend>(
    terminal: &mut Terminal<B>,
    frame: &Frame,
) -> std::result::Result<(), B::Error> {
    if frame.hide_cursor {
        terminal.draw(|f| {
            let area = f.area();
            f.render_widget(Paragraph::new(frame.lines.clone()), area);
        })?;
        return Ok(());
    }

    terminal.clear()?;
    let lines = frame.lines.clone();
    terminal.insert_before(frame.height(), move |buf| {
        let area = buf.area;
        Paragraph::new(lines).render(area, buf);
    })?;
    terminal.show_cursor()?;
    Ok(())
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Show a select prompt and return the value of the confirmed choice.
///
/// # Errors
///
/// - [`PromptError::NoSelectableChoice`] before anything is drawn when the
///   list has nothing to select.
/// - [`PromptError::Interrupted`] on Ctrl+C or Esc.
/// - [`PromptError::Io`] when the terminal cannot be driven.
pub fn select(config: PromptConfig) -> Result<String> {
    let prompt = SelectPrompt::new(config)?;
    run(prompt)
}

/// Drive an already constructed prompt until it resolves.
pub fn run(mut prompt: SelectPrompt) -> Result<String> {
    install_panic_hook();
    let guard = RawGuard::enter()?;
    let mut terminal = setup_terminal(max_height(prompt.config()))?;

    let (tx, rx) = mpsc::channel::<AppEvent>();
    let stop = Arc::new(AtomicBool::new(false));
    let reader = spawn_key_reader(tx, Arc::clone(&stop));

    let result = event_loop(&mut terminal, &mut prompt, &rx);

    stop.store(true, Ordering::Relaxed);
    drop(rx);
    let _ = reader.join();

    if result.is_err() {
        let _ = terminal.clear();
    }
    drop(guard);
    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    prompt: &mut SelectPrompt,
    rx: &mpsc::Receiver<AppEvent>,
) -> Result<String>
where
    PromptError: From<B::Error>,
{
    let mut frame = prompt.next_frame();
    present(terminal, &frame)?;

    loop {
        // Block on next event; all senders gone means input closed
        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => {
                return Err(PromptError::Io(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "terminal input closed",
                )));
            }
        };

        let key = match event {
            AppEvent::Key(key) => key,
            AppEvent::Resize => {
                terminal.autoresize()?;
                present(terminal, &frame)?;
                continue;
            }
            AppEvent::Error(e) => return Err(PromptError::Io(e)),
        };

        let Some(action) = map_key(key) else {
            continue;
        };

        match prompt.apply(&action) {
            Outcome::Render => {
                frame = prompt.next_frame();
                present(terminal, &frame)?;
            }
            Outcome::Ignore => {}
            Outcome::Resolved(value) => {
                frame = prompt.next_frame();
                present(terminal, &frame)?;
                return Ok(value);
            }
            Outcome::Interrupted => return Err(PromptError::Interrupted),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

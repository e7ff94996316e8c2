//! Prompt state algebra: pure types, zero effects.
//!
//! These types define the whole state space of a running prompt. The
//! transition function and the renderer both program against them.
//!
//! Design principle: [`PromptState`] carries only what changes in response
//! to input (status, cursor). The choice list lives in [`PromptConfig`] and
//! is never mutated while the prompt runs. Window offsets are derived during
//! rendering, not stored here.

use crossterm::event::KeyEvent;

use crate::error::{PromptError, Result};
use crate::types::{Choice, Entry, PromptConfig};

use super::navigate::{find_value, first_selectable};

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// A single key reader thread produces these. The loop consumes them one at
/// a time, finishing each render before it reads the next event. A reader
/// that fails sends `Error` before it exits.
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key press.
    Key(KeyEvent),
    /// Terminal was resized; redraw the last frame.
    Resize,
    /// Reading terminal input failed.
    Error(std::io::Error),
}

// ============================================================================
// PROMPT STATE
// ============================================================================

/// Lifecycle of a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Pending,
    /// Confirmed. Terminal: no event changes the state after this.
    Done,
}

/// The mutable part of a prompt.
///
/// While `status` is Pending, `cursor` indexes a choice that is not
/// disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptState {
    pub status: Status,
    pub cursor: usize,
}

impl PromptState {
    pub fn pending(cursor: usize) -> Self {
        PromptState {
            status: Status::Pending,
            cursor,
        }
    }

    pub fn is_done(&self) -> bool {
        self.status == Status::Done
    }
}

/// A running select prompt: its read-only config plus the state it owns.
#[derive(Debug)]
pub struct SelectPrompt {
    pub(crate) config: PromptConfig,
    pub(crate) state: PromptState,
    /// Frames produced so far. Zero means the next frame is the first.
    pub(crate) renders: usize,
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps key presses to Actions. The transition function
/// decides what each Action means for the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Move cursor up, wrapping.
    MoveUp,
    /// Move cursor down, wrapping.
    MoveDown,
    /// Digit key: jump to the n-th entry (1-indexed).
    Jump(u8),
    /// Accept the entry under the cursor.
    Confirm,
    /// User asked to abandon the prompt (Ctrl+C, Esc).
    Interrupt,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Event accepted: adopt this state and re-render.
    Render(PromptState),
    /// Event absorbed as a no-op. The state is handed back untouched.
    Ignore(PromptState),
    /// Confirmation: the state is now Done.
    Resolve(PromptState),
    /// The prompt should be abandoned.
    Interrupt,
}

/// What the event loop should do after an action has been applied.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Render the next frame.
    Render,
    /// Nothing changed.
    Ignore,
    /// Render the final frame, then return this value.
    Resolved(String),
    /// Abandon the prompt.
    Interrupted,
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl SelectPrompt {
    /// Build a prompt, placing the cursor on its starting choice.
    ///
    /// The cursor starts on `config.default` when that names a selectable
    /// choice, otherwise on the first selectable entry.
    ///
    /// # Errors
    ///
    /// [`PromptError::NoSelectableChoice`] if every entry is a separator or
    /// disabled (including the empty list).
    pub fn new(config: PromptConfig) -> Result<Self> {
        let from_default = config
            .default
            .as_deref()
            .and_then(|value| find_value(&config.choices, value));

        let cursor = from_default
            .or_else(|| first_selectable(&config.choices))
            .ok_or(PromptError::NoSelectableChoice)?;

        tracing::debug!(
            cursor,
            entries = config.choices.len(),
            "select prompt constructed"
        );

        Ok(SelectPrompt {
            config,
            state: PromptState::pending(cursor),
            renders: 0,
        })
    }

    pub fn config(&self) -> &PromptConfig {
        &self.config
    }

    pub fn state(&self) -> PromptState {
        self.state
    }

    /// The choice under the cursor.
    pub fn current(&self) -> Option<&Choice> {
        current_choice(&self.config.choices, self.state.cursor)
    }
}

/// The choice at `cursor`, if that slot holds a choice.
pub fn current_choice(entries: &[Entry], cursor: usize) -> Option<&Choice> {
    match entries.get(cursor) {
        Some(Entry::Choice(choice)) => Some(choice),
        _ => None,
    }
}

// ============================================================================
// TESTS
// ============================================================================

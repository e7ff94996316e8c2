//! Prompt style intents and glyphs.
//!
//! The renderer only refers to these names; colors live here alone.
//!
//! Color semantics:
//! - Green: prompt prefix, confirmation mark
//! - Cyan: cursor row, confirmed answer, description
//! - Dim: hint text, disabled choices
//! - Bold: the question itself

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// GLYPHS
// ============================================================================

/// Header prefix while the prompt is waiting.
pub const PREFIX_PENDING: &str = "?";

/// Header prefix once a choice has been confirmed.
pub const PREFIX_DONE: &str = "✔";

/// Marks the cursor row.
pub const POINTER: &str = "❯";

/// Hint shown on the first frame when none is configured.
pub const DEFAULT_HINT: &str = "(Use arrow keys)";

/// Suffix for disabled choices without a custom reason.
pub const DISABLED_MARKER: &str = "(disabled)";

// ============================================================================
// STYLES
// ============================================================================

pub const STYLE_PREFIX: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

pub const STYLE_MESSAGE: Style = Style::new().add_modifier(Modifier::BOLD);

/// First-render hint.
pub const STYLE_HINT: Style = Style::new().fg(Color::DarkGray);

/// Row under the cursor.
pub const STYLE_HIGHLIGHT: Style = Style::new().fg(Color::Cyan);

/// Disabled choice, de-emphasized.
pub const STYLE_DISABLED: Style = Style::new().fg(Color::DarkGray);

/// Confirmed answer on the collapsed line.
pub const STYLE_ANSWER: Style = Style::new().fg(Color::Cyan);

pub const STYLE_DESCRIPTION: Style = Style::new().fg(Color::Cyan);

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semantic_styles_have_expected_colors() {
        assert_eq!(STYLE_PREFIX.fg, Some(Color::Green));
        assert_eq!(STYLE_HIGHLIGHT.fg, Some(Color::Cyan));
        assert_eq!(STYLE_DISABLED.fg, Some(Color::DarkGray));
        assert_eq!(STYLE_HINT.fg, Some(Color::DarkGray));
    }

    #[test]
    fn message_style_is_bold() {
        assert!(STYLE_MESSAGE.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn disabled_is_never_the_highlight() {
        assert_ne!(STYLE_DISABLED, STYLE_HIGHLIGHT);
    }
}

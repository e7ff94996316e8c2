//! Pure rendering: map prompt state to a frame of styled lines.
//!
//! `render` is a function of (config, state, first-render flag) and nothing
//! else. Drawing the frame onto the terminal happens in `run`.

use ratatui::text::{Line, Span};

use crate::types::{Entry, PromptConfig};

use super::paginate::{window, DEFAULT_PAGE_SIZE};
use super::state::{current_choice, PromptState, SelectPrompt, Status};
use super::theme;

// ============================================================================
// FRAME
// ============================================================================

/// One complete rendered output of the prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub lines: Vec<Line<'static>>,
    /// Interactive frames hide the terminal cursor; the final one does not.
    pub hide_cursor: bool,
}

impl Frame {
    pub fn height(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }

    /// Text of every line without styling, newline-joined.
    pub fn to_plain(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// ============================================================================
// RENDER
// ============================================================================

/// Render the frame for the given state.
///
/// `first_render` adds the hint to the header. Callers derive it from how
/// many frames they have already produced.
pub fn render(config: &PromptConfig, state: &PromptState, first_render: bool) -> Frame {
    match state.status {
        Status::Done => render_done(config, state),
        Status::Pending => render_pending(config, state, first_render),
    }
}

/// Collapsed confirmation line. No body, cursor left visible.
fn render_done(config: &PromptConfig, state: &PromptState) -> Frame {
    let answer = current_choice(&config.choices, state.cursor)
        .map(|c| c.label().to_string())
        .unwrap_or_default();

    let line = Line::from(vec![
        Span::styled(theme::PREFIX_DONE, theme::STYLE_PREFIX),
        Span::raw(" "),
        Span::styled(config.message.clone(), theme::STYLE_MESSAGE),
        Span::raw(" "),
        Span::styled(answer, theme::STYLE_ANSWER),
    ]);

    Frame {
        lines: vec![line],
        hide_cursor: false,
    }
}

fn render_pending(config: &PromptConfig, state: &PromptState, first_render: bool) -> Frame {
    let mut header = vec![
        Span::styled(theme::PREFIX_PENDING, theme::STYLE_PREFIX),
        Span::raw(" "),
        Span::styled(config.message.clone(), theme::STYLE_MESSAGE),
    ];
    if first_render {
        let hint = config.hint.as_deref().unwrap_or(theme::DEFAULT_HINT);
        header.push(Span::raw(" "));
        header.push(Span::styled(hint.to_string(), theme::STYLE_HINT));
    }

    let body: Vec<Line<'static>> = config
        .choices
        .iter()
        .enumerate()
        .map(|(i, entry)| render_entry(entry, i == state.cursor))
        .collect();

    let mut lines = vec![Line::from(header)];
    lines.extend(window(body, state.cursor, config.page_size));

    if let Some(description) =
        current_choice(&config.choices, state.cursor).and_then(|c| c.description.as_deref())
    {
        lines.extend(
            description
                .lines()
                .map(|text| Line::from(Span::styled(text.to_string(), theme::STYLE_DESCRIPTION))),
        );
    }

    Frame {
        lines,
        hide_cursor: true,
    }
}

/// One body row. A disabled choice never takes the highlight.
fn render_entry(entry: &Entry, is_cursor: bool) -> Line<'static> {
    match entry {
        Entry::Separator(sep) => Line::from(Span::raw(format!(" {}", sep.label()))),
        Entry::Choice(choice) if choice.is_disabled() => {
            let reason = choice
                .disabled
                .as_ref()
                .and_then(|d| d.reason())
                .unwrap_or(theme::DISABLED_MARKER);
            Line::from(Span::styled(
                format!("- {} {}", choice.label(), reason),
                theme::STYLE_DISABLED,
            ))
        }
        Entry::Choice(choice) if is_cursor => Line::from(Span::styled(
            format!("{} {}", theme::POINTER, choice.label()),
            theme::STYLE_HIGHLIGHT,
        )),
        Entry::Choice(choice) => Line::from(Span::raw(format!("  {}", choice.label()))),
    }
}

/// Tallest frame this config can produce: header, window, description.
pub fn max_height(config: &PromptConfig) -> u16 {
    let page = config
        .page_size
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_PAGE_SIZE);
    let description = config
        .choices
        .iter()
        .filter_map(|e| match e {
            Entry::Choice(c) => c.description.as_deref().map(|d| d.lines().count()),
            Entry::Separator(_) => None,
        })
        .max()
        .unwrap_or(0);

    let rows = 1 + config.choices.len().min(page) + description;
    u16::try_from(rows).unwrap_or(u16::MAX)
}

impl SelectPrompt {
    /// Render the current state, counting the frame.
    pub fn next_frame(&mut self) -> Frame {
        let first_render = self.renders == 0;
        self.renders += 1;
        render(&self.config, &self.state, first_render)
    }
}

// ============================================================================
// TESTS
// ============================================================================

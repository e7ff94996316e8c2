//! Prompt configuration: JSON files and inline choice specs.
//!
//! A config file holds a serialized [`PromptConfig`]. Command-line values
//! are layered on top of it by [`resolve`].

use std::fs;
use std::path::Path;

use crate::error::{PromptError, Result};
use crate::types::{Choice, Entry, PromptConfig, Separator};

/// Prefix that turns an inline spec into a separator.
const SEPARATOR_PREFIX: &str = "---";

/// Prefix that marks an inline choice as disabled.
const DISABLED_PREFIX: char = '!';

/// Values given on the command line. Each one set wins over the file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub message: Option<String>,
    /// Inline specs; when non-empty they replace the file's choices.
    pub choices: Vec<String>,
    pub page_size: Option<usize>,
    pub default: Option<String>,
    pub hint: Option<String>,
}

/// Read a JSON config file.
///
/// # Errors
///
/// Returns an error if the file can't be read or isn't a valid config.
pub fn load(path: &Path) -> Result<PromptConfig> {
    let content = fs::read_to_string(path)?;
    let config: PromptConfig = serde_json::from_str(&content)?;
    tracing::debug!(path = %path.display(), entries = config.choices.len(), "config loaded");
    Ok(config)
}

/// Parse one inline choice spec.
///
/// - `---` is a separator with the default label, `---Label` one with a label
/// - `!value` is a disabled choice
/// - `value=Name` sets the display name
///
/// A backslash makes the next character literal: `a\=b` is the value `a=b`,
/// `\!x` an enabled choice `!x` and `\---` a choice with the value `---`.
pub fn parse_choice(spec: &str) -> Result<Entry> {
    if let Some(label) = spec.strip_prefix(SEPARATOR_PREFIX) {
        let label = label.trim();
        return Ok(if label.is_empty() {
            Separator::default().into()
        } else {
            Separator::new(label).into()
        });
    }

    let (disabled, rest) = match spec.strip_prefix(DISABLED_PREFIX) {
        Some(rest) => (true, rest),
        None => (false, spec),
    };

    let (value, name) = split_escaped(rest);

    if value.is_empty() {
        return Err(PromptError::InvalidChoice(spec.to_string()));
    }

    let mut choice = Choice::new(value);
    if let Some(name) = name.filter(|n| !n.is_empty()) {
        choice = choice.with_name(name);
    }
    if disabled {
        choice = choice.disabled();
    }
    Ok(choice.into())
}

/// Split at the first unescaped `=`, dropping the escaping backslashes.
///
/// A trailing lone backslash is kept as is.
fn split_escaped(spec: &str) -> (String, Option<String>) {
    let mut value = String::new();
    let mut name: Option<String> = None;
    let mut chars = spec.chars();

    while let Some(c) = chars.next() {
        let c = match c {
            '\\' => chars.next().unwrap_or('\\'),
            '=' if name.is_none() => {
                name = Some(String::new());
                continue;
            }
            c => c,
        };
        name.as_mut().unwrap_or(&mut value).push(c);
    }
    (value, name)
}

/// Parse every inline spec, stopping at the first bad one.
pub fn parse_choices<S: AsRef<str>>(specs: &[S]) -> Result<Vec<Entry>> {
    specs.iter().map(|s| parse_choice(s.as_ref())).collect()
}

/// Combine an optional config file with command-line overrides.
///
/// # Errors
///
/// Fails if the file can't be loaded, an inline spec is malformed, or no
/// message ends up set.
pub fn resolve(file: Option<&Path>, overrides: Overrides) -> Result<PromptConfig> {
    let mut config = match file {
        Some(path) => load(path)?,
        None => PromptConfig::default(),
    };

    if let Some(message) = overrides.message {
        config.message = message;
    }
    if !overrides.choices.is_empty() {
        config.choices = parse_choices(overrides.choices.as_slice())?;
    }
    if overrides.page_size.is_some() {
        config.page_size = overrides.page_size;
    }
    if overrides.default.is_some() {
        config.default = overrides.default;
    }
    if overrides.hint.is_some() {
        config.hint = overrides.hint;
    }

    if config.message.trim().is_empty() {
        return Err(PromptError::Config("a message is required".to_string()));
    }

    Ok(config)
}

// ============================================================================
// TESTS
// ============================================================================

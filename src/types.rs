//! Domain types for listpick.
//!
//! The choice list is a sequence of tagged entries: a selectable
//! [`Choice`] or a decorative [`Separator`]. Everything here is plain data
//! and deserializes straight from the JSON config format.

use serde::{Deserialize, Serialize};

// ============================================================================
// PRIMITIVES
// ============================================================================

/// Label shown for a separator created without one.
pub const DEFAULT_SEPARATOR: &str = "──────────────";

/// Disabled marker on a choice: a plain flag or a reason shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Disabled {
    Flag(bool),
    Reason(String),
}

impl Disabled {
    /// Whether this marker actually disables the choice.
    ///
    /// An empty reason does not disable anything.
    pub fn is_set(&self) -> bool {
        match self {
            Disabled::Flag(flag) => *flag,
            Disabled::Reason(reason) => !reason.is_empty(),
        }
    }

    /// Custom reason text, if one was given.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Disabled::Reason(reason) if !reason.is_empty() => Some(reason),
            _ => None,
        }
    }
}

// ============================================================================
// ENTRIES
// ============================================================================

/// A selectable list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Identity returned when this choice is confirmed.
    pub value: String,
    /// Display label. Falls back to `value`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Extra line shown under the list while the cursor rests here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<Disabled>,
}

/// A non-selectable group marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Separator {
    pub separator: String,
}

/// One row of the choice list.
///
/// Serialized untagged: an object with `value` is a choice, an object with
/// `separator` is a separator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Choice(Choice),
    Separator(Separator),
}

impl Choice {
    /// Create an enabled choice whose label is its value.
    pub fn new(value: impl Into<String>) -> Self {
        Choice {
            value: value.into(),
            name: None,
            description: None,
            disabled: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark disabled with the generic marker.
    pub fn disabled(mut self) -> Self {
        self.disabled = Some(Disabled::Flag(true));
        self
    }

    /// Mark disabled with a custom reason.
    pub fn disabled_because(mut self, reason: impl Into<String>) -> Self {
        self.disabled = Some(Disabled::Reason(reason.into()));
        self
    }

    /// The label shown to the user.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.value)
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled.as_ref().is_some_and(Disabled::is_set)
    }
}

impl Separator {
    pub fn new(label: impl Into<String>) -> Self {
        Separator {
            separator: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.separator
    }
}

impl Default for Separator {
    fn default() -> Self {
        Separator::new(DEFAULT_SEPARATOR)
    }
}

impl From<Choice> for Entry {
    fn from(choice: Choice) -> Self {
        Entry::Choice(choice)
    }
}

impl From<Separator> for Entry {
    fn from(separator: Separator) -> Self {
        Entry::Separator(separator)
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Everything a prompt needs to run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Question shown in the header.
    pub message: String,
    /// Entries in display order.
    pub choices: Vec<Entry>,
    /// Visible body height. None = windowing default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
    /// Value of the choice the cursor should start on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// Replaces the first-render hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl PromptConfig {
    pub fn new(message: impl Into<String>, choices: Vec<Entry>) -> Self {
        PromptConfig {
            message: message.into(),
            choices,
            ..Default::default()
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_falls_back_to_value() {
        assert_eq!(Choice::new("c").label(), "c");
        assert_eq!(Choice::new("c").with_name("Gamma").label(), "Gamma");
    }

    #[test]
    fn disabled_flag_and_reason() {
        assert!(!Choice::new("a").is_disabled());
        assert!(Choice::new("a").disabled().is_disabled());
        assert!(Choice::new("a").disabled_because("soon").is_disabled());
    }

    #[test]
    fn empty_reason_does_not_disable() {
        let choice = Choice::new("a").disabled_because("");
        assert!(!choice.is_disabled());
        assert_eq!(choice.disabled.as_ref().and_then(Disabled::reason), None);
    }

    #[test]
    fn false_flag_does_not_disable() {
        let mut choice = Choice::new("a");
        choice.disabled = Some(Disabled::Flag(false));
        assert!(!choice.is_disabled());
    }

    #[test]
    fn separator_default_label() {
        assert_eq!(Separator::default().label(), DEFAULT_SEPARATOR);
    }

    #[test]
    fn entries_deserialize_untagged() {
        let json = r#"[
            {"value": "a"},
            {"separator": "Fruits"},
            {"value": "b", "name": "Banana", "disabled": "out of stock"},
            {"value": "c", "disabled": true, "description": "crunchy"}
        ]"#;
        let entries: Vec<Entry> = serde_json::from_str(json).unwrap();

        assert_eq!(entries[0], Entry::Choice(Choice::new("a")));
        assert_eq!(entries[1], Entry::Separator(Separator::new("Fruits")));
        assert_eq!(
            entries[2],
            Entry::Choice(Choice::new("b").with_name("Banana").disabled_because("out of stock"))
        );
        match &entries[3] {
            Entry::Choice(c) => {
                assert!(c.is_disabled());
                assert_eq!(c.description.as_deref(), Some("crunchy"));
            }
            other => panic!("Expected Choice, got {:?}", other),
        }
    }

    #[test]
    fn config_optional_fields_default_to_none() {
        let config: PromptConfig =
            serde_json::from_str(r#"{"message": "Pick", "choices": [{"value": "a"}]}"#).unwrap();
        assert_eq!(config.message, "Pick");
        assert_eq!(config.page_size, None);
        assert_eq!(config.default, None);
        assert_eq!(config.hint, None);
    }
}

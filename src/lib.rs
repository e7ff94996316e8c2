//! listpick: interactive single-select list prompt for the terminal.

pub mod config;
pub mod error;
pub mod logging;
pub mod tui;
pub mod types;

pub use error::{PromptError, Result};
pub use tui::run::select;
pub use tui::state::SelectPrompt;
pub use types::{Choice, Disabled, Entry, PromptConfig, Separator};

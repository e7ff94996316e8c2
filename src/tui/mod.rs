//! Interactive select prompt.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure data types (PromptState, Action, Transition)
//! - `navigate`: selectability and cursor movement
//! - `update`: pure transitions
//! - `paginate`, `view`, `theme`: pure rendering
//! - `run`: effects (terminal, key reader, event loop)

pub mod navigate;
pub mod paginate;
pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

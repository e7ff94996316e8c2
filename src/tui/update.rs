//! Pure state transitions: (PromptState, Action) → Transition.
//!
//! This is the core logic of the prompt. Fully testable without a terminal.
//! Once the prompt is Done every action is a no-op.

use crate::types::Entry;

use super::navigate::{jump, step, Direction};
use super::state::{current_choice, Action, Outcome, PromptState, SelectPrompt, Status, Transition};

/// Pure state transition function.
///
/// Given the current state, an action, and a read-only view of the choice
/// list, produces the next transition. The effects boundary interprets it.
pub fn update(state: PromptState, action: &Action, entries: &[Entry]) -> Transition {
    match state.status {
        Status::Pending => update_pending(state, action, entries),
        Status::Done => Transition::Ignore(state),
    }
}

fn update_pending(state: PromptState, action: &Action, entries: &[Entry]) -> Transition {
    match action {
        Action::MoveUp => Transition::Render(PromptState::pending(step(
            entries,
            state.cursor,
            Direction::Up,
        ))),
        Action::MoveDown => Transition::Render(PromptState::pending(step(
            entries,
            state.cursor,
            Direction::Down,
        ))),
        Action::Jump(digit) => match jump(entries, *digit) {
            Some(cursor) => Transition::Render(PromptState::pending(cursor)),
            None => Transition::Ignore(state),
        },
        Action::Confirm => Transition::Resolve(PromptState {
            status: Status::Done,
            cursor: state.cursor,
        }),
        Action::Interrupt => Transition::Interrupt,
    }
}

impl SelectPrompt {
    /// Apply one action to the prompt.
    pub fn apply(&mut self, action: &Action) -> Outcome {
        match update(self.state, action, &self.config.choices) {
            Transition::Render(next) => {
                tracing::debug!(?action, from = self.state.cursor, to = next.cursor, "cursor moved");
                self.state = next;
                Outcome::Render
            }
            Transition::Ignore(same) => {
                tracing::debug!(?action, status = ?same.status, "action ignored");
                self.state = same;
                Outcome::Ignore
            }
            Transition::Resolve(done) => {
                // The cursor always rests on a choice while pending; if it
                // somehow doesn't, stay pending rather than resolve.
                let Some(choice) = current_choice(&self.config.choices, done.cursor) else {
                    tracing::warn!(cursor = done.cursor, "confirm on a non-choice slot");
                    return Outcome::Ignore;
                };
                tracing::info!(value = %choice.value, "prompt resolved");
                let value = choice.value.clone();
                self.state = done;
                Outcome::Resolved(value)
            }
            Transition::Interrupt => {
                tracing::info!("prompt interrupted");
                Outcome::Interrupted
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::navigate::is_selectable;
    use crate::types::{Choice, PromptConfig, Separator};

    /// [A, ---, B(disabled), C("Gamma")]
    fn mixed() -> Vec<Entry> {
        vec![
            Choice::new("a").into(),
            Separator::default().into(),
            Choice::new("b").disabled().into(),
            Choice::new("c").with_name("Gamma").into(),
        ]
    }

    fn abc() -> Vec<Entry> {
        vec![
            Choice::new("a").into(),
            Choice::new("b").into(),
            Choice::new("c").into(),
        ]
    }

    fn prompt(entries: Vec<Entry>) -> SelectPrompt {
        SelectPrompt::new(PromptConfig::new("Pick", entries)).unwrap()
    }

    fn done(cursor: usize) -> PromptState {
        PromptState {
            status: Status::Done,
            cursor,
        }
    }

    // -- Pending --

    #[test]
    fn move_down_skips_unselectable_then_wraps() {
        let entries = mixed();
        let first = update(PromptState::pending(0), &Action::MoveDown, &entries);
        assert_eq!(first, Transition::Render(PromptState::pending(3)));

        let second = update(PromptState::pending(3), &Action::MoveDown, &entries);
        assert_eq!(second, Transition::Render(PromptState::pending(0)));
    }

    #[test]
    fn move_up_wraps_to_last_selectable() {
        let result = update(PromptState::pending(0), &Action::MoveUp, &mixed());
        assert_eq!(result, Transition::Render(PromptState::pending(3)));
    }

    #[test]
    fn jump_moves_to_selectable_target() {
        let result = update(PromptState::pending(0), &Action::Jump(2), &abc());
        assert_eq!(result, Transition::Render(PromptState::pending(1)));
    }

    #[test]
    fn jump_out_of_range_is_noop() {
        let result = update(PromptState::pending(0), &Action::Jump(9), &abc());
        assert_eq!(result, Transition::Ignore(PromptState::pending(0)));
    }

    #[test]
    fn jump_to_disabled_or_separator_is_noop() {
        let entries = mixed();
        for digit in [2, 3] {
            let result = update(PromptState::pending(3), &Action::Jump(digit), &entries);
            assert_eq!(result, Transition::Ignore(PromptState::pending(3)));
        }
    }

    #[test]
    fn confirm_resolves_in_place() {
        let result = update(PromptState::pending(3), &Action::Confirm, &mixed());
        assert_eq!(result, Transition::Resolve(done(3)));
    }

    #[test]
    fn interrupt_while_pending() {
        let result = update(PromptState::pending(0), &Action::Interrupt, &abc());
        assert_eq!(result, Transition::Interrupt);
    }

    // -- Done --

    #[test]
    fn done_ignores_every_action() {
        let actions = [
            Action::MoveUp,
            Action::MoveDown,
            Action::Jump(1),
            Action::Confirm,
            Action::Interrupt,
        ];
        for action in &actions {
            assert_eq!(update(done(2), action, &abc()), Transition::Ignore(done(2)));
        }
    }

    // -- SelectPrompt::apply --

    #[test]
    fn apply_confirm_returns_value_not_name() {
        let mut p = prompt(mixed());
        assert_eq!(p.apply(&Action::MoveDown), Outcome::Render);
        assert_eq!(p.apply(&Action::Confirm), Outcome::Resolved("c".to_string()));
        assert!(p.state().is_done());
    }

    #[test]
    fn apply_after_done_is_ignored_and_state_frozen() {
        let mut p = prompt(abc());
        assert_eq!(p.apply(&Action::Confirm), Outcome::Resolved("a".to_string()));
        let frozen = p.state();

        assert_eq!(p.apply(&Action::MoveDown), Outcome::Ignore);
        assert_eq!(p.apply(&Action::Jump(3)), Outcome::Ignore);
        assert_eq!(p.apply(&Action::Confirm), Outcome::Ignore);
        assert_eq!(p.state(), frozen);
    }

    #[test]
    fn apply_ignored_jump_keeps_cursor() {
        let mut p = prompt(abc());
        assert_eq!(p.apply(&Action::Jump(9)), Outcome::Ignore);
        assert_eq!(p.state().cursor, 0);
        assert_eq!(p.apply(&Action::Jump(2)), Outcome::Render);
        assert_eq!(p.state().cursor, 1);
    }

    #[test]
    fn confirm_off_a_choice_stays_pending() {
        let mut p = prompt(mixed());
        p.state = PromptState::pending(1);
        assert_eq!(p.apply(&Action::Confirm), Outcome::Ignore);
        assert_eq!(p.state(), PromptState::pending(1));
    }

    #[test]
    fn apply_interrupt() {
        let mut p = prompt(abc());
        assert_eq!(p.apply(&Action::Interrupt), Outcome::Interrupted);
        assert!(!p.state().is_done());
    }

    #[test]
    fn cursor_invariant_holds_over_action_sequence() {
        let mut p = prompt(mixed());
        let script = [
            Action::MoveDown,
            Action::Jump(2),
            Action::MoveUp,
            Action::Jump(3),
            Action::MoveUp,
            Action::Jump(0),
            Action::MoveDown,
            Action::Jump(4),
            Action::MoveDown,
        ];
        for action in &script {
            p.apply(action);
            assert!(is_selectable(p.config().choices.get(p.state().cursor)));
        }
    }
}

//! Cursor navigation over a choice list.
//!
//! Pure functions: (entries, cursor, input) → next cursor. The cursor only
//! ever lands on an entry accepted by [`is_selectable`].

use crate::types::Entry;

/// Direction of a single cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    fn offset(self) -> isize {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
        }
    }
}

/// Whether the cursor may rest on this entry.
///
/// `None` stands for an absent or out-of-range slot.
pub fn is_selectable(entry: Option<&Entry>) -> bool {
    match entry {
        Some(Entry::Choice(choice)) => !choice.is_disabled(),
        Some(Entry::Separator(_)) | None => false,
    }
}

/// Index of the first selectable entry.
pub fn first_selectable(entries: &[Entry]) -> Option<usize> {
    entries.iter().position(|e| is_selectable(Some(e)))
}

/// Index of the selectable choice whose value is `value`.
pub fn find_value(entries: &[Entry], value: &str) -> Option<usize> {
    entries.iter().position(|e| match e {
        Entry::Choice(choice) => choice.value == value && !choice.is_disabled(),
        Entry::Separator(_) => false,
    })
}

/// Move one step in `direction`, wrapping at both ends and skipping
/// everything that is not selectable.
///
/// Visits each slot at most once, so the search ends even on a list with no
/// selectable entry (the cursor is then returned unchanged).
pub fn step(entries: &[Entry], cursor: usize, direction: Direction) -> usize {
    let len = entries.len() as isize;
    if len == 0 {
        return cursor;
    }

    let mut candidate = cursor as isize;
    for _ in 0..len {
        candidate = (candidate + direction.offset()).rem_euclid(len);
        if is_selectable(entries.get(candidate as usize)) {
            return candidate as usize;
        }
    }
    cursor
}

/// Target of a digit key, 1-indexed as shown to the user.
///
/// Returns None when the slot is absent or not selectable; `0` never
/// resolves.
pub fn jump(entries: &[Entry], digit: u8) -> Option<usize> {
    let index = usize::from(digit).checked_sub(1)?;
    is_selectable(entries.get(index)).then_some(index)
}

// ============================================================================
// TESTS
// ============================================================================

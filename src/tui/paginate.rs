//! Line windowing: slice a rendered list into a fixed-height viewport.
//!
//! Generic over the line type so it can be tested with plain integers.

/// Visible rows when no page size is configured.
pub const DEFAULT_PAGE_SIZE: usize = 7;

/// Return the slice of `lines` that should be on screen.
///
/// Short lists come back whole. Longer ones are cut to `page_size` rows
/// that keep `active` visible, centered when possible and clamped at both
/// ends of the list. A missing or zero page size uses
/// [`DEFAULT_PAGE_SIZE`].
pub fn window<T>(lines: Vec<T>, active: usize, page_size: Option<usize>) -> Vec<T> {
    let size = page_size.filter(|&n| n > 0).unwrap_or(DEFAULT_PAGE_SIZE);
    if lines.len() <= size {
        return lines;
    }

    let start = active.saturating_sub(size / 2).min(lines.len() - size);
    lines.into_iter().skip(start).take(size).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn short_list_is_untouched() {
        assert_eq!(window(rows(3), 1, Some(5)), vec![0, 1, 2]);
        assert_eq!(window(rows(5), 4, Some(5)), rows(5));
    }

    #[test]
    fn default_page_size_applies_when_absent() {
        assert_eq!(window(rows(20), 0, None).len(), DEFAULT_PAGE_SIZE);
        assert_eq!(window(rows(20), 0, Some(0)).len(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn top_of_list_is_anchored() {
        assert_eq!(window(rows(10), 0, Some(3)), vec![0, 1, 2]);
        assert_eq!(window(rows(10), 1, Some(3)), vec![0, 1, 2]);
    }

    #[test]
    fn middle_centers_active_row() {
        assert_eq!(window(rows(10), 5, Some(3)), vec![4, 5, 6]);
        assert_eq!(window(rows(10), 5, Some(4)), vec![3, 4, 5, 6]);
    }

    #[test]
    fn bottom_of_list_is_clamped() {
        assert_eq!(window(rows(10), 9, Some(3)), vec![7, 8, 9]);
        assert_eq!(window(rows(10), 8, Some(3)), vec![7, 8, 9]);
    }

    #[test]
    fn active_row_is_always_visible() {
        for active in 0..25 {
            let shown = window(rows(25), active, Some(6));
            assert_eq!(shown.len(), 6);
            assert!(shown.contains(&active), "row {} not visible", active);
        }
    }
}

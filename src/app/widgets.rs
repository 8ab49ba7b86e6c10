//! State for the "go to slide" box and the slide list overlay.

use crate::presentation::fragment::slide_from_fragment;

/// Longest slide number the box accepts.
const GOTO_MAX_DIGITS: usize = 6;

/// Digit entry for jumping to a slide by number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GotoBox {
    input: String,
}

impl GotoBox {
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Append a digit; anything else is ignored.
    pub fn push(&mut self, ch: char) {
        if ch.is_ascii_digit() && self.input.len() < GOTO_MAX_DIGITS {
            self.input.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Slide index for the typed 1-based number, if it names a slide.
    pub fn target(&self, slide_count: usize) -> Option<usize> {
        slide_from_fragment(&self.input, slide_count)
    }
}

/// Cursor state of the slide list overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlideList {
    selected: usize,
    scroll: usize,
}

impl SlideList {
    pub const fn new(selected: usize) -> Self {
        Self {
            selected,
            scroll: 0,
        }
    }

    pub const fn selected(&self) -> usize {
        self.selected
    }

    pub const fn scroll(&self) -> usize {
        self.scroll
    }

    pub const fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn down(&mut self, slide_count: usize) {
        if self.selected + 1 < slide_count {
            self.selected += 1;
        }
    }

    /// Move the cursor to `index` if it names a slide.
    pub const fn select(&mut self, index: usize, slide_count: usize) -> bool {
        if index < slide_count {
            self.selected = index;
            true
        } else {
            false
        }
    }

    /// Scroll so the selected row is within `rows` visible rows.
    pub const fn ensure_visible(&mut self, rows: usize) {
        if rows == 0 {
            return;
        }
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if self.selected >= self.scroll + rows {
            self.scroll = self.selected + 1 - rows;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goto_box_accepts_digits_only() {
        let mut goto = GotoBox::default();
        for ch in "1a2-".chars() {
            goto.push(ch);
        }
        assert_eq!(goto.input(), "12");
        goto.backspace();
        assert_eq!(goto.input(), "1");
    }

    #[test]
    fn test_goto_box_limits_length() {
        let mut goto = GotoBox::default();
        for _ in 0..10 {
            goto.push('9');
        }
        assert_eq!(goto.input().len(), GOTO_MAX_DIGITS);
    }

    #[test]
    fn test_goto_box_target_is_zero_based_and_bounded() {
        let mut goto = GotoBox::default();
        assert_eq!(goto.target(5), None);
        goto.push('5');
        assert_eq!(goto.target(5), Some(4));
        assert_eq!(goto.target(4), None);
        goto.backspace();
        goto.push('0');
        assert_eq!(goto.target(5), None);
    }

    #[test]
    fn test_slide_list_cursor_stays_in_range() {
        let mut list = SlideList::new(0);
        list.up();
        assert_eq!(list.selected(), 0);
        list.down(2);
        list.down(2);
        assert_eq!(list.selected(), 1);
        assert!(!list.select(2, 2));
        assert!(list.select(0, 2));
        assert_eq!(list.selected(), 0);
    }

    #[test]
    fn test_slide_list_scrolls_to_selection() {
        let mut list = SlideList::new(9);
        list.ensure_visible(4);
        assert_eq!(list.scroll(), 6);
        list.select(2, 10);
        list.ensure_visible(4);
        assert_eq!(list.scroll(), 2);
    }
}

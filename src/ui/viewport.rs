//! Scroll state of the screen view.
//!
//! The screen view shows the whole deck as one long column of wrapped
//! lines; [`Viewport`] tracks which rows of it are on screen.

use std::ops::Range;

/// Visible window over the screen layout.
///
/// # Example
///
/// ```
/// use hpk::ui::viewport::Viewport;
///
/// let mut vp = Viewport::new(20, 100);
/// assert_eq!(vp.visible_range(), 0..20);
///
/// vp.scroll_down(10);
/// assert_eq!(vp.visible_range(), 10..30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    height: u16,
    offset: usize,
    total_lines: usize,
}

impl Viewport {
    /// Create a viewport `height` rows tall over `total_lines` lines.
    pub const fn new(height: u16, total_lines: usize) -> Self {
        Self {
            height,
            offset: 0,
            total_lines,
        }
    }

    /// First visible line.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    pub const fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Lines currently on screen, clamped to the layout.
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.offset + self.height as usize).min(self.total_lines);
        self.offset.min(end)..end
    }

    /// How far down the deck the view is, 0-100.
    pub fn scroll_percent(&self) -> u8 {
        let max_offset = self.max_offset();
        if max_offset == 0 {
            return 100;
        }
        // Always within 0..=100
        #[allow(
            clippy::cast_precision_loss,
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss
        )]
        {
            ((self.offset as f64 / max_offset as f64) * 100.0).round() as u8
        }
    }

    pub const fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = self.offset.saturating_add(n).min(self.max_offset());
    }

    pub const fn page_up(&mut self) {
        self.scroll_up(self.height as usize);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.height as usize);
    }

    pub const fn go_to_top(&mut self) {
        self.offset = 0;
    }

    pub const fn go_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Put `line` at the top of the view, or as close as the layout allows.
    pub fn go_to_line(&mut self, line: usize) {
        self.offset = line.min(self.max_offset());
    }

    pub fn resize(&mut self, height: u16) {
        self.height = height;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Update the layout length after a reflow or reload.
    pub fn set_total_lines(&mut self, total: usize) {
        self.total_lines = total;
        self.offset = self.offset.min(self.max_offset());
    }

    const fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.height as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_layout_fits_entirely() {
        let vp = Viewport::new(24, 10);
        assert_eq!(vp.visible_range(), 0..10);
        assert_eq!(vp.scroll_percent(), 100);
    }

    #[test]
    fn test_scroll_down_clamps_to_last_page() {
        let mut vp = Viewport::new(24, 100);
        vp.scroll_down(1000);
        assert_eq!(vp.offset(), 76);
        assert_eq!(vp.visible_range(), 76..100);
    }

    #[test]
    fn test_paging_moves_by_height() {
        let mut vp = Viewport::new(10, 100);
        vp.page_down();
        vp.page_down();
        assert_eq!(vp.offset(), 20);
        vp.page_up();
        assert_eq!(vp.offset(), 10);
    }

    #[test]
    fn test_top_and_bottom() {
        let mut vp = Viewport::new(10, 35);
        vp.go_to_bottom();
        assert_eq!(vp.offset(), 25);
        assert_eq!(vp.scroll_percent(), 100);
        vp.go_to_top();
        assert_eq!(vp.offset(), 0);
        assert_eq!(vp.scroll_percent(), 0);
    }

    #[test]
    fn test_go_to_line_clamps() {
        let mut vp = Viewport::new(10, 30);
        vp.go_to_line(5);
        assert_eq!(vp.offset(), 5);
        vp.go_to_line(29);
        assert_eq!(vp.offset(), 20);
    }

    #[test]
    fn test_shrinking_layout_pulls_offset_back() {
        let mut vp = Viewport::new(24, 100);
        vp.scroll_down(70);
        vp.set_total_lines(50);
        assert_eq!(vp.offset(), 26);
        vp.resize(60);
        assert_eq!(vp.offset(), 0);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn offset_stays_within_layout(
                total_lines in 0..5000usize,
                height in 1..100u16,
                down in 0..10000usize,
                up in 0..10000usize,
            ) {
                let mut vp = Viewport::new(height, total_lines);
                vp.scroll_down(down);
                vp.scroll_up(up);
                prop_assert!(vp.offset() <= total_lines.saturating_sub(height as usize));
                let range = vp.visible_range();
                prop_assert!(range.start <= range.end);
                prop_assert!(range.end <= total_lines);
                prop_assert!(vp.scroll_percent() <= 100);
            }
        }
    }
}

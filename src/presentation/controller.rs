//! Presentation state machine.

use super::display::{DisplayMode, DisplayModeSwitcher};

/// What `next`/`prev` do when there is no slide in that direction.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryPolicy {
    /// Stay on the first/last slide.
    Clamp,
    /// Leave presentation mode.
    #[default]
    End,
}

impl BoundaryPolicy {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clamp => "clamp",
            Self::End => "end",
        }
    }
}

/// Whether presentation key and mouse bindings are attached.
///
/// Attached exactly while a presentation is running; the input mapper
/// routes events by this flag instead of rebinding handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputBindings {
    #[default]
    Detached,
    Attached,
}

/// Owns the current-slide index and presentation mode.
///
/// Presenting is derived from the index: `current()` is `Some` exactly while
/// a presentation runs, and always below `slide_count()`. Every operation is
/// total; calls that make no sense in the current state are ignored and
/// return `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationController {
    slide_count: usize,
    current: Option<usize>,
    bindings: InputBindings,
    display: DisplayModeSwitcher,
    policy: BoundaryPolicy,
}

impl Default for PresentationController {
    fn default() -> Self {
        Self::new(0, BoundaryPolicy::default())
    }
}

impl PresentationController {
    /// Create a controller for a deck of `slide_count` slides, not presenting.
    pub fn new(slide_count: usize, policy: BoundaryPolicy) -> Self {
        Self {
            slide_count,
            current: None,
            bindings: InputBindings::Detached,
            display: DisplayModeSwitcher::new(),
            policy,
        }
    }

    pub const fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub const fn current(&self) -> Option<usize> {
        self.current
    }

    pub const fn is_presenting(&self) -> bool {
        self.current.is_some()
    }

    pub const fn bindings(&self) -> InputBindings {
        self.bindings
    }

    pub const fn display(&self) -> &DisplayModeSwitcher {
        &self.display
    }

    pub const fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    pub const fn set_policy(&mut self, policy: BoundaryPolicy) {
        self.policy = policy;
    }

    /// Enter presentation mode on the first slide.
    pub fn begin(&mut self) -> bool {
        if self.is_presenting() || self.slide_count == 0 {
            return false;
        }
        self.current = Some(0);
        self.display.apply(DisplayMode::Projection);
        self.bindings = InputBindings::Attached;
        tracing::debug!(slides = self.slide_count, "presentation started");
        true
    }

    /// Leave presentation mode, showing every slide again.
    pub fn end(&mut self) -> bool {
        if !self.is_presenting() {
            return false;
        }
        self.display.apply(DisplayMode::Screen);
        self.bindings = InputBindings::Detached;
        self.current = None;
        tracing::debug!("presentation ended");
        true
    }

    /// Show slide `index` in place of the current one.
    pub fn goto_slide(&mut self, index: usize) -> bool {
        let Some(current) = self.current else {
            return false;
        };
        if index >= self.slide_count || index == current {
            return false;
        }
        self.current = Some(index);
        tracing::debug!(from = current, to = index, "slide changed");
        true
    }

    /// Advance one slide, applying the boundary policy on the last slide.
    pub fn next(&mut self) -> bool {
        let Some(current) = self.current else {
            return false;
        };
        if self.is_on_last_slide() {
            return self.at_boundary();
        }
        self.goto_slide(current + 1)
    }

    /// Go back one slide, applying the boundary policy on the first slide.
    pub fn prev(&mut self) -> bool {
        let Some(current) = self.current else {
            return false;
        };
        if self.is_on_first_slide() {
            return self.at_boundary();
        }
        self.goto_slide(current - 1)
    }

    pub fn first(&mut self) -> bool {
        self.goto_slide(0)
    }

    pub fn last(&mut self) -> bool {
        self.goto_slide(self.slide_count.saturating_sub(1))
    }

    pub fn is_on_first_slide(&self) -> bool {
        self.current == Some(0)
    }

    pub fn is_on_last_slide(&self) -> bool {
        self.current.is_some() && self.current == self.slide_count.checked_sub(1)
    }

    /// Whether slide `index` is shown: every slide outside presentation
    /// mode, only the current one inside it.
    pub fn slide_visible(&self, index: usize) -> bool {
        if index >= self.slide_count {
            return false;
        }
        self.current.is_none_or(|current| current == index)
    }

    /// Number of slides currently shown.
    pub fn visible_count(&self) -> usize {
        if self.is_presenting() {
            1
        } else {
            self.slide_count
        }
    }

    /// Adopt a new deck size after a reload.
    ///
    /// A running presentation keeps its slide when it still exists, moves to
    /// the new last slide otherwise, and ends when the deck became empty.
    pub fn set_slide_count(&mut self, slide_count: usize) {
        self.slide_count = slide_count;
        let Some(current) = self.current else {
            return;
        };
        if slide_count == 0 {
            self.end();
        } else if current >= slide_count {
            self.current = Some(slide_count - 1);
        }
    }

    fn at_boundary(&mut self) -> bool {
        match self.policy {
            BoundaryPolicy::Clamp => false,
            BoundaryPolicy::End => self.end(),
        }
    }
}

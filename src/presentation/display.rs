//! Screen/projection style switching.

/// Which style group is in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Whole deck as a scrollable document
    Screen,
    /// One slide at a time, full screen
    Projection,
}

/// A named group of styles that is either active or inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleGroup {
    name: &'static str,
    active: bool,
}

impl StyleGroup {
    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }
}

/// Holds the screen and projection style groups; exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayModeSwitcher {
    screen: StyleGroup,
    projection: StyleGroup,
}

impl Default for DisplayModeSwitcher {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayModeSwitcher {
    pub const fn new() -> Self {
        Self {
            screen: StyleGroup {
                name: "screen",
                active: true,
            },
            projection: StyleGroup {
                name: "projection",
                active: false,
            },
        }
    }

    /// Activate the group for `mode` and deactivate the other one.
    ///
    /// Returns whether anything changed; applying the active mode again is a
    /// no-op.
    pub const fn apply(&mut self, mode: DisplayMode) -> bool {
        let projection = matches!(mode, DisplayMode::Projection);
        if self.projection.active == projection {
            return false;
        }
        self.projection.active = projection;
        self.screen.active = !projection;
        true
    }

    pub const fn active(&self) -> DisplayMode {
        if self.projection.active {
            DisplayMode::Projection
        } else {
            DisplayMode::Screen
        }
    }

    pub const fn group(&self, mode: DisplayMode) -> StyleGroup {
        match mode {
            DisplayMode::Screen => self.screen,
            DisplayMode::Projection => self.projection,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_in_screen_mode() {
        let switcher = DisplayModeSwitcher::new();
        assert_eq!(switcher.active(), DisplayMode::Screen);
        assert!(switcher.group(DisplayMode::Screen).is_active());
        assert!(!switcher.group(DisplayMode::Projection).is_active());
    }

    #[test]
    fn test_apply_swaps_groups() {
        let mut switcher = DisplayModeSwitcher::new();
        assert!(switcher.apply(DisplayMode::Projection));
        assert_eq!(switcher.active(), DisplayMode::Projection);
        assert!(!switcher.group(DisplayMode::Screen).is_active());
        assert_eq!(switcher.group(DisplayMode::Projection).name(), "projection");
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut switcher = DisplayModeSwitcher::new();
        switcher.apply(DisplayMode::Projection);
        let once = switcher;
        assert!(!switcher.apply(DisplayMode::Projection));
        assert_eq!(switcher, once);

        assert!(switcher.apply(DisplayMode::Screen));
        assert!(!switcher.apply(DisplayMode::Screen));
        assert_eq!(switcher, DisplayModeSwitcher::new());
    }
}

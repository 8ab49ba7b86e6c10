//! Auto-hiding navigation bar state.

use std::time::{Duration, Instant};

/// Default time the bar stays up after the last pointer activity.
pub const DEFAULT_HIDE_TIMEOUT: Duration = Duration::from_millis(3000);
/// Default time the bar stays pinned after a presentation starts.
pub const DEFAULT_PIN_DURATION: Duration = Duration::from_millis(5000);

/// Show/touch/hide lifecycle of the navigation bar.
///
/// The hide deadline doubles as the timer handle: re-arming replaces it, and
/// the event loop fires it by calling [`NavigationOverlay::tick`]. While
/// pinned, a reached deadline is held back until the pin expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationOverlay {
    enabled: bool,
    visible: bool,
    timeout: Duration,
    pin_duration: Duration,
    pinned_until: Option<Instant>,
    hide_deadline: Option<Instant>,
}

impl Default for NavigationOverlay {
    fn default() -> Self {
        Self::new(DEFAULT_HIDE_TIMEOUT, DEFAULT_PIN_DURATION)
    }
}

impl NavigationOverlay {
    pub const fn new(timeout: Duration, pin_duration: Duration) -> Self {
        Self {
            enabled: true,
            visible: false,
            timeout,
            pin_duration,
            pinned_until: None,
            hide_deadline: None,
        }
    }

    /// An overlay that never becomes visible.
    pub const fn disabled() -> Self {
        let mut overlay = Self::new(DEFAULT_HIDE_TIMEOUT, DEFAULT_PIN_DURATION);
        overlay.enabled = false;
        overlay
    }

    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    pub const fn hide_deadline(&self) -> Option<Instant> {
        self.hide_deadline
    }

    pub fn is_pinned(&self, now: Instant) -> bool {
        self.pinned_until.is_some_and(|until| now < until)
    }

    /// Make the bar visible and arm the hide timer.
    pub fn show(&mut self, now: Instant) -> bool {
        if !self.enabled {
            return false;
        }
        let was_visible = self.visible;
        self.visible = true;
        self.hide_deadline = Some(now + self.timeout);
        !was_visible
    }

    /// Postpone hiding a visible bar. Hidden bars stay hidden.
    pub fn touch(&mut self, now: Instant) {
        if self.visible {
            self.hide_deadline = Some(now + self.timeout);
        }
    }

    /// Hide immediately, cancelling any pending timer and pin.
    pub fn hide(&mut self) -> bool {
        let was_visible = self.visible;
        self.visible = false;
        self.hide_deadline = None;
        self.pinned_until = None;
        was_visible
    }

    /// Show the bar and keep it up for the pin duration.
    pub fn pin(&mut self, now: Instant) {
        if !self.enabled {
            return;
        }
        let until = now + self.pin_duration;
        self.visible = true;
        self.pinned_until = Some(until);
        self.hide_deadline = Some(until.max(now + self.timeout));
    }

    /// Fire the hide timer if it is due. Returns whether the bar was hidden.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.pinned_until.is_some_and(|until| now >= until) {
            self.pinned_until = None;
        }
        if !self.visible || self.is_pinned(now) {
            return false;
        }
        if self.hide_deadline.is_some_and(|deadline| now >= deadline) {
            self.visible = false;
            self.hide_deadline = None;
            return true;
        }
        false
    }

    /// Time until the next state change, for sizing the event poll.
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        if !self.visible {
            return None;
        }
        let deadline = match (self.hide_deadline, self.pinned_until) {
            (Some(hide), Some(pin)) => hide.max(pin),
            (Some(hide), None) => hide,
            (None, pin) => pin?,
        };
        Some(deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn overlay() -> NavigationOverlay {
        NavigationOverlay::new(ms(1000), ms(3000))
    }

    #[test]
    fn test_starts_hidden() {
        let overlay = overlay();
        assert!(!overlay.is_visible());
        assert_eq!(overlay.hide_deadline(), None);
    }

    #[test]
    fn test_show_then_timeout_hides() {
        let start = Instant::now();
        let mut overlay = overlay();
        assert!(overlay.show(start));
        assert!(!overlay.tick(start + ms(999)));
        assert!(overlay.is_visible());
        assert!(overlay.tick(start + ms(1000)));
        assert!(!overlay.is_visible());
    }

    #[test]
    fn test_touch_postpones_hiding() {
        let start = Instant::now();
        let mut overlay = overlay();
        overlay.show(start);
        overlay.touch(start + ms(800));
        assert!(!overlay.tick(start + ms(1500)));
        assert!(overlay.is_visible());
        assert!(overlay.tick(start + ms(1800)));
    }

    #[test]
    fn test_touch_does_not_show_hidden_bar() {
        let start = Instant::now();
        let mut overlay = overlay();
        overlay.touch(start);
        assert!(!overlay.is_visible());
    }

    #[test]
    fn test_show_on_visible_bar_rearms_timer() {
        let start = Instant::now();
        let mut overlay = overlay();
        overlay.show(start);
        assert!(!overlay.show(start + ms(900)));
        assert_eq!(overlay.hide_deadline(), Some(start + ms(1900)));
    }

    #[test]
    fn test_explicit_hide_cancels_timer() {
        let start = Instant::now();
        let mut overlay = overlay();
        overlay.show(start);
        assert!(overlay.hide());
        assert_eq!(overlay.hide_deadline(), None);
        assert!(!overlay.hide());
    }

    #[test]
    fn test_pin_suppresses_auto_hide() {
        let start = Instant::now();
        let mut overlay = overlay();
        overlay.pin(start);
        assert!(overlay.is_visible());
        assert!(overlay.is_pinned(start + ms(2000)));
        overlay.touch(start + ms(100));
        assert!(!overlay.tick(start + ms(2000)));
        assert!(overlay.is_visible());
        assert!(overlay.tick(start + ms(3000)));
        assert!(!overlay.is_pinned(start + ms(3000)));
    }

    #[test]
    fn test_touch_after_pin_expiry_keeps_bar() {
        let start = Instant::now();
        let mut overlay = overlay();
        overlay.pin(start);
        overlay.touch(start + ms(2900));
        assert!(!overlay.tick(start + ms(3100)));
        assert!(overlay.tick(start + ms(3900)));
    }

    #[test]
    fn test_disabled_overlay_never_shows() {
        let start = Instant::now();
        let mut overlay = NavigationOverlay::disabled();
        assert!(!overlay.show(start));
        overlay.pin(start);
        assert!(!overlay.is_visible());
    }

    #[test]
    fn test_next_wakeup_tracks_deadline() {
        let start = Instant::now();
        let mut overlay = overlay();
        assert_eq!(overlay.next_wakeup(start), None);
        overlay.show(start);
        assert_eq!(overlay.next_wakeup(start + ms(400)), Some(ms(600)));
    }
}

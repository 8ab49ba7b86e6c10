//! Presentation mode.
//!
//! - [`PresentationController`]: current slide and presentation mode
//! - [`NavigationOverlay`]: auto-hiding navigation bar timers
//! - [`DisplayModeSwitcher`]: screen vs projection style groups
//! - [`Platform`]: terminal capabilities
//! - [`fragment`]: `#<n>` slide fragments

mod controller;
mod display;
pub mod fragment;
mod navigation;
mod platform;

pub use controller::{BoundaryPolicy, InputBindings, PresentationController};
pub use display::{DisplayMode, DisplayModeSwitcher, StyleGroup};
pub use navigation::{DEFAULT_HIDE_TIMEOUT, DEFAULT_PIN_DURATION, NavigationOverlay};
pub use platform::Platform;

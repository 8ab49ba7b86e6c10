//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod update;
mod widgets;

pub use model::{Model, ToastLevel};
pub use update::{Message, update};
pub use widgets::{GotoBox, SlideList};

use std::path::PathBuf;

use crate::presentation::{BoundaryPolicy, NavigationOverlay, Platform};

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    file_path: PathBuf,
    watch_enabled: bool,
    policy: BoundaryPolicy,
    navigation: NavigationOverlay,
    platform: Platform,
    start_fragment: Option<String>,
    config_global_path: Option<PathBuf>,
    config_local_path: Option<PathBuf>,
}

impl App {
    /// Create a new application for the given deck.
    pub fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            watch_enabled: false,
            policy: BoundaryPolicy::default(),
            navigation: NavigationOverlay::default(),
            platform: Platform::default(),
            start_fragment: None,
            config_global_path: None,
            config_local_path: None,
        }
    }

    /// Enable or disable file watching.
    #[must_use]
    pub const fn with_watch(mut self, enabled: bool) -> Self {
        self.watch_enabled = enabled;
        self
    }

    /// What next/prev do past the last or first slide.
    #[must_use]
    pub const fn with_policy(mut self, policy: BoundaryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Navigation bar timing, or [`NavigationOverlay::disabled`].
    #[must_use]
    pub fn with_navigation(mut self, navigation: NavigationOverlay) -> Self {
        self.navigation = navigation;
        self
    }

    #[must_use]
    pub const fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Start presenting at the slide named by a `#<n>` fragment.
    #[must_use]
    pub fn with_start_fragment(mut self, fragment: Option<String>) -> Self {
        self.start_fragment = fragment;
        self
    }

    /// Set config paths to show in help.
    #[must_use]
    pub fn with_config_paths(
        mut self,
        global_path: Option<PathBuf>,
        local_path: Option<PathBuf>,
    ) -> Self {
        self.config_global_path = global_path;
        self.config_local_path = local_path;
        self
    }
}

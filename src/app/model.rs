use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::deck::{Deck, DeckError, ScreenLayout};
use crate::presentation::{BoundaryPolicy, NavigationOverlay, Platform, PresentationController};
use crate::ui::viewport::Viewport;

use super::widgets::{GotoBox, SlideList};

/// How long a toast stays on screen.
const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state. The presentation
/// controller is owned by the model and reached through it.
pub struct Model {
    /// The loaded slide deck
    pub deck: Deck,
    /// Deck wrapped for the screen view
    pub layout: ScreenLayout,
    /// Scroll position of the screen view
    pub viewport: Viewport,
    /// Current slide and presentation mode
    pub controller: PresentationController,
    /// Auto-hiding navigation bar
    pub navigation: NavigationOverlay,
    /// Terminal capabilities
    pub platform: Platform,
    /// Path to the deck file
    pub file_path: PathBuf,
    /// Open "go to slide" box
    pub goto_box: Option<GotoBox>,
    /// Open slide list overlay
    pub slide_list: Option<SlideList>,
    /// Whether file watching is enabled
    pub watch_enabled: bool,
    /// Global config path shown in help
    pub config_global_path: Option<PathBuf>,
    /// Local override path shown in help
    pub config_local_path: Option<PathBuf>,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Scroll offset inside the help overlay
    pub help_scroll_offset: usize,
    toast: Option<Toast>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Terminal size (columns, rows)
    size: (u16, u16),
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("file_path", &self.file_path)
            .field("slides", &self.deck.len())
            .field("current", &self.controller.current())
            .field("watch_enabled", &self.watch_enabled)
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Create a model for `deck`, showing the screen view.
    pub fn new(file_path: PathBuf, deck: Deck, terminal_size: (u16, u16)) -> Self {
        let (width, height) = terminal_size;
        let layout = deck.screen_layout(crate::ui::document_content_width(width));
        let controller = PresentationController::new(deck.len(), BoundaryPolicy::default());
        Self {
            viewport: Viewport::new(height.saturating_sub(1), layout.line_count()),
            layout,
            deck,
            controller,
            navigation: NavigationOverlay::default(),
            platform: Platform::default(),
            file_path,
            goto_box: None,
            slide_list: None,
            watch_enabled: false,
            config_global_path: None,
            config_local_path: None,
            help_visible: false,
            help_scroll_offset: 0,
            toast: None,
            should_quit: false,
            size: terminal_size,
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: BoundaryPolicy) -> Self {
        self.controller.set_policy(policy);
        self
    }

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

    pub const fn terminal_size(&self) -> (u16, u16) {
        self.size
    }

    /// File name shown in the status bar and window title.
    pub fn display_name(&self) -> String {
        self.file_path.file_name().map_or_else(
            || "untitled".to_string(),
            |s| s.to_string_lossy().to_string(),
        )
    }

    /// Slide shown at the top of the screen view, or the current slide
    /// while presenting.
    pub fn focused_slide(&self) -> Option<usize> {
        self.controller
            .current()
            .or_else(|| self.layout.slide_at_line(self.viewport.offset()))
    }

    /// Scroll the screen view so `slide` starts at the top.
    pub(super) fn scroll_to_slide(&mut self, slide: usize) {
        if let Some(line) = self.layout.anchor(slide) {
            self.viewport.go_to_line(line);
        }
    }

    /// Re-wrap the deck for the current terminal size.
    pub(super) fn reflow_layout(&mut self) {
        let width = self.size.0;
        let anchor_slide = self.layout.slide_at_line(self.viewport.offset());
        self.layout = self
            .deck
            .screen_layout(crate::ui::document_content_width(width));
        self.viewport.resize(self.document_rows());
        self.viewport.set_total_lines(self.layout.line_count());
        if let Some(slide) = anchor_slide {
            self.scroll_to_slide(slide);
        }
    }

    /// Rows left for the document under the status bar and any toast.
    pub const fn document_rows(&self) -> u16 {
        let footer_rows = if self.toast.is_some() { 2 } else { 1 };
        self.size.1.saturating_sub(footer_rows)
    }

    /// Match the viewport to [`Self::document_rows`], keeping a view that
    /// reached the end of the deck pinned there.
    fn fit_viewport(&mut self) {
        let at_bottom = self.viewport.visible_range().end >= self.viewport.total_lines();
        self.viewport.resize(self.document_rows());
        if at_bottom {
            self.viewport.go_to_bottom();
        }
    }

    pub(super) const fn set_terminal_size(&mut self, width: u16, height: u16) {
        self.size = (width, height);
    }

    pub(super) fn reload_from_disk(&mut self) -> Result<(), DeckError> {
        let deck = Deck::load(&self.file_path)?;
        tracing::info!(path = %self.file_path.display(), slides = deck.len(), "deck reloaded");
        let was_presenting = self.controller.is_presenting();
        self.deck = deck;
        self.controller.set_slide_count(self.deck.len());
        if was_presenting && !self.controller.is_presenting() {
            self.navigation.hide();
        }
        if self.deck.is_empty() {
            self.slide_list = None;
        } else if let Some(list) = self.slide_list.as_mut() {
            let selected = list.selected().min(self.deck.len() - 1);
            list.select(selected, self.deck.len());
        }
        let offset = self.viewport.offset();
        self.reflow_layout();
        self.viewport.go_to_line(offset);
        Ok(())
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + TOAST_DURATION,
        });
        self.fit_viewport();
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            self.fit_viewport();
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(PathBuf::new(), Deck::empty(), (80, 24))
    }
}

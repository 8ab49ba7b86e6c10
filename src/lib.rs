// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. deck::DeckError)
    clippy::module_name_repetitions
)]

//! # hpk
//!
//! A terminal slideshow for HTML decks.
//!
//! hpk reads a deck of `class="slide"` elements and shows it in the terminal:
//! - Screen view: every slide, scrollable, one after another
//! - Projection view: one slide at a time, centered
//! - An auto-hiding navigation bar driven by the mouse
//! - `deck.html#n` fragments to start on a given slide
//! - File watching for live reload
//!
//! ## Architecture
//!
//! hpk uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`deck`]: HTML deck parsing and layout
//! - [`presentation`]: Slide navigation, display modes and the navigation bar
//! - [`ui`]: Terminal UI components
//! - [`config`]: Saved default flags
//! - [`watcher`]: File watching

pub mod app;
pub mod config;
pub mod deck;
pub mod presentation;
pub mod ui;
pub mod watcher;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::deck::Deck;
    pub use crate::presentation::PresentationController;
    pub use crate::ui::viewport::Viewport;
}

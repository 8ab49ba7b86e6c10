//! Terminal UI components.
//!
//! - [`viewport`]: scroll state of the screen view
//! - [`style`]: palettes for the screen and projection style groups
//!
//! Rendering reads the model only; the layout helpers re-exported here are
//! shared with mouse hit-testing in the input layer.

pub mod style;
pub mod viewport;

mod overlays;
mod render;
mod status;

pub use overlays::{goto_box_rect, slide_list_rect, slide_list_row_at};
pub use render::{
    NavButton, document_content_width, nav_bar_buttons, nav_button_at, render, slide_content_rect,
    split_projection,
};

pub const DOCUMENT_LEFT_PADDING: u16 = 2;
/// Widest a projected slide gets, in columns.
pub const PROJECTION_MAX_WIDTH: u16 = 100;
/// Columns kept free on each side of a projected slide.
pub const PROJECTION_MARGIN: u16 = 4;

#[cfg(test)]
mod tests;

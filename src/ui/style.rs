//! Colors for the screen and projection style groups.
//!
//! Screen mode uses the terminal's own ANSI palette so the deck reads like
//! any other document. Projection mode switches to a high-contrast palette,
//! with 24-bit colors when the terminal supports them.

use ratatui::style::{Color, Modifier, Style};

use crate::deck::LineKind;
use crate::presentation::DisplayMode;

/// Styles for one display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Background painted behind the slide area
    pub background: Style,
    pub title: Style,
    pub heading: Style,
    pub text: Style,
    pub bullet: Style,
    pub code: Style,
    pub quote: Style,
    /// `── N. Title ──` separators in the screen view
    pub slide_header: Style,
    /// Idle `n / N` counter
    pub counter: Style,
    /// Navigation bar row
    pub nav_bar: Style,
    /// Navigation bar buttons
    pub nav_button: Style,
    pub status: Style,
}

impl Palette {
    /// Palette for the active display mode.
    pub fn for_mode(mode: DisplayMode, truecolor: bool) -> Self {
        match mode {
            DisplayMode::Screen => Self::screen(),
            DisplayMode::Projection if truecolor => Self::projection_rgb(),
            DisplayMode::Projection => Self::projection_ansi(),
        }
    }

    fn screen() -> Self {
        Self {
            background: Style::default(),
            title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            heading: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            text: Style::default(),
            bullet: Style::default(),
            code: Style::default().fg(Color::Indexed(245)),
            quote: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::ITALIC),
            slide_header: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            counter: Style::default().fg(Color::Indexed(245)),
            nav_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
            nav_button: Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            status: Style::default().bg(Color::DarkGray).fg(Color::White),
        }
    }

    fn projection_ansi() -> Self {
        Self {
            background: Style::default().bg(Color::Black).fg(Color::White),
            title: Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
            heading: Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
            text: Style::default().fg(Color::White),
            bullet: Style::default().fg(Color::White),
            code: Style::default().fg(Color::LightGreen),
            quote: Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
            ..Self::projection_chrome(Color::Indexed(236), Color::Indexed(244))
        }
    }

    fn projection_rgb() -> Self {
        Self {
            background: Style::default()
                .bg(Color::Rgb(18, 18, 24))
                .fg(Color::Rgb(230, 230, 230)),
            title: Style::default()
                .fg(Color::Rgb(255, 200, 87))
                .add_modifier(Modifier::BOLD),
            heading: Style::default()
                .fg(Color::Rgb(120, 200, 255))
                .add_modifier(Modifier::BOLD),
            text: Style::default().fg(Color::Rgb(230, 230, 230)),
            bullet: Style::default().fg(Color::Rgb(230, 230, 230)),
            code: Style::default().fg(Color::Rgb(152, 220, 140)),
            quote: Style::default()
                .fg(Color::Rgb(170, 170, 185))
                .add_modifier(Modifier::ITALIC),
            ..Self::projection_chrome(Color::Rgb(44, 44, 56), Color::Rgb(130, 130, 145))
        }
    }

    fn projection_chrome(bar: Color, dim: Color) -> Self {
        Self {
            background: Style::default(),
            title: Style::default(),
            heading: Style::default(),
            text: Style::default(),
            bullet: Style::default(),
            code: Style::default(),
            quote: Style::default(),
            slide_header: Style::default(),
            counter: Style::default().fg(dim),
            nav_bar: Style::default().bg(bar).fg(Color::White),
            nav_button: Style::default()
                .bg(bar)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            status: Style::default().bg(bar).fg(Color::White),
        }
    }

    /// Style for a body line of the given kind.
    pub const fn line(&self, kind: LineKind) -> Style {
        match kind {
            LineKind::Heading(1) => self.title,
            LineKind::Heading(_) => self.heading,
            LineKind::Text | LineKind::Blank => self.text,
            LineKind::Bullet => self.bullet,
            LineKind::Code => self.code,
            LineKind::Quote => self.quote,
            LineKind::SlideHeader => self.slide_header,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_palette_differs_from_screen() {
        let screen = Palette::for_mode(DisplayMode::Screen, false);
        let projection = Palette::for_mode(DisplayMode::Projection, false);
        assert_ne!(screen, projection);
        assert_eq!(projection.background.bg, Some(Color::Black));
    }

    #[test]
    fn test_truecolor_only_affects_projection() {
        assert_eq!(
            Palette::for_mode(DisplayMode::Screen, true),
            Palette::for_mode(DisplayMode::Screen, false)
        );
        let rgb = Palette::for_mode(DisplayMode::Projection, true);
        assert!(matches!(rgb.background.bg, Some(Color::Rgb(..))));
    }

    #[test]
    fn test_top_level_heading_uses_title_style() {
        let palette = Palette::for_mode(DisplayMode::Projection, false);
        assert_eq!(palette.line(LineKind::Heading(1)), palette.title);
        assert_eq!(palette.line(LineKind::Heading(3)), palette.heading);
        assert_eq!(palette.line(LineKind::Code), palette.code);
    }
}

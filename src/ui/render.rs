use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::app::Model;
use crate::presentation::DisplayMode;

use super::style::Palette;
use super::{DOCUMENT_LEFT_PADDING, PROJECTION_MARGIN, PROJECTION_MAX_WIDTH, overlays, status};

const PREV_LABEL: &str = " \u{25c0} prev ";
const NEXT_LABEL: &str = " next \u{25b6} ";
const NAV_BUTTON_WIDTH: u16 = 8;

/// A clickable part of the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavButton {
    Prev,
    Counter,
    Next,
}

pub fn document_content_width(total_width: u16) -> u16 {
    total_width.saturating_sub(DOCUMENT_LEFT_PADDING).max(1)
}

/// Split the projection screen into the slide area and the bottom bar row.
pub fn split_projection(area: Rect) -> (Rect, Rect) {
    let bar_height = area.height.min(1);
    let slide = Rect {
        height: area.height - bar_height,
        ..area
    };
    let bar = Rect {
        y: area.y + slide.height,
        height: bar_height,
        ..area
    };
    (slide, bar)
}

/// Centered column the slide text is wrapped into.
pub fn slide_content_rect(slide_area: Rect) -> Rect {
    let width = slide_area
        .width
        .saturating_sub(PROJECTION_MARGIN * 2)
        .min(PROJECTION_MAX_WIDTH)
        .max(1)
        .min(slide_area.width);
    let x = slide_area.x + slide_area.width.saturating_sub(width) / 2;
    let top = slide_area.height.min(1);
    let height = slide_area.height.saturating_sub(top * 2);
    Rect::new(x, slide_area.y + top, width, height)
}

/// Button rectangles of a navigation bar drawn in `bar`.
pub fn nav_bar_buttons(bar: Rect) -> [(NavButton, Rect); 3] {
    let button = NAV_BUTTON_WIDTH.min(bar.width / 3);
    let prev = Rect { width: button, ..bar };
    let next = Rect {
        x: bar.x + bar.width - button,
        width: button,
        ..bar
    };
    let counter = Rect {
        x: bar.x + button,
        width: bar.width - button * 2,
        ..bar
    };
    [
        (NavButton::Prev, prev),
        (NavButton::Counter, counter),
        (NavButton::Next, next),
    ]
}

/// Navigation bar button under a screen cell, for a frame of size `area`.
pub fn nav_button_at(area: Rect, column: u16, row: u16) -> Option<NavButton> {
    let (_, bar) = split_projection(area);
    let position = Position::new(column, row);
    nav_bar_buttons(bar)
        .into_iter()
        .find(|(_, rect)| rect.contains(position))
        .map(|(button, _)| button)
}

/// Render the complete UI.
pub fn render(model: &mut Model, frame: &mut Frame) {
    let area = frame.area();
    let mode = model.controller.display().active();
    let palette = Palette::for_mode(mode, model.platform.truecolor);

    match mode {
        DisplayMode::Screen => render_screen(model, &palette, frame, area),
        DisplayMode::Projection => render_projection(model, &palette, frame, area),
    }

    if let Some(list) = model.slide_list.as_mut() {
        let popup = overlays::slide_list_rect(area, model.deck.len());
        list.ensure_visible(popup.height.saturating_sub(2) as usize);
    }
    let model: &Model = model;
    if model.slide_list.is_some() {
        overlays::render_slide_list(model, frame, area);
    }
    if model.goto_box.is_some() {
        overlays::render_goto_box(model, frame, area);
    }
    if model.help_visible {
        overlays::render_help_overlay(model, frame, area);
    }
}

/// Whole deck as one scrollable document.
fn render_screen(model: &Model, palette: &Palette, frame: &mut Frame, area: Rect) {
    let toast_active = model.active_toast().is_some();
    let footer_rows = 1 + u16::from(toast_active);
    let doc_outer_area = Rect {
        height: area.height.saturating_sub(footer_rows),
        ..area
    };
    let toast_area = Rect {
        y: area.y + area.height.saturating_sub(2),
        height: 1,
        ..area
    };
    let status_area = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: 1,
        ..area
    };

    let lines = model.layout.lines();
    let range = model.viewport.visible_range();
    let content: Vec<Line> = lines[range]
        .iter()
        .map(|line| Line::styled(line.text().to_string(), palette.line(line.kind())))
        .collect();

    let doc_block = Block::default()
        .borders(Borders::NONE)
        .padding(Padding::left(DOCUMENT_LEFT_PADDING));
    frame.render_widget(Clear, doc_outer_area);
    frame.render_widget(Paragraph::new(content).block(doc_block), doc_outer_area);

    if toast_active {
        status::render_toast_bar(model, frame, toast_area);
    }
    status::render_status_bar(model, palette, frame, status_area);
}

/// Current slide alone, centered, with the counter or navigation bar below.
fn render_projection(model: &Model, palette: &Palette, frame: &mut Frame, area: Rect) {
    let Some(current) = model.controller.current() else {
        return;
    };
    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(palette.background), area);

    let (slide_area, bar) = split_projection(area);
    let content_area = slide_content_rect(slide_area);
    if let Some(slide) = model.deck.slide(current) {
        let lines = slide.wrapped_lines(usize::from(content_area.width));
        let height = usize::from(content_area.height);
        let top_pad = height.saturating_sub(lines.len()) / 2;
        let mut content: Vec<Line> = vec![Line::raw(""); top_pad];
        content.extend(
            lines
                .iter()
                .map(|line| Line::styled(line.text().to_string(), palette.line(line.kind()))),
        );
        frame.render_widget(Paragraph::new(content), content_area);
    }

    if model.active_toast().is_some() && slide_area.height > 0 {
        let toast_area = Rect {
            y: slide_area.y + slide_area.height - 1,
            height: 1,
            ..slide_area
        };
        status::render_toast_bar(model, frame, toast_area);
    }

    let counter = format!("{} / {}", current + 1, model.deck.len());
    if model.navigation.is_visible() {
        render_nav_bar(&counter, palette, frame, bar);
    } else {
        let idle = Paragraph::new(format!("{counter} "))
            .alignment(Alignment::Right)
            .style(palette.counter);
        frame.render_widget(idle, bar);
    }
}

fn render_nav_bar(counter: &str, palette: &Palette, frame: &mut Frame, bar: Rect) {
    frame.render_widget(Paragraph::new("").style(palette.nav_bar), bar);
    for (button, rect) in nav_bar_buttons(bar) {
        let widget = match button {
            NavButton::Prev => Paragraph::new(PREV_LABEL).style(palette.nav_button),
            NavButton::Next => Paragraph::new(NEXT_LABEL).style(palette.nav_button),
            NavButton::Counter => Paragraph::new(counter.to_string())
                .alignment(Alignment::Center)
                .style(palette.nav_bar),
        };
        frame.render_widget(widget, rect);
    }
}

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Model, ToastLevel};

use super::style::Palette;

pub fn render_status_bar(model: &Model, palette: &Palette, frame: &mut Frame, area: Rect) {
    let filename = model.display_name();
    let percent = model.viewport.scroll_percent();

    let slide_info = match model.focused_slide() {
        Some(index) => format!("Slide {}/{}", index + 1, model.deck.len()),
        None => "no slides".to_string(),
    };
    let watch_indicator = if model.watch_enabled {
        " [watching]"
    } else {
        ""
    };
    let run_hint = if model.deck.is_empty() {
        ""
    } else {
        "  Enter:present"
    };

    let status = format!(" {filename}  [{percent}%]  {slide_info}{watch_indicator}{run_hint}  ?:help");
    frame.render_widget(Paragraph::new(status).style(palette.status), area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        ToastLevel::Error => ("[error]", Style::default().bg(Color::Red).fg(Color::White)),
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}

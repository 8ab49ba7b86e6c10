use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::app::Model;

const GOTO_BOX_WIDTH: u16 = 28;
const SLIDE_LIST_MAX_WIDTH: u16 = 64;

pub fn slide_list_rect(area: Rect, slide_count: usize) -> Rect {
    let popup_width = area.width.saturating_sub(8).clamp(30, SLIDE_LIST_MAX_WIDTH);
    // Borders above and below the rows
    let needed_rows = u16::try_from(slide_count)
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let popup_height = needed_rows.min(area.height.saturating_sub(4).max(3));
    centered_popup_rect(popup_width, popup_height, area)
}

/// Slide index of the list row under a screen cell.
pub fn slide_list_row_at(
    area: Rect,
    slide_count: usize,
    scroll: usize,
    column: u16,
    row: u16,
) -> Option<usize> {
    let popup = slide_list_rect(area, slide_count);
    let inner = Block::default().borders(Borders::ALL).inner(popup);
    if !inner.contains(Position::new(column, row)) {
        return None;
    }
    let index = scroll + usize::from(row - inner.y);
    (index < slide_count).then_some(index)
}

pub fn goto_box_rect(area: Rect) -> Rect {
    centered_popup_rect(GOTO_BOX_WIDTH, 3, area)
}

pub fn render_slide_list(model: &Model, frame: &mut Frame, area: Rect) {
    let Some(list) = model.slide_list else {
        return;
    };
    let slides = model.deck.slides();
    let popup = slide_list_rect(area, slides.len());
    let rows = popup.height.saturating_sub(2) as usize;
    let current = model.focused_slide();

    let items: Vec<Line> = slides
        .iter()
        .skip(list.scroll())
        .take(rows)
        .map(|slide| {
            let index = slide.index();
            let marker = if current == Some(index) { "\u{25b6}" } else { " " };
            let line = Line::raw(format!("{marker} {:>3}. {}", index + 1, slide.title()));
            if index == list.selected() {
                line.reversed()
            } else {
                line
            }
        })
        .collect();

    let block = Block::default()
        .title("Slides")
        .borders(Borders::ALL)
        .style(Style::default().bg(Color::Black).fg(Color::White));
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(items).block(block), popup);
}

pub fn render_goto_box(model: &Model, frame: &mut Frame, area: Rect) {
    let Some(goto) = model.goto_box.as_ref() else {
        return;
    };
    let popup = goto_box_rect(area);
    let invalid = !goto.input().is_empty() && goto.target(model.deck.len()).is_none();
    let input_style = if invalid {
        Style::default().fg(Color::Red)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let line = Line::from(vec![
        Span::raw(" > "),
        Span::styled(goto.input().to_string(), input_style),
        Span::styled(" ", Style::default().bg(Color::White)),
        Span::styled(
            format!("  of {}", model.deck.len()),
            Style::default().fg(Color::Indexed(245)),
        ),
    ]);

    let block = Block::default()
        .title("Go to slide")
        .borders(Borders::ALL)
        .style(Style::default().bg(Color::Black).fg(Color::White));
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(line).block(block), popup);
}

pub fn render_help_overlay(model: &Model, frame: &mut Frame, area: Rect) {
    let popup_width = area.width.saturating_sub(12).max(48);
    let popup_height = area.height.saturating_sub(6).max(12);
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let global_cfg = model
        .config_global_path
        .as_ref()
        .map_or_else(|| "<unknown>".to_string(), |p| p.display().to_string());
    let local_cfg = model
        .config_local_path
        .as_ref()
        .map_or_else(|| "<none>".to_string(), |p| p.display().to_string());

    let section_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(Color::Indexed(245));

    let mut all_lines: Vec<Line> = Vec::new();

    all_lines.push(Line::styled("Screen view", section_style));
    all_lines.push(Line::raw("  j/k or Up/Down      Scroll"));
    all_lines.push(Line::raw("  PageUp/PageDown     Page up / down"));
    all_lines.push(Line::raw("  g / G               Top / bottom"));
    all_lines.push(Line::raw("  Enter / F5 / s      Run presentation"));
    all_lines.push(Line::raw(""));

    all_lines.push(Line::styled("Presentation", section_style));
    all_lines.push(Line::raw("  Enter/Space/n       Next slide"));
    all_lines.push(Line::raw("  Right/Down/PageDown Next slide"));
    all_lines.push(Line::raw("  Backspace/p         Previous slide"));
    all_lines.push(Line::raw("  Left/Up/PageUp      Previous slide"));
    all_lines.push(Line::raw("  Left / right click  Next / previous slide"));
    all_lines.push(Line::raw("  Home / End          First / last slide"));
    all_lines.push(Line::raw("  Mouse move          Show navigation bar"));
    all_lines.push(Line::raw("  Esc                 End presentation"));
    all_lines.push(Line::raw(""));

    all_lines.push(Line::styled("Slides", section_style));
    all_lines.push(Line::raw("  : (g presenting)    Go to slide number"));
    all_lines.push(Line::raw("  l                   Slide list"));
    all_lines.push(Line::raw("  j/k, Enter, click   Pick from the list"));
    all_lines.push(Line::raw(""));

    all_lines.push(Line::styled("Other", section_style));
    all_lines.push(Line::raw("  w                   Toggle watch"));
    all_lines.push(Line::raw("  r                   Reload deck"));
    all_lines.push(Line::raw("  q / Ctrl-c          Quit"));
    all_lines.push(Line::raw("  ? / F1              Toggle help"));
    all_lines.push(Line::raw(""));

    all_lines.push(Line::styled("Config", section_style));
    all_lines.push(Line::raw(format!(
        "  Boundary: {}",
        model.controller.policy().as_str()
    )));
    all_lines.push(Line::raw(format!("  Global: {global_cfg}")));
    all_lines.push(Line::raw(format!("  Local override: {local_cfg}")));

    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(Clear, popup);
    frame.render_widget(block, popup);

    // Inner area: border(1) + padding(1) on each side = 4
    let inner = Rect::new(
        popup.x + 2,
        popup.y + 2,
        popup.width.saturating_sub(4),
        popup.height.saturating_sub(4),
    );

    // Last row is the footer hint
    let content_height_u16 = inner.height.saturating_sub(1);
    let content_height = content_height_u16 as usize;
    let max_scroll = all_lines.len().saturating_sub(content_height);
    let scroll = model.help_scroll_offset.min(max_scroll);

    let end = (scroll + content_height).min(all_lines.len());
    let visible: Vec<Line> = all_lines[scroll..end].to_vec();

    let content_area = Rect::new(inner.x, inner.y, inner.width, content_height_u16);
    frame.render_widget(Paragraph::new(visible), content_area);

    let footer_area = Rect::new(inner.x, inner.y + content_height_u16, inner.width, 1);
    let footer = Line::styled("j/k scroll \u{2502} Esc closes", dim_style);
    frame.render_widget(Paragraph::new(footer), footer_area);
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}

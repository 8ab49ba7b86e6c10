use std::path::PathBuf;
use std::time::{Duration, Instant};

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use super::*;
use crate::app::{Message, Model, update};
use crate::deck::Deck;

fn deck_html(count: usize) -> String {
    let mut html = String::from("<title>Render test</title><div class=\"presentation\">");
    for i in 1..=count {
        html.push_str(&format!(
            "<section class=\"slide\"><h1>Heading {i}</h1><ul><li>Point {i}</li></ul></section>"
        ));
    }
    html.push_str("</div>");
    html
}

fn create_model(count: usize) -> Model {
    Model::new(
        PathBuf::from("talk.html"),
        Deck::parse(&deck_html(count)),
        (80, 24),
    )
}

fn draw(model: &mut Model) -> Buffer {
    let (width, height) = model.terminal_size();
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| render(model, frame)).unwrap();
    terminal.backend().buffer().clone()
}

fn row_text(buffer: &Buffer, row: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, row)].symbol())
        .collect()
}

fn screen_text(buffer: &Buffer) -> String {
    (0..buffer.area.height)
        .map(|row| row_text(buffer, row))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_screen_view_shows_every_slide() {
    let mut model = create_model(3);
    let text = screen_text(&draw(&mut model));
    assert!(text.contains("1. Heading 1"));
    assert!(text.contains("2. Heading 2"));
    assert!(text.contains("3. Heading 3"));
    assert!(text.contains("\u{2022} Point 2"));
}

#[test]
fn test_status_bar_shows_file_and_slide() {
    let mut model = create_model(3);
    let buffer = draw(&mut model);
    let status = row_text(&buffer, 23);
    assert!(status.contains("talk.html"));
    assert!(status.contains("Slide 1/3"));
    assert!(status.contains("?:help"));
}

#[test]
fn test_projection_shows_only_current_slide() {
    let model = update(create_model(3), Message::BeginPresentation);
    let mut model = update(model, Message::GotoSlide(1));
    let text = screen_text(&draw(&mut model));
    assert!(text.contains("Heading 2"));
    assert!(!text.contains("Heading 1"));
    assert!(!text.contains("Heading 3"));
    assert!(!text.contains("talk.html"), "no status bar while presenting");
}

#[test]
fn test_projection_counter_and_nav_bar() {
    let mut model = update(create_model(3), Message::BeginPresentation);
    let buffer = draw(&mut model);
    let bar = row_text(&buffer, 23);
    assert!(bar.contains("1 / 3"));
    assert!(bar.contains("prev"));
    assert!(bar.contains("next"));

    let mut model = update(model, Message::Tick(Instant::now() + Duration::from_secs(10)));
    let buffer = draw(&mut model);
    let bar = row_text(&buffer, 23);
    assert!(bar.trim_end().ends_with("1 / 3"));
    assert!(!bar.contains("prev"));
}

#[test]
fn test_projection_centers_slide_vertically() {
    let mut model = update(create_model(1), Message::BeginPresentation);
    let buffer = draw(&mut model);
    let first_text_row = (0..buffer.area.height)
        .find(|&row| row_text(&buffer, row).contains("Heading 1"))
        .unwrap();
    assert!(first_text_row > 5, "short slide should be centered, got row {first_text_row}");
}

#[test]
fn test_slide_list_overlay_lists_titles() {
    let mut model = update(create_model(4), Message::ToggleSlideList);
    let text = screen_text(&draw(&mut model));
    assert!(text.contains("Slides"));
    assert!(text.contains("  4. Heading 4"));
}

#[test]
fn test_slide_list_scrolls_to_selection_on_render() {
    let mut model = Model::new(
        PathBuf::from("talk.html"),
        Deck::parse(&deck_html(40)),
        (80, 12),
    );
    model = update(model, Message::ToggleSlideList);
    for _ in 0..30 {
        model = update(model, Message::SlideListDown);
    }
    let text = screen_text(&draw(&mut model));
    assert!(text.contains("31. Heading 31"));
    assert!(model.slide_list.is_some_and(|list| list.scroll() > 0));
}

#[test]
fn test_goto_box_overlay() {
    let model = update(create_model(3), Message::OpenGotoBox);
    let mut model = update(model, Message::GotoInput('2'));
    let text = screen_text(&draw(&mut model));
    assert!(text.contains("Go to slide"));
    assert!(text.contains("> 2"));
    assert!(text.contains("of 3"));
}

#[test]
fn test_help_overlay_renders() {
    let mut model = update(create_model(1), Message::ToggleHelp);
    let text = screen_text(&draw(&mut model));
    assert!(text.contains("Help"));
    assert!(text.contains("Screen view"));
    assert!(text.contains("Run presentation"));
}

#[test]
fn test_empty_deck_renders_without_slides() {
    let mut model = Model::default();
    let buffer = draw(&mut model);
    assert!(row_text(&buffer, 23).contains("no slides"));
}

#[test]
fn test_nav_bar_buttons_cover_bar() {
    let bar = Rect::new(0, 23, 80, 1);
    let buttons = nav_bar_buttons(bar);
    let total: u16 = buttons.iter().map(|(_, rect)| rect.width).sum();
    assert_eq!(total, 80);
    assert_eq!(buttons[0].0, NavButton::Prev);
    assert_eq!(buttons[2].1.x + buttons[2].1.width, 80);
}

#[test]
fn test_nav_button_at_only_on_bottom_row() {
    let area = Rect::new(0, 0, 80, 24);
    assert_eq!(nav_button_at(area, 1, 23), Some(NavButton::Prev));
    assert_eq!(nav_button_at(area, 79, 23), Some(NavButton::Next));
    assert_eq!(nav_button_at(area, 40, 23), Some(NavButton::Counter));
    assert_eq!(nav_button_at(area, 1, 22), None);
}

#[test]
fn test_slide_content_rect_is_centered_and_capped() {
    let wide = slide_content_rect(Rect::new(0, 0, 200, 40));
    assert_eq!(wide.width, PROJECTION_MAX_WIDTH);
    assert_eq!(wide.x, 50);

    let narrow = slide_content_rect(Rect::new(0, 0, 6, 3));
    assert!(narrow.width >= 1);
    assert!(narrow.x + narrow.width <= 6);
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    for (width, height) in [(1, 1), (2, 2), (10, 3)] {
        let mut model = Model::new(
            PathBuf::from("talk.html"),
            Deck::parse(&deck_html(3)),
            (width, height),
        );
        let _ = draw(&mut model);
        model = update(model, Message::BeginPresentation);
        model = update(model, Message::ToggleSlideList);
        let _ = draw(&mut model);
    }
}

#[test]
fn test_document_content_width_keeps_padding() {
    assert_eq!(document_content_width(80), 78);
    assert_eq!(document_content_width(1), 1);
}

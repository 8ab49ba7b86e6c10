use std::time::Instant;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::Frame;
use ratatui::layout::{Position, Rect};

use crate::app::{App, Message, Model};
use crate::presentation::InputBindings;
use crate::ui::NavButton;

use super::event_loop::ResizeDebouncer;

impl App {
    pub(super) fn handle_event(
        event: &Event,
        model: &Model,
        now: Instant,
        resize_debouncer: &mut ResizeDebouncer,
    ) -> Option<Message> {
        match event {
            Event::Key(key) => Self::handle_key(*key, model),
            Event::Mouse(mouse) => Self::handle_mouse(*mouse, model, now),
            Event::Resize(w, h) => {
                tracing::trace!(width = w, height = h, "resize queued");
                resize_debouncer.queue(*w, *h, now);
                None
            }
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Message::Quit);
        }
        if model.help_visible {
            return Self::handle_help_key(key);
        }
        if model.goto_box.is_some() {
            return Self::handle_goto_key(key);
        }
        if model.slide_list.is_some() {
            return Self::handle_slide_list_key(key);
        }
        match model.controller.bindings() {
            InputBindings::Attached => Self::handle_presentation_key(key),
            InputBindings::Detached => Self::handle_screen_key(key),
        }
    }

    fn handle_help_key(key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?' | 'q') | KeyCode::F(1) => Some(Message::HideHelp),
            KeyCode::Char('j') | KeyCode::Down => Some(Message::HelpScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Message::HelpScrollUp),
            _ => None,
        }
    }

    fn handle_goto_key(key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Char(ch) if ch.is_ascii_digit() => Some(Message::GotoInput(ch)),
            KeyCode::Backspace => Some(Message::GotoBackspace),
            KeyCode::Enter => Some(Message::GotoSubmit),
            KeyCode::Esc => Some(Message::GotoCancel),
            _ => None,
        }
    }

    fn handle_slide_list_key(key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Char('k') | KeyCode::Up => Some(Message::SlideListUp),
            KeyCode::Char('j') | KeyCode::Down => Some(Message::SlideListDown),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Message::SlideListSelect),
            KeyCode::Esc | KeyCode::Char('l' | 'q') => Some(Message::CloseSlideList),
            _ => None,
        }
    }

    /// Keys while the presentation owns the input.
    fn handle_presentation_key(key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Enter
            | KeyCode::Char(' ' | 'n')
            | KeyCode::PageDown
            | KeyCode::Right
            | KeyCode::Down => Some(Message::NextSlide),
            KeyCode::Backspace
            | KeyCode::Char('p')
            | KeyCode::PageUp
            | KeyCode::Left
            | KeyCode::Up => Some(Message::PrevSlide),
            KeyCode::Home => Some(Message::FirstSlide),
            KeyCode::End => Some(Message::LastSlide),
            KeyCode::Esc => Some(Message::EndPresentation),
            KeyCode::Char('g') => Some(Message::OpenGotoBox),
            KeyCode::Char('l') => Some(Message::ToggleSlideList),
            KeyCode::Char('?') | KeyCode::F(1) => Some(Message::ToggleHelp),
            KeyCode::Char('q') => Some(Message::Quit),
            _ => None,
        }
    }

    /// Keys of the scrollable screen view.
    fn handle_screen_key(key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Message::ScrollDown(1)),
            KeyCode::Char('k') | KeyCode::Up => Some(Message::ScrollUp(1)),
            KeyCode::PageDown | KeyCode::Char(' ') => Some(Message::PageDown),
            KeyCode::PageUp | KeyCode::Char('b') => Some(Message::PageUp),
            KeyCode::Char('g') | KeyCode::Home => Some(Message::GoToTop),
            KeyCode::Char('G') | KeyCode::End => Some(Message::GoToBottom),
            KeyCode::Enter | KeyCode::F(5) | KeyCode::Char('s') => {
                Some(Message::BeginPresentation)
            }
            KeyCode::Char(':') => Some(Message::OpenGotoBox),
            KeyCode::Char('l') => Some(Message::ToggleSlideList),
            KeyCode::Char('w') => Some(Message::ToggleWatch),
            KeyCode::Char('r') => Some(Message::ForceReload),
            KeyCode::Char('?') | KeyCode::F(1) => Some(Message::ToggleHelp),
            KeyCode::Char('q') => Some(Message::Quit),
            _ => None,
        }
    }

    pub(super) fn handle_mouse(mouse: MouseEvent, model: &Model, now: Instant) -> Option<Message> {
        let (width, height) = model.terminal_size();
        let area = Rect::new(0, 0, width, height);
        let left_click = matches!(mouse.kind, MouseEventKind::Up(MouseButton::Left));

        if model.help_visible {
            return match mouse.kind {
                MouseEventKind::ScrollDown => Some(Message::HelpScrollDown),
                MouseEventKind::ScrollUp => Some(Message::HelpScrollUp),
                _ => None,
            };
        }

        if let Some(list) = model.slide_list {
            return match mouse.kind {
                MouseEventKind::ScrollDown => Some(Message::SlideListDown),
                MouseEventKind::ScrollUp => Some(Message::SlideListUp),
                _ if left_click => {
                    let count = model.deck.len();
                    let popup = crate::ui::slide_list_rect(area, count);
                    if let Some(index) = crate::ui::slide_list_row_at(
                        area,
                        count,
                        list.scroll(),
                        mouse.column,
                        mouse.row,
                    ) {
                        Some(Message::SlideListClick(index))
                    } else if point_in_rect(mouse.column, mouse.row, popup) {
                        None
                    } else {
                        Some(Message::CloseSlideList)
                    }
                }
                _ => None,
            };
        }

        if model.goto_box.is_some() {
            let popup = crate::ui::goto_box_rect(area);
            if left_click && !point_in_rect(mouse.column, mouse.row, popup) {
                return Some(Message::GotoCancel);
            }
            return None;
        }

        match model.controller.bindings() {
            InputBindings::Attached => Self::handle_presentation_mouse(mouse, model, area, now),
            InputBindings::Detached => match mouse.kind {
                MouseEventKind::ScrollDown => Some(Message::ScrollDown(3)),
                MouseEventKind::ScrollUp => Some(Message::ScrollUp(3)),
                _ => None,
            },
        }
    }

    fn handle_presentation_mouse(
        mouse: MouseEvent,
        model: &Model,
        area: Rect,
        now: Instant,
    ) -> Option<Message> {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(Message::PointerMoved(now)),
            MouseEventKind::Up(MouseButton::Left) => {
                let button = model
                    .navigation
                    .is_visible()
                    .then(|| crate::ui::nav_button_at(area, mouse.column, mouse.row))
                    .flatten();
                match button {
                    Some(NavButton::Prev) => Some(Message::PrevSlide),
                    Some(NavButton::Counter) => Some(Message::ToggleSlideList),
                    Some(NavButton::Next) | None => Some(Message::NextSlide),
                }
            }
            MouseEventKind::Up(MouseButton::Right) => Some(Message::PrevSlide),
            _ => None,
        }
    }

    pub(super) fn view(model: &mut Model, frame: &mut Frame) {
        crate::ui::render(model, frame);
    }
}

fn point_in_rect(col: u16, row: u16, rect: Rect) -> bool {
    rect.contains(Position::new(col, row))
}

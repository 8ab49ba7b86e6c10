use std::time::Instant;

use crate::app::Model;

use super::widgets::{GotoBox, SlideList};

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Screen view
    /// Scroll up by n lines
    ScrollUp(usize),
    /// Scroll down by n lines
    ScrollDown(usize),
    /// Scroll up one page
    PageUp,
    /// Scroll down one page
    PageDown,
    /// Go to beginning of the deck
    GoToTop,
    /// Go to end of the deck
    GoToBottom,

    // Presentation
    /// Enter presentation mode on the first slide
    BeginPresentation,
    /// Enter presentation mode on a given slide
    BeginAt(usize),
    /// Leave presentation mode
    EndPresentation,
    /// Next slide (boundary policy applies)
    NextSlide,
    /// Previous slide (boundary policy applies)
    PrevSlide,
    /// Jump to the first slide
    FirstSlide,
    /// Jump to the last slide
    LastSlide,
    /// Jump to a slide by index
    GotoSlide(usize),

    // Navigation bar
    /// Pointer activity: show the bar or keep it up
    PointerMoved(Instant),
    /// Timer tick: hide the bar when its deadline passed
    Tick(Instant),

    // Goto box
    /// Open the "go to slide" box
    OpenGotoBox,
    /// Type into the goto box
    GotoInput(char),
    /// Delete the last typed digit
    GotoBackspace,
    /// Jump to the typed slide and close the box
    GotoSubmit,
    /// Close the goto box
    GotoCancel,

    // Slide list
    /// Open or close the slide list
    ToggleSlideList,
    /// Move the list cursor up
    SlideListUp,
    /// Move the list cursor down
    SlideListDown,
    /// Jump to the selected slide
    SlideListSelect,
    /// Select and jump to a slide by list row
    SlideListClick(usize),
    /// Close the slide list
    CloseSlideList,

    // Help
    /// Toggle help overlay
    ToggleHelp,
    /// Hide help overlay
    HideHelp,
    /// Scroll help up
    HelpScrollUp,
    /// Scroll help down
    HelpScrollDown,

    // File watching
    /// Toggle file watching
    ToggleWatch,
    /// File changed externally, reload
    FileChanged,
    /// Force reload file
    ForceReload,

    // Window
    /// Terminal resized
    Resize(u16, u16),
    /// Redraw screen
    Redraw,

    // Application
    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// File and terminal side effects run afterwards in the event loop.
pub fn update(mut model: Model, msg: Message) -> Model {
    let current_before = model.controller.current();

    match msg {
        // Screen view
        Message::ScrollUp(n) => model.viewport.scroll_up(n),
        Message::ScrollDown(n) => model.viewport.scroll_down(n),
        Message::PageUp => model.viewport.page_up(),
        Message::PageDown => model.viewport.page_down(),
        Message::GoToTop => model.viewport.go_to_top(),
        Message::GoToBottom => model.viewport.go_to_bottom(),

        // Presentation
        Message::BeginPresentation => {
            model.controller.begin();
        }
        Message::BeginAt(index) => {
            if model.controller.begin() {
                model.controller.goto_slide(index);
            }
        }
        Message::EndPresentation => {
            model.controller.end();
        }
        Message::NextSlide => {
            model.controller.next();
        }
        Message::PrevSlide => {
            model.controller.prev();
        }
        Message::FirstSlide => {
            model.controller.first();
        }
        Message::LastSlide => {
            model.controller.last();
        }
        Message::GotoSlide(index) => {
            model.controller.goto_slide(index);
        }

        // Navigation bar
        Message::PointerMoved(now) => {
            if model.controller.is_presenting() {
                model.navigation.show(now);
            }
        }
        Message::Tick(now) => {
            model.navigation.tick(now);
        }

        // Goto box
        Message::OpenGotoBox => {
            if !model.deck.is_empty() {
                model.goto_box = Some(GotoBox::default());
                model.slide_list = None;
            }
        }
        Message::GotoInput(ch) => {
            if let Some(goto) = model.goto_box.as_mut() {
                goto.push(ch);
            }
        }
        Message::GotoBackspace => {
            if let Some(goto) = model.goto_box.as_mut() {
                goto.backspace();
            }
        }
        Message::GotoSubmit => {
            if let Some(goto) = model.goto_box.take()
                && let Some(target) = goto.target(model.deck.len())
            {
                jump_to(&mut model, target);
            }
        }
        Message::GotoCancel => model.goto_box = None,

        // Slide list
        Message::ToggleSlideList => {
            if model.slide_list.is_some() || model.deck.is_empty() {
                model.slide_list = None;
            } else {
                let selected = model.focused_slide().unwrap_or(0);
                model.slide_list = Some(SlideList::new(selected));
                model.goto_box = None;
            }
        }
        Message::SlideListUp => {
            if let Some(list) = model.slide_list.as_mut() {
                list.up();
            }
        }
        Message::SlideListDown => {
            let count = model.deck.len();
            if let Some(list) = model.slide_list.as_mut() {
                list.down(count);
            }
        }
        Message::SlideListSelect => {
            if let Some(list) = model.slide_list.take() {
                jump_to(&mut model, list.selected());
            }
        }
        Message::SlideListClick(index) => {
            let count = model.deck.len();
            if let Some(mut list) = model.slide_list
                && list.select(index, count)
            {
                model.slide_list = None;
                jump_to(&mut model, list.selected());
            }
        }
        Message::CloseSlideList => model.slide_list = None,

        // Help
        Message::ToggleHelp => {
            model.help_visible = !model.help_visible;
            model.help_scroll_offset = 0;
        }
        Message::HideHelp => model.help_visible = false,
        Message::HelpScrollUp => {
            model.help_scroll_offset = model.help_scroll_offset.saturating_sub(1);
        }
        Message::HelpScrollDown => {
            model.help_scroll_offset = model.help_scroll_offset.saturating_add(1);
        }

        Message::ToggleWatch => model.watch_enabled = !model.watch_enabled,
        // FileChanged/ForceReload: handled in effects (reads the file)
        // Redraw: no state change needed
        Message::FileChanged | Message::ForceReload | Message::Redraw => {}

        Message::Resize(width, height) => {
            model.set_terminal_size(width, height);
            model.reflow_layout();
        }
        Message::Quit => model.should_quit = true,
    }

    after_transition(&mut model, current_before);
    model
}

/// Jump to `index`: switch slides while presenting, scroll the screen view
/// otherwise.
fn jump_to(model: &mut Model, index: usize) {
    if model.controller.is_presenting() {
        model.controller.goto_slide(index);
    } else {
        model.scroll_to_slide(index);
    }
}

/// Follow-up work when a message started or ended the presentation.
fn after_transition(model: &mut Model, before: Option<usize>) {
    match (before, model.controller.current()) {
        (None, Some(_)) => {
            model.navigation.pin(Instant::now());
            model.slide_list = None;
            model.goto_box = None;
        }
        (Some(last), None) => {
            model.navigation.hide();
            model.slide_list = None;
            model.goto_box = None;
            model.scroll_to_slide(last);
        }
        _ => {}
    }
}

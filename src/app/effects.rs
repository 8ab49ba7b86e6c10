use std::io::{Write, stdout};

use crossterm::execute;
use crossterm::terminal::SetTitle;

use crate::app::{App, Message, Model, ToastLevel};
use crate::presentation::fragment::window_title;
use crate::watcher::{DEFAULT_DEBOUNCE, DeckWatcher};

impl App {
    pub(super) fn make_deck_watcher(model: &Model) -> notify::Result<DeckWatcher> {
        DeckWatcher::new(&model.file_path, DEFAULT_DEBOUNCE)
    }

    /// Side effects that need the file system after `update` ran.
    pub(super) fn handle_message_side_effects(
        model: &mut Model,
        deck_watcher: &mut Option<DeckWatcher>,
        msg: &Message,
    ) {
        match msg {
            Message::ToggleWatch => {
                if model.watch_enabled {
                    match Self::make_deck_watcher(model) {
                        Ok(watcher) => {
                            *deck_watcher = Some(watcher);
                            model.show_toast(ToastLevel::Info, "Watching deck for changes");
                        }
                        Err(err) => {
                            model.watch_enabled = false;
                            *deck_watcher = None;
                            model.show_toast(
                                ToastLevel::Warning,
                                format!("Watch unavailable: {err}"),
                            );
                            tracing::warn!(path = %model.file_path.display(), error = %err, "watcher failed");
                        }
                    }
                } else {
                    *deck_watcher = None;
                    model.show_toast(ToastLevel::Info, "Watch disabled");
                }
            }
            Message::ForceReload | Message::FileChanged => {
                if let Err(err) = model.reload_from_disk() {
                    model.show_toast(ToastLevel::Error, format!("Reload failed: {err}"));
                    tracing::warn!(error = %err, "reload failed");
                } else if matches!(msg, Message::ForceReload) {
                    model.show_toast(
                        ToastLevel::Info,
                        format!("Reloaded {} slides", model.deck.len()),
                    );
                }
            }
            _ => {}
        }
    }
}

/// Keeps the terminal window title in step with the current slide.
pub(super) struct TitleSync {
    last: Option<String>,
}

impl TitleSync {
    pub(super) const fn new() -> Self {
        Self { last: None }
    }

    /// Title the model wants, or `None` when it is already shown.
    pub(super) fn pending(&self, model: &Model) -> Option<String> {
        if !model.platform.window_title {
            return None;
        }
        let title = window_title(&model.display_name(), model.controller.current());
        (self.last.as_deref() != Some(title.as_str())).then_some(title)
    }

    pub(super) fn sync(&mut self, model: &Model) -> std::io::Result<()> {
        self.sync_to(model, &mut stdout())
    }

    /// Write the pending title to `out`. A failed write is not retried
    /// until the title changes again.
    pub(super) fn sync_to<W: Write>(
        &mut self,
        model: &Model,
        out: &mut W,
    ) -> std::io::Result<()> {
        let Some(title) = self.pending(model) else {
            return Ok(());
        };
        let result = execute!(out, SetTitle(&title));
        tracing::trace!(%title, ok = result.is_ok(), "window title");
        self.last = Some(title);
        result
    }
}

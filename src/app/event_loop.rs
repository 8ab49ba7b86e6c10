use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::app::{App, Message, Model, ToastLevel, update};
use crate::deck::Deck;
use crate::watcher::DeckWatcher;

use super::effects::TitleSync;

const RESIZE_DEBOUNCE: Duration = Duration::from_millis(100);
const IDLE_POLL: Duration = Duration::from_millis(250);
const BUSY_POLL: Duration = Duration::from_millis(10);

/// Holds the latest terminal size until resizing settles.
pub(super) struct ResizeDebouncer {
    delay: Duration,
    pending: Option<(u16, u16, Instant)>,
}

impl ResizeDebouncer {
    pub(super) const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub(super) const fn queue(&mut self, width: u16, height: u16, now: Instant) {
        self.pending = Some((width, height, now));
    }

    pub(super) fn take_ready(&mut self, now: Instant) -> Option<(u16, u16)> {
        let (width, height, queued_at) = self.pending?;
        if now.saturating_duration_since(queued_at) >= self.delay {
            self.pending = None;
            Some((width, height))
        } else {
            None
        }
    }

    pub(super) const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl App {
    /// Load the deck and run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck cannot be read, the terminal cannot be
    /// initialized, or the event loop hits an I/O failure.
    pub fn run(&mut self) -> Result<()> {
        let deck = Deck::load(&self.file_path)
            .with_context(|| format!("Failed to load deck {}", self.file_path.display()))?;
        tracing::info!(
            path = %self.file_path.display(),
            slides = deck.len(),
            title = deck.title().unwrap_or_default(),
            "deck loaded"
        );

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal; hpk requires an interactive terminal")?;
        let size = terminal.size()?;
        let mut model = self.initial_model(deck, (size.width, size.height));

        let result = Self::event_loop(&mut terminal, &mut model);

        if model.platform.mouse {
            let _ = execute!(stdout(), DisableMouseCapture);
        }
        ratatui::restore();

        result
    }

    /// Model for a freshly loaded deck, with the start fragment applied.
    pub(super) fn initial_model(&self, deck: Deck, size: (u16, u16)) -> Model {
        let mut model = Model::new(self.file_path.clone(), deck, size)
            .with_policy(self.policy)
            .with_navigation(self.navigation.clone())
            .with_platform(self.platform);
        model.watch_enabled = self.watch_enabled;
        model
            .config_global_path
            .clone_from(&self.config_global_path);
        model.config_local_path.clone_from(&self.config_local_path);

        if let Some(fragment) = self.start_fragment.as_deref() {
            match crate::presentation::fragment::slide_from_fragment(fragment, model.deck.len()) {
                Some(index) => model = update(model, Message::BeginAt(index)),
                None => {
                    tracing::warn!(fragment, slides = model.deck.len(), "start slide out of range");
                    model.show_toast(
                        ToastLevel::Warning,
                        format!("No slide {fragment} in this deck"),
                    );
                }
            }
        }
        model
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut resize_debouncer = ResizeDebouncer::new(RESIZE_DEBOUNCE);
        let mut deck_watcher = if model.watch_enabled {
            match Self::make_deck_watcher(model) {
                Ok(watcher) => Some(watcher),
                Err(err) => {
                    model.watch_enabled = false;
                    model.show_toast(ToastLevel::Warning, format!("Watch unavailable: {err}"));
                    tracing::warn!(path = %model.file_path.display(), error = %err, "watcher failed");
                    None
                }
            }
        } else {
            None
        };
        let mut title = TitleSync::new();
        let mut needs_render = true;

        if model.platform.mouse {
            // Includes any-event motion reporting, which the navigation bar
            // needs to see plain pointer movement.
            execute!(stdout(), EnableMouseCapture)?;
        }

        loop {
            let now = Instant::now();

            if model.expire_toast(now) {
                needs_render = true;
            }

            // The hide deadline is the navigation bar's timer.
            if model.navigation.next_wakeup(now) == Some(Duration::ZERO) {
                *model = update(std::mem::take(model), Message::Tick(now));
                needs_render = true;
            }

            if let Some((width, height)) = resize_debouncer.take_ready(now) {
                tracing::trace!(width, height, "resize applied");
                *model = update(std::mem::take(model), Message::Resize(width, height));
                needs_render = true;
            }

            if model.watch_enabled
                && deck_watcher
                    .as_mut()
                    .is_some_and(|watcher| watcher.take_change_ready(now))
            {
                Self::dispatch(model, &mut deck_watcher, Message::FileChanged);
                needs_render = true;
            }

            let poll = if needs_render {
                Duration::ZERO
            } else if resize_debouncer.is_pending() {
                BUSY_POLL
            } else {
                model
                    .navigation
                    .next_wakeup(now)
                    .map_or(IDLE_POLL, |wakeup| wakeup.min(IDLE_POLL))
            };
            if event::poll(poll)? {
                let msg = Self::handle_event(
                    &event::read()?,
                    model,
                    Instant::now(),
                    &mut resize_debouncer,
                );
                if let Some(msg) = msg {
                    Self::dispatch(model, &mut deck_watcher, msg);
                    needs_render = true;
                }

                // Coalesce key repeat bursts into a single render.
                while event::poll(Duration::ZERO)? {
                    let msg = Self::handle_event(
                        &event::read()?,
                        model,
                        Instant::now(),
                        &mut resize_debouncer,
                    );
                    if let Some(msg) = msg {
                        Self::dispatch(model, &mut deck_watcher, msg);
                        needs_render = true;
                    }
                }
            }

            if let Err(err) = title.sync(model) {
                tracing::warn!(error = %err, "window title update failed");
            }

            if needs_render {
                terminal.draw(|frame| Self::view(model, frame))?;
                needs_render = false;
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }

    /// Run `msg` through `update`, then its side effects.
    fn dispatch(model: &mut Model, deck_watcher: &mut Option<DeckWatcher>, msg: Message) {
        tracing::trace!(?msg, "message");
        let side_msg = msg.clone();
        *model = update(std::mem::take(model), msg);
        Self::handle_message_side_effects(model, deck_watcher, &side_msg);
    }
}

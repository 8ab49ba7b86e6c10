//! Live reload of the deck file.
//!
//! `notify` reports changes on its own thread; events are drained from an
//! `mpsc` channel on the event loop and debounced so an editor's
//! write-rename-chmod burst triggers a single reload.
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};

/// Quiet period after the last change before a reload is signalled.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

/// Watches one deck file.
///
/// The parent directory is watched rather than the file itself, so decks
/// saved by replacing the file keep being tracked.
pub struct DeckWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
    watch_root: PathBuf,
    target_path: PathBuf,
    target_name: Option<OsString>,
    debounce: Debounce,
}

impl DeckWatcher {
    /// Start watching `path`.
    ///
    /// # Errors
    /// Returns an error if the platform watcher cannot be created or the
    /// directory cannot be watched.
    pub fn new(path: impl AsRef<Path>, debounce: Duration) -> notify::Result<Self> {
        // Event paths from the OS are canonical.
        let target_path = path
            .as_ref()
            .canonicalize()
            .unwrap_or_else(|_| path.as_ref().to_path_buf());
        let target_name = target_path.file_name().map(std::ffi::OsStr::to_os_string);
        let watch_root = watch_root_for(&target_path);

        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res| {
            let _ = tx.send(res);
        })?;
        watcher.watch(&watch_root, RecursiveMode::NonRecursive)?;
        tracing::debug!(root = %watch_root.display(), target = %target_path.display(), "watching deck");

        Ok(Self {
            _watcher: watcher,
            rx,
            watch_root,
            target_path,
            target_name,
            debounce: Debounce::new(debounce),
        })
    }

    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    /// Drain pending events; true once a debounced change is ready.
    pub fn take_change_ready(&mut self, now: Instant) -> bool {
        let mut relevant = 0u32;
        let mut ignored = 0u32;
        while let Ok(event) = self.rx.try_recv() {
            match event {
                Ok(ev) if self.is_relevant(&ev) => relevant += 1,
                Ok(_) => ignored += 1,
                Err(err) => tracing::warn!(error = %err, "watcher error"),
            }
        }
        if relevant + ignored > 0 {
            tracing::trace!(relevant, ignored, "watcher events");
        }
        if relevant > 0 {
            self.debounce.touch(now);
        }
        self.debounce.take_ready(now)
    }

    fn is_relevant(&self, event: &Event) -> bool {
        event.paths.iter().any(|path| {
            path == &self.watch_root
                || path == &self.target_path
                || self
                    .target_name
                    .as_ref()
                    .is_some_and(|name| path.file_name().is_some_and(|f| f == name))
        })
    }
}

/// Fires once, `delay` after the most recent touch.
#[derive(Debug, Clone, Copy)]
struct Debounce {
    delay: Duration,
    pending_since: Option<Instant>,
}

impl Debounce {
    const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending_since: None,
        }
    }

    const fn touch(&mut self, now: Instant) {
        self.pending_since = Some(now);
    }

    fn take_ready(&mut self, now: Instant) -> bool {
        match self.pending_since {
            Some(since) if now.saturating_duration_since(since) >= self.delay => {
                self.pending_since = None;
                true
            }
            _ => false,
        }
    }
}

fn watch_root_for(path: &Path) -> PathBuf {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

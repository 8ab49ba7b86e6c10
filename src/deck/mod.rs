//! HTML slide deck loading.
//!
//! This module handles:
//! - Reading the deck file from disk
//! - Extracting slides from the `.presentation` container
//! - Laying the deck out for the scrollable screen view

mod parser;
mod types;

use std::path::{Path, PathBuf};

pub use parser::{decode_entities, parse};
pub use types::{
    Deck, LineKind, RenderedLine, ScreenLayout, Slide, SlideLine, hard_split, wrap_words,
};

/// Errors raised while loading a deck from disk.
#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not valid UTF-8", .path.display())]
    InvalidUtf8 { path: PathBuf },
}

impl Deck {
    /// Read and parse a deck file.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Io`] if the file cannot be read and
    /// [`DeckError::InvalidUtf8`] if it is not UTF-8 text.
    pub fn load(path: &Path) -> Result<Self, DeckError> {
        let bytes = std::fs::read(path).map_err(|source| DeckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(path, bytes)
    }

    /// Parse raw file contents read from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvalidUtf8`] if `bytes` are not UTF-8.
    pub fn from_bytes(path: &Path, bytes: Vec<u8>) -> Result<Self, DeckError> {
        let html = String::from_utf8(bytes).map_err(|_| DeckError::InvalidUtf8 {
            path: path.to_path_buf(),
        })?;
        let html = html.strip_prefix('\u{feff}').unwrap_or(&html);
        let deck = parse(html);
        tracing::debug!(path = %path.display(), slides = deck.len(), "deck parsed");
        Ok(deck)
    }
}

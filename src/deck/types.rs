//! Core deck types.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Kind of a rendered slide line, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Heading with level 1-6
    Heading(u8),
    /// Plain paragraph text
    Text,
    /// List item (rendered with a bullet)
    Bullet,
    /// Preformatted text, whitespace preserved
    Code,
    /// Block quote text
    Quote,
    /// Empty separator line
    Blank,
    /// Slide separator shown in the screen layout
    SlideHeader,
}

/// One block-level line of slide content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideLine {
    kind: LineKind,
    text: String,
}

impl SlideLine {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub const fn blank() -> Self {
        Self {
            kind: LineKind::Blank,
            text: String::new(),
        }
    }

    pub const fn kind(&self) -> LineKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A single slide of the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    index: usize,
    title: String,
    lines: Vec<SlideLine>,
}

impl Slide {
    pub(super) fn new(index: usize, title: Option<String>, lines: Vec<SlideLine>) -> Self {
        let title = title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| format!("Slide {}", index + 1));
        Self {
            index,
            title,
            lines,
        }
    }

    /// Position of the slide in the deck (0-based).
    pub const fn index(&self) -> usize {
        self.index
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn lines(&self) -> &[SlideLine] {
        &self.lines
    }

    /// Wrap the slide body to `width` columns.
    pub fn wrapped_lines(&self, width: usize) -> Vec<SlideLine> {
        let mut out = Vec::new();
        for line in &self.lines {
            match line.kind {
                LineKind::Blank => out.push(SlideLine::blank()),
                LineKind::Code => {
                    for chunk in hard_split(&line.text, width) {
                        out.push(SlideLine::new(LineKind::Code, chunk));
                    }
                }
                LineKind::Bullet => {
                    for chunk in wrap_words(&line.text, width, "\u{2022} ", "  ") {
                        out.push(SlideLine::new(LineKind::Bullet, chunk));
                    }
                }
                LineKind::Quote => {
                    for chunk in wrap_words(&line.text, width, "\u{2502} ", "\u{2502} ") {
                        out.push(SlideLine::new(LineKind::Quote, chunk));
                    }
                }
                kind => {
                    for chunk in wrap_words(&line.text, width, "", "") {
                        out.push(SlideLine::new(kind, chunk));
                    }
                }
            }
        }
        out
    }
}

/// An ordered collection of slides, derived once from an HTML document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    title: Option<String>,
    slides: Vec<Slide>,
}

impl Deck {
    /// Create an empty deck.
    pub const fn empty() -> Self {
        Self {
            title: None,
            slides: Vec::new(),
        }
    }

    pub(super) const fn from_parts(title: Option<String>, slides: Vec<Slide>) -> Self {
        Self { title, slides }
    }

    /// Document title (`<title>`), when the HTML declares one.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub const fn len(&self) -> usize {
        self.slides.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Lay out every slide one after another, as shown in screen mode.
    pub fn screen_layout(&self, width: u16) -> ScreenLayout {
        let width = usize::from(width).max(1);
        let mut lines = Vec::new();
        let mut anchors = Vec::with_capacity(self.slides.len());
        for slide in &self.slides {
            anchors.push(lines.len());
            lines.push(RenderedLine {
                kind: LineKind::SlideHeader,
                text: slide_header(slide, width),
                slide: slide.index,
            });
            lines.push(RenderedLine::blank(slide.index));
            for line in slide.wrapped_lines(width) {
                lines.push(RenderedLine {
                    kind: line.kind,
                    text: line.text,
                    slide: slide.index,
                });
            }
            lines.push(RenderedLine::blank(slide.index));
        }
        ScreenLayout { lines, anchors }
    }
}

/// A line in the screen layout, tagged with the slide it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    kind: LineKind,
    text: String,
    slide: usize,
}

impl RenderedLine {
    const fn blank(slide: usize) -> Self {
        Self {
            kind: LineKind::Blank,
            text: String::new(),
            slide,
        }
    }

    pub const fn kind(&self) -> LineKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn slide(&self) -> usize {
        self.slide
    }
}

/// The whole deck wrapped to a terminal width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    lines: Vec<RenderedLine>,
    anchors: Vec<usize>,
}

impl ScreenLayout {
    pub fn lines(&self) -> &[RenderedLine] {
        &self.lines
    }

    pub const fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// First layout line of a slide.
    pub fn anchor(&self, slide: usize) -> Option<usize> {
        self.anchors.get(slide).copied()
    }

    /// Slide that owns the given layout line.
    pub fn slide_at_line(&self, line: usize) -> Option<usize> {
        self.lines.get(line).map(RenderedLine::slide)
    }
}

fn slide_header(slide: &Slide, width: usize) -> String {
    let label = format!("\u{2500}\u{2500} {}. {} ", slide.index + 1, slide.title);
    let used = label.width();
    if used >= width {
        return truncate_to_width(&label, width);
    }
    format!("{label}{}", "\u{2500}".repeat(width - used))
}

/// Word-wrap `text` to `width` display columns.
///
/// Words wider than a full line are split at character boundaries.
pub fn wrap_words(text: &str, width: usize, first_prefix: &str, next_prefix: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = first_prefix.to_string();
    let mut current_width = first_prefix.width();
    let mut has_word = false;

    for word in text.split_whitespace() {
        let word_width = word.width();
        let needed = if has_word { word_width + 1 } else { word_width };
        if has_word && current_width + needed > width {
            lines.push(std::mem::take(&mut current));
            current.push_str(next_prefix);
            current_width = next_prefix.width();
            has_word = false;
        }
        let room = width.saturating_sub(current_width).max(1);
        if !has_word && word_width > room {
            let mut pieces = hard_split(word, room).into_iter().peekable();
            while let Some(piece) = pieces.next() {
                current.push_str(&piece);
                current_width += piece.width();
                if pieces.peek().is_some() {
                    lines.push(std::mem::take(&mut current));
                    current.push_str(next_prefix);
                    current_width = next_prefix.width();
                }
            }
            has_word = true;
            continue;
        }
        if has_word {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
        has_word = true;
    }
    if has_word || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Split `text` into chunks of at most `width` display columns.
pub fn hard_split(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if current_width + w > width && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(ch);
        current_width += w;
    }
    if !current.is_empty() || chunks.is_empty() {
        chunks.push(current);
    }
    chunks
}

fn truncate_to_width(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out
}

//! HTML slide extraction.
//!
//! The deck lives in the first element with class `presentation`; each
//! descendant element with class `slide` becomes one slide. Everything
//! outside the container is ignored except `<title>`.

use std::sync::LazyLock;

use regex::Regex;

use super::types::{Deck, LineKind, Slide, SlideLine};

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<!--.*?-->|<!(?:[^>])*>|<(/?)([A-Za-z][A-Za-z0-9]*)((?:[^>"']|"[^"]*"|'[^']*')*)>"#)
        .expect("tag pattern is valid")
});

static ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([^\s"'=/>]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>/]+)))?"#)
        .expect("attribute pattern is valid")
});

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

const BLOCK_ELEMENTS: &[&str] = &[
    "p", "div", "section", "article", "header", "footer", "ul", "ol", "table", "tr", "dl", "dt",
    "dd", "figure", "figcaption", "hr",
];

/// Parse an HTML document into a deck.
///
/// # Example
///
/// ```
/// use hpk::deck::Deck;
///
/// let deck = Deck::parse(
///     r#"<div class="presentation"><div class="slide"><h1>Hi</h1></div></div>"#,
/// );
/// assert_eq!(deck.len(), 1);
/// assert_eq!(deck.slides()[0].title(), "Hi");
/// ```
impl Deck {
    pub fn parse(html: &str) -> Self {
        parse(html)
    }
}

/// Parse an HTML document into a deck.
pub fn parse(html: &str) -> Deck {
    let mut scanner = Scanner::default();
    let mut last = 0;
    for caps in TAG_RE.captures_iter(html) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > last {
            scanner.text(&html[last..whole.start()]);
        }
        last = whole.end();
        let Some(name) = caps.get(2) else {
            // comment or doctype
            continue;
        };
        let name = name.as_str().to_ascii_lowercase();
        let attrs = caps.get(3).map_or("", |m| m.as_str());
        if caps.get(1).is_some_and(|m| !m.as_str().is_empty()) {
            scanner.close(&name);
        } else {
            scanner.open(&name, attrs);
        }
        if scanner.done {
            break;
        }
    }
    if !scanner.done && last < html.len() {
        scanner.text(&html[last..]);
    }
    scanner.finish()
}

#[derive(Default)]
struct Scanner {
    /// Open element names
    stack: Vec<String>,
    /// Stack position of the presentation container
    container: Option<usize>,
    /// Stack position and builder of the slide being collected
    slide: Option<(usize, SlideBuilder)>,
    /// Raw-text element (`script`/`style`) being skipped
    skipping: Option<String>,
    in_title: bool,
    title: String,
    slides: Vec<Slide>,
    done: bool,
}

impl Scanner {
    fn open(&mut self, name: &str, attrs: &str) {
        if self.skipping.is_some() {
            return;
        }
        if name == "script" || name == "style" {
            if !attrs.trim_end().ends_with('/') {
                self.skipping = Some(name.to_string());
            }
            return;
        }
        if name == "title" && self.container.is_none() {
            self.in_title = true;
        }

        let self_closing = attrs.trim_end().ends_with('/') || VOID_ELEMENTS.contains(&name);

        if let Some((_, builder)) = self.slide.as_mut() {
            builder.open(name);
        }

        if self_closing {
            return;
        }
        self.stack.push(name.to_string());
        let position = self.stack.len() - 1;

        if self.container.is_none() {
            if has_class(attrs, "presentation") {
                self.container = Some(position);
            }
        } else if self.slide.is_none() && has_class(attrs, "slide") {
            self.slide = Some((position, SlideBuilder::default()));
        }
    }

    fn close(&mut self, name: &str) {
        if let Some(skipped) = &self.skipping {
            if skipped == name {
                self.skipping = None;
            }
            return;
        }
        if name == "title" {
            self.in_title = false;
        }
        let Some(position) = self.stack.iter().rposition(|open| open == name) else {
            return;
        };
        while self.stack.len() > position {
            let Some(open) = self.stack.pop() else { break };
            let depth = self.stack.len();
            if let Some((_, builder)) = self.slide.as_mut() {
                builder.close(&open);
            }
            if self.slide.as_ref().is_some_and(|(at, _)| *at == depth) {
                self.finish_slide();
            }
            if self.container == Some(depth) {
                self.done = true;
            }
        }
    }

    fn text(&mut self, raw: &str) {
        if self.skipping.is_some() {
            return;
        }
        if self.in_title {
            self.title.push_str(raw);
        }
        if let Some((_, builder)) = self.slide.as_mut() {
            builder.text(raw);
        }
    }

    fn finish_slide(&mut self) {
        if let Some((_, builder)) = self.slide.take() {
            let index = self.slides.len();
            self.slides.push(builder.build(index));
        }
    }

    fn finish(mut self) -> Deck {
        self.finish_slide();
        let title = collapse_whitespace(&decode_entities(&self.title));
        let title = if title.is_empty() { None } else { Some(title) };
        Deck::from_parts(title, self.slides)
    }
}

#[derive(Default)]
struct SlideBuilder {
    lines: Vec<SlideLine>,
    buffer: String,
    heading: Option<u8>,
    title: Option<String>,
    list_item: bool,
    pre_depth: usize,
    quote_depth: usize,
}

impl SlideBuilder {
    fn open(&mut self, name: &str) {
        match name {
            "br" => {
                if self.pre_depth > 0 {
                    self.buffer.push('\n');
                } else {
                    self.flush();
                }
            }
            "pre" => {
                self.flush();
                self.pre_depth += 1;
            }
            "li" => {
                self.flush();
                self.list_item = true;
            }
            "blockquote" => {
                self.flush();
                self.quote_depth += 1;
            }
            "td" | "th" => {
                if !self.buffer.trim().is_empty() {
                    self.buffer.push_str(" | ");
                }
            }
            _ => {
                if let Some(level) = heading_level(name) {
                    self.flush();
                    self.heading = Some(level);
                } else if BLOCK_ELEMENTS.contains(&name) {
                    self.flush();
                }
            }
        }
    }

    fn close(&mut self, name: &str) {
        match name {
            "pre" => {
                self.flush_code();
                self.pre_depth = self.pre_depth.saturating_sub(1);
            }
            "li" => {
                self.flush();
                self.list_item = false;
            }
            "blockquote" => {
                self.flush();
                self.quote_depth = self.quote_depth.saturating_sub(1);
            }
            _ => {
                if heading_level(name).is_some() {
                    self.flush();
                    self.heading = None;
                } else if BLOCK_ELEMENTS.contains(&name) {
                    self.flush();
                }
            }
        }
    }

    fn text(&mut self, raw: &str) {
        self.buffer.push_str(raw);
    }

    fn flush(&mut self) {
        if self.pre_depth > 0 {
            return;
        }
        let text = decode_entities(&collapse_whitespace(&self.buffer));
        self.buffer.clear();
        if text.is_empty() {
            return;
        }
        let kind = if let Some(level) = self.heading {
            if self.title.is_none() {
                self.title = Some(text.clone());
            }
            LineKind::Heading(level)
        } else if self.list_item {
            LineKind::Bullet
        } else if self.quote_depth > 0 {
            LineKind::Quote
        } else {
            LineKind::Text
        };
        self.push(SlideLine::new(kind, text));
    }

    fn flush_code(&mut self) {
        let buffer = std::mem::take(&mut self.buffer);
        let raw = buffer
            .strip_prefix("\r\n")
            .or_else(|| buffer.strip_prefix('\n'))
            .unwrap_or(&buffer)
            .trim_end_matches(['\n', '\r', ' ', '\t']);
        if raw.is_empty() {
            return;
        }
        // a new <pre> block never merges into the previous one
        if self.lines.last().is_some_and(|l| l.kind() == LineKind::Code) {
            self.lines.push(SlideLine::blank());
        }
        for line in raw.lines() {
            self.push(SlideLine::new(LineKind::Code, decode_entities(line)));
        }
    }

    /// Append a line, separating blocks with a blank line.
    ///
    /// Consecutive list items and code lines stay together.
    fn push(&mut self, line: SlideLine) {
        if let Some(last) = self.lines.last() {
            let grouped = last.kind() == line.kind()
                && matches!(line.kind(), LineKind::Bullet | LineKind::Code);
            if !grouped && last.kind() != LineKind::Blank {
                self.lines.push(SlideLine::blank());
            }
        }
        self.lines.push(line);
    }

    fn build(mut self, index: usize) -> Slide {
        if self.pre_depth > 0 {
            self.flush_code();
            self.pre_depth = 0;
        }
        self.flush();
        Slide::new(index, self.title, self.lines)
    }
}

fn heading_level(name: &str) -> Option<u8> {
    let digit = name.strip_prefix('h')?;
    match digit {
        "1" => Some(1),
        "2" => Some(2),
        "3" => Some(3),
        "4" => Some(4),
        "5" => Some(5),
        "6" => Some(6),
        _ => None,
    }
}

fn has_class(attrs: &str, class: &str) -> bool {
    ATTR_RE.captures_iter(attrs).any(|caps| {
        caps[1].eq_ignore_ascii_case("class")
            && caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .is_some_and(|m| m.as_str().split_whitespace().any(|c| c == class))
    })
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decode the HTML character references used in hand-written slides.
pub fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        // Entity names are ASCII, so the `;` is searched bytewise.
        let decoded = tail
            .bytes()
            .take(12)
            .skip(1)
            .position(|b| b == b';')
            .and_then(|semi| decode_entity(&tail[1..=semi]).map(|ch| (ch, semi + 2)));
        match decoded {
            Some((ch, consumed)) => {
                out.push(ch);
                rest = &tail[consumed..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" | "#39" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        "mdash" => Some('\u{2014}'),
        "ndash" => Some('\u{2013}'),
        "hellip" => Some('\u{2026}'),
        "copy" => Some('\u{a9}'),
        _ => {
            let number = name.strip_prefix('#')?;
            let code = if let Some(hex) = number.strip_prefix(['x', 'X']) {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                number.parse::<u32>().ok()?
            };
            char::from_u32(code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(body: &str) -> Deck {
        parse(&format!(
            "<html><head><title>Talk</title></head><body><div class=\"presentation\">{body}</div></body></html>"
        ))
    }

    #[test]
    fn test_parse_empty_document() {
        let deck = parse("");
        assert!(deck.is_empty());
        assert_eq!(deck.title(), None);
    }

    #[test]
    fn test_parse_without_container_yields_empty_deck() {
        let deck = parse("<div class=\"slide\"><h1>Lost</h1></div>");
        assert!(deck.is_empty());
    }

    #[test]
    fn test_parse_collects_slides_in_order() {
        let deck = deck(
            "<div class=\"slide\"><h1>One</h1></div>\
             <div class=\"slide\"><h1>Two</h1></div>\
             <div class=\"slide\"><h2>Three</h2></div>",
        );
        let titles: Vec<_> = deck.slides().iter().map(Slide::title).collect();
        assert_eq!(titles, vec!["One", "Two", "Three"]);
        assert_eq!(deck.slides()[2].index(), 2);
        assert_eq!(deck.title(), Some("Talk"));
    }

    #[test]
    fn test_parse_accepts_multiple_classes_and_single_quotes() {
        let deck = deck("<section class='slide intro'><p>Hi</p></section>");
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn test_parse_ignores_slides_outside_container() {
        let deck = parse(
            "<div class=\"slide\"><h1>Before</h1></div>\
             <div class=\"presentation\"><div class=\"slide\"><h1>In</h1></div></div>\
             <div class=\"slide\"><h1>After</h1></div>",
        );
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.slides()[0].title(), "In");
    }

    #[test]
    fn test_parse_nested_slide_is_content() {
        let deck = deck(
            "<div class=\"slide\"><h1>Outer</h1><div class=\"slide\"><p>inner</p></div></div>",
        );
        assert_eq!(deck.len(), 1);
        assert!(deck.slides()[0].lines().iter().any(|l| l.text() == "inner"));
    }

    #[test]
    fn test_parse_block_structure() {
        let deck = deck(
            "<div class=\"slide\">\
               <h1>Title</h1>\
               <p>First   paragraph\n text.</p>\
               <ul><li>alpha</li><li>beta</li></ul>\
               <pre>fn main() {\n    run();\n}</pre>\
             </div>",
        );
        let lines = deck.slides()[0].lines();
        let kinds: Vec<_> = lines.iter().map(SlideLine::kind).collect();
        assert_eq!(
            kinds,
            vec![
                LineKind::Heading(1),
                LineKind::Blank,
                LineKind::Text,
                LineKind::Blank,
                LineKind::Bullet,
                LineKind::Bullet,
                LineKind::Blank,
                LineKind::Code,
                LineKind::Code,
                LineKind::Code,
            ]
        );
        assert_eq!(lines[2].text(), "First paragraph text.");
        assert_eq!(lines[8].text(), "    run();");
    }

    #[test]
    fn test_parse_untitled_slide_uses_number() {
        let deck = deck("<div class=\"slide\"><p>no heading</p></div>");
        assert_eq!(deck.slides()[0].title(), "Slide 1");
    }

    #[test]
    fn test_parse_skips_script_and_comments() {
        let deck = deck(
            "<div class=\"slide\"><h1>A</h1><script>var x = '<div class=\"slide\">';</script>\
             <!-- <p>hidden</p> --><p>shown</p></div>",
        );
        assert_eq!(deck.len(), 1);
        let texts: Vec<_> = deck.slides()[0].lines().iter().map(SlideLine::text).collect();
        assert!(texts.contains(&"shown"));
        assert!(!texts.iter().any(|t| t.contains("hidden") || t.contains("var x")));
    }

    #[test]
    fn test_parse_unclosed_slide_is_finished_at_eof() {
        let deck = parse("<div class=\"presentation\"><div class=\"slide\"><h1>Open");
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.slides()[0].title(), "Open");
    }

    #[test]
    fn test_parse_inline_markup_is_flattened() {
        let deck = deck("<div class=\"slide\"><p>Use <b>bold</b> and <a href=\"#x\">links</a>.</p></div>");
        assert_eq!(deck.slides()[0].lines()[0].text(), "Use bold and links.");
    }

    #[test]
    fn test_parse_blockquote() {
        let deck = deck("<div class=\"slide\"><blockquote><p>Quoted</p></blockquote></div>");
        assert_eq!(deck.slides()[0].lines()[0].kind(), LineKind::Quote);
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(decode_entities("a &amp; b &lt;c&gt;"), "a & b <c>");
        assert_eq!(decode_entities("&#65;&#x42;&quot;"), "AB\"");
        assert_eq!(decode_entities("AT&T &unknown; &"), "AT&T &unknown; &");
    }

    #[test]
    fn test_decode_entities_before_multibyte_text() {
        assert_eq!(decode_entities("&lt;中文字"), "<中文字");
        assert_eq!(decode_entities("caf&eacute;&nbsp;été"), "caf&eacute;\u{a0}été");
        assert_eq!(decode_entities("&中文字文字;"), "&中文字文字;");
    }

    #[test]
    fn test_has_class_matches_whole_words() {
        assert!(has_class(r#" class="slide""#, "slide"));
        assert!(has_class(r#" id="x" class="big slide""#, "slide"));
        assert!(has_class(" class=slide", "slide"));
        assert!(!has_class(r#" class="slideshow""#, "slide"));
    }

    #[test]
    fn test_has_class_ignores_other_attributes() {
        assert!(!has_class(r#" data-class="slide""#, "slide"));
        assert!(!has_class(r#" title="class=slide""#, "slide"));
        assert!(!has_class(r#" subclass="slide""#, "slide"));
        assert!(has_class(r#" data-class="x" CLASS="slide""#, "slide"));
    }

    #[test]
    fn test_parse_ignores_data_class_slides() {
        let deck = deck(
            "<div class=\"slide\"><h1>Real</h1></div>\
             <div data-class=\"slide\"><h1>Fake</h1></div>",
        );
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.slides()[0].title(), "Real");
    }
}

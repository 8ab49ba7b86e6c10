use std::path::Path;

use hpk::deck::{Deck, DeckError, LineKind};
use hpk::presentation::{BoundaryPolicy, PresentationController};

fn fixture() -> Deck {
    Deck::load(Path::new("tests/fixtures/talk.html")).unwrap()
}

#[test]
fn test_fixture_slides_and_titles() {
    let deck = fixture();
    assert_eq!(deck.title(), Some("Terminal Slides & You"));
    let titles: Vec<&str> = deck.slides().iter().map(|s| s.title()).collect();
    assert_eq!(
        titles,
        ["Terminal Slides & You", "Agenda", "Code", "Slide 4", "Slide 5"]
    );
}

#[test]
fn test_fixture_block_content() {
    let deck = fixture();

    let agenda = deck.slide(1).unwrap();
    let bullets: Vec<&str> = agenda
        .lines()
        .iter()
        .filter(|l| l.kind() == LineKind::Bullet)
        .map(|l| l.text())
        .collect();
    assert_eq!(
        bullets,
        ["Why present from a terminal", "Keys <and> the mouse", "Live reload"]
    );

    let code = deck.slide(2).unwrap();
    let code_lines: Vec<&str> = code
        .lines()
        .iter()
        .filter(|l| l.kind() == LineKind::Code)
        .map(|l| l.text())
        .collect();
    assert_eq!(code_lines, ["fn main() {", "    println!(\"hello\");", "}"]);

    let quote = deck.slide(3).unwrap();
    assert_eq!(quote.lines()[0].kind(), LineKind::Quote);
    assert!(quote.lines().iter().any(|l| l.text() == "Line two"));

    assert!(deck.slide(4).unwrap().lines().is_empty());
}

#[test]
fn test_fixture_screen_layout_anchors() {
    let deck = fixture();
    let layout = deck.screen_layout(60);
    for index in 0..deck.len() {
        let anchor = layout.anchor(index).unwrap();
        assert_eq!(layout.lines()[anchor].kind(), LineKind::SlideHeader);
        assert_eq!(layout.slide_at_line(anchor), Some(index));
    }
    assert_eq!(layout.anchor(deck.len()), None);
}

#[test]
fn test_presenting_the_fixture_deck() {
    let deck = fixture();
    let mut controller = PresentationController::new(deck.len(), BoundaryPolicy::End);
    assert!(controller.begin());
    for _ in 1..deck.len() {
        assert!(controller.next());
    }
    assert!(controller.is_on_last_slide());
    assert!(controller.next());
    assert!(!controller.is_presenting());
    assert_eq!(controller.visible_count(), deck.len());
}

#[test]
fn test_missing_file_is_io_error() {
    let err = Deck::load(Path::new("tests/fixtures/missing.html")).unwrap_err();
    assert!(matches!(err, DeckError::Io { .. }));
    assert!(err.to_string().contains("missing.html"));
}

#[test]
fn test_binary_file_is_invalid_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deck.html");
    std::fs::write(&path, [0xff, 0xfe, 0x00, 0x3c]).unwrap();
    let err = Deck::load(&path).unwrap_err();
    assert!(matches!(err, DeckError::InvalidUtf8 { .. }));
}

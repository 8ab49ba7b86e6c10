//! Benchmarks for deck parsing and layout.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use hpk::deck::Deck;

fn large_deck(slides: usize) -> String {
    let mut html = String::from("<html><body><div class=\"presentation\">");
    for i in 0..slides {
        html.push_str(&format!(
            "<div class=\"slide\"><h2>Slide {i}</h2><p>Some <em>body</em> text &amp; more.</p>\
             <ul><li>first</li><li>second</li></ul><pre>let x = {i};\nlet y = x * 2;</pre></div>"
        ));
    }
    html.push_str("</div></body></html>");
    html
}

fn bench_parse_fixture(c: &mut Criterion) {
    let html = include_str!("../tests/fixtures/talk.html");
    c.bench_function("parse_fixture", |b| b.iter(|| Deck::parse(black_box(html))));
}

fn bench_parse_large(c: &mut Criterion) {
    let html = large_deck(500);
    c.bench_function("parse_500_slides", |b| {
        b.iter(|| Deck::parse(black_box(&html)))
    });
}

fn bench_screen_layout(c: &mut Criterion) {
    let deck = Deck::parse(&large_deck(500));
    c.bench_function("screen_layout_500_slides", |b| {
        b.iter(|| deck.screen_layout(black_box(78)))
    });
}

criterion_group!(benches, bench_parse_fixture, bench_parse_large, bench_screen_layout);
criterion_main!(benches);

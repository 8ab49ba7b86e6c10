//! `#<n>` slide fragments.
//!
//! Slides are numbered from 1 in fragments and from 0 everywhere else.

/// Fragment naming slide `index`.
pub fn fragment_for(index: usize) -> String {
    format!("#{}", index + 1)
}

/// Parse `#n` (or bare `n`) into a slide index within a deck of `count`.
pub fn slide_from_fragment(fragment: &str, count: usize) -> Option<usize> {
    let number = fragment.trim();
    let number = number.strip_prefix('#').unwrap_or(number);
    let n: usize = number.parse().ok()?;
    (1..=count).contains(&n).then(|| n - 1)
}

/// Split `deck.html#3` into the path part and the fragment.
///
/// Only a trailing `#<digits>` counts as a fragment, so file names that
/// contain `#` elsewhere are kept intact.
pub fn split_fragment(arg: &str) -> (&str, Option<&str>) {
    match arg.rfind('#') {
        Some(pos)
            if pos > 0
                && pos + 1 < arg.len()
                && arg[pos + 1..].bytes().all(|b| b.is_ascii_digit()) =>
        {
            (&arg[..pos], Some(&arg[pos..]))
        }
        _ => (arg, None),
    }
}

/// Window title for a deck, with the slide fragment while presenting.
pub fn window_title(name: &str, current: Option<usize>) -> String {
    match current {
        Some(index) => format!("{name}{}", fragment_for(index)),
        None => name.to_string(),
    }
}

// src/core/html.rs
// Thin query layer over `scraper`: select-by-class, read text, read attribute.

use scraper::{ElementRef, Selector};

/// Compile a selector literal. Only used with fixed selectors known to parse.
pub fn selector(css: &'static str) -> Selector {
    match Selector::parse(css) {
        Ok(sel) => sel,
        Err(e) => panic!("invalid built-in selector {css:?}: {e}"),
    }
}

/// Concatenated text of every match under `el`, exactly as in the markup.
pub fn text_of(el: ElementRef<'_>, sel: &Selector) -> String {
    el.select(sel).flat_map(|m| m.text()).collect()
}

/// The `attr` value of every match under `el`, in document order.
/// Matches without the attribute are skipped.
pub fn attrs_of<'a>(el: ElementRef<'a>, sel: &Selector, attr: &str) -> Vec<&'a str> {
    el.select(sel).filter_map(|m| m.value().attr(attr)).collect()
}

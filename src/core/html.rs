// src/core/html.rs
// DOM helpers over `scraper::Html`. Tag names come out of html5ever already
// lowercased, so comparisons here are plain `==`.

use scraper::{ElementRef, Html};

/// First `table` in document order (depth-first, pre-order), returned as the
/// node that holds its `tr` rows: the `tbody` html5ever inserts, or the table
/// itself when it has none.
pub fn locate_table(doc: &Html) -> Option<ElementRef<'_>> {
    let table = doc
        .tree
        .root()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "table")?;

    Some(
        child_elements(table)
            .find(|el| el.value().name() == "tbody")
            .unwrap_or(table),
    )
}

/// Direct element children, skipping text and comments.
pub fn child_elements<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    el.children().filter_map(ElementRef::wrap)
}

/// All text below `el`, concatenated and trimmed.
pub fn text_of(el: ElementRef<'_>) -> String {
    s!(el.text().collect::<String>().trim())
}

/// Text of the first element child (typically the `<a>` inside a cell).
pub fn link_text(el: ElementRef<'_>) -> Option<String> {
    child_elements(el).next().map(text_of)
}

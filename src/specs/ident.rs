// src/specs/ident.rs
//! Sensor identifier from the first cell of a reading row.
//!
//! The cell comes in a few shapes depending on whether the sensor has a
//! detail page: plain text (`<td>242</td>`), text next to markup, or text
//! wrapped in a link (`<td> <a href=…>242</a></td>`). Each shape is one
//! strategy; they are tried in `ID_SOURCES` order.

use scraper::ElementRef;

/// Markup leftovers that are never an identifier.
const PLACEHOLDER: &str = "a";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdSource {
    /// The cell's first child, when it is text.
    CellText,
    /// The node right after that first child, when it is text.
    SiblingText,
    /// The first child of that sibling, e.g. the label of a link.
    NestedLinkText,
}

pub const ID_SOURCES: [IdSource; 3] = [IdSource::CellText, IdSource::SiblingText, IdSource::NestedLinkText];

impl IdSource {
    pub fn resolve<'a>(self, cell: ElementRef<'a>) -> Option<&'a str> {
        let first = cell.first_child()?;
        let (node, allow_placeholder) = match self {
            IdSource::CellText => (first, true),
            IdSource::SiblingText => (first.next_sibling()?, false),
            IdSource::NestedLinkText => (first.next_sibling()?.first_child()?, false),
        };
        let text = node.value().as_text()?.trim();
        if text.is_empty() || (!allow_placeholder && text == PLACEHOLDER) {
            return None;
        }
        Some(text)
    }
}

/// First identifier any strategy finds; empty when none does.
pub fn resolve_id(cell: ElementRef<'_>) -> String {
    ID_SOURCES
        .iter()
        .find_map(|src| src.resolve(cell))
        .map(String::from)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::test_cells;
    use scraper::Html;

    fn cell_doc(inner: &str) -> Html {
        Html::parse_document(&format!("<table><tr><td>{inner}</td></tr></table>"))
    }

    #[test]
    fn plain_text_cell() {
        let doc = cell_doc(" 242 ");
        let cell = test_cells(&doc)[0];
        assert_eq!(IdSource::CellText.resolve(cell), Some("242"));
        assert_eq!(resolve_id(cell), "242");
    }

    #[test]
    fn text_after_markup() {
        let doc = cell_doc("<span></span> 17 ");
        let cell = test_cells(&doc)[0];
        assert_eq!(IdSource::CellText.resolve(cell), None);
        assert_eq!(IdSource::SiblingText.resolve(cell), Some("17"));
        assert_eq!(resolve_id(cell), "17");
    }

    #[test]
    fn link_after_whitespace() {
        let doc = cell_doc(r#" <a href="/sensor/242">242</a>"#);
        let cell = test_cells(&doc)[0];
        assert_eq!(IdSource::CellText.resolve(cell), None);
        assert_eq!(IdSource::SiblingText.resolve(cell), None);
        assert_eq!(IdSource::NestedLinkText.resolve(cell), Some("242"));
        assert_eq!(resolve_id(cell), "242");
    }

    #[test]
    fn placeholder_is_skipped_after_first_child() {
        let doc = cell_doc(r#"<span></span>a"#);
        let cell = test_cells(&doc)[0];
        assert_eq!(IdSource::SiblingText.resolve(cell), None);
        assert_eq!(resolve_id(cell), "");
    }

    #[test]
    fn nothing_usable_gives_empty_id() {
        let doc = cell_doc("");
        assert_eq!(resolve_id(test_cells(&doc)[0]), "");

        let doc = cell_doc("  <a href=\"/x\">  </a>");
        assert_eq!(resolve_id(test_cells(&doc)[0]), "");
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later
//! Read-only view of a parsed page.
//!
//! Wraps a `scraper::Html` tree and exposes the handful of lookups the rules
//! need: elements by selector, attributes, ids, text and ancestors. Parsing
//! never fails; malformed markup yields whatever tree html5ever recovers.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::model::truncate_snippet;

/// Parsed document handed to every rule
pub struct DocumentModel {
    html: Html,
}

impl DocumentModel {
    /// Parse raw markup into a best-effort tree
    pub fn parse(markup: &str) -> Self {
        let html = Html::parse_document(markup);
        if !html.errors.is_empty() {
            debug!("Recovered from {} parse error(s)", html.errors.len());
        }
        Self { html }
    }

    /// Parse raw bytes, replacing invalid UTF-8 sequences
    pub fn parse_bytes(bytes: &[u8]) -> Self {
        Self::parse(&String::from_utf8_lossy(bytes))
    }

    /// All elements matching a CSS selector, in document order.
    ///
    /// An unparsable selector matches nothing.
    pub fn select(&self, css: &str) -> Vec<ElementRef<'_>> {
        match Selector::parse(css) {
            Ok(selector) => self.html.select(&selector).collect(),
            Err(e) => {
                debug!("Ignoring invalid selector {:?}: {:?}", css, e);
                Vec::new()
            }
        }
    }

    /// First element matching a CSS selector
    pub fn first(&self, css: &str) -> Option<ElementRef<'_>> {
        Selector::parse(css)
            .ok()
            .and_then(|selector| self.html.select(&selector).next())
    }

    /// Whether any element matches a CSS selector
    pub fn exists(&self, css: &str) -> bool {
        self.first(css).is_some()
    }

    /// Count of elements matching a CSS selector
    pub fn count(&self, css: &str) -> usize {
        self.select(css).len()
    }

    /// The root `<html>` element
    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }

    /// Whether any element carries the given id
    pub fn has_id(&self, id: &str) -> bool {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .any(|el| el.value().id() == Some(id))
    }

    /// Whether a `<label for="...">` targets the given id
    pub fn has_label_for(&self, id: &str) -> bool {
        self.select("label[for]")
            .iter()
            .any(|label| label.value().attr("for") == Some(id))
    }
}

/// Concatenated text content of an element, trimmed
pub fn text_of(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Attribute value, `None` when absent
pub fn attr<'a>(element: &ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name)
}

/// Attribute value when present and non-blank
pub fn non_empty_attr<'a>(element: &ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name).filter(|v| !v.trim().is_empty())
}

/// Nearest ancestor element with the given tag name
pub fn nearest_ancestor<'a>(element: &ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| ancestor.value().name() == tag)
}

/// Outer markup of an element, truncated for use in a finding
pub fn snippet(element: &ElementRef<'_>) -> String {
    truncate_snippet(&element.html())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_and_count() {
        let doc = DocumentModel::parse("<html><body><h1>A</h1><h1>B</h1><p>c</p></body></html>");
        assert_eq!(doc.count("h1"), 2);
        assert!(doc.exists("p"));
        assert!(!doc.exists("table"));
    }

    #[test]
    fn test_invalid_selector_matches_nothing() {
        let doc = DocumentModel::parse("<p>x</p>");
        assert!(doc.select("p[[").is_empty());
        assert!(doc.first(":::").is_none());
    }

    #[test]
    fn test_malformed_markup_still_parses() {
        let doc = DocumentModel::parse("<div><p>unclosed <span>tags <img src=a.png><table><tr><td>cell");
        assert!(doc.exists("img"));
        assert!(doc.exists("td"));

        // A tag cut off by end of input is dropped
        let truncated = DocumentModel::parse("<p>text <img src=a.png");
        assert!(!truncated.exists("img"));
        assert!(truncated.exists("p"));
        assert_eq!(doc.root().value().name(), "html");
    }

    #[test]
    fn test_empty_input_yields_tree() {
        let doc = DocumentModel::parse("");
        assert_eq!(doc.root().value().name(), "html");
        assert_eq!(doc.count("img"), 0);
    }

    #[test]
    fn test_id_and_label_lookup() {
        let doc = DocumentModel::parse(
            r#"<html><body><label for="name">Name</label><input id="name"></body></html>"#,
        );
        assert!(doc.has_id("name"));
        assert!(!doc.has_id("email"));
        assert!(doc.has_label_for("name"));
    }

    #[test]
    fn test_nearest_ancestor_and_text() {
        let doc = DocumentModel::parse(
            r#"<html><body><a href="/"> Home <img src="h.png"></a></body></html>"#,
        );
        let img = doc.first("img").expect("img present");
        let link = nearest_ancestor(&img, "a").expect("wrapped in link");
        assert_eq!(text_of(&link), "Home");
        assert!(nearest_ancestor(&img, "label").is_none());
    }

    #[test]
    fn test_parse_bytes_lossy() {
        let doc = DocumentModel::parse_bytes(b"<title>Caf\xff</title>");
        let title = doc.first("title").expect("title present");
        assert!(text_of(&title).starts_with("Caf"));
    }
}

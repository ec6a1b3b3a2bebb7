// SPDX-License-Identifier: PMPL-1.0-or-later
//! Page title rule - WCAG 2.4.2 Page Titled (Level A)

use crate::document::{self, DocumentModel};
use crate::model::{criteria, Finding, Severity, WcagLevel};
use crate::rules::Rule;

/// Shortest title text (in characters, after trimming) considered descriptive
const MIN_TITLE_CHARS: usize = 3;

/// Page title rule
pub struct PageTitleRule;

impl Rule for PageTitleRule {
    fn name(&self) -> &str {
        "Page Title"
    }

    fn description(&self) -> &str {
        "Checks for a descriptive <title> (WCAG 2.4.2)"
    }

    fn evaluate(&self, document: &DocumentModel) -> Vec<Finding> {
        match document.first("title") {
            None => vec![Finding::new(
                &criteria::PAGE_TITLED,
                Severity::Critical,
                WcagLevel::A,
                "Page has no <title> element",
            )
            .with_element("<head>")
            .with_suggestion("Add a descriptive <title> inside <head>")
            .with_example("<head>\n  <title>Page name - Site name</title>\n</head>")],
            Some(title) if document::text_of(&title).chars().count() < MIN_TITLE_CHARS => {
                vec![Finding::new(
                    &criteria::PAGE_TITLED,
                    Severity::Serious,
                    WcagLevel::A,
                    "Page title is too short or empty",
                )
                .with_element(&document::snippet(&title))
                .with_suggestion("Provide a descriptive, meaningful title")
                .with_example("<title>Home - My Company</title>")]
            }
            Some(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str) -> Vec<Finding> {
        PageTitleRule.evaluate(&DocumentModel::parse(html))
    }

    #[test]
    fn test_missing_title() {
        let findings = run("<html><head></head><body></body></html>");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Critical);
        assert_eq!(findings[0].element, "<head>");
    }

    #[test]
    fn test_short_title() {
        let findings = run("<html><head><title>  Hi  </title></head></html>");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Serious);
    }

    #[test]
    fn test_three_chars_is_enough() {
        assert!(run("<html><head><title>FAQ</title></head></html>").is_empty());
        assert!(run("<html><head><title>Olá</title></head></html>").is_empty());
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later
//! Semantic structure rule - WCAG 1.3.1 Info and Relationships (Level A)
//!
//! Checks for proper use of semantic HTML:
//! - The page has at least one heading (h1-h6)
//! - There is at most one top-level heading (h1)
//! - At least three landmark elements are used
//! - Generic `<div>` containers are not standing in for lists

use crate::document::{self, DocumentModel};
use crate::model::{criteria, Finding, Severity, WcagLevel};
use crate::rules::Rule;
use regex::Regex;

/// Landmark elements that aid non-visual navigation
const LANDMARKS: &[&str] = &["header", "nav", "main", "footer", "aside", "section"];

/// Minimum distinct landmarks expected on a page
const MIN_LANDMARKS: usize = 3;

/// List-like divs tolerated before flagging
const MAX_LIST_LIKE_DIVS: usize = 3;

/// Semantic structure rule
pub struct SemanticStructureRule;

impl Rule for SemanticStructureRule {
    fn name(&self) -> &str {
        "Semantic Structure"
    }

    fn description(&self) -> &str {
        "Checks headings, landmarks and list markup (WCAG 1.3.1)"
    }

    fn evaluate(&self, document: &DocumentModel) -> Vec<Finding> {
        let mut findings = Vec::new();

        check_headings(document, &mut findings);
        check_landmarks(document, &mut findings);
        check_list_like_divs(document, &mut findings);

        findings
    }
}

/// Check heading presence and the number of h1 elements
fn check_headings(document: &DocumentModel, findings: &mut Vec<Finding>) {
    if !document.exists("h1, h2, h3, h4, h5, h6") {
        findings.push(
            Finding::new(
                &criteria::SEMANTIC_STRUCTURE,
                Severity::Serious,
                WcagLevel::A,
                "Page has no headings (h1-h6)",
            )
            .with_element("<body>")
            .with_suggestion("Use headings to structure the content")
            .with_example("<h1>Main title</h1>\n<h2>Section</h2>"),
        );
    }

    let h1_count = document.count("h1");
    if h1_count > 1 {
        findings.push(
            Finding::new(
                &criteria::SEMANTIC_STRUCTURE,
                Severity::Moderate,
                WcagLevel::A,
                &format!("Multiple h1 elements found ({})", h1_count),
            )
            .with_element("<h1>")
            .with_suggestion("Use a single h1 per page as the main title")
            .with_example("<h1>Single page title</h1>"),
        );
    }
}

/// Check that enough distinct landmark elements are present
fn check_landmarks(document: &DocumentModel, findings: &mut Vec<Finding>) {
    let found = LANDMARKS.iter().filter(|tag| document.exists(tag)).count();

    if found < MIN_LANDMARKS {
        findings.push(
            Finding::new(
                &criteria::SEMANTIC_STRUCTURE,
                Severity::Moderate,
                WcagLevel::A,
                &format!(
                    "Limited use of HTML5 landmark elements ({} of {} found)",
                    found,
                    LANDMARKS.len()
                ),
            )
            .with_element("<body>")
            .with_suggestion("Use <header>, <nav>, <main> and <footer> to structure the page")
            .with_example("<header>...</header>\n<nav>...</nav>\n<main>...</main>"),
        );
    }
}

/// Check for divs whose class names suggest list items
fn check_list_like_divs(document: &DocumentModel, findings: &mut Vec<Finding>) {
    let Ok(list_re) = Regex::new(r"(?i)list|item") else {
        return;
    };

    let list_like = document
        .select("div[class]")
        .iter()
        .filter(|div| {
            document::attr(div, "class")
                .map(|class| class.split_whitespace().any(|c| list_re.is_match(c)))
                .unwrap_or(false)
        })
        .count();

    if list_like > MAX_LIST_LIKE_DIVS {
        findings.push(
            Finding::new(
                &criteria::SEMANTIC_STRUCTURE,
                Severity::Minor,
                WcagLevel::A,
                &format!(
                    "Possible use of divs instead of semantic lists ({} list-like divs, heuristic)",
                    list_like
                ),
            )
            .with_element("<div class='list/item'>")
            .with_suggestion("Use <ul>, <ol> and <li> for lists")
            .with_example("<ul>\n  <li>Item 1</li>\n  <li>Item 2</li>\n</ul>")
            .as_heuristic(),
        );
    }
}

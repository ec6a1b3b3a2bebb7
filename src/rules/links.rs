// SPDX-License-Identifier: PMPL-1.0-or-later
//! Link purpose rule - WCAG 2.4.4 Link Purpose (Level A), 3.2.5 Change on Request (Level AAA)
//!
//! Checks every `<a href>`:
//! - The link has text, an `aria-label` or an embedded image
//! - The text is not a generic phrase such as "click here"
//! - Links opening a new window say so
//!
//! The generic-phrase and new-window lists come from configuration and are
//! matched case-insensitively; they are heuristics tied to the page language.

use crate::document::{self, DocumentModel};
use crate::model::{criteria, Finding, Severity, WcagLevel};
use crate::rules::{normalize_phrases, Rule};

/// Link purpose rule
pub struct LinkPurposeRule {
    generic_phrases: Vec<String>,
    new_window_phrases: Vec<String>,
}

impl LinkPurposeRule {
    pub fn new(generic_phrases: &[String], new_window_phrases: &[String]) -> Self {
        Self {
            generic_phrases: normalize_phrases(generic_phrases),
            new_window_phrases: normalize_phrases(new_window_phrases),
        }
    }
}

impl Rule for LinkPurposeRule {
    fn name(&self) -> &str {
        "Link Purpose"
    }

    fn description(&self) -> &str {
        "Checks link text for emptiness, generic phrases and new-window warnings (WCAG 2.4.4, 3.2.5)"
    }

    fn evaluate(&self, document: &DocumentModel) -> Vec<Finding> {
        let mut findings = Vec::new();

        for link in document.select("a[href]") {
            let text = document::text_of(&link);
            let text_lower = text.to_lowercase();
            let has_aria_label = document::non_empty_attr(&link, "aria-label").is_some();
            let has_image = link
                .descendants()
                .filter_map(scraper::ElementRef::wrap)
                .any(|el| el.value().name() == "img");

            if text.is_empty() && !has_aria_label && !has_image {
                findings.push(
                    Finding::new(
                        &criteria::LINK_PURPOSE,
                        Severity::Critical,
                        WcagLevel::A,
                        "Link without text or description",
                    )
                    .with_element(&document::snippet(&link))
                    .with_suggestion("Add descriptive text or an aria-label")
                    .with_example("<a href=\"/about\" aria-label=\"About our company\">About</a>"),
                );
            }

            if !has_aria_label && self.generic_phrases.iter().any(|p| *p == text_lower) {
                findings.push(
                    Finding::new(
                        &criteria::LINK_PURPOSE,
                        Severity::Moderate,
                        WcagLevel::A,
                        &format!("Link with generic text: '{}' (heuristic)", text),
                    )
                    .with_element(&document::snippet(&link))
                    .with_suggestion("Use text that describes the link destination")
                    .with_example("<a href=\"/services\">Explore our services</a>")
                    .as_heuristic(),
                );
            }

            let opens_new_window = document::attr(&link, "target")
                .map(|t| t.trim().eq_ignore_ascii_case("_blank"))
                .unwrap_or(false);
            let warns = self
                .new_window_phrases
                .iter()
                .any(|p| text_lower.contains(p.as_str()));

            if opens_new_window && !warns && !has_aria_label {
                findings.push(
                    Finding::new(
                        &criteria::CHANGE_ON_REQUEST,
                        Severity::Minor,
                        WcagLevel::AAA,
                        "Link opens in a new window without warning (heuristic)",
                    )
                    .with_element(&document::snippet(&link))
                    .with_suggestion("Tell users the link opens in a new window")
                    .with_example(
                        "<a href=\"...\" target=\"_blank\" rel=\"noopener\">Report (opens in new window)</a>",
                    )
                    .as_heuristic(),
                );
            }
        }

        findings
    }
}

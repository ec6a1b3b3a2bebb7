// SPDX-License-Identifier: PMPL-1.0-or-later
//! Image alt text rule - WCAG 1.1.1 Non-text Content (Level A)
//!
//! Checks that images carry text alternatives:
//! - Every `<img>` must have an `alt` attribute (not missing)
//! - An empty `alt` is only acceptable on decorative images
//! - `<input type="image">` must have a non-empty `alt`
//!
//! Decorative detection is a heuristic: an image counts as decorative when
//! its nearest enclosing link already has visible text, or when one of its
//! classes contains a configured marker such as "icon". Both false positives
//! and false negatives are expected.

use crate::document::{self, DocumentModel};
use crate::model::{criteria, Finding, Severity, WcagLevel};
use crate::rules::{normalize_phrases, Rule};

/// Rule for image text alternatives
pub struct TextAlternativesRule {
    decorative_markers: Vec<String>,
}

impl TextAlternativesRule {
    pub fn new(decorative_markers: &[String]) -> Self {
        Self {
            decorative_markers: normalize_phrases(decorative_markers),
        }
    }

    fn is_decorative(&self, img: &scraper::ElementRef<'_>) -> bool {
        let in_labelled_link = document::nearest_ancestor(img, "a")
            .map(|link| !document::text_of(&link).is_empty())
            .unwrap_or(false);
        if in_labelled_link {
            return true;
        }

        let classes = document::attr(img, "class").unwrap_or("").to_lowercase();
        self.decorative_markers
            .iter()
            .any(|marker| classes.contains(marker.as_str()))
    }
}

impl Rule for TextAlternativesRule {
    fn name(&self) -> &str {
        "Text Alternatives"
    }

    fn description(&self) -> &str {
        "Checks <img> and image inputs for text alternatives (WCAG 1.1.1)"
    }

    fn evaluate(&self, document: &DocumentModel) -> Vec<Finding> {
        let mut findings = Vec::new();

        for img in document.select("img") {
            let src = document::attr(&img, "src").unwrap_or("unknown source");

            match document::attr(&img, "alt") {
                None => {
                    findings.push(
                        Finding::new(
                            &criteria::TEXT_ALTERNATIVES,
                            Severity::Critical,
                            WcagLevel::A,
                            &format!("Image without alt attribute: {}", src),
                        )
                        .with_element(&document::snippet(&img))
                        .with_suggestion("Add a descriptive alt attribute to the image")
                        .with_example(&format!(
                            "<img src=\"{}\" alt=\"Clear description of the image\">",
                            src
                        )),
                    );
                }
                Some(alt) if alt.trim().is_empty() && !self.is_decorative(&img) => {
                    findings.push(
                        Finding::new(
                            &criteria::TEXT_ALTERNATIVES,
                            Severity::Serious,
                            WcagLevel::A,
                            &format!(
                                "Image with empty alt does not look decorative (heuristic): {}",
                                src
                            ),
                        )
                        .with_element(&document::snippet(&img))
                        .with_suggestion("Provide a meaningful text description, or mark the image as decorative")
                        .with_example(&format!(
                            "<img src=\"{}\" alt=\"Description of the image content\">",
                            src
                        ))
                        .as_heuristic(),
                    );
                }
                Some(_) => {}
            }
        }

        for input in document.select("input") {
            let is_image = document::attr(&input, "type")
                .map(|t| t.eq_ignore_ascii_case("image"))
                .unwrap_or(false);
            if is_image && document::non_empty_attr(&input, "alt").is_none() {
                findings.push(
                    Finding::new(
                        &criteria::TEXT_ALTERNATIVES,
                        Severity::Critical,
                        WcagLevel::A,
                        "Image input without alt attribute",
                    )
                    .with_element(&document::snippet(&input))
                    .with_suggestion("Add an alt attribute describing the button's action")
                    .with_example("<input type=\"image\" src=\"send.png\" alt=\"Submit form\">"),
                );
            }
        }

        findings
    }
}

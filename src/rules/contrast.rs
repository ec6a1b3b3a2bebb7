// SPDX-License-Identifier: PMPL-1.0-or-later
//! Color contrast heuristic - WCAG 1.4.3 Contrast (Minimum) (Level AA)
//!
//! Without rendering there is no way to compute an actual contrast ratio.
//! This rule only flags elements whose inline style sets both a foreground
//! and a background color, as candidates for manual verification.

use crate::document::{self, DocumentModel};
use crate::model::{criteria, Finding, Severity, WcagLevel};
use crate::rules::Rule;
use regex::Regex;

/// Contrast candidate rule
pub struct ContrastRule;

impl Rule for ContrastRule {
    fn name(&self) -> &str {
        "Color Contrast"
    }

    fn description(&self) -> &str {
        "Flags inline foreground/background color pairs for manual review (WCAG 1.4.3)"
    }

    fn evaluate(&self, document: &DocumentModel) -> Vec<Finding> {
        document
            .select("[style]")
            .iter()
            .filter(|el| {
                let style = document::attr(el, "style").unwrap_or("");
                let (fg, bg) = declared_colors(style);
                fg && bg
            })
            .map(|el| {
                Finding::new(
                    &criteria::COLOR_CONTRAST,
                    Severity::Moderate,
                    WcagLevel::AA,
                    "Verify contrast between text and background (heuristic, not measured)",
                )
                .with_element(&document::snippet(el))
                .with_suggestion("Minimum contrast ratio: 4.5:1 for normal text, 3:1 for large text")
                .with_example("Check the pair with a contrast checker such as WebAIM Contrast Checker")
                .as_heuristic()
            })
            .collect()
    }
}

/// Whether an inline style declares (foreground color, background color)
///
/// Properties are matched only at the start of a declaration, so
/// `border-color` is not a foreground color.
fn declared_colors(style: &str) -> (bool, bool) {
    let Ok(declaration_re) =
        Regex::new(r"(?i)(?:^|;)\s*(background-color|background|color)\s*:\s*([^;]*)")
    else {
        return (false, false);
    };

    let mut foreground = false;
    let mut background = false;

    for caps in declaration_re.captures_iter(style) {
        if caps[2].trim().is_empty() {
            continue;
        }
        if caps[1].eq_ignore_ascii_case("color") {
            foreground = true;
        } else {
            background = true;
        }
    }

    (foreground, background)
}

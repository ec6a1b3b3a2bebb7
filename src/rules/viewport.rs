// SPDX-License-Identifier: PMPL-1.0-or-later
//! Responsive viewport rule - WCAG 1.4.10 Reflow (Level AA), 1.4.4 Resize Text (Level AA)
//!
//! Checks the viewport meta configuration:
//! - A `<meta name="viewport">` is present
//! - It does not lock zoom via `user-scalable=no` or `maximum-scale` <= 1

use crate::document::{self, DocumentModel};
use crate::model::{criteria, Finding, Severity, WcagLevel};
use crate::rules::Rule;

const RECOMMENDED_VIEWPORT: &str =
    "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">";

/// Responsive viewport rule
pub struct ViewportRule;

impl Rule for ViewportRule {
    fn name(&self) -> &str {
        "Responsive Viewport"
    }

    fn description(&self) -> &str {
        "Checks the viewport meta tag for presence and zoom locking (WCAG 1.4.10, 1.4.4)"
    }

    fn evaluate(&self, document: &DocumentModel) -> Vec<Finding> {
        let viewport = document.select("meta[name]").into_iter().find(|meta| {
            document::attr(meta, "name")
                .map(|name| name.trim().eq_ignore_ascii_case("viewport"))
                .unwrap_or(false)
        });

        match viewport {
            None => vec![Finding::new(
                &criteria::REFLOW,
                Severity::Serious,
                WcagLevel::AA,
                "Missing viewport meta tag",
            )
            .with_element("<head>")
            .with_suggestion("Add a viewport meta tag so content reflows on small screens")
            .with_example(RECOMMENDED_VIEWPORT)],
            Some(meta) if locks_zoom(document::attr(&meta, "content").unwrap_or("")) => {
                vec![Finding::new(
                    &criteria::RESIZE_TEXT,
                    Severity::Critical,
                    WcagLevel::AA,
                    "Viewport blocks user zoom",
                )
                .with_element(&document::snippet(&meta))
                .with_suggestion("Do not block zoom: remove user-scalable=no and maximum-scale limits")
                .with_example(RECOMMENDED_VIEWPORT)]
            }
            Some(_) => Vec::new(),
        }
    }
}

/// Whether viewport content disables pinch zoom
fn locks_zoom(content: &str) -> bool {
    content
        .split([',', ';'])
        .filter_map(|pair| pair.split_once('='))
        .any(|(key, value)| {
            let value = value.trim().to_ascii_lowercase();
            match key.trim().to_ascii_lowercase().as_str() {
                "user-scalable" => value == "no" || value == "0",
                "maximum-scale" => value.parse::<f32>().map(|v| v <= 1.0).unwrap_or(false),
                _ => false,
            }
        })
}

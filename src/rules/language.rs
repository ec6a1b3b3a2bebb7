// SPDX-License-Identifier: PMPL-1.0-or-later
//! Page language rule - WCAG 3.1.1 Language of Page (Level A)
//!
//! The root `<html>` element must declare a non-empty `lang` attribute so
//! screen readers pick the right pronunciation rules.

use crate::document::{self, DocumentModel};
use crate::model::{criteria, Finding, Severity, WcagLevel};
use crate::rules::Rule;

/// Page language rule
pub struct PageLanguageRule;

impl Rule for PageLanguageRule {
    fn name(&self) -> &str {
        "Page Language"
    }

    fn description(&self) -> &str {
        "Checks the lang attribute on the root element (WCAG 3.1.1)"
    }

    fn evaluate(&self, document: &DocumentModel) -> Vec<Finding> {
        if document::non_empty_attr(&document.root(), "lang").is_some() {
            return Vec::new();
        }

        vec![Finding::new(
            &criteria::PAGE_LANGUAGE,
            Severity::Critical,
            WcagLevel::A,
            "Missing lang attribute on the <html> element",
        )
        .with_element("<html>")
        .with_suggestion("Add a lang attribute to the html element")
        .with_example("<html lang=\"en\">")]
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later
//! Form labeling rule - WCAG 4.1.2 Name, Role, Value (Level A)
//!
//! Checks form field accessibility:
//! - Every field has an accessible name: a `<label for>` pairing, a wrapping
//!   `<label>`, `aria-label`, `aria-labelledby` or `title`
//! - Required fields also expose `aria-required="true"`

use crate::document::{self, DocumentModel};
use crate::model::{criteria, Finding, Severity, WcagLevel};
use crate::rules::Rule;
use scraper::ElementRef;

/// Form field elements
const FIELD_SELECTOR: &str = "input, select, textarea";

/// Input types that do not need a label
const EXEMPT_INPUT_TYPES: &[&str] = &["hidden", "submit", "reset", "button", "image"];

/// Form labeling rule
pub struct FormLabelRule;

impl Rule for FormLabelRule {
    fn name(&self) -> &str {
        "Form Labels"
    }

    fn description(&self) -> &str {
        "Checks that form fields have labels and required flags (WCAG 4.1.2)"
    }

    fn evaluate(&self, document: &DocumentModel) -> Vec<Finding> {
        let mut findings = Vec::new();

        check_labels(document, &mut findings);
        check_required(document, &mut findings);

        findings
    }
}

fn field_type(field: &ElementRef<'_>) -> String {
    document::attr(field, "type")
        .unwrap_or("text")
        .trim()
        .to_ascii_lowercase()
}

/// Whether a field has any accessible name source
fn has_accessible_name(document: &DocumentModel, field: &ElementRef<'_>) -> bool {
    let explicit_label = field
        .value()
        .id()
        .map(|id| document.has_label_for(id))
        .unwrap_or(false);

    explicit_label
        || document::nearest_ancestor(field, "label").is_some()
        || document::non_empty_attr(field, "aria-label").is_some()
        || document::non_empty_attr(field, "aria-labelledby").is_some()
        || document::non_empty_attr(field, "title").is_some()
}

/// Check every non-exempt field for an accessible name
fn check_labels(document: &DocumentModel, findings: &mut Vec<Finding>) {
    for field in document.select(FIELD_SELECTOR) {
        let kind = field_type(&field);
        if EXEMPT_INPUT_TYPES.contains(&kind.as_str()) {
            continue;
        }

        if !has_accessible_name(document, &field) {
            findings.push(
                Finding::new(
                    &criteria::NAME_ROLE_VALUE,
                    Severity::Critical,
                    WcagLevel::A,
                    &format!("Form field without label: {}", kind),
                )
                .with_element(&document::snippet(&field))
                .with_suggestion("Associate a <label> with the field or use aria-label")
                .with_example("<label for=\"name\">Name:</label>\n<input type=\"text\" id=\"name\">"),
            );
        }
    }
}

/// Check required fields for an explicit aria-required flag
fn check_required(document: &DocumentModel, findings: &mut Vec<Finding>) {
    for field in document.select("input[required], select[required], textarea[required]") {
        let flagged = document::attr(&field, "aria-required")
            .map(|v| v.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        if !flagged {
            findings.push(
                Finding::new(
                    &criteria::NAME_ROLE_VALUE,
                    Severity::Minor,
                    WcagLevel::A,
                    "Required field without aria-required=\"true\"",
                )
                .with_element(&document::snippet(&field))
                .with_suggestion("Add aria-required=\"true\" for screen readers")
                .with_example("<input type=\"text\" required aria-required=\"true\">"),
            );
        }
    }
}

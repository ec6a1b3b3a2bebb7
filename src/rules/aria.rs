// SPDX-License-Identifier: PMPL-1.0-or-later
//! ARIA validator - WCAG 4.1.2 Name, Role, Value (Level A)
//!
//! Validates ARIA usage:
//! - Every token of a `role` attribute belongs to the ARIA role vocabulary
//! - Every id named by `aria-labelledby` exists in the document

use crate::document::{self, DocumentModel};
use crate::model::{criteria, Finding, Severity, WcagLevel};
use crate::rules::Rule;

/// ARIA roles accepted by the validator
const VALID_ROLES: &[&str] = &[
    "alert", "alertdialog", "application", "article", "banner",
    "button", "checkbox", "complementary", "contentinfo", "dialog",
    "directory", "document", "form", "grid", "gridcell", "group",
    "heading", "img", "link", "list", "listbox", "listitem",
    "log", "main", "marquee", "math", "menu", "menubar", "menuitem",
    "menuitemcheckbox", "menuitemradio", "navigation", "note",
    "option", "presentation", "progressbar", "radio", "radiogroup",
    "region", "row", "rowgroup", "rowheader", "scrollbar", "search",
    "separator", "slider", "spinbutton", "status", "tab", "tablist",
    "tabpanel", "textbox", "timer", "toolbar", "tooltip", "tree",
    "treegrid", "treeitem",
];

/// ARIA validator rule
pub struct AriaRule;

impl Rule for AriaRule {
    fn name(&self) -> &str {
        "ARIA Validity"
    }

    fn description(&self) -> &str {
        "Validates ARIA roles and aria-labelledby references (WCAG 4.1.2)"
    }

    fn evaluate(&self, document: &DocumentModel) -> Vec<Finding> {
        let mut findings = Vec::new();

        check_roles(document, &mut findings);
        check_labelledby_refs(document, &mut findings);

        findings
    }
}

/// Whether a role attribute value is entirely made of known roles
fn is_valid_role(value: &str) -> bool {
    let mut tokens = value.split_whitespace().peekable();
    tokens.peek().is_some() && tokens.all(|token| VALID_ROLES.contains(&token))
}

/// Check role attributes against the vocabulary
fn check_roles(document: &DocumentModel, findings: &mut Vec<Finding>) {
    for el in document.select("[role]") {
        let role = document::attr(&el, "role").unwrap_or("");
        if !is_valid_role(role) {
            findings.push(
                Finding::new(
                    &criteria::ARIA_VALID,
                    Severity::Serious,
                    WcagLevel::A,
                    &format!("Invalid ARIA role: '{}'", role),
                )
                .with_element(&document::snippet(&el))
                .with_suggestion("Use only roles defined by the WAI-ARIA specification")
                .with_example("<div role=\"navigation\">...</div>"),
            );
        }
    }
}

/// Check that aria-labelledby only names existing ids
fn check_labelledby_refs(document: &DocumentModel, findings: &mut Vec<Finding>) {
    for el in document.select("[aria-labelledby]") {
        let refs = document::attr(&el, "aria-labelledby").unwrap_or("");
        for id in refs.split_whitespace() {
            if !document.has_id(id) {
                findings.push(
                    Finding::new(
                        &criteria::ARIA_REFERENCES,
                        Severity::Serious,
                        WcagLevel::A,
                        &format!("aria-labelledby references a missing id: '{}'", id),
                    )
                    .with_element(&document::snippet(&el))
                    .with_suggestion("Make sure the referenced id exists on the page")
                    .with_example(
                        "<h2 id=\"section-title\">Title</h2>\n<div aria-labelledby=\"section-title\">...</div>",
                    ),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str) -> Vec<Finding> {
        AriaRule.evaluate(&DocumentModel::parse(html))
    }

    #[test]
    fn test_valid_aria() {
        let findings = run(r#"
            <html><body>
                <div role="navigation">Links</div>
                <h2 id="t">Title</h2>
                <section aria-labelledby="t">...</section>
                <span role="img presentation"></span>
            </body></html>
        "#);
        assert!(findings.is_empty(), "{:?}", findings);
    }

    #[test]
    fn test_invalid_roles() {
        let findings = run(r#"
            <html><body>
                <div role="buton">Typo</div>
                <div role="">Empty</div>
                <div role="button fancy">Mixed</div>
            </body></html>
        "#);
        assert_eq!(findings.len(), 3);
        assert!(findings.iter().all(|f| f.severity == Severity::Serious));
        assert_eq!(findings[0].description, "Invalid ARIA role: 'buton'");
    }

    #[test]
    fn test_dangling_labelledby() {
        let findings = run(r#"
            <html><body>
                <span id="a">A</span>
                <div aria-labelledby="a b c">Group</div>
            </body></html>
        "#);
        assert_eq!(findings.len(), 2);
        assert!(findings[0].description.contains("'b'"));
        assert!(findings[1].description.contains("'c'"));
        assert!(findings[0].criterion.starts_with("4.1.2"));
    }

    #[test]
    fn test_is_valid_role() {
        assert!(is_valid_role("main"));
        assert!(is_valid_role(" tab  tabpanel "));
        assert!(!is_valid_role(""));
        assert!(!is_valid_role("   "));
        assert!(!is_valid_role("Main"));
    }
}

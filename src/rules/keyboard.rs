// SPDX-License-Identifier: PMPL-1.0-or-later
//! Keyboard operability rule - WCAG 2.1.1 Keyboard (Level A), 2.4.1 Bypass Blocks (Level A)
//!
//! Checks for keyboard accessibility:
//! - Clickable generic containers are reachable by keyboard
//! - The page offers at least one same-page jump link

use crate::document::{self, DocumentModel};
use crate::model::{criteria, Finding, Severity, WcagLevel};
use crate::rules::Rule;

/// Roles that give a generic container interactive semantics
const INTERACTIVE_ROLES: &[&str] = &["button", "link"];

/// Keyboard operability rule
pub struct KeyboardRule;

impl Rule for KeyboardRule {
    fn name(&self) -> &str {
        "Keyboard Operability"
    }

    fn description(&self) -> &str {
        "Checks click-only containers and skip links (WCAG 2.1.1, 2.4.1)"
    }

    fn evaluate(&self, document: &DocumentModel) -> Vec<Finding> {
        let mut findings = Vec::new();

        check_click_only_containers(document, &mut findings);
        check_skip_link(document, &mut findings);

        findings
    }
}

/// Check div/span click handlers without focusability or an interactive role
fn check_click_only_containers(document: &DocumentModel, findings: &mut Vec<Finding>) {
    for el in document.select("div[onclick], span[onclick]") {
        let has_tabindex = document::attr(&el, "tabindex").is_some();
        let has_interactive_role = document::attr(&el, "role")
            .map(|role| INTERACTIVE_ROLES.contains(&role.trim()))
            .unwrap_or(false);

        if !has_tabindex && !has_interactive_role {
            findings.push(
                Finding::new(
                    &criteria::KEYBOARD,
                    Severity::Critical,
                    WcagLevel::A,
                    &format!(
                        "Clickable <{}> is not reachable by keyboard",
                        el.value().name()
                    ),
                )
                .with_element(&document::snippet(&el))
                .with_suggestion(
                    "Use native elements (<button>, <a>) or add tabindex=\"0\" and an appropriate role",
                )
                .with_example("<div role=\"button\" tabindex=\"0\" onkeydown=\"...\">Click</div>"),
            );
        }
    }
}

/// Check for at least one same-page jump link
fn check_skip_link(document: &DocumentModel, findings: &mut Vec<Finding>) {
    if !document.exists("a[href^=\"#\"]") {
        findings.push(
            Finding::new(
                &criteria::BYPASS_BLOCKS,
                Severity::Serious,
                WcagLevel::A,
                "No skip link to bypass repeated navigation",
            )
            .with_element("<body>")
            .with_suggestion("Add a 'Skip to main content' link at the start of the page")
            .with_example("<a href=\"#main-content\" class=\"skip-link\">Skip to content</a>"),
        );
    }
}

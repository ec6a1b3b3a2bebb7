// SPDX-License-Identifier: PMPL-1.0-or-later
//! Table structure rule - WCAG 1.3.1 Info and Relationships (Level A)
//!
//! Checks every `<table>`:
//! - It has a `<caption>`
//! - It has header cells (`<thead>` or `<th>`)
//! - Each `<th>` declares a `scope`

use crate::document::{self, DocumentModel};
use crate::model::{criteria, Finding, Severity, WcagLevel};
use crate::rules::Rule;
use scraper::ElementRef;

/// Table structure rule
pub struct TableStructureRule;

impl Rule for TableStructureRule {
    fn name(&self) -> &str {
        "Table Structure"
    }

    fn description(&self) -> &str {
        "Checks table captions, header cells and scope (WCAG 1.3.1)"
    }

    fn evaluate(&self, document: &DocumentModel) -> Vec<Finding> {
        let mut findings = Vec::new();

        for table in document.select("table") {
            let descendants: Vec<ElementRef<'_>> = table
                .descendants()
                .skip(1)
                .filter_map(ElementRef::wrap)
                .collect();
            let has = |tag: &str| descendants.iter().any(|el| el.value().name() == tag);

            if !has("caption") {
                findings.push(
                    Finding::new(
                        &criteria::TABLE_STRUCTURE,
                        Severity::Moderate,
                        WcagLevel::A,
                        "Table without <caption>",
                    )
                    .with_element(&document::snippet(&table))
                    .with_suggestion("Add a <caption> describing the purpose of the table")
                    .with_example("<table>\n  <caption>Sales by region in 2024</caption>\n  ...\n</table>"),
                );
            }

            let header_cells: Vec<&ElementRef<'_>> = descendants
                .iter()
                .filter(|el| el.value().name() == "th")
                .collect();

            if !has("thead") && header_cells.is_empty() {
                findings.push(
                    Finding::new(
                        &criteria::TABLE_STRUCTURE,
                        Severity::Serious,
                        WcagLevel::A,
                        "Table without <th> header cells",
                    )
                    .with_element(&document::snippet(&table))
                    .with_suggestion("Use <th> for header cells and <thead> to group them")
                    .with_example(
                        "<table>\n  <thead>\n    <tr><th scope=\"col\">Name</th></tr>\n  </thead>\n  <tbody>...</tbody>\n</table>",
                    ),
                );
            }

            for th in header_cells {
                if document::non_empty_attr(th, "scope").is_none() {
                    findings.push(
                        Finding::new(
                            &criteria::TABLE_STRUCTURE,
                            Severity::Minor,
                            WcagLevel::A,
                            "Header cell <th> without scope attribute",
                        )
                        .with_element(&document::snippet(th))
                        .with_suggestion("Add scope=\"col\" or scope=\"row\" to the <th>")
                        .with_example("<th scope=\"col\">Column name</th>"),
                    );
                }
            }
        }

        findings
    }
}

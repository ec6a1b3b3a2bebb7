// SPDX-License-Identifier: PMPL-1.0-or-later
//! Aggregation over a finding sequence: score, conformance and the
//! prioritized recommendation list.
//!
//! All functions here are deterministic and depend only on their input.

use crate::model::criteria::{self, LOCAL_TRACKED};
use crate::model::{Finding, Severity, WcagLevel};
use std::collections::BTreeMap;

/// Standards named in the closing recommendation
pub const GOVERNING_STANDARDS: &str = "WCAG 2.2 and ABNT NBR 17225:2025";

/// Maximum number of criteria named in the critical recommendation
const TOP_CRITICAL_CATEGORIES: usize = 3;

/// Deduction score: 100 minus severity weights, clamped to [0, 100],
/// rounded to two decimals
pub fn score(findings: &[Finding]) -> f64 {
    let deducted: u64 = findings.iter().map(|f| u64::from(f.severity.weight())).sum();
    let raw = (100.0 - deducted as f64).clamp(0.0, 100.0);
    (raw * 100.0).round() / 100.0
}

/// Findings per severity, all four keys present
pub fn counts_by_severity(findings: &[Finding]) -> BTreeMap<Severity, usize> {
    let mut counts: BTreeMap<Severity, usize> = Severity::ALL.iter().map(|s| (*s, 0)).collect();
    for finding in findings {
        *counts.entry(finding.severity).or_insert(0) += 1;
    }
    counts
}

/// WCAG conformance per level
///
/// A holds when no finding is level A; AA additionally needs no level-AA
/// finding. AAA is never claimed: it needs manual review beyond what these
/// checks can automate.
pub fn conformance(findings: &[Finding]) -> BTreeMap<WcagLevel, bool> {
    let violates = |level: WcagLevel| findings.iter().any(|f| f.level == level);

    let a = !violates(WcagLevel::A);
    let aa = a && !violates(WcagLevel::AA);

    BTreeMap::from([(WcagLevel::A, a), (WcagLevel::AA, aa), (WcagLevel::AAA, false)])
}

/// Conformance per tracked local-regulation criterion
///
/// A criterion fails when any finding's local reference names the same
/// section number.
pub fn local_conformance(findings: &[Finding]) -> BTreeMap<String, bool> {
    LOCAL_TRACKED
        .iter()
        .map(|key| {
            let section = criteria::local_section(key);
            let violated = findings.iter().any(|f| {
                f.references.local.as_deref().and_then(criteria::local_section) == section
            });
            (key.to_string(), !violated)
        })
        .collect()
}

/// Count occurrences by key, remembering first-seen order for tie-breaks
fn tally<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<(&'a str, usize)> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for key in keys {
        match counts.iter_mut().find(|(k, _)| *k == key) {
            Some((_, n)) => *n += 1,
            None => counts.push((key, 1)),
        }
    }
    counts
}

/// Entry with the highest count; ties go to the first encountered
fn most_common<'a>(counts: &[(&'a str, usize)]) -> Option<(&'a str, usize)> {
    counts
        .iter()
        .fold(None, |best: Option<(&str, usize)>, &(key, n)| match best {
            Some((_, best_n)) if best_n >= n => best,
            _ => Some((key, n)),
        })
}

/// Ordered, human-readable priorities
///
/// The "most affected criterion" line breaks ties by first appearance in
/// finding order, so it can change if the rule order changes.
pub fn recommendations(findings: &[Finding]) -> Vec<String> {
    let mut lines = Vec::new();

    let critical: Vec<&Finding> = findings.iter().filter(|f| f.severity == Severity::Critical).collect();
    if !critical.is_empty() {
        let mut categories = tally(critical.iter().map(|f| f.criterion.as_str()));
        // Stable sort keeps first-seen order among equal counts
        categories.sort_by(|a, b| b.1.cmp(&a.1));
        let top: Vec<&str> = categories
            .iter()
            .take(TOP_CRITICAL_CATEGORIES)
            .map(|(k, _)| *k)
            .collect();
        lines.push(format!(
            "CRITICAL PRIORITY: fix {} critical issue(s), most often in: {}",
            critical.len(),
            top.join("; ")
        ));
    }

    let serious = findings.iter().filter(|f| f.severity == Severity::Serious).count();
    if serious > 0 {
        lines.push(format!("HIGH PRIORITY: resolve {} serious issue(s)", serious));
    }

    let by_criterion = tally(findings.iter().map(Finding::criterion_id));
    if let Some((criterion, n)) = most_common(&by_criterion) {
        lines.push(format!(
            "Criterion with the most issues: '{}' ({} occurrence(s))",
            criterion, n
        ));
    }

    let level_a = findings.iter().filter(|f| f.level == WcagLevel::A).count();
    if level_a > 0 {
        lines.push(format!(
            "{} WCAG Level A violation(s) (required minimum)",
            level_a
        ));
    }

    lines.push(format!("Consult {} for complete guidance", GOVERNING_STANDARDS));

    lines
}

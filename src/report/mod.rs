// SPDX-License-Identifier: PMPL-1.0-or-later
//! Report assembly.
//!
//! A [`Report`] is built once per evaluation from the engine's outcome and
//! the aggregation functions in [`crate::scoring`]. It never holds on to the
//! document it was computed from.
//!
//! Output formats live in [`render`]:
//! - Text: terminal summary with score classification and detailed issues
//! - JSON: the stable export schema

pub mod render;

pub use render::{export_json, generate_report, render_json, render_text, OutputFormat};

use crate::engine::{EvaluationOutcome, RuleFault};
use crate::error::FetchError;
use crate::model::{Finding, Severity, WcagLevel};
use crate::model::criteria::LOCAL_TRACKED;
use crate::scoring;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Timestamp format used in rendered and exported reports
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Result of auditing one document
///
/// Read-only once assembled: fields are reachable only through accessors.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Audited address (URL or file path)
    address: String,
    /// When the evaluation finished
    timestamp: DateTime<Utc>,
    /// Score in [0, 100]
    score: f64,
    /// Findings in rule order
    findings: Vec<Finding>,
    /// Always `findings.len()`
    total_count: usize,
    /// Count per severity, all four keys present
    counts_by_severity: BTreeMap<Severity, usize>,
    /// Conformance per WCAG level, all three keys present
    conformance: BTreeMap<WcagLevel, bool>,
    /// Conformance per tracked ABNT criterion
    local_conformance: BTreeMap<String, bool>,
    /// Prioritized recommendation lines
    recommendations: Vec<String>,
    /// Rules that failed during evaluation
    diagnostics: Vec<RuleFault>,
    /// Fetch failure that prevented evaluation
    failure: Option<String>,
}

impl Report {
    /// Assemble a report from an evaluation outcome, stamped now
    pub fn assemble(address: &str, outcome: EvaluationOutcome) -> Self {
        Self::assemble_at(address, outcome, Utc::now())
    }

    /// Assemble a report with an explicit timestamp
    pub fn assemble_at(address: &str, outcome: EvaluationOutcome, timestamp: DateTime<Utc>) -> Self {
        let EvaluationOutcome { findings, faults } = outcome;

        Self {
            address: address.to_string(),
            timestamp,
            score: scoring::score(&findings),
            total_count: findings.len(),
            counts_by_severity: scoring::counts_by_severity(&findings),
            conformance: scoring::conformance(&findings),
            local_conformance: scoring::local_conformance(&findings),
            recommendations: scoring::recommendations(&findings),
            findings,
            diagnostics: faults,
            failure: None,
        }
    }

    /// Terminal report for an evaluation that never reached the rules
    ///
    /// Score 0, no findings, nothing conformant, one recommendation line
    /// carrying the failure.
    pub fn degraded(address: &str, error: &FetchError) -> Self {
        let failure = error.to_string();

        Self {
            address: address.to_string(),
            timestamp: Utc::now(),
            score: 0.0,
            findings: Vec::new(),
            total_count: 0,
            counts_by_severity: scoring::counts_by_severity(&[]),
            conformance: WcagLevel::ALL.iter().map(|level| (*level, false)).collect(),
            local_conformance: LOCAL_TRACKED.iter().map(|key| (key.to_string(), false)).collect(),
            recommendations: vec![format!("Evaluation failed: {}", failure)],
            diagnostics: Vec::new(),
            failure: Some(failure),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Score in [0, 100]
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Findings in rule order, then emission order
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn counts_by_severity(&self) -> &BTreeMap<Severity, usize> {
        &self.counts_by_severity
    }

    pub fn conformance(&self) -> &BTreeMap<WcagLevel, bool> {
        &self.conformance
    }

    pub fn local_conformance(&self) -> &BTreeMap<String, bool> {
        &self.local_conformance
    }

    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    /// Rules that failed during evaluation
    pub fn diagnostics(&self) -> &[RuleFault] {
        &self.diagnostics
    }

    /// Fetch failure message for a degraded report
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Whether the evaluation failed before any rule ran
    pub fn is_degraded(&self) -> bool {
        self.failure.is_some()
    }

    /// Number of findings with the given severity
    pub fn count(&self, severity: Severity) -> usize {
        self.counts_by_severity.get(&severity).copied().unwrap_or(0)
    }

    /// Whether the page conforms at the given WCAG level
    pub fn conforms(&self, level: WcagLevel) -> bool {
        self.conformance.get(&level).copied().unwrap_or(false)
    }

    pub fn has_critical(&self) -> bool {
        self.count(Severity::Critical) > 0
    }

    /// Findings with the given severity, in report order
    pub fn by_severity(&self, severity: Severity) -> Vec<&Finding> {
        self.findings.iter().filter(|f| f.severity == severity).collect()
    }

    /// Evaluation timestamp in the report format
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

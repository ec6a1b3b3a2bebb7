// SPDX-License-Identifier: PMPL-1.0-or-later
//! Report rendering: terminal text and the JSON export schema.
//!
//! Presentation only. Every decision (score, conformance, priorities) has
//! already been made by the time a [`Report`] reaches this module.

use super::Report;
use crate::error::Result;
use crate::model::{Finding, Severity, WcagLevel};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;
use tracing::info;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Export schema JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Render a report in the requested format
pub fn generate_report(report: &Report, format: OutputFormat, max_detailed: usize) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report, max_detailed)),
        OutputFormat::Json => render_json(report),
    }
}

/// Qualitative band for a score
pub fn classify(score: f64) -> &'static str {
    if score >= 90.0 {
        "Excellent"
    } else if score >= 70.0 {
        "Good"
    } else if score >= 50.0 {
        "Fair"
    } else {
        "Needs urgent improvement"
    }
}

fn pass_fail(ok: bool) -> &'static str {
    if ok {
        "PASS"
    } else {
        "FAIL"
    }
}

/// Terminal report: summary first, then up to `max_detailed` findings
pub fn render_text(report: &Report, max_detailed: usize) -> String {
    let mut out = String::new();

    out.push_str("=== Pageauditbot Accessibility Report ===\n\n");
    let _ = writeln!(out, "Address:   {}", report.address);
    let _ = writeln!(out, "Evaluated: {}", report.formatted_timestamp());
    let _ = writeln!(out, "Score:     {:.2}/100 ({})", report.score, classify(report.score));

    if let Some(ref failure) = report.failure {
        let _ = writeln!(out, "\nEVALUATION FAILED: {}", failure);
        return out;
    }

    let _ = writeln!(out, "\nIssues found: {}", report.total_count);
    for severity in Severity::ALL {
        let n = report.count(severity);
        if n > 0 {
            let _ = writeln!(out, "  {}: {}", severity, n);
        }
    }

    out.push_str("\nWCAG 2.2 conformance:\n");
    for level in WcagLevel::ALL {
        let note = if level == WcagLevel::AAA { " (requires manual review)" } else { "" };
        let _ = writeln!(out, "  Level {:<4} {}{}", format!("{}:", level), pass_fail(report.conforms(level)), note);
    }

    out.push_str("\nABNT NBR 17225:2025 conformance:\n");
    for (criterion, ok) in &report.local_conformance {
        let _ = writeln!(out, "  {}: {}", criterion, pass_fail(*ok));
    }

    out.push_str("\nRecommendations:\n");
    for (i, line) in report.recommendations.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, line);
    }

    if !report.findings.is_empty() {
        out.push_str("\n--- Issues ---\n");
        for (i, finding) in report.findings.iter().take(max_detailed).enumerate() {
            write_finding(&mut out, i + 1, finding);
        }
        let omitted = report.findings.len().saturating_sub(max_detailed);
        if omitted > 0 {
            let _ = writeln!(out, "... and {} more issue(s) not shown (see JSON export)", omitted);
        }
    }

    if !report.diagnostics.is_empty() {
        out.push_str("\nInternal diagnostics:\n");
        for fault in &report.diagnostics {
            let _ = writeln!(out, "  rule '{}' failed: {}", fault.rule, fault.message);
        }
    }

    out
}

fn write_finding(out: &mut String, index: usize, finding: &Finding) {
    let marker = if finding.heuristic { " [heuristic]" } else { "" };
    let _ = writeln!(
        out,
        "[{}] [{}] {} (Level {}){}",
        index, finding.severity, finding.criterion, finding.level, marker
    );
    let _ = writeln!(out, "    {}", finding.description);
    if !finding.element.is_empty() {
        let _ = writeln!(out, "    Element: {}", finding.element);
    }
    if !finding.suggestion.is_empty() {
        let _ = writeln!(out, "    Fix: {}", finding.suggestion);
    }

    let refs: Vec<&str> = [&finding.references.standard, &finding.references.local]
        .into_iter()
        .filter_map(|r| r.as_deref())
        .collect();
    if !refs.is_empty() {
        let _ = writeln!(out, "    References: {}", refs.join(" | "));
    }

    if let Some(ref example) = finding.example {
        out.push_str("    Example:\n");
        for line in example.lines() {
            let _ = writeln!(out, "      {}", line);
        }
    }
    out.push('\n');
}

/// Export schema, field names are a compatibility surface
#[derive(Debug, Serialize)]
struct ExportedReport<'a> {
    url: &'a str,
    evaluated_at: String,
    score: f64,
    total_issues: usize,
    issues_by_severity: ExportedCounts,
    wcag_conformance: &'a BTreeMap<WcagLevel, bool>,
    local_conformance: &'a BTreeMap<String, bool>,
    recommendations: &'a [String],
    issues: Vec<ExportedIssue<'a>>,
}

#[derive(Debug, Serialize)]
struct ExportedCounts {
    #[serde(rename = "Critical")]
    critical: usize,
    #[serde(rename = "Serious")]
    serious: usize,
    #[serde(rename = "Moderate")]
    moderate: usize,
    #[serde(rename = "Minor")]
    minor: usize,
}

#[derive(Debug, Serialize)]
struct ExportedIssue<'a> {
    criterion: &'a str,
    description: &'a str,
    severity: String,
    level: String,
    suggestion: &'a str,
    standard_ref: &'a str,
    local_ref: &'a str,
    example: &'a str,
}

impl<'a> From<&'a Report> for ExportedReport<'a> {
    fn from(report: &'a Report) -> Self {
        Self {
            url: &report.address,
            evaluated_at: report.formatted_timestamp(),
            score: report.score,
            total_issues: report.total_count,
            issues_by_severity: ExportedCounts {
                critical: report.count(Severity::Critical),
                serious: report.count(Severity::Serious),
                moderate: report.count(Severity::Moderate),
                minor: report.count(Severity::Minor),
            },
            wcag_conformance: &report.conformance,
            local_conformance: &report.local_conformance,
            recommendations: &report.recommendations,
            issues: report
                .findings
                .iter()
                .map(|f| ExportedIssue {
                    criterion: &f.criterion,
                    description: &f.description,
                    severity: f.severity.to_string(),
                    level: f.level.to_string(),
                    suggestion: &f.suggestion,
                    standard_ref: f.references.standard.as_deref().unwrap_or(""),
                    local_ref: f.references.local.as_deref().unwrap_or(""),
                    example: f.example.as_deref().unwrap_or(""),
                })
                .collect(),
        }
    }
}

/// Serialize a report to the pretty-printed export schema
pub fn render_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(&ExportedReport::from(report))?)
}

/// Write the JSON export to a file
pub fn export_json(report: &Report, path: &Path) -> Result<()> {
    let json = render_json(report)?;
    std::fs::write(path, json)?;
    info!("Report exported to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{EvaluationOutcome, RuleFault};
    use crate::error::FetchError;
    use crate::model::criteria;

    fn sample_report() -> Report {
        let findings = vec![
            Finding::new(&criteria::TEXT_ALTERNATIVES, Severity::Critical, WcagLevel::A, "Image without alt attribute: a.png")
                .with_element("<img src=\"a.png\">")
                .with_suggestion("Add a descriptive alt attribute")
                .with_example("<img src=\"a.png\" alt=\"Company logo\">"),
            Finding::new(&criteria::COLOR_CONTRAST, Severity::Moderate, WcagLevel::AA, "Inline colors need manual contrast check")
                .as_heuristic(),
            Finding::new(&criteria::REFLOW, Severity::Serious, WcagLevel::AA, "Missing viewport meta tag"),
        ];
        Report::assemble(
            "https://example.org",
            EvaluationOutcome {
                findings,
                faults: Vec::new(),
            },
        )
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(100.0), "Excellent");
        assert_eq!(classify(90.0), "Excellent");
        assert_eq!(classify(89.99), "Good");
        assert_eq!(classify(70.0), "Good");
        assert_eq!(classify(50.0), "Fair");
        assert_eq!(classify(49.0), "Needs urgent improvement");
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("sarif".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_text_report() {
        let text = render_text(&sample_report(), 10);
        assert!(text.contains("Address:   https://example.org"));
        assert!(text.contains("Score:     83.00/100 (Good)"));
        assert!(text.contains("  Critical: 1"));
        assert!(!text.contains("  Minor:"));
        assert!(text.contains("Level A:   FAIL"));
        assert!(text.contains("Level AAA: FAIL (requires manual review)"));
        assert!(text.contains("5.1 - Text alternatives: FAIL"));
        assert!(text.contains("  1. CRITICAL PRIORITY"));
        assert!(text.contains("[2] [Moderate] 1.4.3 - Color Contrast (Level AA) [heuristic]"));
        assert!(text.contains("      <img src=\"a.png\" alt=\"Company logo\">"));
        assert!(!text.contains("not shown"));
    }

    #[test]
    fn test_text_report_truncates_details() {
        let text = render_text(&sample_report(), 1);
        assert!(text.contains("[1] [Critical]"));
        assert!(!text.contains("[2]"));
        assert!(text.contains("... and 2 more issue(s) not shown"));
    }

    #[test]
    fn test_text_report_degraded() {
        let error = FetchError::InvalidAddress {
            address: "nope".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        let text = render_text(&Report::degraded("nope", &error), 10);
        assert!(text.contains("Score:     0.00/100 (Needs urgent improvement)"));
        assert!(text.contains("EVALUATION FAILED: Invalid address 'nope'"));
        assert!(!text.contains("Recommendations"));
    }

    #[test]
    fn test_text_report_lists_diagnostics() {
        let report = Report::assemble(
            "page.html",
            EvaluationOutcome {
                findings: Vec::new(),
                faults: vec![RuleFault {
                    rule: "Broken".to_string(),
                    message: "boom".to_string(),
                }],
            },
        );
        let text = render_text(&report, 10);
        assert!(text.contains("rule 'Broken' failed: boom"));
        assert!(!text.contains("--- Issues ---"));
    }

    #[test]
    fn test_json_schema() {
        let json = render_json(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["url"], "https://example.org");
        assert_eq!(value["score"], 83.0);
        assert_eq!(value["total_issues"], 3);
        assert_eq!(value["issues_by_severity"]["Critical"], 1);
        assert_eq!(value["issues_by_severity"]["Minor"], 0);
        assert_eq!(value["wcag_conformance"]["A"], false);
        assert_eq!(value["wcag_conformance"]["AAA"], false);
        assert_eq!(value["local_conformance"]["5.1 - Text alternatives"], false);
        assert!(value["recommendations"].as_array().unwrap().len() >= 2);

        let issue = &value["issues"][0];
        assert_eq!(issue["criterion"], "1.1.1 - Text Alternatives");
        assert_eq!(issue["severity"], "Critical");
        assert_eq!(issue["level"], "A");
        assert_eq!(issue["standard_ref"], "WCAG 2.2 - 1.1.1");
        assert_eq!(issue["local_ref"], "ABNT 5.1 - Text alternatives");

        // Absent example exports as an empty string
        assert_eq!(value["issues"][2]["example"], "");
    }

    #[test]
    fn test_export_json_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        export_json(&sample_report(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["issues"].as_array().unwrap().len(), 3);
    }
}

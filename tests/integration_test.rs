// SPDX-License-Identifier: PMPL-1.0-or-later
//! Integration tests for pageauditbot

use pageauditbot::config::{AuditConfig, HeuristicsConfig};
use pageauditbot::report::{generate_report, render_json, OutputFormat};
use pageauditbot::{Auditor, Report, Severity, WcagLevel};
use std::path::Path;

fn audit_fixture(name: &str) -> Report {
    let path = Path::new("tests/fixtures").join(name);
    let markup = std::fs::read_to_string(&path).expect("fixture should exist");
    Auditor::default().audit_html(&path.display().to_string(), &markup)
}

fn count_criterion(report: &Report, prefix: &str) -> usize {
    report
        .findings()
        .iter()
        .filter(|f| f.criterion.starts_with(prefix))
        .count()
}

#[test]
fn test_accessible_fixture_scores_100() {
    let report = audit_fixture("accessible.html");

    assert!(
        report.findings().is_empty(),
        "Accessible fixture should have no findings, got: {:?}",
        report.findings().iter().map(|f| &f.description).collect::<Vec<_>>()
    );
    assert_eq!(report.score(), 100.0);
    assert!(report.conforms(WcagLevel::A));
    assert!(report.conforms(WcagLevel::AA));
    assert!(!report.conforms(WcagLevel::AAA));
    assert!(report.local_conformance().values().all(|ok| *ok));
    assert!(report.diagnostics().is_empty());
}

#[test]
fn test_inaccessible_fixture() {
    let report = audit_fixture("inaccessible.html");

    assert!(
        report.total_count() >= 20,
        "Inaccessible fixture should have many findings, got {}",
        report.total_count()
    );
    assert_eq!(report.score(), 0.0);
    assert!(report.has_critical());
    assert!(!report.conforms(WcagLevel::A));
    assert!(!report.conforms(WcagLevel::AA));

    assert_eq!(count_criterion(&report, "1.1.1"), 3);
    assert_eq!(count_criterion(&report, "2.1.1"), 2);
    assert_eq!(count_criterion(&report, "3.1.1"), 1);
    assert_eq!(count_criterion(&report, "1.4.4"), 1);
    assert_eq!(count_criterion(&report, "1.4.3"), 1);

    let local = report.local_conformance();
    assert!(!local["5.1 - Text alternatives"]);
    assert!(!local["5.3 - Semantic structure"]);
    assert!(!local["6.1 - Keyboard navigation"]);
    assert!(!local["8.2 - Field identification"]);

    assert!(report.recommendations()[0].starts_with("CRITICAL PRIORITY"));
    assert!(report.recommendations()[1].starts_with("HIGH PRIORITY"));
}

#[test]
fn test_partial_fixture() {
    let report = audit_fixture("partial.html");

    assert_eq!(report.total_count(), 3, "{:?}", report.findings());
    assert_eq!(report.count(Severity::Moderate), 1);
    assert_eq!(report.count(Severity::Minor), 2);
    assert_eq!(report.score(), 96.0);
    assert!(!report.conforms(WcagLevel::A));

    // Portuguese generic phrase is in the default list
    let generic = &report.findings()[0];
    assert!(generic.description.contains("leia mais"));
    assert!(generic.heuristic);

    let local = report.local_conformance();
    assert!(local["5.1 - Text alternatives"]);
    assert!(!local["5.3 - Semantic structure"]);
    assert!(local["6.1 - Keyboard navigation"]);
    assert!(local["8.2 - Field identification"]);
}

#[test]
fn test_findings_follow_rule_order() {
    let report = audit_fixture("inaccessible.html");
    let first = report.findings().first().expect("findings");
    let last = report.findings().last().expect("findings");
    assert!(first.criterion.starts_with("1.1.1"));
    assert!(last.criterion.starts_with("1.4.4"));
}

#[test]
fn test_scenario_lone_image() {
    let markup = r##"<!DOCTYPE html>
<html lang="en"><head>
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Gallery</title></head>
<body><a href="#main">Skip</a><header><h1>Gallery</h1></header><nav></nav>
<main id="main"><img src="x.png"></main></body></html>"##;
    let report = Auditor::default().audit_html("inline", markup);

    assert_eq!(report.total_count(), 1, "{:?}", report.findings());
    let finding = &report.findings()[0];
    assert!(finding.criterion.starts_with("1.1.1"));
    assert_eq!(finding.severity, Severity::Critical);
    assert_eq!(finding.level, WcagLevel::A);
}

#[test]
fn test_scenario_two_h1() {
    let report = Auditor::default().audit_html("inline", "<h1>One</h1><h1>Two</h1>");
    let semantic: Vec<_> = report
        .findings()
        .iter()
        .filter(|f| f.criterion.starts_with("1.3.1") && f.description.contains("h1"))
        .collect();

    assert_eq!(semantic.len(), 1);
    assert_eq!(semantic[0].severity, Severity::Moderate);
    assert_eq!(semantic[0].level, WcagLevel::A);
}

#[test]
fn test_scenario_missing_lang() {
    let report = Auditor::default().audit_html("inline", "<html><head><title>Page</title></head></html>");

    assert_eq!(count_criterion(&report, "3.1.1"), 1);
    let lang = report
        .findings()
        .iter()
        .find(|f| f.criterion.starts_with("3.1.1"))
        .expect("language finding");
    assert_eq!(lang.severity, Severity::Critical);
    assert_eq!(lang.level, WcagLevel::A);
    assert!(!report.conforms(WcagLevel::A));
}

#[test]
fn test_scenario_zoom_locked() {
    let markup = r##"<!DOCTYPE html>
<html lang="en"><head>
<meta name="viewport" content="width=device-width, user-scalable=no">
<title>Zoom</title></head>
<body><a href="#main">Skip</a><header><h1>Zoom</h1></header><nav></nav>
<main id="main"><p>Text</p></main></body></html>"##;
    let report = Auditor::default().audit_html("inline", markup);

    assert_eq!(report.total_count(), 1, "{:?}", report.findings());
    let finding = &report.findings()[0];
    assert!(finding.criterion.starts_with("1.4.4"));
    assert_eq!(finding.severity, Severity::Critical);
    assert_eq!(finding.level, WcagLevel::AA);
    assert!(report.conforms(WcagLevel::A));
    assert!(!report.conforms(WcagLevel::AA));
}

#[test]
fn test_malformed_markup_still_produces_report() {
    let report = Auditor::default().audit_html("broken", "<html><body><div><img src=a.png<p>unclosed <table><tr>");
    assert!(!report.is_degraded());
    assert!(report.total_count() > 0);
    assert!(report.score() <= 100.0);
}

#[test]
fn test_custom_heuristics_change_findings() {
    let config = AuditConfig {
        heuristics: HeuristicsConfig {
            generic_link_phrases: vec!["details".to_string()],
            ..HeuristicsConfig::default()
        },
        ..AuditConfig::default()
    };
    let markup = r#"<a href="/a">Details</a><a href="/b">click here</a>"#;
    let report = Auditor::new(config).audit_html("inline", markup);

    let generic: Vec<_> = report
        .findings()
        .iter()
        .filter(|f| f.description.starts_with("Link with generic text"))
        .collect();
    assert_eq!(generic.len(), 1);
    assert!(generic[0].description.contains("Details"));
}

#[test]
fn test_json_export_of_fixture() {
    let report = audit_fixture("partial.html");
    let json = render_json(&report).expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["total_issues"], 3);
    assert_eq!(value["issues_by_severity"]["Moderate"], 1);
    assert_eq!(value["wcag_conformance"]["AA"], false);
    assert_eq!(value["issues"][0]["severity"], "Moderate");
    assert_eq!(value["issues"][0]["standard_ref"], "WCAG 2.2 - 2.4.4");
}

#[test]
fn test_text_report_of_fixture() {
    let report = audit_fixture("accessible.html");
    let text = generate_report(&report, OutputFormat::Text, 10).expect("text");
    assert!(text.contains("Score:     100.00/100 (Excellent)"));
    assert!(text.contains("Level AA:  PASS"));
    assert!(!text.contains("--- Issues ---"));
}

// SPDX-License-Identifier: PMPL-1.0-or-later
//! Evaluation engine: runs every registered rule against one document.
//!
//! Findings are concatenated in registration order, preserving each rule's
//! own emission order. A rule that panics is isolated: its failure becomes a
//! [`RuleFault`] diagnostic and the remaining rules still run.

use crate::document::DocumentModel;
use crate::model::Finding;
use crate::rules::{Rule, RuleRegistry};
use serde::Serialize;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, error, warn};

/// A rule that failed unexpectedly during evaluation
///
/// Kept apart from findings so an internal failure is never reported as
/// an accessibility issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleFault {
    /// Name of the failing rule
    pub rule: String,
    /// Panic message, when one could be recovered
    pub message: String,
}

/// Result of one evaluation pass
#[derive(Debug, Clone, Default)]
pub struct EvaluationOutcome {
    /// Findings in rule order, then emission order
    pub findings: Vec<Finding>,
    /// Rules that failed and were skipped
    pub faults: Vec<RuleFault>,
}

/// Runs a rule registry over documents
pub struct Engine {
    registry: RuleRegistry,
}

impl Engine {
    pub fn new(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    /// Run every rule once against the document
    pub fn evaluate(&self, document: &DocumentModel) -> EvaluationOutcome {
        let mut outcome = EvaluationOutcome::default();

        for rule in self.registry.iter() {
            match run_isolated(rule, document) {
                Ok(findings) => {
                    debug!("{}: {} finding(s)", rule.name(), findings.len());
                    outcome.findings.extend(findings);
                }
                Err(fault) => {
                    warn!("Rule '{}' failed and was skipped: {}", fault.rule, fault.message);
                    outcome.faults.push(fault);
                }
            }
        }

        outcome
    }
}

/// Send panic reports through tracing instead of the default stderr hook
///
/// Install once at process start. Rule panics are still caught and turned
/// into [`RuleFault`]s; this only changes how the panic itself is printed.
pub fn log_panics() {
    panic::set_hook(Box::new(|info| {
        let message = panic_message(info.payload());
        match info.location() {
            Some(location) => error!("panic at {}:{}: {}", location.file(), location.line(), message),
            None => error!("panic: {}", message),
        }
    }));
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

fn run_isolated(rule: &dyn Rule, document: &DocumentModel) -> Result<Vec<Finding>, RuleFault> {
    panic::catch_unwind(AssertUnwindSafe(|| rule.evaluate(document))).map_err(|payload| RuleFault {
        rule: rule.name().to_string(),
        message: panic_message(&*payload),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HeuristicsConfig;
    use crate::model::{criteria, Severity, WcagLevel};
    use crate::rules::{language::PageLanguageRule, title::PageTitleRule};

    struct PanickingRule;

    impl Rule for PanickingRule {
        fn name(&self) -> &str {
            "Panicking"
        }

        fn description(&self) -> &str {
            "Always fails"
        }

        fn evaluate(&self, _document: &DocumentModel) -> Vec<Finding> {
            panic!("selector table corrupted");
        }
    }

    struct FixedRule(usize);

    impl Rule for FixedRule {
        fn name(&self) -> &str {
            "Fixed"
        }

        fn description(&self) -> &str {
            "Emits a fixed number of findings"
        }

        fn evaluate(&self, _document: &DocumentModel) -> Vec<Finding> {
            (0..self.0)
                .map(|i| {
                    Finding::new(&criteria::PAGE_TITLED, Severity::Minor, WcagLevel::A, &format!("fixed {}", i))
                })
                .collect()
        }
    }

    #[test]
    fn test_rule_order_preserved() {
        let engine = Engine::new(
            RuleRegistry::new()
                .with(PageTitleRule)
                .with(FixedRule(2))
                .with(PageLanguageRule),
        );
        let outcome = engine.evaluate(&DocumentModel::parse("<html><body></body></html>"));

        let descriptions: Vec<&str> = outcome.findings.iter().map(|f| f.description.as_str()).collect();
        assert_eq!(
            descriptions,
            vec![
                "Page has no <title> element",
                "fixed 0",
                "fixed 1",
                "Missing lang attribute on the <html> element",
            ]
        );
        assert!(outcome.faults.is_empty());
    }

    #[test]
    fn test_panicking_rule_is_isolated() {
        let engine = Engine::new(
            RuleRegistry::new()
                .with(FixedRule(1))
                .with(PanickingRule)
                .with(FixedRule(1)),
        );
        let outcome = engine.evaluate(&DocumentModel::parse(""));

        assert_eq!(outcome.findings.len(), 2);
        assert_eq!(
            outcome.faults,
            vec![RuleFault {
                rule: "Panicking".to_string(),
                message: "selector table corrupted".to_string(),
            }]
        );
    }

    #[test]
    fn test_empty_registry() {
        let outcome = Engine::new(RuleRegistry::new()).evaluate(&DocumentModel::parse("<img>"));
        assert!(outcome.findings.is_empty());
        assert!(outcome.faults.is_empty());
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let engine = Engine::new(RuleRegistry::with_defaults(&HeuristicsConfig::default()));
        let document = DocumentModel::parse(
            r#"<html><body><img src="x.png"><a href="/" target="_blank">here</a><table></table></body></html>"#,
        );
        let first = engine.evaluate(&document);
        let second = engine.evaluate(&document);
        assert_eq!(first.findings, second.findings);
        assert!(!first.findings.is_empty());
    }

    #[test]
    fn test_panic_message_payloads() {
        assert_eq!(panic_message(&"static"), "static");
        assert_eq!(panic_message(&String::from("owned")), "owned");
        assert_eq!(panic_message(&42_u8), "unknown panic");
    }

    #[test]
    fn test_faults_recorded_with_logging_hook() {
        log_panics();
        let outcome = Engine::new(RuleRegistry::new().with(PanickingRule).with(FixedRule(1)))
            .evaluate(&DocumentModel::parse(""));
        let _ = panic::take_hook();

        assert_eq!(outcome.findings.len(), 1);
        assert_eq!(outcome.faults.len(), 1);
        assert_eq!(outcome.faults[0].message, "selector table corrupted");
    }
}

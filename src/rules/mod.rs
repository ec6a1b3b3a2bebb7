// SPDX-License-Identifier: PMPL-1.0-or-later
//! Accessibility rules implementing WCAG 2.2 checks.
//!
//! Each rule module focuses on one WCAG criterion or a group of related
//! criteria. Rules read the shared [`DocumentModel`] and return their
//! findings; they never see each other's output.

pub mod alt_text;
pub mod aria;
pub mod contrast;
pub mod forms;
pub mod keyboard;
pub mod language;
pub mod links;
pub mod media;
pub mod semantic;
pub mod tables;
pub mod title;
pub mod viewport;

use crate::config::HeuristicsConfig;
use crate::document::DocumentModel;
use crate::model::Finding;

/// Trait implemented by all rules
///
/// `evaluate` must be total and free of side effects: a missing element
/// is reported as a finding, never as an error.
pub trait Rule: Send + Sync {
    /// Human-readable name of this rule
    fn name(&self) -> &str;

    /// Short description of what this rule checks
    fn description(&self) -> &str;

    /// Inspect the document and return findings in emission order
    fn evaluate(&self, document: &DocumentModel) -> Vec<Finding>;
}

/// Ordered collection of rules run by the engine
#[derive(Default)]
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The full catalogue in its canonical order
    pub fn with_defaults(heuristics: &HeuristicsConfig) -> Self {
        Self::new()
            .with(alt_text::TextAlternativesRule::new(&heuristics.decorative_class_markers))
            .with(semantic::SemanticStructureRule)
            .with(contrast::ContrastRule)
            .with(keyboard::KeyboardRule)
            .with(forms::FormLabelRule)
            .with(media::MediaRule)
            .with(title::PageTitleRule)
            .with(language::PageLanguageRule)
            .with(links::LinkPurposeRule::new(
                &heuristics.generic_link_phrases,
                &heuristics.new_window_phrases,
            ))
            .with(tables::TableStructureRule)
            .with(aria::AriaRule)
            .with(viewport::ViewportRule)
    }

    /// Append a rule, builder style
    pub fn with(mut self, rule: impl Rule + 'static) -> Self {
        self.register(Box::new(rule));
        self
    }

    /// Append a rule after the existing ones
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Rules in registration order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Lowercase and trim a list of configured phrases for matching
pub(crate) fn normalize_phrases(phrases: &[String]) -> Vec<String> {
    phrases
        .iter()
        .map(|p| p.trim().to_lowercase())
        .filter(|p| !p.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalogue_order() {
        let registry = RuleRegistry::with_defaults(&HeuristicsConfig::default());
        let names: Vec<&str> = registry.iter().map(|r| r.name()).collect();
        assert_eq!(registry.len(), 12);
        assert_eq!(names.first(), Some(&"Text Alternatives"));
        assert_eq!(names.last(), Some(&"Responsive Viewport"));
    }

    #[test]
    fn test_register_appends() {
        let mut registry = RuleRegistry::new();
        assert!(registry.is_empty());
        registry.register(Box::new(title::PageTitleRule));
        let registry = registry.with(language::PageLanguageRule);
        let names: Vec<&str> = registry.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Page Title", "Page Language"]);
    }

    #[test]
    fn test_normalize_phrases() {
        let phrases = vec![" Click Here ".to_string(), "".to_string(), "MORE".to_string()];
        assert_eq!(normalize_phrases(&phrases), vec!["click here", "more"]);
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later
//! Finding model shared by every rule and by the report assembler.
//!
//! Findings are plain values: a rule builds one with the chained `with_*`
//! methods and hands it to the engine, after which nothing mutates it.

pub mod criteria;

pub use criteria::Criterion;

use serde::{Deserialize, Serialize};

/// Maximum number of characters kept from an offending element's markup
pub const SNIPPET_MAX_CHARS: usize = 100;

/// Severity of a finding, ordered by impact (`Critical` is the greatest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Cosmetic or best-practice issue
    Minor,
    /// Degrades the experience for some users
    Moderate,
    /// Blocks some users from parts of the page
    Serious,
    /// Blocks users outright
    Critical,
}

impl Severity {
    /// All severities, highest impact first
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::Serious,
        Severity::Moderate,
        Severity::Minor,
    ];

    /// Points deducted from the score for one finding of this severity
    pub fn weight(&self) -> u32 {
        match self {
            Severity::Critical => 10,
            Severity::Serious => 5,
            Severity::Moderate => 2,
            Severity::Minor => 1,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Critical => write!(f, "Critical"),
            Severity::Serious => write!(f, "Serious"),
            Severity::Moderate => write!(f, "Moderate"),
            Severity::Minor => write!(f, "Minor"),
        }
    }
}

/// WCAG conformance level
///
/// Levels nest: AA requires A, AAA requires AA. A finding is tagged with
/// the lowest level it violates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WcagLevel {
    /// Level A - minimum conformance
    A,
    /// Level AA - standard conformance
    AA,
    /// Level AAA - enhanced conformance
    AAA,
}

impl WcagLevel {
    /// All levels, lowest first
    pub const ALL: [WcagLevel; 3] = [WcagLevel::A, WcagLevel::AA, WcagLevel::AAA];

    /// The level that must hold before this one can be claimed
    pub fn requires(&self) -> Option<WcagLevel> {
        match self {
            WcagLevel::A => None,
            WcagLevel::AA => Some(WcagLevel::A),
            WcagLevel::AAA => Some(WcagLevel::AA),
        }
    }
}

impl std::fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WcagLevel::A => write!(f, "A"),
            WcagLevel::AA => write!(f, "AA"),
            WcagLevel::AAA => write!(f, "AAA"),
        }
    }
}

/// References into the governing standard and the local regulation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalReferences {
    /// WCAG reference, e.g. "WCAG 2.2 - 1.1.1"
    pub standard: Option<String>,
    /// ABNT NBR 17225 reference, e.g. "ABNT 5.1 - Text alternatives"
    pub local: Option<String>,
}

/// One detected accessibility issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Criterion label, e.g. "1.1.1 - Text Alternatives"
    pub criterion: String,
    /// What was observed
    pub description: String,
    /// Severity level
    pub severity: Severity,
    /// Lowest WCAG level this finding violates
    pub level: WcagLevel,
    /// Truncated markup of the offending node
    pub element: String,
    /// Remediation text
    pub suggestion: String,
    /// Standard and local-regulation references
    pub references: ExternalReferences,
    /// Corrected-code illustration
    pub example: Option<String>,
    /// Produced by an approximate check rather than a certain one
    pub heuristic: bool,
}

impl Finding {
    /// Create a finding for a catalogue criterion
    pub fn new(criterion: &Criterion, severity: Severity, level: WcagLevel, description: &str) -> Self {
        Self {
            criterion: criterion.label(),
            description: description.to_string(),
            severity,
            level,
            element: String::new(),
            suggestion: String::new(),
            references: criterion.references(),
            example: None,
            heuristic: false,
        }
    }

    /// Set the offending element markup, truncated to [`SNIPPET_MAX_CHARS`]
    pub fn with_element(mut self, element: &str) -> Self {
        self.element = truncate_snippet(element);
        self
    }

    /// Set the remediation text
    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = suggestion.to_string();
        self
    }

    /// Set the corrected-code example
    pub fn with_example(mut self, example: &str) -> Self {
        self.example = Some(example.to_string());
        self
    }

    /// Mark as the output of a heuristic check
    pub fn as_heuristic(mut self) -> Self {
        self.heuristic = true;
        self
    }

    /// Criterion identifier: the label text before the first `-`
    pub fn criterion_id(&self) -> &str {
        self.criterion
            .split('-')
            .next()
            .unwrap_or_default()
            .trim()
    }
}

/// Cut markup down to [`SNIPPET_MAX_CHARS`] characters on a char boundary
pub fn truncate_snippet(markup: &str) -> String {
    match markup.char_indices().nth(SNIPPET_MAX_CHARS) {
        Some((byte_idx, _)) => markup[..byte_idx].to_string(),
        None => markup.to_string(),
    }
}

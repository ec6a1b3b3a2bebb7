// SPDX-License-Identifier: PMPL-1.0-or-later
//! Configuration handling for pageauditbot
//!
//! Every section is optional in the TOML file; missing keys take the
//! defaults below, so an empty file is a valid configuration.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Page retrieval settings
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Word lists behind the heuristic checks
    #[serde(default)]
    pub heuristics: HeuristicsConfig,

    /// Text report settings
    #[serde(default)]
    pub report: ReportConfig,
}

impl AuditConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Page retrieval configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with each request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

/// Heuristic word lists
///
/// These are locale-specific guesses, not ground truth. Deployments can
/// replace them to match the language of the pages they audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeuristicsConfig {
    /// Class-name substrings marking an image as decorative (case-insensitive)
    #[serde(default = "default_decorative_markers")]
    pub decorative_class_markers: Vec<String>,

    /// Link texts considered non-descriptive (case-insensitive exact match)
    #[serde(default = "default_generic_link_phrases")]
    pub generic_link_phrases: Vec<String>,

    /// Phrases in link text that announce a new window or tab
    #[serde(default = "default_new_window_phrases")]
    pub new_window_phrases: Vec<String>,
}

impl Default for HeuristicsConfig {
    fn default() -> Self {
        Self {
            decorative_class_markers: default_decorative_markers(),
            generic_link_phrases: default_generic_link_phrases(),
            new_window_phrases: default_new_window_phrases(),
        }
    }
}

/// Text report configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Findings shown in detail before the text report truncates
    #[serde(default = "default_max_detailed_issues")]
    pub max_detailed_issues: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_detailed_issues: default_max_detailed_issues(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("pageauditbot/{}", env!("CARGO_PKG_VERSION"))
}

fn default_max_detailed_issues() -> usize {
    10
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_decorative_markers() -> Vec<String> {
    to_strings(&["icon", "decor", "bg", "background"])
}

fn default_generic_link_phrases() -> Vec<String> {
    to_strings(&[
        "click here",
        "learn more",
        "read more",
        "here",
        "more",
        "clique aqui",
        "saiba mais",
        "leia mais",
        "aqui",
        "mais",
    ])
}

fn default_new_window_phrases() -> Vec<String> {
    to_strings(&["new window", "new tab", "nova janela", "nova aba"])
}

// SPDX-License-Identifier: PMPL-1.0-or-later
//! Audit pipeline: fetch, parse, evaluate, assemble.
//!
//! The parsed document never crosses an `.await`; fetching finishes first,
//! then parsing and evaluation run synchronously and the document is
//! dropped before the report is returned.

use crate::config::AuditConfig;
use crate::document::DocumentModel;
use crate::engine::Engine;
use crate::error::Result;
use crate::fetch::{Fetcher, HttpFetcher};
use crate::report::{generate_report, OutputFormat, Report};
use crate::rules::RuleRegistry;
use tracing::{info, warn};

/// Runs complete audits with one rule registry
pub struct Auditor {
    engine: Engine,
    config: AuditConfig,
}

impl Auditor {
    /// Auditor with the default rule catalogue tuned by `config`
    pub fn new(config: AuditConfig) -> Self {
        let registry = RuleRegistry::with_defaults(&config.heuristics);
        Self::with_registry(config, registry)
    }

    /// Auditor with a caller-supplied registry
    pub fn with_registry(config: AuditConfig, registry: RuleRegistry) -> Self {
        Self {
            engine: Engine::new(registry),
            config,
        }
    }

    /// HTTP fetcher honouring the configured timeout and user agent
    pub fn http_fetcher(&self) -> Result<HttpFetcher> {
        HttpFetcher::new(&self.config.fetch)
    }

    /// Render a report with the configured detail limit
    pub fn render(&self, report: &Report, format: OutputFormat) -> Result<String> {
        generate_report(report, format, self.config.report.max_detailed_issues)
    }

    /// Audit markup that is already in memory
    pub fn audit_html(&self, address: &str, markup: &str) -> Report {
        let document = DocumentModel::parse(markup);
        self.evaluate(address, &document)
    }

    /// Audit raw bytes, decoding them leniently as UTF-8
    pub fn audit_bytes(&self, address: &str, bytes: &[u8]) -> Report {
        let document = DocumentModel::parse_bytes(bytes);
        self.evaluate(address, &document)
    }

    /// Fetch and audit an address
    ///
    /// Never fails: a fetch error yields a degraded report.
    pub async fn audit_url(&self, fetcher: &dyn Fetcher, address: &str) -> Report {
        match fetcher.fetch(address).await {
            Ok(bytes) => self.audit_bytes(address, &bytes),
            Err(e) => {
                warn!("Fetch failed for {}: {}", address, e);
                Report::degraded(address, &e)
            }
        }
    }

    fn evaluate(&self, address: &str, document: &DocumentModel) -> Report {
        let outcome = self.engine.evaluate(document);
        let report = Report::assemble(address, outcome);
        info!(
            "Audited {}: {} finding(s), score {:.2}",
            address, report.total_count(), report.score()
        );
        report
    }
}

impl Default for Auditor {
    fn default() -> Self {
        Self::new(AuditConfig::default())
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later
//! Pageauditbot CLI - WCAG 2.2 / ABNT NBR 17225:2025 page accessibility auditor

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use pageauditbot::config::AuditConfig;
use pageauditbot::report::OutputFormat;
use pageauditbot::{Auditor, Report};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Exit status when the page could not be evaluated
const EXIT_DEGRADED: i32 = 2;
/// Exit status when critical findings are present
const EXIT_CRITICAL: i32 = 1;

/// Accessibility auditor for single web pages
#[derive(Parser)]
#[command(name = "pageauditbot")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    format: FormatArg,

    /// Write the report to a file instead of stdout
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and audit a page over HTTP(S)
    Audit {
        /// Page URL
        url: String,

        /// Request timeout in seconds (overrides the config file)
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Audit an HTML file on disk
    File {
        /// HTML file to audit
        path: PathBuf,
    },
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable text
    Text,
    /// JSON export schema
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Initialize tracing subscriber
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("pageauditbot=debug")
    } else {
        EnvFilter::new("pageauditbot=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    pageauditbot::engine::log_panics();

    let mut config = match cli.config {
        Some(ref path) => AuditConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AuditConfig::default(),
    };

    if let Commands::Audit { timeout: Some(secs), .. } = &cli.command {
        config.fetch.timeout_secs = *secs;
    }
    let auditor = Auditor::new(config);

    let report = match cli.command {
        Commands::Audit { url, .. } => {
            let fetcher = auditor.http_fetcher()?;
            auditor.audit_url(&fetcher, &url).await
        }

        Commands::File { path } => {
            let bytes = std::fs::read(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            auditor.audit_bytes(&path.display().to_string(), &bytes)
        }
    };

    let rendered = auditor.render(&report, cli.format.into())?;
    write_output(&rendered, cli.output.as_deref())?;

    std::process::exit(exit_status(&report));
}

fn exit_status(report: &Report) -> i32 {
    if report.is_degraded() {
        EXIT_DEGRADED
    } else if report.has_critical() {
        EXIT_CRITICAL
    } else {
        0
    }
}

/// Write output to file or stdout
fn write_output(content: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(p) => {
            std::fs::write(p, content)
                .with_context(|| format!("Failed to write {}", p.display()))?;
            eprintln!("Report written to {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}

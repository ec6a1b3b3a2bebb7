// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for pageauditbot

use std::time::Duration;
use thiserror::Error;

/// Failure to retrieve the page under audit
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("Timed out after {timeout:?} fetching {address}")]
    Timeout { address: String, timeout: Duration },

    #[error("HTTP {status} fetching {address}")]
    Status { address: String, status: u16 },

    #[error("Transport error fetching {address}: {source}")]
    Transport {
        address: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Main error type for pageauditbot
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),
}

pub type Result<T> = std::result::Result<T, AuditError>;

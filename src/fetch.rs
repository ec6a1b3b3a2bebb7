// SPDX-License-Identifier: PMPL-1.0-or-later
//! Page retrieval.
//!
//! The only suspending operation in an audit. Every request is bounded by
//! the configured timeout and the response is dropped on every exit path,
//! which releases the underlying connection back to the client pool.

use crate::config::FetchConfig;
use crate::error::FetchError;
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::debug;

/// Something that can turn an address into raw page bytes
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, address: &str) -> Result<Vec<u8>, FetchError>;
}

/// HTTP(S) fetcher backed by a pooled reqwest client
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Create a fetcher from configuration
    pub fn new(config: &FetchConfig) -> crate::error::Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|source| FetchError::Transport {
                address: String::new(),
                source,
            })?;

        Ok(Self {
            client,
            timeout: config.timeout(),
        })
    }

    fn transport_error(&self, address: &str, source: reqwest::Error) -> FetchError {
        if source.is_timeout() {
            FetchError::Timeout {
                address: address.to_string(),
                timeout: self.timeout,
            }
        } else {
            FetchError::Transport {
                address: address.to_string(),
                source,
            }
        }
    }
}

/// Parse an address, accepting only http and https
pub fn parse_address(address: &str) -> Result<Url, FetchError> {
    let url = Url::parse(address.trim()).map_err(|e| FetchError::InvalidAddress {
        address: address.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::InvalidAddress {
            address: address.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, address: &str) -> Result<Vec<u8>, FetchError> {
        let url = parse_address(address)?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(address, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                address: address.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(address, e))?;

        debug!("Fetched {} byte(s) from {}", body.len(), address);
        Ok(body.to_vec())
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later
//! Page retrieval for audits.
//!
//! The analyzer never talks to the network directly; it goes through the
//! [`PageFetcher`] trait so tests can supply canned documents instead of a
//! live server.

use crate::config::AuditConfig;
use crate::error::{PagebotError, Result};
use reqwest::blocking::Client;
use std::time::Duration;

/// Reject anything that is not an http(s) URL before fetching
pub fn validate_url(url: &str) -> Result<()> {
    let parsed = url::Url::parse(url)?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(PagebotError::InvalidScheme(other.to_string())),
    }
}

/// Retrieves the markup of a page for analysis
pub trait PageFetcher {
    /// Fetch the document body at `url`.
    ///
    /// Non-2xx responses are errors, like any network failure.
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Production fetcher backed by a blocking HTTP client
pub struct HttpFetcher {
    client: Client,
    user_agent: String,
}

impl HttpFetcher {
    /// Build a fetcher using the configured timeout and User-Agent
    pub fn new(config: &AuditConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            user_agent: config.user_agent.clone(),
        })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .header("User-Agent", self.user_agent.clone())
            .send()?
            .error_for_status()?;

        Ok(response.text()?)
    }
}

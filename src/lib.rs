// SPDX-License-Identifier: PMPL-1.0-or-later
//! Pagebot - Live Page Accessibility Auditor
//!
//! Part of the gitbot-fleet ecosystem. Pagebot fetches a web page over HTTP,
//! parses the HTML, and reports a small set of accessibility heuristics with
//! a derived score, remediation tips, and passed checks.
//!
//! ## Checks
//!
//! - **Alt Text**: `<img>` elements without an `alt` attribute
//! - **Headings**: documents with no `<h1>` to `<h6>` tags
//! - **Page Title**: missing, empty, or whitespace-only `<title>`
//! - **Form Labels**: form inputs without a `<label for>` or `aria-label`
//!
//! An audit never fails: retrieval problems surface as a single fetch-error
//! finding, so callers always receive a finding set to render.

pub mod analyzers;
pub mod config;
pub mod error;
pub mod fetch;
pub mod report;

use analyzers::{AuditCategory, Finding, FindingSet};
use config::AuditConfig;
use fetch::{HttpFetcher, PageFetcher};
use scraper::Html;
use tracing::info;

/// Audit the page at `url` over HTTP.
///
/// Fetches with the configured timeout, parses the body, and runs every
/// rule in order. Any retrieval failure, including a non-2xx status,
/// becomes a single fetch-error finding instead of an error return.
pub fn analyze_url(url: &str, config: &AuditConfig) -> FindingSet {
    match HttpFetcher::new(config) {
        Ok(fetcher) => analyze_with_fetcher(url, &fetcher),
        Err(e) => fetch_error(&e),
    }
}

/// Audit the page at `url` through the given fetcher.
///
/// This is the seam tests use to audit canned documents without a network.
pub fn analyze_with_fetcher(url: &str, fetcher: &dyn PageFetcher) -> FindingSet {
    info!("Auditing {}", url);

    let body = match fetcher.fetch(url) {
        Ok(body) => body,
        Err(e) => return fetch_error(&e),
    };

    // Parsing is tolerant: malformed HTML still yields a traversable tree
    let document = Html::parse_document(&body);
    let findings = analyzers::analyze_document(&document);

    info!("Audit of {} produced {} finding(s)", url, findings.len());
    findings
}

fn fetch_error(error: &error::PagebotError) -> FindingSet {
    let mut findings = FindingSet::new();
    findings.add(Finding::new(AuditCategory::FetchError, &error.to_string()));
    findings
}

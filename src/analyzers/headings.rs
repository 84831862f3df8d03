// SPDX-License-Identifier: PMPL-1.0-or-later
//! Heading presence rule.
//!
//! A page with no `<h1>` to `<h6>` at all gives screen reader users nothing
//! to navigate by. This is a document-level check: it emits at most one
//! finding regardless of document size.

use crate::analyzers::{Analyzer, AuditCategory, Finding};
use scraper::{Html, Selector};

/// Detail string for the document-level heading finding
const NO_HEADINGS_DETAIL: &str = "<h1> to <h6> not found";

/// Analyzer for documents without any heading tags
pub struct HeadingAnalyzer;

impl Analyzer for HeadingAnalyzer {
    fn name(&self) -> &str {
        "Heading Analyzer"
    }

    fn description(&self) -> &str {
        "Checks that the document contains at least one heading tag"
    }

    fn category(&self) -> AuditCategory {
        AuditCategory::NoHeadings
    }

    fn analyze_document(&self, document: &Html) -> Vec<Finding> {
        let heading_selector =
            Selector::parse("h1, h2, h3, h4, h5, h6").expect("valid selector");

        if document.select(&heading_selector).next().is_none() {
            return vec![Finding::new(AuditCategory::NoHeadings, NO_HEADINGS_DETAIL)];
        }

        Vec::new()
    }
}

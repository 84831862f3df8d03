// SPDX-License-Identifier: PMPL-1.0-or-later
//! Page title rule.
//!
//! Flags documents whose `<title>` is absent, empty, or whitespace-only.
//! The title is what screen readers announce first and what browser tabs
//! and search results display.

use crate::analyzers::{Analyzer, AuditCategory, Finding};
use scraper::{Html, Selector};

/// Detail string for the document-level title finding
const MISSING_TITLE_DETAIL: &str = "<title> tag missing or empty";

/// Analyzer for missing or empty page titles
pub struct PageTitleAnalyzer;

impl Analyzer for PageTitleAnalyzer {
    fn name(&self) -> &str {
        "Page Title Analyzer"
    }

    fn description(&self) -> &str {
        "Checks that the document has a non-empty <title>"
    }

    fn category(&self) -> AuditCategory {
        AuditCategory::MissingTitle
    }

    fn analyze_document(&self, document: &Html) -> Vec<Finding> {
        let title_selector = Selector::parse("title").expect("valid selector");

        let has_title = document.select(&title_selector).next().is_some_and(|title| {
            !title.text().collect::<String>().trim().is_empty()
        });

        if !has_title {
            return vec![Finding::new(AuditCategory::MissingTitle, MISSING_TITLE_DETAIL)];
        }

        Vec::new()
    }
}

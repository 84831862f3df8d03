// SPDX-License-Identifier: PMPL-1.0-or-later
//! Page audit rules and finding types.
//!
//! Each analyzer module implements one accessibility heuristic over a
//! parsed HTML document. Analyzers run in a fixed order and their findings
//! are concatenated in that order, never de-duplicated.

pub mod alt_text;
pub mod forms;
pub mod headings;
pub mod page_title;

use scraper::Html;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Category a finding is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuditCategory {
    /// `<img>` without an `alt` attribute
    MissingAltText,
    /// No `<h1>` to `<h6>` anywhere in the document
    NoHeadings,
    /// `<title>` absent or empty
    MissingTitle,
    /// Form control without a `<label for>` or `aria-label`
    FormInputMissingLabel,
    /// The page could not be retrieved or parsed
    FetchError,
}

impl AuditCategory {
    /// Emoji marker used in text reports
    pub fn icon(&self) -> &'static str {
        match self {
            AuditCategory::MissingAltText => "❌",
            AuditCategory::NoHeadings => "⚠️",
            AuditCategory::MissingTitle => "❌",
            AuditCategory::FormInputMissingLabel => "⚠️",
            AuditCategory::FetchError => "🚫",
        }
    }
}

impl std::fmt::Display for AuditCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditCategory::MissingAltText => write!(f, "Missing Alt Text"),
            AuditCategory::NoHeadings => write!(f, "No Headings Found"),
            AuditCategory::MissingTitle => write!(f, "Missing <title>"),
            AuditCategory::FormInputMissingLabel => write!(f, "Form Input Missing Label"),
            AuditCategory::FetchError => write!(f, "Fetch Error"),
        }
    }
}

/// A single audit observation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Category this finding is attributed to
    pub category: AuditCategory,
    /// The offending element's markup, a fixed description, or an error message
    pub detail: String,
}

impl Finding {
    /// Create a new finding
    pub fn new(category: AuditCategory, detail: &str) -> Self {
        Self {
            category,
            detail: detail.to_string(),
        }
    }
}

/// An ordered collection of findings from one audit pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FindingSet {
    /// All findings, in rule evaluation order
    pub findings: Vec<Finding>,
}

impl FindingSet {
    /// Create empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a finding
    pub fn add(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    /// Extend with findings from an iterator
    pub fn extend(&mut self, findings: impl IntoIterator<Item = Finding>) {
        self.findings.extend(findings);
    }

    /// Get findings in a category
    pub fn by_category(&self, category: AuditCategory) -> Vec<&Finding> {
        self.findings.iter().filter(|f| f.category == category).collect()
    }

    /// Check whether any finding falls in a category
    pub fn has_category(&self, category: AuditCategory) -> bool {
        self.findings.iter().any(|f| f.category == category)
    }

    /// Distinct categories present, in first-seen order
    pub fn categories_present(&self) -> Vec<AuditCategory> {
        let mut categories = Vec::new();
        for finding in &self.findings {
            if !categories.contains(&finding.category) {
                categories.push(finding.category);
            }
        }
        categories
    }

    /// Total count
    pub fn len(&self) -> usize {
        self.findings.len()
    }

    /// Is empty
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Trait implemented by all analyzers
pub trait Analyzer: Send + Sync {
    /// Human-readable name of this analyzer
    fn name(&self) -> &str;

    /// Short description of what this analyzer checks
    fn description(&self) -> &str;

    /// Category this analyzer reports under
    fn category(&self) -> AuditCategory;

    /// Scan a parsed document and return findings
    fn analyze_document(&self, document: &Html) -> Vec<Finding>;
}

/// Run all analyzers over a document, in rule order
pub fn analyze_document(document: &Html) -> FindingSet {
    let analyzers: Vec<Box<dyn Analyzer>> = vec![
        Box::new(alt_text::AltTextAnalyzer),
        Box::new(headings::HeadingAnalyzer),
        Box::new(page_title::PageTitleAnalyzer),
        Box::new(forms::FormLabelAnalyzer),
    ];

    let mut findings = FindingSet::new();

    for analyzer in &analyzers {
        let rule_findings = analyzer.analyze_document(document);
        debug!("{}: {} finding(s)", analyzer.name(), rule_findings.len());
        findings.extend(rule_findings);
    }

    findings
}

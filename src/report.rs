// SPDX-License-Identifier: PMPL-1.0-or-later
//! Report generation for page audit findings.
//!
//! Supports two output formats:
//! - Text: human-readable summary with score, grouped findings, remediation
//!   tips, and passed checks
//! - JSON: structured report for programmatic consumption

use crate::analyzers::{AuditCategory, Finding, FindingSet};
use serde::Serialize;

/// The four page rules, in evaluation order. FetchError is not a rule: it
/// has no remediation tip and no passed-check message.
const RULE_CATEGORIES: [AuditCategory; 4] = [
    AuditCategory::MissingAltText,
    AuditCategory::NoHeadings,
    AuditCategory::MissingTitle,
    AuditCategory::FormInputMissingLabel,
];

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Compute the 0-100 accessibility score.
///
/// Each distinct finding category costs a quarter of the score. FetchError
/// counts like any other category, so an unreachable page scores 75, not 0.
pub fn accessibility_score(findings: &FindingSet) -> u32 {
    let distinct = findings.categories_present().len() as f64;
    (((4.0 - distinct) / 4.0) * 100.0).round().max(0.0) as u32
}

/// Remediation tip for a rule category. FetchError has none.
pub fn remediation_tip(category: AuditCategory) -> Option<&'static str> {
    match category {
        AuditCategory::MissingAltText => {
            Some("Add descriptive `alt` attributes to all `<img>` tags.")
        }
        AuditCategory::NoHeadings => {
            Some("Use proper `<h1>` to `<h6>` headings to structure content.")
        }
        AuditCategory::MissingTitle => {
            Some("Include a meaningful `<title>` tag inside `<head>`.")
        }
        AuditCategory::FormInputMissingLabel => {
            Some("Add `<label for='id'>` or `aria-label` for every input field.")
        }
        AuditCategory::FetchError => None,
    }
}

/// Positive confirmation shown when a rule category has no findings
fn passed_check_message(category: AuditCategory) -> Option<&'static str> {
    match category {
        AuditCategory::MissingAltText => Some("All images have `alt` text."),
        AuditCategory::NoHeadings => Some("Proper headings (`<h1>` to `<h6>`) found."),
        AuditCategory::MissingTitle => Some("Page has a valid `<title>` tag."),
        AuditCategory::FormInputMissingLabel => {
            Some("All form inputs have labels or `aria-labels`.")
        }
        AuditCategory::FetchError => None,
    }
}

/// Confirmation messages for the rule categories with no findings
pub fn passed_checks(findings: &FindingSet) -> Vec<&'static str> {
    RULE_CATEGORIES
        .iter()
        .filter(|category| !findings.has_category(**category))
        .filter_map(|category| passed_check_message(*category))
        .collect()
}

/// Serializable audit report
#[derive(Debug, Serialize)]
pub struct AuditReport<'a> {
    /// Audited URL
    pub url: &'a str,
    /// Accessibility score (0-100)
    pub score: u32,
    /// All findings, in rule evaluation order
    pub findings: &'a [Finding],
    /// Confirmations for rule categories with no findings
    pub passed_checks: Vec<&'static str>,
}

/// Generate a report for an audited URL
pub fn generate_report(url: &str, findings: &FindingSet, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => generate_text_report(url, findings),
        OutputFormat::Json => generate_json_report(url, findings),
    }
}

/// Generate human-readable text report
fn generate_text_report(url: &str, findings: &FindingSet) -> String {
    let mut output = String::new();

    output.push_str("=== Pagebot Accessibility Audit ===\n\n");
    output.push_str(&format!("URL:   {}\n", url));
    output.push_str(&format!("Score: {}/100\n\n", accessibility_score(findings)));

    if findings.is_empty() {
        output.push_str("No accessibility issues found. All checks passed.\n\n");
    } else {
        output.push_str(&format!("Found {} issue(s)\n\n", findings.len()));

        // Group by category, first-seen order
        for category in findings.categories_present() {
            let category_findings = findings.by_category(category);
            output.push_str(&format!(
                "--- {} {} ({}) ---\n",
                category.icon(),
                category,
                category_findings.len()
            ));

            for finding in category_findings {
                output.push_str(&format!("  {}\n", finding.detail));
            }

            if let Some(tip) = remediation_tip(category) {
                output.push_str(&format!("  Tip: {}\n", tip));
            }

            output.push('\n');
        }
    }

    let passed = passed_checks(findings);
    if !passed.is_empty() {
        output.push_str("--- Passed checks ---\n");
        for message in &passed {
            output.push_str(&format!("  ✅ {}\n", message));
        }
    }

    output
}

/// Generate JSON report
fn generate_json_report(url: &str, findings: &FindingSet) -> String {
    let report = AuditReport {
        url,
        score: accessibility_score(findings),
        findings: &findings.findings,
        passed_checks: passed_checks(findings),
    };

    serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
        format!("{{\"error\": \"Failed to serialize report: {}\"}}", e)
    })
}

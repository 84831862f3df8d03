// SPDX-License-Identifier: PMPL-1.0-or-later
//! Image alt text rule.
//!
//! Flags every `<img>` whose `alt` attribute is missing entirely. An empty
//! `alt=""` marks a decorative image and is valid; only total absence of
//! the attribute key is an issue.

use crate::analyzers::{Analyzer, AuditCategory, Finding};
use scraper::{Html, Selector};

/// Analyzer for missing image alt attributes
pub struct AltTextAnalyzer;

impl Analyzer for AltTextAnalyzer {
    fn name(&self) -> &str {
        "Alt Text Analyzer"
    }

    fn description(&self) -> &str {
        "Checks <img> elements for a missing alt attribute"
    }

    fn category(&self) -> AuditCategory {
        AuditCategory::MissingAltText
    }

    fn analyze_document(&self, document: &Html) -> Vec<Finding> {
        let img_selector = Selector::parse("img").expect("valid selector");
        let mut findings = Vec::new();

        for element in document.select(&img_selector) {
            match element.value().attr("alt") {
                None => {
                    findings.push(Finding::new(
                        AuditCategory::MissingAltText,
                        element.html().trim(),
                    ));
                }
                Some(_) => {
                    // alt="" is valid for decorative images -- no finding
                }
            }
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_images_with_alt() {
        let html = r#"
            <html>
            <body>
                <img src="logo.png" alt="Company logo">
                <img src="decorative.png" alt="">
                <img src="chart.png" alt="Bar chart showing Q4 revenue growth of 15%">
            </body>
            </html>
        "#;
        let document = Html::parse_document(html);
        let findings = AltTextAnalyzer.analyze_document(&document);
        assert!(findings.is_empty(), "Expected no findings, got: {:?}", findings);
    }

    #[test]
    fn test_missing_alt() {
        let html = r#"
            <html>
            <body>
                <img src="photo.jpg">
            </body>
            </html>
        "#;
        let document = Html::parse_document(html);
        let findings = AltTextAnalyzer.analyze_document(&document);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].category, AuditCategory::MissingAltText);
        assert_eq!(findings[0].detail, r#"<img src="photo.jpg">"#);
    }

    #[test]
    fn test_empty_alt_is_valid_decorative() {
        let html = r#"<html><body><img src="divider.png" alt=""></body></html>"#;
        let document = Html::parse_document(html);
        let findings = AltTextAnalyzer.analyze_document(&document);
        assert!(findings.is_empty());
    }

    #[test]
    fn test_detail_markup_is_stable_across_parses() {
        let html = r#"<html><body><img src="hero.png" width="640" height="480"></body></html>"#;
        let first = AltTextAnalyzer.analyze_document(&Html::parse_document(html));
        assert_eq!(first.len(), 1);
        for _ in 0..20 {
            let repeat = AltTextAnalyzer.analyze_document(&Html::parse_document(html));
            assert_eq!(repeat[0].detail, first[0].detail);
        }
    }

    #[test]
    fn test_one_finding_per_offending_image() {
        let html = r#"
            <html>
            <body>
                <img src="a.png">
                <img src="b.png" alt="Good description of content">
                <img src="c.png">
            </body>
            </html>
        "#;
        let document = Html::parse_document(html);
        let findings = AltTextAnalyzer.analyze_document(&document);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].detail, r#"<img src="a.png">"#);
        assert_eq!(findings[1].detail, r#"<img src="c.png">"#);
    }
}

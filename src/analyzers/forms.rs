// SPDX-License-Identifier: PMPL-1.0-or-later
//! Form label rule.
//!
//! Checks every `input`, `select`, and `textarea` inside a `<form>` for an
//! accessible name: either a `<label>` in the same form whose `for` matches
//! the control's `id`, or an `aria-label` attribute on the control itself.
//! Presence of the `aria-label` key is sufficient regardless of its value.
//! A control with no `id` can never match a label by `for`, so it is
//! reported unless it carries `aria-label`. Controls outside any form are
//! not checked.

use crate::analyzers::{Analyzer, AuditCategory, Finding};
use scraper::{Html, Selector};

/// Analyzer for form controls without labels
pub struct FormLabelAnalyzer;

impl Analyzer for FormLabelAnalyzer {
    fn name(&self) -> &str {
        "Form Label Analyzer"
    }

    fn description(&self) -> &str {
        "Checks that form inputs are labelled via <label for> or aria-label"
    }

    fn category(&self) -> AuditCategory {
        AuditCategory::FormInputMissingLabel
    }

    fn analyze_document(&self, document: &Html) -> Vec<Finding> {
        let form_selector = Selector::parse("form").expect("valid selector");
        let label_selector = Selector::parse("label").expect("valid selector");
        let control_selector =
            Selector::parse("input, select, textarea").expect("valid selector");
        let mut findings = Vec::new();

        for form in document.select(&form_selector) {
            // Collect label[for] targets within this form only
            let label_fors: Vec<String> = form
                .select(&label_selector)
                .filter_map(|l| l.value().attr("for").map(String::from))
                .collect();

            for control in form.select(&control_selector) {
                let has_label = match control.value().attr("id") {
                    Some(id) => label_fors.iter().any(|f| f == id),
                    None => false,
                };
                let has_aria_label = control.value().attr("aria-label").is_some();

                if !has_label && !has_aria_label {
                    findings.push(Finding::new(
                        AuditCategory::FormInputMissingLabel,
                        control.html().trim(),
                    ));
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
    fn test_labelled_input() {
        let html = r#"
            <html><body>
                <form>
                    <label for="name">Name:</label>
                    <input type="text" id="name">
                </form>
            </body></html>
        "#;
        let document = Html::parse_document(html);
        let findings = FormLabelAnalyzer.analyze_document(&document);
        assert!(findings.is_empty(), "Labelled input should not produce findings");
    }

    #[test]
    fn test_label_after_input_still_counts() {
        let html = r#"
            <html><body>
                <form><input id="x"><label for="x">Name</label></form>
            </body></html>
        "#;
        let document = Html::parse_document(html);
        let findings = FormLabelAnalyzer.analyze_document(&document);
        assert!(findings.is_empty());
    }

    #[test]
    fn test_unlabelled_input() {
        let html = r#"
            <html><body>
                <form>
                    <input type="text" name="q">
                </form>
            </body></html>
        "#;
        let document = Html::parse_document(html);
        let findings = FormLabelAnalyzer.analyze_document(&document);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].category, AuditCategory::FormInputMissingLabel);
        // scraper serializes attributes in its own stable order, not source order
        assert_eq!(findings[0].detail, r#"<input name="q" type="text">"#);
    }

    #[test]
    fn test_detail_markup_is_stable_across_parses() {
        let html = r#"
            <html><body>
                <form>
                    <input class="wide" type="text" name="q">
                </form>
            </body></html>
        "#;
        let first = FormLabelAnalyzer.analyze_document(&Html::parse_document(html));
        assert_eq!(first.len(), 1);
        for _ in 0..20 {
            let repeat = FormLabelAnalyzer.analyze_document(&Html::parse_document(html));
            assert_eq!(repeat[0].detail, first[0].detail);
        }
    }

    #[test]
    fn test_aria_label_counts_even_when_empty() {
        let html = r#"
            <html><body>
                <form>
                    <input type="search" aria-label="Search">
                    <input type="text" aria-label="">
                </form>
            </body></html>
        "#;
        let document = Html::parse_document(html);
        let findings = FormLabelAnalyzer.analyze_document(&document);
        assert!(findings.is_empty());
    }

    #[test]
    fn test_select_and_textarea_are_checked() {
        let html = r#"
            <html><body>
                <form>
                    <select name="topic"><option>General</option></select>
                    <textarea name="message"></textarea>
                </form>
            </body></html>
        "#;
        let document = Html::parse_document(html);
        let findings = FormLabelAnalyzer.analyze_document(&document);
        assert_eq!(findings.len(), 2);
    }

    #[test]
    fn test_label_in_other_form_does_not_count() {
        let html = r#"
            <html><body>
                <form><label for="email">Email:</label></form>
                <form><input type="email" id="email"></form>
            </body></html>
        "#;
        let document = Html::parse_document(html);
        let findings = FormLabelAnalyzer.analyze_document(&document);
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn test_control_outside_form_not_checked() {
        let html = r#"
            <html><body>
                <input type="text" name="stray">
            </body></html>
        "#;
        let document = Html::parse_document(html);
        let findings = FormLabelAnalyzer.analyze_document(&document);
        assert!(findings.is_empty());
    }

    #[test]
    fn test_input_without_id_needs_aria_label() {
        let html = r#"
            <html><body>
                <form>
                    <label for="name">Name:</label>
                    <input type="text">
                </form>
            </body></html>
        "#;
        let document = Html::parse_document(html);
        let findings = FormLabelAnalyzer.analyze_document(&document);
        // No id means the label cannot be associated
        assert_eq!(findings.len(), 1);
    }
}

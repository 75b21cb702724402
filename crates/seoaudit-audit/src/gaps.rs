//! Gap detection: concrete remediation opportunities for one page.

use seoaudit_core::AuditConfig;

use crate::types::PageSignals;

/// Titles longer than this get a "shorten" gap; shorter than
/// `TITLE_EXPAND_UNDER` an "expand" gap. The two are mutually exclusive.
const TITLE_SHORTEN_OVER: usize = 60;
const TITLE_EXPAND_UNDER: usize = 40;

/// Missing competitor schema types named per gap.
const MAX_NAMED_SCHEMA_TYPES: usize = 2;

/// Compare a page's signals (optionally against a competitor's) and produce
/// an ordered gap list: title issues, then structured-data issues, then
/// content-depth issues.
///
/// Side-effect-free and infallible. A missing competitor degrades to fewer
/// gaps, never an error.
#[must_use]
pub fn analyze_gaps(
    page: &PageSignals,
    competitor: Option<&PageSignals>,
    config: &AuditConfig,
) -> Vec<String> {
    let mut gaps = Vec::new();

    if page.title_length > TITLE_SHORTEN_OVER {
        gaps.push(format!(
            "Shorten title to 55-60 chars (currently {})",
            page.title_length
        ));
    } else if page.title_length < TITLE_EXPAND_UNDER {
        gaps.push(format!(
            "Expand title to 40-60 chars (currently {})",
            page.title_length
        ));
    }

    if page.structured_data_types.is_empty() {
        gaps.push(format!(
            "Add structured data: {}",
            config.expected_schema_types.join(", ")
        ));
    }

    if let Some(comp) = competitor {
        // "Unknown" marks an untyped block on the competitor; naming it as a
        // type to add would be meaningless.
        let missing: Vec<&str> = comp
            .structured_data_types
            .iter()
            .filter(|t| t.as_str() != "Unknown" && !page.structured_data_types.contains(*t))
            .take(MAX_NAMED_SCHEMA_TYPES)
            .map(String::as_str)
            .collect();
        if !missing.is_empty() {
            gaps.push(format!("Add schema: {}", missing.join(", ")));
        }

        if page.word_count < config.thresholds.content_gap_page_words
            && comp.word_count > config.thresholds.content_gap_competitor_words
        {
            gaps.push(format!(
                "Expand content: {} words vs competitor {}",
                page.word_count, comp.word_count
            ));
        }
    }

    gaps
}

//! Additive SEO scoring over extracted page signals.

use seoaudit_core::AuditRubric;

use crate::types::PageSignals;

/// Compute the 0-100 quality score for a page.
///
/// Base score plus bonuses for title length, H1 presence, content depth, and
/// structured-data presence, clamped to 100. Monotonic in every signal:
/// improving one signal never lowers the score. Title banding uses the
/// pre-truncation length, so an overlong title falls outside both bands.
#[must_use]
pub fn seo_score(signals: &PageSignals, rubric: &AuditRubric) -> u32 {
    let mut score = rubric.base_score;

    let title_len = signals.title_length;
    if title_len >= rubric.title_exact_min && title_len <= rubric.title_exact_max {
        score += rubric.title_exact_bonus;
    } else if title_len >= rubric.title_near_min && title_len <= rubric.title_near_max {
        score += rubric.title_near_bonus;
    }

    if !signals.h1.is_empty() {
        score += rubric.h1_bonus;
    }

    if signals.word_count > rubric.deep_content_words {
        score += rubric.deep_content_bonus;
    } else if signals.word_count > rubric.solid_content_words {
        score += rubric.solid_content_bonus;
    }

    if !signals.structured_data_types.is_empty() {
        score += rubric.structured_data_bonus;
    }

    score.min(100)
}

/// Whether a page needs remediation: exactly `score < threshold`.
#[must_use]
pub fn needs_fix(score: u32, threshold: u32) -> bool {
    score < threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rubric() -> AuditRubric {
        AuditRubric::default()
    }

    fn signals(title_length: usize, h1: &str, word_count: usize, schema: &[&str]) -> PageSignals {
        PageSignals {
            url: "https://site.example/page".to_string(),
            title: "t".repeat(title_length.min(60)),
            title_length,
            meta_description: String::new(),
            h1: h1.to_string(),
            headings: Vec::new(),
            word_count,
            structured_data_types: schema.iter().map(|s| (*s).to_string()).collect(),
            http_status: 200,
        }
    }

    #[test]
    fn fully_optimized_page_scores_100() {
        let page = signals(55, "Kokapet Flats", 2000, &["RealEstateListing"]);
        assert_eq!(seo_score(&page, &rubric()), 100);
    }

    #[test]
    fn bare_page_with_overlong_title_scores_base_only() {
        // 75-char title: outside both bands. No H1, 300 words, no schema.
        let page = signals(75, "", 300, &[]);
        assert_eq!(seo_score(&page, &rubric()), 50);
    }

    #[test]
    fn near_band_title_earns_partial_bonus() {
        let page = signals(35, "", 300, &[]);
        assert_eq!(seo_score(&page, &rubric()), 60);
    }

    #[test]
    fn moving_title_into_exact_band_never_decreases_score() {
        let near = signals(45, "H1", 2000, &["FAQPage"]);
        let exact = signals(55, "H1", 2000, &["FAQPage"]);
        assert!(seo_score(&exact, &rubric()) >= seo_score(&near, &rubric()));
    }

    #[test]
    fn adding_structured_data_never_decreases_score() {
        let without = signals(55, "H1", 2000, &[]);
        let with = signals(55, "H1", 2000, &["FAQPage"]);
        assert!(seo_score(&with, &rubric()) >= seo_score(&without, &rubric()));
    }

    #[test]
    fn word_count_bands_are_exclusive() {
        let solid = signals(75, "", 900, &[]);
        let deep = signals(75, "", 1600, &[]);
        assert_eq!(seo_score(&solid, &rubric()), 60);
        assert_eq!(seo_score(&deep, &rubric()), 65);
    }

    #[test]
    fn score_clamps_at_100_with_inflated_rubric() {
        let mut inflated = rubric();
        inflated.base_score = 95;
        let page = signals(55, "H1", 2000, &["FAQPage"]);
        assert_eq!(seo_score(&page, &inflated), 100);
    }

    #[test]
    fn needs_fix_is_exactly_score_below_threshold() {
        assert!(needs_fix(69, 70));
        assert!(!needs_fix(70, 70));
        assert!(!needs_fix(71, 70));
    }

    #[test]
    fn single_bonus_crossing_threshold_flips_needs_fix() {
        let rubric = rubric();
        // 60-char title (+15), no H1, 300 words, no schema: 65 < 70.
        let below = signals(60, "", 300, &[]);
        // Adding schema (+10) crosses to 75 >= 70.
        let above = signals(60, "", 300, &["FAQPage"]);
        assert!(needs_fix(seo_score(&below, &rubric), 70));
        assert!(!needs_fix(seo_score(&above, &rubric), 70));
    }
}

//! Remediation prompt assembly.
//!
//! Pure templating over already-computed fields. No clock, no network, no
//! randomness: the same inputs always produce byte-identical output, so a
//! downstream code-generation tool can be driven reproducibly.

use crate::types::PageSignals;

/// Fallback keyword wording when extraction found no candidates.
const KEYWORD_FALLBACK: &str = "page topic";

/// Build the structured fix instruction for one audited page.
#[must_use]
pub fn build_remediation_prompt(
    page: &PageSignals,
    primary_keyword: &str,
    score: u32,
    gaps: &[String],
    competitor_url: Option<&str>,
) -> String {
    let keyword = if primary_keyword.is_empty() {
        KEYWORD_FALLBACK
    } else {
        primary_keyword
    };

    let mut prompt = format!(
        "You are fixing SEO for: {}\nPrimary keyword: \"{}\"\nCurrent score: {}/100\n",
        page.url, keyword, score
    );
    if let Some(comp) = competitor_url {
        prompt.push_str(&format!("Reference competitor: {comp}\n"));
    }

    prompt.push_str("\nGAPS TO FIX:\n");
    if gaps.is_empty() {
        prompt.push_str("- None found; refresh metadata and resubmit for indexing\n");
    } else {
        for gap in gaps {
            prompt.push_str(&format!("- {gap}\n"));
        }
    }

    prompt.push_str(&format!(
        "\nCURRENT METRICS:\n- Title: \"{}\"\n- H1: \"{}\"\n- Words: {}\n",
        page.title, page.h1, page.word_count
    ));

    prompt.push_str(
        "\nPRESERVE:\n\
         - All existing layout, hero and CTA blocks\n\
         - Design-system classes and responsive behavior\n\
         - Conversion elements and internal links\n\
         \nDeliver: complete updated page markup, production-ready.\n",
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals() -> PageSignals {
        PageSignals {
            url: "https://site.example/hyderabad/kokapet".to_string(),
            title: "Kokapet Flats for Sale".to_string(),
            title_length: 22,
            meta_description: "Flats in Kokapet.".to_string(),
            h1: "Kokapet Flats".to_string(),
            headings: vec!["Kokapet Flats".to_string()],
            word_count: 800,
            structured_data_types: vec![],
            http_status: 200,
        }
    }

    #[test]
    fn repeated_invocations_are_byte_identical() {
        let gaps = vec!["Expand title to 40-60 chars (currently 22)".to_string()];
        let first = build_remediation_prompt(&signals(), "kokapet", 70, &gaps, None);
        let second = build_remediation_prompt(&signals(), "kokapet", 70, &gaps, None);
        assert_eq!(first, second);
    }

    #[test]
    fn includes_url_keyword_score_and_gaps() {
        let gaps = vec![
            "Add structured data: RealEstateListing, FAQPage".to_string(),
            "Expand content: 800 words vs competitor 2500".to_string(),
        ];
        let prompt = build_remediation_prompt(&signals(), "kokapet", 70, &gaps, None);
        assert!(prompt.contains("https://site.example/hyderabad/kokapet"));
        assert!(prompt.contains("Primary keyword: \"kokapet\""));
        assert!(prompt.contains("Current score: 70/100"));
        assert!(prompt.contains("- Add structured data: RealEstateListing, FAQPage"));
        assert!(prompt.contains("- Expand content: 800 words vs competitor 2500"));
        assert!(prompt.contains("- Words: 800"));
    }

    #[test]
    fn competitor_line_present_only_when_resolved() {
        let with = build_remediation_prompt(
            &signals(),
            "kokapet",
            70,
            &[],
            Some("https://c.example/kokapet"),
        );
        let without = build_remediation_prompt(&signals(), "kokapet", 70, &[], None);
        assert!(with.contains("Reference competitor: https://c.example/kokapet"));
        assert!(!without.contains("Reference competitor"));
    }

    #[test]
    fn empty_keyword_uses_fallback_wording() {
        let prompt = build_remediation_prompt(&signals(), "", 70, &[], None);
        assert!(prompt.contains("Primary keyword: \"page topic\""));
    }

    #[test]
    fn empty_gap_list_notes_no_action() {
        let prompt = build_remediation_prompt(&signals(), "kokapet", 100, &[], None);
        assert!(prompt.contains("- None found; refresh metadata and resubmit for indexing"));
    }

    #[test]
    fn preserve_directives_always_present() {
        let prompt = build_remediation_prompt(&signals(), "kokapet", 70, &[], None);
        assert!(prompt.contains("PRESERVE:"));
        assert!(prompt.contains("hero and CTA blocks"));
        assert!(prompt.contains("production-ready"));
    }
}

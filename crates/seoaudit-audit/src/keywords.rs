//! Candidate keyword extraction from title + description + h1 text.

use regex::Regex;

use crate::types::KeywordSet;

/// Derive a ranked keyword set from page text.
///
/// Lowercases, tokenizes alphabetic runs of length >= 3, drops the configured
/// stop words, counts frequency, and returns the top `max_keywords` terms by
/// descending frequency with first-seen order breaking ties. Pure and
/// deterministic: identical input always yields an identical set.
#[must_use]
pub fn extract_keywords(text: &str, stop_words: &[String], max_keywords: usize) -> KeywordSet {
    let token_re = Regex::new(r"[a-z]{3,}").expect("valid keyword token regex");
    let lowered = text.to_lowercase();

    let mut counts: Vec<(String, usize)> = Vec::new();
    for token in token_re.find_iter(&lowered).map(|m| m.as_str()) {
        if stop_words.iter().any(|s| s == token) {
            continue;
        }
        match counts.iter_mut().find(|(t, _)| t == token) {
            Some((_, count)) => *count += 1,
            None => counts.push((token.to_string(), 1)),
        }
    }

    // Stable sort keeps first-seen order within equal frequencies.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    KeywordSet::new(
        counts
            .into_iter()
            .take(max_keywords)
            .map(|(term, _)| term)
            .collect(),
    )
}

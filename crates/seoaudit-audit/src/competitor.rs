//! Competitor resolution against the configured keyword table.

use seoaudit_core::CompetitorEntry;

use crate::types::KeywordSet;

/// Resolve a page to its reference competitor URL.
///
/// Iterates the table in its configured order and returns the URL of the
/// first entry whose key is a substring of either the lowercased URL path or
/// the lowercased joined keyword string. Greedy and order-sensitive on
/// purpose: two entries may both match, and only the first wins. No match is
/// a legitimate `None`, not an error.
#[must_use]
pub fn resolve_competitor<'a>(
    table: &'a [CompetitorEntry],
    url: &str,
    keywords: &KeywordSet,
) -> Option<&'a str> {
    let path = url_path(url).to_lowercase();
    let joined = keywords.joined();

    table
        .iter()
        .find(|entry| path.contains(&entry.keyword) || joined.contains(&entry.keyword))
        .map(|entry| entry.url.as_str())
}

/// The path component of a URL, without scheme or host.
fn url_path(url: &str) -> &str {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    rest.find('/').map_or("", |i| &rest[i..])
}

//! Signal extraction from raw page HTML.
//!
//! Missing elements map to empty strings, never errors. Structured-data
//! blocks are parsed independently: one malformed block never aborts
//! extraction of the rest of the page.

use regex::Regex;
use serde_json::Value;

use crate::types::{PageSignals, DESCRIPTION_MAX_CHARS, H1_MAX_CHARS, TITLE_MAX_CHARS};

/// Extract normalized on-page signals from a fetched HTML body.
#[must_use]
pub fn extract_signals(url: &str, http_status: u16, html: &str) -> PageSignals {
    let full_title = extract_title(html);
    let title_length = full_title.chars().count();

    PageSignals {
        url: url.to_string(),
        title: truncate_chars(&full_title, TITLE_MAX_CHARS),
        title_length,
        meta_description: truncate_chars(&extract_meta_description(html), DESCRIPTION_MAX_CHARS),
        h1: truncate_chars(&extract_h1(html), H1_MAX_CHARS),
        headings: extract_headings(html),
        word_count: visible_word_count(html),
        structured_data_types: extract_structured_data_types(html),
        http_status,
    }
}

fn extract_title(html: &str) -> String {
    let re = Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("valid title regex");
    let Some(cap) = re.captures(html) else {
        return String::new();
    };
    clean_text(cap.get(1).map_or("", |m| m.as_str()))
}

fn extract_h1(html: &str) -> String {
    let re = Regex::new(r"(?is)<h1[^>]*>(.*?)</h1>").expect("valid h1 regex");
    let Some(cap) = re.captures(html) else {
        return String::new();
    };
    clean_text(cap.get(1).map_or("", |m| m.as_str()))
}

fn extract_meta_description(html: &str) -> String {
    let re = Regex::new(
        r#"(?is)<meta[^>]+name\s*=\s*["']description["'][^>]+content\s*=\s*["'](.*?)["'][^>]*>"#,
    )
    .expect("valid meta description regex");

    if let Some(cap) = re.captures(html) {
        return clean_text(cap.get(1).map_or("", |m| m.as_str()));
    }

    // Attribute order is not guaranteed; retry with content before name.
    let re_swapped = Regex::new(
        r#"(?is)<meta[^>]+content\s*=\s*["'](.*?)["'][^>]+name\s*=\s*["']description["'][^>]*>"#,
    )
    .expect("valid meta description fallback regex");

    re_swapped
        .captures(html)
        .and_then(|cap| cap.get(1).map(|m| clean_text(m.as_str())))
        .unwrap_or_default()
}

/// h1/h2/h3 text in document order, empty headings dropped.
fn extract_headings(html: &str) -> Vec<String> {
    let re = Regex::new(r"(?is)<h[1-3][^>]*>(.*?)</h[1-3]\s*>").expect("valid headings regex");
    re.captures_iter(html)
        .map(|cap| clean_text(cap.get(1).map_or("", |m| m.as_str())))
        .filter(|text| !text.is_empty())
        .collect()
}

/// Visible-text word count: script/style blocks removed, tags stripped,
/// whitespace-normalized, split on whitespace.
fn visible_word_count(html: &str) -> usize {
    let script_re = Regex::new(r"(?is)<script[^>]*>.*?</script>").expect("valid script regex");
    let style_re = Regex::new(r"(?is)<style[^>]*>.*?</style>").expect("valid style regex");

    let no_script = script_re.replace_all(html, " ");
    let no_style = style_re.replace_all(&no_script, " ");
    clean_text(&no_style).split_whitespace().count()
}

/// Collect JSON-LD `@type` names from every
/// `<script type="application/ld+json">` block.
///
/// Each block is parsed independently; malformed blocks are skipped. Array
/// payloads contribute each member's type, object payloads their single
/// type. A payload without a recognizable `@type` records `"Unknown"`, so
/// presence of structured data and distinctness of types are both preserved.
fn extract_structured_data_types(html: &str) -> Vec<String> {
    let script_re = Regex::new(
        r#"(?is)<script[^>]*type\s*=\s*["']application/ld\+json["'][^>]*>(.*?)</script>"#,
    )
    .expect("valid json-ld script regex");

    let mut types = Vec::new();

    for cap in script_re.captures_iter(html) {
        let raw = cap.get(1).map_or("", |m| m.as_str()).trim();
        if raw.is_empty() {
            continue;
        }
        let Ok(value) = serde_json::from_str::<Value>(raw) else {
            tracing::debug!("skipping malformed JSON-LD block");
            continue;
        };

        match value {
            Value::Array(items) => {
                for item in &items {
                    collect_type(item, &mut types);
                }
            }
            other => collect_type(&other, &mut types),
        }
    }

    types
}

fn collect_type(value: &Value, out: &mut Vec<String>) {
    match value.get("@type") {
        Some(Value::String(name)) => push_unique(out, name.clone()),
        Some(Value::Array(names)) => {
            let mut found = false;
            for name in names.iter().filter_map(Value::as_str) {
                push_unique(out, name.to_string());
                found = true;
            }
            if !found {
                push_unique(out, "Unknown".to_string());
            }
        }
        _ => push_unique(out, "Unknown".to_string()),
    }
}

fn push_unique(out: &mut Vec<String>, name: String) {
    if !out.contains(&name) {
        out.push(name);
    }
}

/// Strip tags and normalize whitespace.
pub(crate) fn clean_text(input: &str) -> String {
    let tags = Regex::new(r"(?is)<[^>]+>").expect("valid tags regex");
    let no_tags = tags.replace_all(input, " ");
    no_tags
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

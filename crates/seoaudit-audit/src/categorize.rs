//! Optional LLM page categorization.
//!
//! Enrichment only: the returned label lands in `AuditResult::category` and
//! never feeds scoring, gap detection, or prioritization. Disabled unless
//! `SEOAUDIT_CATEGORY_LLM_ENABLED` is set; every failure degrades to `None`.

use serde_json::{json, Value};

const CATEGORIES: &[&str] = &[
    "homepage",
    "city-hub",
    "micro-market",
    "project",
    "listing",
    "blog",
    "contact",
];

const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Ask the configured chat endpoint for a page category.
///
/// `http` is the caller's shared client, so the request honors the same
/// timeout as every page fetch.
pub(crate) async fn categorize_page(
    http: &reqwest::Client,
    url: &str,
    title: &str,
    h1: &str,
) -> Option<String> {
    if !llm_enabled() {
        return None;
    }

    let api_key = std::env::var("OPENAI_API_KEY").ok()?;
    let model = std::env::var("SEOAUDIT_CATEGORY_LLM_MODEL")
        .unwrap_or_else(|_| "gpt-4o-mini".to_string());
    let endpoint = std::env::var("SEOAUDIT_CATEGORY_LLM_ENDPOINT")
        .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

    let req_body = json!({
        "model": model,
        "response_format": { "type": "json_object" },
        "messages": [
            {
                "role": "system",
                "content": format!(
                    "Classify a real-estate web page. Return JSON with key: category, one of: {}.",
                    CATEGORIES.join(", ")
                )
            },
            {
                "role": "user",
                "content": format!("URL: {url}\nTitle: {title}\nH1: {h1}")
            }
        ],
        "temperature": 0.0
    });

    let response = http
        .post(&endpoint)
        .bearer_auth(api_key)
        .json(&req_body)
        .send()
        .await
        .ok()?;

    if !response.status().is_success() {
        tracing::warn!(status = %response.status(), "category LLM returned non-success");
        return None;
    }

    let body: Value = response.json().await.ok()?;
    let content = body
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|msg| msg.get("content"))
        .and_then(Value::as_str)?;

    parse_llm_category(content)
}

fn llm_enabled() -> bool {
    std::env::var("SEOAUDIT_CATEGORY_LLM_ENABLED")
        .ok()
        .is_some_and(|v| matches!(v.as_str(), "1" | "true" | "TRUE" | "yes" | "YES"))
}

/// Parse the model's JSON payload and validate the label against the fixed
/// category set. Anything else is discarded.
fn parse_llm_category(content: &str) -> Option<String> {
    let parsed: Value = serde_json::from_str(content).ok()?;
    let label = parsed
        .get("category")
        .and_then(Value::as_str)?
        .trim()
        .to_lowercase();

    CATEGORIES.contains(&label.as_str()).then_some(label)
}

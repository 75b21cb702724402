//! Integration tests for the per-page audit and the sequential run loop.
//!
//! Uses `wiremock` to serve the audited site and its competitor so no real
//! network traffic is made.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use seoaudit_audit::{audit_page, run_audit, AuditError};
use seoaudit_core::{AuditConfig, CompetitorEntry};
use seoaudit_fetch::{FetchError, PageClient};

fn test_client() -> PageClient {
    PageClient::new(5, "seoaudit-test/0.1").expect("failed to build test PageClient")
}

/// 52-char title: inside the exact [50, 60] bonus band.
const PAGE_TITLE: &str = "Kokapet Flats for Sale | Luxury Apartments Hyderabad";

fn page_html(title: &str, h1: &str, schema_blocks: &[&str], body_words: usize) -> String {
    let schema: String = schema_blocks
        .iter()
        .map(|s| format!(r#"<script type="application/ld+json">{s}</script>"#))
        .collect();
    let body = "word ".repeat(body_words);
    format!(
        r#"<html><head><title>{title}</title>
<meta name="description" content="Premium kokapet flats with lake views.">
{schema}</head>
<body><h1>{h1}</h1><p>{body}</p></body></html>"#
    )
}

fn config_with_competitor(competitor_url: &str) -> AuditConfig {
    let mut config = AuditConfig::default();
    config.competitors.push(CompetitorEntry {
        keyword: "kokapet".to_string(),
        url: competitor_url.to_string(),
    });
    config
}

async fn mount_page(server: &MockServer, route: &str, html: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(server)
        .await;
}

#[tokio::test]
async fn audit_page_scores_and_compares_against_competitor() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/hyderabad/kokapet",
        page_html(
            PAGE_TITLE,
            "Kokapet Flats",
            &[r#"{"@type":"RealEstateListing"}"#],
            1200,
        ),
    )
    .await;
    mount_page(
        &server,
        "/competitor",
        page_html(
            "Competitor Kokapet Guide",
            "Kokapet Guide",
            &[r#"{"@type":"RealEstateListing"}"#, r#"{"@type":"FAQPage"}"#],
            2500,
        ),
    )
    .await;

    let client = test_client();
    let competitor_url = format!("{}/competitor", server.uri());
    let config = config_with_competitor(&competitor_url);
    let url = format!("{}/hyderabad/kokapet", server.uri());

    let result = audit_page(&client, &config, &url)
        .await
        .expect("expected Ok");

    assert_eq!(result.url, url);
    assert_eq!(result.primary_keyword, "kokapet");
    assert_eq!(result.competitor_url.as_deref(), Some(competitor_url.as_str()));
    // Base 50 + exact title 15 + h1 10 + solid content 10 + schema 10.
    assert_eq!(result.score, 95);
    assert!(!result.needs_fix);
    assert_eq!(result.gaps.len(), 2);
    assert_eq!(result.gaps[0], "Add schema: FAQPage");
    assert!(result.gaps[1].starts_with("Expand content:"));
    assert!(result.remediation_prompt.contains(&url));
    assert!(result.remediation_prompt.contains("Add schema: FAQPage"));
    assert!(result.category.is_none());
}

#[tokio::test]
async fn audit_page_without_table_match_has_no_competitor() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/blog/market-report",
        page_html("Market Report", "Market Report", &[], 400),
    )
    .await;

    let client = test_client();
    let config = AuditConfig::default();
    let url = format!("{}/blog/market-report", server.uri());

    let result = audit_page(&client, &config, &url)
        .await
        .expect("expected Ok");

    assert!(result.competitor_url.is_none());
    assert!(!result.remediation_prompt.contains("Reference competitor"));
}

#[tokio::test]
async fn audit_page_fetch_failure_is_typed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/down"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client();
    let config = AuditConfig::default();
    let url = format!("{}/down", server.uri());

    let result = audit_page(&client, &config, &url).await;
    assert!(
        matches!(
            result,
            Err(AuditError::Fetch(FetchError::UnexpectedStatus { status: 503, .. }))
        ),
        "expected UnexpectedStatus(503), got: {result:?}"
    );
}

#[tokio::test]
async fn competitor_fetch_failure_degrades_to_fewer_gaps() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/hyderabad/kokapet",
        page_html(
            PAGE_TITLE,
            "Kokapet Flats",
            &[r#"{"@type":"RealEstateListing"}"#],
            1200,
        ),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/competitor"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client();
    let competitor_url = format!("{}/competitor", server.uri());
    let config = config_with_competitor(&competitor_url);
    let url = format!("{}/hyderabad/kokapet", server.uri());

    let result = audit_page(&client, &config, &url)
        .await
        .expect("expected Ok despite competitor failure");

    // Competitor resolution still recorded, but no competitor-derived gaps.
    assert_eq!(result.competitor_url.as_deref(), Some(competitor_url.as_str()));
    assert!(result.gaps.is_empty(), "{:?}", result.gaps);
}

#[tokio::test]
async fn run_audit_skips_failed_pages_and_continues() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/page-a",
        page_html("Page A Flats", "Page A", &[], 400),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/page-b"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mount_page(
        &server,
        "/page-c",
        page_html("Page C Flats", "Page C", &[], 400),
    )
    .await;

    let client = test_client();
    let config = AuditConfig::default();
    let urls = vec![
        format!("{}/page-a", server.uri()),
        format!("{}/page-b", server.uri()),
        format!("{}/page-c", server.uri()),
    ];

    let results = run_audit(&client, &config, &urls, 0).await;

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].url, urls[0]);
    assert_eq!(results[1].url, urls[2]);
    assert!(results.iter().all(|r| r.url != urls[1]));
}

#[tokio::test]
async fn run_audit_empty_url_list_yields_no_results() {
    let server = MockServer::start().await;
    let client = test_client();
    let config = AuditConfig::default();

    let results = run_audit(&client, &config, &[], 0).await;
    assert!(results.is_empty());
    drop(server);
}

//! Audit pipeline orchestration.

use std::time::Duration;

use seoaudit_core::AuditConfig;
use seoaudit_fetch::PageClient;

use crate::categorize::categorize_page;
use crate::competitor::resolve_competitor;
use crate::error::AuditError;
use crate::extract::extract_signals;
use crate::gaps::analyze_gaps;
use crate::keywords::extract_keywords;
use crate::prompt::build_remediation_prompt;
use crate::scorer::{needs_fix, seo_score};
use crate::types::{AuditResult, PageSignals};

/// Audit a single page end to end.
///
/// 1. Fetch the page and extract `PageSignals`.
/// 2. Derive keywords from title + description + h1.
/// 3. Resolve the reference competitor and fetch its signals (soft: a failed
///    competitor fetch is logged and the audit continues without it).
/// 4. Score, detect gaps, prioritize, and build the remediation prompt.
/// 5. Optionally enrich with an LLM category label.
///
/// # Errors
///
/// Returns [`AuditError::Fetch`] if the page itself cannot be fetched. The
/// caller decides whether that skips the page ([`run_audit`] does).
pub async fn audit_page(
    client: &PageClient,
    config: &AuditConfig,
    url: &str,
) -> Result<AuditResult, AuditError> {
    let page = client.fetch_page(url).await?;
    let signals = extract_signals(&page.url, page.status, &page.body);

    let keyword_text = format!(
        "{} {} {}",
        signals.title, signals.meta_description, signals.h1
    );
    let keywords = extract_keywords(&keyword_text, &config.stop_words, config.max_keywords);

    let competitor_url =
        resolve_competitor(&config.competitors, url, &keywords).map(str::to_owned);
    let competitor_signals = match competitor_url.as_deref() {
        Some(comp_url) => fetch_competitor_signals(client, comp_url).await,
        None => None,
    };

    let score = seo_score(&signals, &config.rubric);
    let gaps = analyze_gaps(&signals, competitor_signals.as_ref(), config);
    let primary_keyword = keywords.primary().unwrap_or("").to_string();
    let remediation_prompt = build_remediation_prompt(
        &signals,
        &primary_keyword,
        score,
        &gaps,
        competitor_url.as_deref(),
    );
    let category = categorize_page(client.http(), url, &signals.title, &signals.h1).await;

    Ok(AuditResult {
        url: signals.url,
        primary_keyword,
        competitor_url,
        score,
        gaps,
        needs_fix: needs_fix(score, config.thresholds.priority_threshold),
        remediation_prompt,
        category,
    })
}

/// Fetch and extract competitor signals, degrading to `None` on any failure.
/// No "competitor unavailable" gap is emitted; the warn log is the only trace.
async fn fetch_competitor_signals(client: &PageClient, url: &str) -> Option<PageSignals> {
    match client.fetch_page(url).await {
        Ok(page) => Some(extract_signals(&page.url, page.status, &page.body)),
        Err(e) => {
            tracing::warn!(
                url = %url,
                error = %e,
                "competitor fetch failed; continuing without competitor signals"
            );
            None
        }
    }
}

/// Run the audit sequentially over a bounded URL list.
///
/// Pages are processed one at a time with `inter_request_delay_ms` between
/// fetches. A failed page is logged and skipped; it produces no
/// `AuditResult` and never halts processing of subsequent URLs.
pub async fn run_audit(
    client: &PageClient,
    config: &AuditConfig,
    urls: &[String],
    inter_request_delay_ms: u64,
) -> Vec<AuditResult> {
    let mut results = Vec::new();

    for (i, url) in urls.iter().enumerate() {
        if i > 0 && inter_request_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(inter_request_delay_ms)).await;
        }

        match audit_page(client, config, url).await {
            Ok(result) => {
                tracing::info!(
                    url = %url,
                    score = result.score,
                    needs_fix = result.needs_fix,
                    gap_count = result.gaps.len(),
                    "page audited"
                );
                results.push(result);
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "page skipped");
            }
        }
    }

    tracing::info!(
        audited = results.len(),
        skipped = urls.len() - results.len(),
        "audit run complete"
    );

    results
}

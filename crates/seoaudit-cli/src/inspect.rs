//! `seoaudit inspect`: one-page audit printed to stdout, no competitor fetch.

use std::path::Path;

use anyhow::Context;

use seoaudit_audit::{analyze_gaps, extract_keywords, extract_signals, seo_score};
use seoaudit_core::{load_audit_config, AppConfig};
use seoaudit_fetch::PageClient;

pub(crate) async fn run(
    app: &AppConfig,
    url: &str,
    config_path: Option<&Path>,
) -> anyhow::Result<()> {
    let config_path = config_path.unwrap_or(&app.audit_config_path);
    let config = load_audit_config(config_path)
        .with_context(|| format!("loading audit config from {}", config_path.display()))?;

    let client = PageClient::new(app.fetch_timeout_secs, &app.user_agent)?;
    let page = client.fetch_page(url).await?;
    let signals = extract_signals(&page.url, page.status, &page.body);

    let keyword_text = format!(
        "{} {} {}",
        signals.title, signals.meta_description, signals.h1
    );
    let keywords = extract_keywords(&keyword_text, &config.stop_words, config.max_keywords);
    let score = seo_score(&signals, &config.rubric);
    let gaps = analyze_gaps(&signals, None, &config);

    println!("url:          {}", signals.url);
    println!("status:       {}", signals.http_status);
    println!("title:        \"{}\" ({} chars)", signals.title, signals.title_length);
    println!("description:  \"{}\"", signals.meta_description);
    println!("h1:           \"{}\"", signals.h1);
    println!("headings:     {}", signals.headings.len());
    println!("words:        {}", signals.word_count);
    println!("schema types: {}", signals.structured_data_types.join(", "));
    println!("keywords:     {}", keywords.joined());
    println!("score:        {score}/100");
    if gaps.is_empty() {
        println!("gaps:         none");
    } else {
        println!("gaps:");
        for gap in &gaps {
            println!("  - {gap}");
        }
    }

    Ok(())
}

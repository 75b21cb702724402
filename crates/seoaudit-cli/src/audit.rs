//! `seoaudit audit`: full run over a sitemap or an explicit URL list.

use std::path::Path;

use anyhow::Context;

use seoaudit_audit::run_audit;
use seoaudit_core::{load_audit_config, AppConfig};
use seoaudit_fetch::{fetch_sitemap_urls, PageClient};

use crate::report;

pub(crate) async fn run(
    app: &AppConfig,
    site: &str,
    urls_file: Option<&Path>,
    config_path: Option<&Path>,
    out_dir: Option<&Path>,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let config_path = config_path.unwrap_or(&app.audit_config_path);
    let config = load_audit_config(config_path)
        .with_context(|| format!("loading audit config from {}", config_path.display()))?;

    let client = PageClient::new(app.fetch_timeout_secs, &app.user_agent)?;
    let max_pages = limit.unwrap_or(app.max_pages);

    let urls = match urls_file {
        Some(path) => read_url_list(path, max_pages)?,
        None => fetch_sitemap_urls(&client, site, max_pages).await?,
    };

    tracing::info!(site, pages = urls.len(), "starting audit run");
    let results = run_audit(&client, &config, &urls, app.inter_request_delay_ms).await;

    let out_dir = out_dir.unwrap_or(&app.out_dir);
    let (full_path, priority_path) = report::write_reports(out_dir, &results)?;

    let fixes = results.iter().filter(|r| r.needs_fix).count();
    println!("audited {} pages ({fixes} need fixes)", results.len());
    println!("full report: {}", full_path.display());
    println!("priority fixes: {}", priority_path.display());

    Ok(())
}

/// Read one URL per line; blank lines and `#` comments are skipped.
fn read_url_list(path: &Path, max_pages: usize) -> anyhow::Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading URL list from {}", path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_owned)
        .take(max_pages)
        .collect())
}

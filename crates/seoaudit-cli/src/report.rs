//! JSON report sink: full results plus a needs-fix-only file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;

use seoaudit_audit::AuditResult;

/// Write the dated full report and the priority-fixes file into `out_dir`.
///
/// Returns the two written paths. The date lives only in the file name;
/// record contents stay byte-deterministic.
pub(crate) fn write_reports(
    out_dir: &Path,
    results: &[AuditResult],
) -> anyhow::Result<(PathBuf, PathBuf)> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let full_path = out_dir.join(format!("seo_audit_{}.json", Utc::now().format("%Y%m%d")));
    let full_json = serde_json::to_string_pretty(results).context("serializing audit results")?;
    fs::write(&full_path, full_json)
        .with_context(|| format!("writing {}", full_path.display()))?;

    let priority: Vec<&AuditResult> = results.iter().filter(|r| r.needs_fix).collect();
    let priority_path = out_dir.join("priority_fixes.json");
    let priority_json =
        serde_json::to_string_pretty(&priority).context("serializing priority fixes")?;
    fs::write(&priority_path, priority_json)
        .with_context(|| format!("writing {}", priority_path.display()))?;

    Ok((full_path, priority_path))
}

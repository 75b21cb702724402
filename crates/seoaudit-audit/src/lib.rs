//! On-page SEO audit pipeline.
//!
//! Extracts on-page signals from fetched HTML, derives candidate keywords,
//! resolves a reference competitor from the configured table, scores each
//! page against the additive rubric, detects remediation gaps, and builds a
//! deterministic fix prompt per page. An optional LLM call enriches each
//! result with a page category; it never feeds the scoring path.

pub mod competitor;
pub mod error;
pub mod extract;
pub mod gaps;
pub mod keywords;
pub mod pipeline;
pub mod prompt;
pub mod scorer;
pub mod types;

mod categorize;

pub use competitor::resolve_competitor;
pub use error::AuditError;
pub use extract::extract_signals;
pub use gaps::analyze_gaps;
pub use keywords::extract_keywords;
pub use pipeline::{audit_page, run_audit};
pub use prompt::build_remediation_prompt;
pub use scorer::{needs_fix, seo_score};
pub use types::{AuditResult, KeywordSet, PageSignals};

use serde::Serialize;

/// Retention limits applied at extraction time. Downstream stages never see
/// longer values; the pre-truncation title length is kept separately because
/// both the scorer and the gap analyzer band on it.
pub const TITLE_MAX_CHARS: usize = 60;
pub const DESCRIPTION_MAX_CHARS: usize = 160;
pub const H1_MAX_CHARS: usize = 80;

/// Normalized on-page signals for one audited page.
///
/// Created once per successful fetch and immutable thereafter. Pages whose
/// fetch fails produce no `PageSignals` at all.
#[derive(Debug, Clone)]
pub struct PageSignals {
    pub url: String,
    /// Tag-stripped title, truncated to [`TITLE_MAX_CHARS`].
    pub title: String,
    /// Character count of the title before truncation.
    pub title_length: usize,
    /// Meta description, truncated to [`DESCRIPTION_MAX_CHARS`].
    pub meta_description: String,
    /// First h1 text, truncated to [`H1_MAX_CHARS`].
    pub h1: String,
    /// h1/h2/h3 text in document order.
    pub headings: Vec<String>,
    /// Visible-text word count (script/style excluded).
    pub word_count: usize,
    /// De-duplicated JSON-LD `@type` names in first-seen order. A block with
    /// no recognizable type records `"Unknown"` so presence is preserved.
    pub structured_data_types: Vec<String>,
    pub http_status: u16,
}

/// Ranked candidate keywords for one page: descending frequency, first-seen
/// order breaking ties. Recomputed fresh for each `PageSignals`.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    terms: Vec<String>,
}

impl KeywordSet {
    pub(crate) fn new(terms: Vec<String>) -> Self {
        Self { terms }
    }

    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// The top-ranked term, treated as the page's search-intent target.
    #[must_use]
    pub fn primary(&self) -> Option<&str> {
        self.terms.first().map(String::as_str)
    }

    /// Space-joined lowercase terms, used for competitor substring matching.
    #[must_use]
    pub fn joined(&self) -> String {
        self.terms.join(" ")
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Final audit record for one successfully processed page.
#[derive(Debug, Clone, Serialize)]
pub struct AuditResult {
    pub url: String,
    /// Empty when the page text yields no candidate keywords.
    pub primary_keyword: String,
    pub competitor_url: Option<String>,
    pub score: u32,
    pub gaps: Vec<String>,
    pub needs_fix: bool,
    pub remediation_prompt: String,
    /// Optional LLM enrichment; never a scoring input.
    pub category: Option<String>,
}

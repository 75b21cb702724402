use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Additive scoring rubric. All bonuses stack on `base_score` and the final
/// score is clamped to [0, 100] by the scorer.
///
/// Defaults are the canonical preset; observed variants (base 0, content
/// bands at 1000/1800, threshold 80) are expressible by editing the YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditRubric {
    pub base_score: u32,
    /// Inclusive title-length band earning the full title bonus.
    pub title_exact_min: usize,
    pub title_exact_max: usize,
    pub title_exact_bonus: u32,
    /// Wider inclusive band earning the partial title bonus.
    pub title_near_min: usize,
    pub title_near_max: usize,
    pub title_near_bonus: u32,
    pub h1_bonus: u32,
    /// Word counts strictly above these earn the matching bonus.
    pub deep_content_words: usize,
    pub deep_content_bonus: u32,
    pub solid_content_words: usize,
    pub solid_content_bonus: u32,
    pub structured_data_bonus: u32,
}

impl Default for AuditRubric {
    fn default() -> Self {
        Self {
            base_score: 50,
            title_exact_min: 50,
            title_exact_max: 60,
            title_exact_bonus: 15,
            title_near_min: 30,
            title_near_max: 70,
            title_near_bonus: 10,
            h1_bonus: 10,
            deep_content_words: 1500,
            deep_content_bonus: 15,
            solid_content_words: 800,
            solid_content_bonus: 10,
            structured_data_bonus: 10,
        }
    }
}

/// Thresholds for prioritization and competitor content-depth gaps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GapThresholds {
    /// Pages scoring below this need a fix.
    pub priority_threshold: u32,
    /// A content gap requires the page below this...
    pub content_gap_page_words: usize,
    /// ...while the competitor exceeds this.
    pub content_gap_competitor_words: usize,
}

impl Default for GapThresholds {
    fn default() -> Self {
        Self {
            priority_threshold: 70,
            content_gap_page_words: 1500,
            content_gap_competitor_words: 2000,
        }
    }
}

/// One entry of the ordered competitor table.
///
/// Entry order is part of the contract: resolution returns the first entry
/// whose `keyword` matches, so overlapping keys are disambiguated by position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitorEntry {
    /// Lowercase keyword or phrase matched as a substring.
    pub keyword: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    pub rubric: AuditRubric,
    pub thresholds: GapThresholds,
    /// Keywords retained per page, by descending frequency.
    pub max_keywords: usize,
    /// Tokens excluded from keyword extraction. Site-specific terms (e.g. the
    /// site's own city name) can be appended here.
    pub stop_words: Vec<String>,
    /// Minimal structured-data set expected for the domain; named in the
    /// "add structured data" gap when a page has none.
    pub expected_schema_types: Vec<String>,
    pub competitors: Vec<CompetitorEntry>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            rubric: AuditRubric::default(),
            thresholds: GapThresholds::default(),
            max_keywords: 5,
            stop_words: default_stop_words(),
            expected_schema_types: vec![
                "RealEstateListing".to_string(),
                "FAQPage".to_string(),
            ],
            competitors: Vec::new(),
        }
    }
}

fn default_stop_words() -> Vec<String> {
    ["the", "and", "for", "with", "are", "this", "from", "that"]
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

/// Load and validate the audit configuration from a YAML file.
///
/// A missing or malformed file is an error, never a silent fallback to
/// defaults; the config changes audit outcomes.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_audit_config(path: &Path) -> Result<AuditConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::AuditFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let config: AuditConfig =
        serde_yaml::from_str(&content).map_err(ConfigError::AuditFileParse)?;

    validate_audit_config(&config)?;

    Ok(config)
}

fn validate_audit_config(config: &AuditConfig) -> Result<(), ConfigError> {
    let rubric = &config.rubric;

    // Scores live in [0, 100]; a base or bonus beyond that is a typo, not a
    // preset.
    let point_values = [
        ("base_score", rubric.base_score),
        ("title_exact_bonus", rubric.title_exact_bonus),
        ("title_near_bonus", rubric.title_near_bonus),
        ("h1_bonus", rubric.h1_bonus),
        ("deep_content_bonus", rubric.deep_content_bonus),
        ("solid_content_bonus", rubric.solid_content_bonus),
        ("structured_data_bonus", rubric.structured_data_bonus),
    ];
    for (name, value) in point_values {
        if value > 100 {
            return Err(ConfigError::Validation(format!(
                "{name} {value} exceeds the 0-100 score range"
            )));
        }
    }

    if rubric.title_exact_min > rubric.title_exact_max {
        return Err(ConfigError::Validation(format!(
            "title_exact band is inverted: {} > {}",
            rubric.title_exact_min, rubric.title_exact_max
        )));
    }
    if rubric.title_near_min > rubric.title_near_max {
        return Err(ConfigError::Validation(format!(
            "title_near band is inverted: {} > {}",
            rubric.title_near_min, rubric.title_near_max
        )));
    }
    if rubric.title_near_min > rubric.title_exact_min
        || rubric.title_near_max < rubric.title_exact_max
    {
        return Err(ConfigError::Validation(
            "title_near band must contain the title_exact band".to_string(),
        ));
    }
    if rubric.solid_content_words > rubric.deep_content_words {
        return Err(ConfigError::Validation(format!(
            "solid_content_words {} exceeds deep_content_words {}",
            rubric.solid_content_words, rubric.deep_content_words
        )));
    }

    if config.thresholds.priority_threshold > 100 {
        return Err(ConfigError::Validation(format!(
            "priority_threshold {} exceeds the 0-100 score range",
            config.thresholds.priority_threshold
        )));
    }

    if config.max_keywords == 0 {
        return Err(ConfigError::Validation(
            "max_keywords must be at least 1".to_string(),
        ));
    }

    let mut seen_keywords = HashSet::new();
    for entry in &config.competitors {
        if entry.keyword.trim().is_empty() {
            return Err(ConfigError::Validation(
                "competitor keyword must be non-empty".to_string(),
            ));
        }
        if entry.keyword != entry.keyword.to_lowercase() {
            return Err(ConfigError::Validation(format!(
                "competitor keyword '{}' must be lowercase",
                entry.keyword
            )));
        }
        if entry.url.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "competitor entry '{}' has an empty url",
                entry.keyword
            )));
        }
        if !seen_keywords.insert(entry.keyword.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate competitor keyword: '{}'",
                entry.keyword
            )));
        }
    }

    Ok(())
}

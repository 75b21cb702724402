//! Shared configuration types for the SEO audit pipeline.
//!
//! Holds the env-driven application config (timeouts, user agent, paths) and
//! the YAML-backed audit config: scoring rubric, gap thresholds, keyword stop
//! words, and the ordered competitor table.

pub mod app_config;
pub mod audit_config;
pub mod config;

pub use app_config::{AppConfig, Environment};
pub use audit_config::{
    load_audit_config, AuditConfig, AuditRubric, CompetitorEntry, GapThresholds,
};
pub use config::{load_app_config, load_app_config_from_env};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read audit config {path}: {source}")]
    AuditFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse audit config: {0}")]
    AuditFileParse(#[from] serde_yaml::Error),

    #[error("audit config validation failed: {0}")]
    Validation(String),
}

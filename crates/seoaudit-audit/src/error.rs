use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("fetch error: {0}")]
    Fetch(#[from] seoaudit_fetch::FetchError),
}

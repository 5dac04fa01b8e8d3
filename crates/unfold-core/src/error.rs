use thiserror::Error;

#[derive(Debug, Error)]
pub enum UnfoldError {
    #[error("unknown complexity tier `{0}` (expected low, medium or high)")]
    InvalidComplexity(String),
    #[error("stored animation config is not valid JSON: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("preference storage failed: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, UnfoldError>;

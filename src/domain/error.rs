use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Embedding provider error for '{text}': {message}")]
    Provider { text: String, message: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid word file: {0}")]
    WordFile(String),
}

impl DomainError {
    pub fn provider(text: &str, message: impl Into<String>) -> Self {
        DomainError::Provider {
            text: text.to_string(),
            message: message.into(),
        }
    }

    pub fn is_provider(&self) -> bool {
        matches!(self, DomainError::Provider { .. })
    }
}

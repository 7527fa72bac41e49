use crate::domain::error::DomainError;

/// Turns text into a fixed-length vector.
///
/// Implementations fail with [`DomainError::Provider`] carrying the text that
/// could not be embedded. No retries are attempted at this layer.
#[async_trait::async_trait]
pub trait EmbeddingProvider: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, DomainError>;

    /// Model identifier sent with every request.
    fn model(&self) -> &str;

    /// Whether a credential is present. Unconfigured providers fail every call.
    fn is_configured(&self) -> bool;
}

use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_MODEL: &str = "text-embedding-004";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Google Generative AI `embedContent` client.
pub struct GoogleProvider {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

#[derive(Serialize)]
struct EmbedContentRequest<'a> {
    model: String,
    content: Content<'a>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct EmbedContentResponse {
    embedding: ContentEmbedding,
}

#[derive(Deserialize)]
struct ContentEmbedding {
    values: Vec<f32>,
}

impl GoogleProvider {
    pub fn new(api_key: Option<String>, model: Option<String>, base_url: Option<String>) -> Self {
        let model = model.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        Self {
            client: Client::new(),
            api_key: api_key.filter(|k| !k.is_empty()),
            // Accept both "text-embedding-004" and "models/text-embedding-004".
            model: model.trim_start_matches("models/").to_string(),
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        }
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for GoogleProvider {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, DomainError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| DomainError::provider(text, "GOOGLE_AI_API_KEY is not configured"))?;

        let url = format!("{}/v1beta/models/{}:embedContent", self.base_url, self.model);
        debug!(model = %self.model, "requesting embedding");

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&EmbedContentRequest {
                model: format!("models/{}", self.model),
                content: Content {
                    parts: [Part { text }],
                },
            })
            .send()
            .await
            .map_err(|e| DomainError::provider(text, format!("Google AI request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::provider(text, format!("Google AI {status}: {body}")));
        }

        let result: EmbedContentResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::provider(text, format!("Parse error: {e}")))?;
        if result.embedding.values.is_empty() {
            return Err(DomainError::provider(text, "Google AI returned an empty embedding"));
        }
        Ok(result.embedding.values)
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::infrastructure::embeddings::google::GoogleProvider;
use crate::infrastructure::embeddings::openai::OpenAiProvider;
use std::str::FromStr;
use std::sync::Arc;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    #[default]
    Google,
    OpenAi,
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "google" | "gemini" => Ok(ProviderKind::Google),
            "openai" => Ok(ProviderKind::OpenAi),
            _ => Err(format!("Unknown embedding provider: {s}")),
        }
    }
}

/// Settings read once from the process environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub provider: ProviderKind,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let provider = match lookup("VOCAB_EMBEDDING_PROVIDER") {
            Some(p) => p.parse().map_err(DomainError::Config)?,
            None => ProviderKind::default(),
        };
        let api_key = match provider {
            ProviderKind::Google => lookup("GOOGLE_AI_API_KEY"),
            ProviderKind::OpenAi => lookup("OPENAI_API_KEY"),
        };
        let port = match lookup("MCP_SERVER_PORT") {
            Some(p) => p
                .parse()
                .map_err(|_| DomainError::Config(format!("Invalid MCP_SERVER_PORT: {p}")))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            provider,
            api_key: api_key.filter(|k| !k.is_empty()),
            model: lookup("VOCAB_EMBEDDING_MODEL"),
            base_url: lookup("VOCAB_EMBEDDING_BASE_URL"),
            host: lookup("MCP_SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        })
    }

    pub fn embedding_provider(&self) -> Arc<dyn EmbeddingProvider> {
        let (api_key, model, base_url) =
            (self.api_key.clone(), self.model.clone(), self.base_url.clone());
        match self.provider {
            ProviderKind::Google => Arc::new(GoogleProvider::new(api_key, model, base_url)),
            ProviderKind::OpenAi => Arc::new(OpenAiProvider::new(api_key, model, base_url)),
        }
    }
}

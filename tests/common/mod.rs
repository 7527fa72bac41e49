//! Shared test helpers.
#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use vocab_context::domain::error::DomainError;
use vocab_context::domain::ports::embedding_port::EmbeddingProvider;
use vocab_context::VocabularyStore;

/// Provider backed by a fixed table. Unknown or failing texts error out.
#[derive(Default)]
pub struct StubProvider {
    vectors: HashMap<String, Vec<f32>>,
    failing: HashSet<String>,
    calls: AtomicUsize,
}

impl StubProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, text: &str, vector: &[f32]) -> Self {
        self.vectors.insert(text.to_string(), vector.to_vec());
        self
    }

    pub fn failing(mut self, text: &str) -> Self {
        self.failing.insert(text.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmbeddingProvider for StubProvider {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(text) {
            return Err(DomainError::provider(text, "stub outage"));
        }
        self.vectors
            .get(text)
            .cloned()
            .ok_or_else(|| DomainError::provider(text, "no stub vector"))
    }

    fn model(&self) -> &str {
        "stub"
    }

    fn is_configured(&self) -> bool {
        true
    }
}

/// Words used across tests: "go" and "run" with "move" closer to "run".
pub fn motion_provider() -> StubProvider {
    StubProvider::new()
        .with("go", &[1.0, 0.0, 0.0])
        .with("run", &[0.0, 1.0, 0.0])
        .with("eat", &[0.0, 0.0, 1.0])
        .with("move", &[0.4, 0.9, 0.1])
}

pub fn setup(provider: StubProvider) -> (VocabularyStore, Arc<StubProvider>) {
    let provider = Arc::new(provider);
    (VocabularyStore::with_provider(provider.clone()), provider)
}

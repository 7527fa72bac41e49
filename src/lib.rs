pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod http;
pub mod infrastructure;

use crate::application::add_words::AddWordsUseCase;
use crate::application::list_words::ListWordsUseCase;
use crate::application::search::SearchUseCase;
use crate::config::Config;
use crate::domain::entities::vocabulary_entry::{BatchReport, NewWord, ScoredWord, WordInfo};
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::ports::vocabulary_repository::VocabularyRepository;
use crate::domain::values::word_status::WordStatus;
use crate::infrastructure::memory::vocabulary_repo::InMemoryVocabularyRepo;
use std::sync::Arc;
use tracing::warn;

pub const DEFAULT_SEARCH_LIMIT: usize = 5;

/// In-memory vocabulary with embedding-based similarity search.
///
/// One instance holds one user's words at a time; loading another user's
/// words means clearing and refilling the same store.
pub struct VocabularyStore {
    add_words_uc: AddWordsUseCase,
    search_uc: SearchUseCase,
    list_words_uc: ListWordsUseCase,
    embedder: Arc<dyn EmbeddingProvider>,
}

impl VocabularyStore {
    pub fn from_config(config: &Config) -> Self {
        let embedder = config.embedding_provider();
        if !embedder.is_configured() {
            warn!(
                model = embedder.model(),
                "embedding provider has no API key; every embedding request will fail"
            );
        }
        Self::with_provider(embedder)
    }

    pub fn with_provider(embedder: Arc<dyn EmbeddingProvider>) -> Self {
        Self::with_repository(Arc::new(InMemoryVocabularyRepo::new()), embedder)
    }

    pub fn with_repository(
        repo: Arc<dyn VocabularyRepository>,
        embedder: Arc<dyn EmbeddingProvider>,
    ) -> Self {
        Self {
            add_words_uc: AddWordsUseCase::new(repo.clone(), embedder.clone()),
            search_uc: SearchUseCase::new(repo.clone(), embedder.clone()),
            list_words_uc: ListWordsUseCase::new(repo),
            embedder,
        }
    }

    pub async fn add_word(
        &self,
        word: impl Into<String>,
        meaning: impl Into<String>,
        status: Option<WordStatus>,
    ) -> Result<(), DomainError> {
        self.add_words_uc
            .add_word(word.into(), meaning.into(), status.unwrap_or_default())
            .await
    }

    pub async fn add_words_batch(&self, words: Vec<NewWord>) -> BatchReport {
        self.add_words_uc.add_words_batch(words).await
    }

    pub async fn search_similar_words(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<ScoredWord>, DomainError> {
        self.search_uc.similar_words(query, limit).await
    }

    pub fn get_all_words(&self) -> Result<Vec<WordInfo>, DomainError> {
        self.list_words_uc.all()
    }

    pub fn clear(&self) -> Result<(), DomainError> {
        self.list_words_uc.clear()
    }

    pub fn len(&self) -> Result<usize, DomainError> {
        self.list_words_uc.len()
    }

    pub fn is_empty(&self) -> Result<bool, DomainError> {
        self.list_words_uc.is_empty()
    }

    /// Dimension of the stored embeddings, `None` while empty.
    pub fn dimension(&self) -> Result<Option<usize>, DomainError> {
        self.list_words_uc.dimension()
    }

    pub fn embedding_model(&self) -> &str {
        self.embedder.model()
    }
}

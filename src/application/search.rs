use crate::domain::entities::vocabulary_entry::ScoredWord;
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::ports::vocabulary_repository::VocabularyRepository;
use crate::domain::values::similarity::cosine_similarity;
use std::sync::Arc;

pub struct SearchUseCase {
    repo: Arc<dyn VocabularyRepository>,
    embedder: Arc<dyn EmbeddingProvider>,
}

impl SearchUseCase {
    pub fn new(repo: Arc<dyn VocabularyRepository>, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        Self { repo, embedder }
    }

    /// Ranks every stored word against `query`, most similar first.
    ///
    /// Equal scores keep insertion order. An empty store or a zero limit
    /// returns nothing without calling the provider.
    pub async fn similar_words(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<ScoredWord>, DomainError> {
        if limit == 0 || self.repo.is_empty()? {
            return Ok(vec![]);
        }

        let query_vector = self.embedder.embed(query).await?;

        let mut results = self
            .repo
            .entries()?
            .iter()
            .map(|entry| Ok(entry.scored(cosine_similarity(&query_vector, &entry.embedding)?)))
            .collect::<Result<Vec<_>, DomainError>>()?;

        // `sort_by` is stable, so ties stay in insertion order.
        results.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        results.truncate(limit);
        Ok(results)
    }
}

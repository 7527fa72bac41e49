use crate::domain::entities::vocabulary_entry::{BatchReport, FailedWord, NewWord, VocabularyEntry};
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::ports::vocabulary_repository::VocabularyRepository;
use crate::domain::values::word_status::WordStatus;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct AddWordsUseCase {
    repo: Arc<dyn VocabularyRepository>,
    embedder: Arc<dyn EmbeddingProvider>,
}

impl AddWordsUseCase {
    pub fn new(repo: Arc<dyn VocabularyRepository>, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        Self { repo, embedder }
    }

    /// Embeds `word` and stores it. Nothing is stored when embedding fails.
    pub async fn add_word(
        &self,
        word: String,
        meaning: String,
        status: WordStatus,
    ) -> Result<(), DomainError> {
        let result = match self.embedder.embed(&word).await {
            Ok(embedding) => {
                debug!(word = %word, dimension = embedding.len(), "embedded word");
                self.repo
                    .upsert(VocabularyEntry::new(word.clone(), meaning, status, embedding))
            }
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            warn!(word = %word, error = %e, "failed to add word");
        }
        result
    }

    /// Adds words one at a time in input order. A failed word is reported
    /// and the batch carries on.
    pub async fn add_words_batch(&self, words: Vec<NewWord>) -> BatchReport {
        let mut report = BatchReport::default();
        for NewWord { word, meaning, status } in words {
            match self
                .add_word(word.clone(), meaning, status.unwrap_or_default())
                .await
            {
                Ok(()) => report.added += 1,
                Err(e) => report.failed.push(FailedWord {
                    word,
                    error: e.to_string(),
                }),
            }
        }
        report
    }
}

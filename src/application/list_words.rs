use crate::domain::entities::vocabulary_entry::WordInfo;
use crate::domain::error::DomainError;
use crate::domain::ports::vocabulary_repository::VocabularyRepository;
use std::sync::Arc;

pub struct ListWordsUseCase {
    repo: Arc<dyn VocabularyRepository>,
}

impl ListWordsUseCase {
    pub fn new(repo: Arc<dyn VocabularyRepository>) -> Self {
        Self { repo }
    }

    pub fn all(&self) -> Result<Vec<WordInfo>, DomainError> {
        Ok(self.repo.entries()?.iter().map(|e| e.info()).collect())
    }

    pub fn len(&self) -> Result<usize, DomainError> {
        self.repo.len()
    }

    pub fn is_empty(&self) -> Result<bool, DomainError> {
        self.repo.is_empty()
    }

    pub fn dimension(&self) -> Result<Option<usize>, DomainError> {
        self.repo.dimension()
    }

    pub fn clear(&self) -> Result<(), DomainError> {
        self.repo.clear()
    }
}

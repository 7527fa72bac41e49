use crate::domain::entities::vocabulary_entry::VocabularyEntry;
use crate::domain::error::DomainError;
use std::sync::Arc;

/// Keyed, insertion-ordered storage for vocabulary entries.
///
/// `upsert` replaces an existing entry in place, so the word keeps the
/// position of its first insertion.
pub trait VocabularyRepository: Send + Sync {
    fn upsert(&self, entry: VocabularyEntry) -> Result<(), DomainError>;
    fn entries(&self) -> Result<Vec<Arc<VocabularyEntry>>, DomainError>;
    fn len(&self) -> Result<usize, DomainError>;
    fn dimension(&self) -> Result<Option<usize>, DomainError>;
    fn clear(&self) -> Result<(), DomainError>;

    fn is_empty(&self) -> Result<bool, DomainError> {
        Ok(self.len()? == 0)
    }
}

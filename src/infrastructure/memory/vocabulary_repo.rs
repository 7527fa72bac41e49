use crate::domain::entities::vocabulary_entry::VocabularyEntry;
use crate::domain::error::DomainError;
use crate::domain::ports::vocabulary_repository::VocabularyRepository;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

type EntryMap = IndexMap<String, Arc<VocabularyEntry>>;

/// Process-local repository. Embedding and metadata live in one value per
/// word, so they are always written and removed together.
#[derive(Default)]
pub struct InMemoryVocabularyRepo {
    entries: RwLock<EntryMap>,
}

impl InMemoryVocabularyRepo {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, EntryMap>, DomainError> {
        self.entries
            .read()
            .map_err(|e| DomainError::Storage(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, EntryMap>, DomainError> {
        self.entries
            .write()
            .map_err(|e| DomainError::Storage(e.to_string()))
    }
}

impl VocabularyRepository for InMemoryVocabularyRepo {
    fn upsert(&self, entry: VocabularyEntry) -> Result<(), DomainError> {
        let mut entries = self.write()?;

        // Replacing the sole entry may change the dimension.
        let replaces_only_entry = entries.len() == 1 && entries.contains_key(&entry.word);
        if let Some(first) = entries.values().next() {
            if !replaces_only_entry && first.dimension() != entry.dimension() {
                return Err(DomainError::DimensionMismatch {
                    expected: first.dimension(),
                    actual: entry.dimension(),
                });
            }
        }

        entries.insert(entry.word.clone(), Arc::new(entry));
        Ok(())
    }

    fn entries(&self) -> Result<Vec<Arc<VocabularyEntry>>, DomainError> {
        Ok(self.read()?.values().cloned().collect())
    }

    fn len(&self) -> Result<usize, DomainError> {
        Ok(self.read()?.len())
    }

    fn dimension(&self) -> Result<Option<usize>, DomainError> {
        Ok(self.read()?.values().next().map(|e| e.dimension()))
    }

    fn clear(&self) -> Result<(), DomainError> {
        self.write()?.clear();
        Ok(())
    }
}

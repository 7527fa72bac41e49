use crate::domain::values::word_status::WordStatus;
use serde::{Deserialize, Serialize};

/// A stored word together with its embedding.
#[derive(Debug, Clone)]
pub struct VocabularyEntry {
    pub word: String,
    pub meaning: String,
    pub status: WordStatus,
    pub embedding: Vec<f32>,
}

impl VocabularyEntry {
    pub fn new(word: String, meaning: String, status: WordStatus, embedding: Vec<f32>) -> Self {
        Self {
            word,
            meaning,
            status,
            embedding,
        }
    }

    pub fn dimension(&self) -> usize {
        self.embedding.len()
    }

    pub fn info(&self) -> WordInfo {
        WordInfo {
            word: self.word.clone(),
            meaning: self.meaning.clone(),
            status: self.status.clone(),
        }
    }

    pub fn scored(&self, similarity: f64) -> ScoredWord {
        ScoredWord {
            word: self.word.clone(),
            meaning: self.meaning.clone(),
            status: self.status.clone(),
            similarity,
        }
    }
}

/// Word to be ingested. `status` falls back to "new".
#[derive(Debug, Clone, PartialEq)]
pub struct NewWord {
    pub word: String,
    pub meaning: String,
    pub status: Option<WordStatus>,
}

impl NewWord {
    pub fn new(word: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            meaning: meaning.into(),
            status: None,
        }
    }

    pub fn with_status(mut self, status: impl Into<WordStatus>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// Stored word without its embedding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordInfo {
    pub word: String,
    pub meaning: String,
    pub status: WordStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredWord {
    pub word: String,
    pub meaning: String,
    pub status: WordStatus,
    pub similarity: f64,
}

/// Outcome of a batch ingestion. Failed words are skipped, never fatal.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchReport {
    pub added: usize,
    pub failed: Vec<FailedWord>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailedWord {
    pub word: String,
    pub error: String,
}

use crate::domain::entities::vocabulary_entry::NewWord;
use crate::domain::error::DomainError;
use crate::http::dto::WordPayload;
use std::path::Path;

/// Reads a JSON array of `{english, japanese, status?}` objects, the same
/// shape `load_user_words` accepts.
pub fn read_word_file(path: &Path) -> Result<Vec<NewWord>, DomainError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| DomainError::WordFile(format!("cannot read {}: {e}", path.display())))?;
    let words: Vec<WordPayload> = serde_json::from_str(&raw)
        .map_err(|e| DomainError::WordFile(format!("{}: {e}", path.display())))?;
    Ok(words.into_iter().map(NewWord::from).collect())
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Learning status of a word ("new", "learning", "mastered", ...).
///
/// The set of statuses belongs to the client, so any string is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordStatus(String);

impl WordStatus {
    pub const NEW: &'static str = "new";

    pub fn new(value: impl Into<String>) -> Self {
        WordStatus(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for WordStatus {
    fn default() -> Self {
        WordStatus(Self::NEW.to_string())
    }
}

impl fmt::Display for WordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WordStatus {
    fn from(s: &str) -> Self {
        WordStatus(s.to_string())
    }
}

impl From<String> for WordStatus {
    fn from(s: String) -> Self {
        WordStatus(s)
    }
}

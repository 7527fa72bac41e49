use crate::domain::entities::vocabulary_entry::{FailedWord, NewWord, ScoredWord, WordInfo};
use crate::domain::values::word_status::WordStatus;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_RELATED_LIMIT: i64 = 3;

/// Word as sent by the client app.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordPayload {
    pub english: String,
    pub japanese: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<WordStatus>,
}

impl From<WordPayload> for NewWord {
    fn from(w: WordPayload) -> Self {
        NewWord {
            word: w.english,
            meaning: w.japanese,
            status: w.status,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoadWordsRequest {
    #[serde(default)]
    pub user_id: Option<Value>,
    #[serde(default)]
    pub words: Vec<WordPayload>,
}

#[derive(Debug, Serialize)]
pub struct LoadWordsResponse {
    pub success: bool,
    pub message: String,
    pub added: usize,
    pub failed: Vec<FailedWord>,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub user_id: Option<Value>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub limit: Option<i64>,
}

impl SearchRequest {
    /// Requested limit; negative values mean "nothing".
    pub fn limit(&self) -> usize {
        usize::try_from(self.limit.unwrap_or(DEFAULT_RELATED_LIMIT)).unwrap_or(0)
    }
}

#[derive(Debug, Serialize)]
pub struct RelatedWord {
    pub english: String,
    pub japanese: String,
    pub status: WordStatus,
    pub similarity: f64,
}

impl From<ScoredWord> for RelatedWord {
    fn from(s: ScoredWord) -> Self {
        RelatedWord {
            english: s.word,
            japanese: s.meaning,
            status: s.status,
            similarity: round3(s.similarity),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub related_words: Vec<RelatedWord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SearchResponse {
    pub fn from_results(results: Vec<ScoredWord>) -> Self {
        if results.is_empty() {
            return Self::no_matches();
        }
        SearchResponse {
            related_words: results.into_iter().map(RelatedWord::from).collect(),
            message: None,
        }
    }

    pub fn no_matches() -> Self {
        SearchResponse {
            related_words: vec![],
            message: Some("No similar words found".to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WordListRequest {
    #[serde(default)]
    pub user_id: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct WordListResponse {
    pub user_id: Value,
    pub total_words: usize,
    pub words: Vec<WordInfo>,
}

/// Accepts non-empty strings and non-zero numbers as a user id. Booleans,
/// arrays and objects are rejected even when non-empty.
pub fn present_user_id(user_id: &Option<Value>) -> Option<&Value> {
    user_id.as_ref().filter(|v| match v {
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        _ => false,
    })
}

pub fn user_id_label(user_id: &Value) -> String {
    match user_id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn limit_defaults_and_clamps() {
        let req: SearchRequest = serde_json::from_value(json!({"user_id": "u", "text": "t"})).unwrap();
        assert_eq!(req.limit(), 3);
        let req: SearchRequest =
            serde_json::from_value(json!({"user_id": "u", "text": "t", "limit": -2})).unwrap();
        assert_eq!(req.limit(), 0);
        let req: SearchRequest =
            serde_json::from_value(json!({"user_id": "u", "text": "t", "limit": 7})).unwrap();
        assert_eq!(req.limit(), 7);
    }

    #[test]
    fn similarity_is_rounded_to_three_places() {
        let related = RelatedWord::from(ScoredWord {
            word: "run".into(),
            meaning: "走る".into(),
            status: WordStatus::default(),
            similarity: 0.987_654,
        });
        assert_eq!(related.similarity, 0.988);
    }

    #[test]
    fn user_id_presence() {
        assert!(present_user_id(&Some(json!("u1"))).is_some());
        assert!(present_user_id(&Some(json!(42))).is_some());
        assert!(present_user_id(&Some(json!(""))).is_none());
        assert!(present_user_id(&Some(json!(0))).is_none());
        assert!(present_user_id(&Some(Value::Null)).is_none());
        assert!(present_user_id(&Some(json!(true))).is_none());
        assert!(present_user_id(&Some(json!(["u1"]))).is_none());
        assert!(present_user_id(&None).is_none());
        assert_eq!(user_id_label(&json!(42)), "42");
        assert_eq!(user_id_label(&json!("u1")), "u1");
    }

    #[test]
    fn word_payload_maps_to_new_word() {
        let payload: WordPayload =
            serde_json::from_value(json!({"english": "go", "japanese": "行く"})).unwrap();
        let word = NewWord::from(payload);
        assert_eq!(word, NewWord::new("go", "行く"));
    }
}

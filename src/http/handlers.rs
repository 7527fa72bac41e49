use crate::http::dto::{
    present_user_id, user_id_label, LoadWordsRequest, LoadWordsResponse, SearchRequest,
    SearchResponse, WordListRequest, WordListResponse,
};
use crate::http::error::{HttpError, JsonBody};
use crate::VocabularyStore;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{info, warn};

/// Replaces the store's contents with the submitted words.
pub async fn load_user_words(
    State(store): State<Arc<VocabularyStore>>,
    JsonBody(req): JsonBody<LoadWordsRequest>,
) -> Result<Json<LoadWordsResponse>, HttpError> {
    let user_id = present_user_id(&req.user_id)
        .map(user_id_label)
        .ok_or_else(|| HttpError::validation("user_id is required"))?;

    let submitted = req.words.len();
    store.clear()?;
    let report = store
        .add_words_batch(req.words.into_iter().map(Into::into).collect())
        .await;
    info!(
        user_id = %user_id,
        submitted,
        added = report.added,
        failed = report.failed.len(),
        "loaded user words"
    );

    Ok(Json(LoadWordsResponse {
        success: true,
        message: format!("Loaded {submitted} words for user {user_id}"),
        added: report.added,
        failed: report.failed,
    }))
}

pub async fn search_related_words(
    State(store): State<Arc<VocabularyStore>>,
    JsonBody(req): JsonBody<SearchRequest>,
) -> Result<Json<SearchResponse>, HttpError> {
    let text = match (present_user_id(&req.user_id), req.text.as_deref()) {
        (Some(_), Some(text)) if !text.is_empty() => text,
        _ => return Err(HttpError::validation("user_id and text are required")),
    };

    match store.search_similar_words(text, req.limit()).await {
        Ok(results) => Ok(Json(SearchResponse::from_results(results))),
        // Clients treat a provider outage like an empty result.
        Err(e) if e.is_provider() => {
            warn!(error = %e, "query embedding failed; returning no related words");
            Ok(Json(SearchResponse::no_matches()))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn get_user_word_list(
    State(store): State<Arc<VocabularyStore>>,
    JsonBody(req): JsonBody<WordListRequest>,
) -> Result<Json<WordListResponse>, HttpError> {
    let user_id = present_user_id(&req.user_id)
        .cloned()
        .ok_or_else(|| HttpError::validation("user_id is required"))?;

    let words = store.get_all_words()?;
    Ok(Json(WordListResponse {
        user_id,
        total_words: words.len(),
        words,
    }))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

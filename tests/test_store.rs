mod common;

use common::{motion_provider, setup, StubProvider};
use vocab_context::domain::entities::vocabulary_entry::{NewWord, WordInfo};
use vocab_context::domain::error::DomainError;
use vocab_context::domain::values::word_status::WordStatus;

fn info(word: &str, meaning: &str, status: &str) -> WordInfo {
    WordInfo {
        word: word.to_string(),
        meaning: meaning.to_string(),
        status: WordStatus::from(status),
    }
}

#[tokio::test]
async fn test_add_word_defaults_status_to_new() {
    let (store, _) = setup(motion_provider());
    store.add_word("go", "行く", None).await.unwrap();

    assert_eq!(store.get_all_words().unwrap(), vec![info("go", "行く", "new")]);
    assert_eq!(store.dimension().unwrap(), Some(3));
}

#[tokio::test]
async fn test_add_word_embeds_word_not_meaning() {
    // Only "go" has a vector; embedding the meaning would fail.
    let (store, provider) = setup(StubProvider::new().with("go", &[1.0, 0.0]));
    store.add_word("go", "行く", None).await.unwrap();
    assert_eq!(provider.calls(), 1);
    assert_eq!(store.len().unwrap(), 1);
}

#[tokio::test]
async fn test_add_same_word_twice_keeps_latest() {
    let (store, _) = setup(motion_provider());
    store.add_word("go", "行く", None).await.unwrap();
    store.add_word("run", "走る", None).await.unwrap();
    store
        .add_word("go", "進む", Some(WordStatus::from("mastered")))
        .await
        .unwrap();

    assert_eq!(
        store.get_all_words().unwrap(),
        vec![info("go", "進む", "mastered"), info("run", "走る", "new")]
    );
}

#[tokio::test]
async fn test_words_are_case_sensitive() {
    let (store, _) = setup(StubProvider::new().with("Go", &[1.0, 0.0]).with("go", &[0.0, 1.0]));
    store.add_word("Go", "囲碁", None).await.unwrap();
    store.add_word("go", "行く", None).await.unwrap();
    assert_eq!(store.len().unwrap(), 2);
}

#[tokio::test]
async fn test_failed_embedding_adds_nothing() {
    let (store, _) = setup(motion_provider().failing("walk"));
    let err = store.add_word("walk", "歩く", None).await.unwrap_err();
    assert!(matches!(err, DomainError::Provider { ref text, .. } if text == "walk"));
    assert!(store.is_empty().unwrap());
}

#[tokio::test]
async fn test_dimension_mismatch_adds_nothing() {
    let (store, _) = setup(motion_provider().with("walk", &[1.0, 0.0]));
    store.add_word("go", "行く", None).await.unwrap();
    let err = store.add_word("walk", "歩く", None).await.unwrap_err();
    assert!(matches!(err, DomainError::DimensionMismatch { expected: 3, actual: 2 }));
    assert_eq!(store.get_all_words().unwrap(), vec![info("go", "行く", "new")]);
}

#[tokio::test]
async fn test_batch_continues_past_failures() {
    let (store, provider) = setup(motion_provider().failing("walk"));
    let report = store
        .add_words_batch(vec![
            NewWord::new("go", "行く").with_status("mastered"),
            NewWord::new("walk", "歩く"),
            NewWord::new("run", "走る"),
        ])
        .await;

    assert_eq!(report.added, 2);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].word, "walk");
    assert_eq!(provider.calls(), 3);
    assert_eq!(
        store.get_all_words().unwrap(),
        vec![info("go", "行く", "mastered"), info("run", "走る", "new")]
    );
}

#[tokio::test]
async fn test_batch_duplicates_overwrite_in_order() {
    let (store, _) = setup(motion_provider());
    let report = store
        .add_words_batch(vec![
            NewWord::new("go", "行く"),
            NewWord::new("run", "走る"),
            NewWord::new("go", "去る").with_status("learning"),
        ])
        .await;

    assert_eq!(report.added, 3);
    assert!(report.failed.is_empty());
    assert_eq!(
        store.get_all_words().unwrap(),
        vec![info("go", "去る", "learning"), info("run", "走る", "new")]
    );
}

#[tokio::test]
async fn test_empty_batch() {
    let (store, provider) = setup(motion_provider());
    let report = store.add_words_batch(vec![]).await;
    assert_eq!(report.added, 0);
    assert_eq!(provider.calls(), 0);
    assert!(store.get_all_words().unwrap().is_empty());
}

#[tokio::test]
async fn test_clear_empties_store() {
    let (store, _) = setup(motion_provider());
    store.add_word("go", "行く", None).await.unwrap();
    store.add_word("run", "走る", None).await.unwrap();

    store.clear().unwrap();

    assert!(store.get_all_words().unwrap().is_empty());
    assert_eq!(store.dimension().unwrap(), None);
    assert!(store.search_similar_words("move", 5).await.unwrap().is_empty());
}

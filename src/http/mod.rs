//! HTTP tool endpoints over a shared [`VocabularyStore`].

pub mod dto;
pub mod error;
pub mod handlers;

use crate::VocabularyStore;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

pub fn router(store: Arc<VocabularyStore>) -> Router {
    Router::new()
        .route("/tools/load_user_words", post(handlers::load_user_words))
        .route("/tools/search_related_words", post(handlers::search_related_words))
        .route("/tools/get_user_word_list", post(handlers::get_user_word_list))
        .route("/health", get(handlers::health))
        .layer(
            tower_http::trace::TraceLayer::new_for_http()
                .make_span_with(
                    tower_http::trace::DefaultMakeSpan::new().level(tracing::Level::INFO),
                )
                .on_response(
                    tower_http::trace::DefaultOnResponse::new().level(tracing::Level::INFO),
                ),
        )
        .with_state(store)
}

/// Serves the tool endpoints until Ctrl-C.
pub async fn serve(store: Arc<VocabularyStore>, host: &str, port: u16) -> std::io::Result<()> {
    let listener = TcpListener::bind((host, port)).await?;
    info!(address = %listener.local_addr()?, "vocabulary context server listening");
    axum::serve(listener, router(store))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

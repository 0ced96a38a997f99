use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};
use std::sync::Arc;
use std::time::Instant;

use crate::pages;
use crate::query_engine::QueryEngine;

use super::models::{ContentParams, ResultsParams};

pub async fn home_handler() -> Html<String> {
    Html(pages::home::render())
}

pub async fn results_handler(
    State(query_engine): State<Arc<QueryEngine>>,
    Query(params): Query<ResultsParams>,
) -> Html<String> {
    let start = Instant::now();
    let request = params.search_request();
    let navigation = params.navigation();

    let view = query_engine.results(request, navigation).await;

    tracing::info!(
        query = %view.request().query,
        method = %view.request().method,
        ?navigation,
        results = view.results().len(),
        page = view.pagination().current_page(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "rendered results"
    );
    Html(pages::results::render(&view))
}

pub async fn content_handler(
    State(query_engine): State<Arc<QueryEngine>>,
    Query(params): Query<ContentParams>,
) -> (StatusCode, Html<String>) {
    let request = params.search_request();
    let page = params.page();

    let Some(key) = params.item.as_deref().filter(|key| !key.is_empty()) else {
        return (
            StatusCode::NOT_FOUND,
            Html(pages::content::render_missing(&request, page)),
        );
    };

    match query_engine.lookup(&request, key).await {
        Ok(Some(result)) => (
            StatusCode::OK,
            Html(pages::content::render(&result, &request, page)),
        ),
        Ok(None) => {
            tracing::warn!(query = %request.query, item = key, "result not found");
            (
                StatusCode::NOT_FOUND,
                Html(pages::content::render_missing(&request, page)),
            )
        }
        Err(e) => {
            tracing::error!(query = %request.query, item = key, "lookup failed: {e:#}");
            (
                StatusCode::BAD_GATEWAY,
                Html(pages::content::render_failed(e.user_message(), &request, page)),
            )
        }
    }
}

pub async fn not_found_handler() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(pages::not_found()))
}

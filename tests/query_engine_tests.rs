use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

use reuters_search::cache::OutcomeCache;
use reuters_search::data_models::{Method, SearchOutcome, SearchRequest};
use reuters_search::error::{FrontendError, SEARCH_FAILED_MESSAGE};
use reuters_search::query_engine::{Navigation, QueryEngine};
use reuters_search::results_view::{ResultsView, ViewStatus};

mod test_helpers {
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use reuters_search::backend::SearchBackend;
    use reuters_search::data_models::{
        EvaluationMetrics, SearchOutcome, SearchRequest, SearchResult,
    };
    use reuters_search::error::{FrontendError, Result};

    pub enum Reply {
        Outcome(SearchOutcome),
        Status(StatusCode),
    }

    /// In-memory backend that counts and records every request it gets.
    pub struct FakeBackend {
        reply: Reply,
        calls: AtomicUsize,
        requests: Mutex<Vec<SearchRequest>>,
        /// Delay applied to the first call only.
        first_call_delay: Option<Duration>,
    }

    impl FakeBackend {
        pub fn new(reply: Reply) -> Self {
            Self {
                reply,
                calls: AtomicUsize::new(0),
                requests: Mutex::new(Vec::new()),
                first_call_delay: None,
            }
        }

        pub fn with_first_call_delay(mut self, delay: Duration) -> Self {
            self.first_call_delay = Some(delay);
            self
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn requests(&self) -> Vec<SearchRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SearchBackend for FakeBackend {
        async fn search(&self, request: &SearchRequest) -> Result<SearchOutcome> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            self.requests.lock().unwrap().push(request.clone());
            if call == 0 {
                if let Some(delay) = self.first_call_delay {
                    tokio::time::sleep(delay).await;
                }
            }
            match &self.reply {
                Reply::Outcome(outcome) => {
                    // Tag the outcome with the call number so tests can tell responses apart.
                    let mut outcome = outcome.clone();
                    outcome.metrics.recall = Some(call as f64);
                    Ok(outcome)
                }
                Reply::Status(status) => Err(FrontendError::Status(*status)),
            }
        }
    }

    pub fn sample_results(count: usize) -> Vec<SearchResult> {
        (0..count)
            .map(|i| SearchResult {
                name: Some(format!("reut2-000.sgm-{i}")),
                title: format!("Result {i}"),
                content: format!("Full text of result {i}"),
                similarity: 1.0 / (i as f64 + 1.0),
            })
            .collect()
    }

    pub fn outcome(count: usize) -> SearchOutcome {
        SearchOutcome {
            results: sample_results(count),
            metrics: EvaluationMetrics {
                precision: Some(0.5),
                recall: Some(0.4),
                f1_score: Some(0.4444),
            },
        }
    }
}

use test_helpers::*;

fn engine_with(backend: Arc<FakeBackend>) -> QueryEngine {
    QueryEngine::new(backend, OutcomeCache::new(16, Duration::from_secs(60)))
}

#[tokio::test]
async fn test_new_search_issues_exactly_one_request() -> Result<()> {
    let backend = Arc::new(FakeBackend::new(Reply::Outcome(outcome(25))));
    let engine = engine_with(backend.clone());

    let view = engine
        .results(SearchRequest::new("oil", Method::Tfidf), Navigation::NewSearch)
        .await;

    assert_eq!(backend.calls(), 1);
    assert_eq!(backend.requests(), vec![SearchRequest::new("oil", Method::Tfidf)]);
    assert_eq!(view.status(), &ViewStatus::Loaded);
    assert_eq!(view.results().len(), 25);
    assert_eq!(view.pagination().current_page(), 1);
    assert_eq!(view.page_entries().count(), 10);
    Ok(())
}

#[tokio::test]
async fn test_page_changes_never_hit_the_backend() -> Result<()> {
    let backend = Arc::new(FakeBackend::new(Reply::Outcome(outcome(25))));
    let engine = engine_with(backend.clone());
    let request = SearchRequest::new("oil", Method::Tfidf);

    engine.results(request.clone(), Navigation::NewSearch).await;
    for (page, expected) in [(2, 10), (3, 5), (1, 10), (3, 5)] {
        let view = engine.results(request.clone(), Navigation::Page(page)).await;
        assert_eq!(view.pagination().current_page(), page);
        assert_eq!(view.page_entries().count(), expected);
    }

    assert_eq!(backend.calls(), 1);
    Ok(())
}

#[tokio::test]
async fn test_resubmitting_the_same_search_fetches_again() -> Result<()> {
    let backend = Arc::new(FakeBackend::new(Reply::Outcome(outcome(3))));
    let engine = engine_with(backend.clone());
    let request = SearchRequest::new("oil", Method::Tfidf);

    engine.results(request.clone(), Navigation::NewSearch).await;
    let view = engine.results(request, Navigation::NewSearch).await;

    assert_eq!(backend.calls(), 2);
    assert_eq!(view.pagination().current_page(), 1);
    Ok(())
}

#[tokio::test]
async fn test_page_of_uncached_search_fetches_once() -> Result<()> {
    let backend = Arc::new(FakeBackend::new(Reply::Outcome(outcome(25))));
    let engine = engine_with(backend.clone());

    let view = engine
        .results(SearchRequest::new("oil", Method::Bow), Navigation::Page(2))
        .await;

    assert_eq!(backend.calls(), 1);
    assert_eq!(view.pagination().current_page(), 2);
    let positions: Vec<usize> = view.page_entries().map(|(position, _)| position).collect();
    assert_eq!(positions, (10..20).collect::<Vec<_>>());
    Ok(())
}

#[tokio::test]
async fn test_empty_query_does_not_search() -> Result<()> {
    let backend = Arc::new(FakeBackend::new(Reply::Outcome(outcome(5))));
    let engine = engine_with(backend.clone());

    let view = engine
        .results(SearchRequest::new("", Method::Tfidf), Navigation::NewSearch)
        .await;

    assert_eq!(backend.calls(), 0);
    assert_eq!(view.status(), &ViewStatus::Idle);
    assert!(view.shows_no_results());
    Ok(())
}

#[tokio::test]
async fn test_backend_failure_clears_results_and_metrics() -> Result<()> {
    let backend = Arc::new(FakeBackend::new(Reply::Status(
        reqwest::StatusCode::INTERNAL_SERVER_ERROR,
    )));
    let engine = engine_with(backend.clone());

    let view = engine
        .results(SearchRequest::new("oil", Method::Tfidf), Navigation::NewSearch)
        .await;

    assert_eq!(view.error(), Some(SEARCH_FAILED_MESSAGE));
    assert!(view.results().is_empty());
    assert_eq!(view.metrics(), Default::default());
    assert!(!view.shows_no_results());
    assert!(engine.cache().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_lookup_uses_cached_search() -> Result<()> {
    let backend = Arc::new(FakeBackend::new(Reply::Outcome(outcome(12))));
    let engine = engine_with(backend.clone());
    let request = SearchRequest::new("oil", Method::Tfidf);

    engine.results(request.clone(), Navigation::NewSearch).await;
    let found = engine.lookup(&request, "reut2-000.sgm-11").await?;

    assert_eq!(found.map(|r| r.title), Some("Result 11".to_string()));
    assert_eq!(backend.calls(), 1);
    Ok(())
}

#[tokio::test]
async fn test_lookup_fetches_on_cache_miss() -> Result<()> {
    let backend = Arc::new(FakeBackend::new(Reply::Outcome(outcome(3))));
    let engine = engine_with(backend.clone());
    let request = SearchRequest::new("oil", Method::Word2vec);

    let found = engine.lookup(&request, "reut2-000.sgm-2").await?;
    assert!(found.is_some());
    let missing = engine.lookup(&request, "reut2-999.sgm-0").await?;
    assert!(missing.is_none());

    assert_eq!(backend.calls(), 1);
    Ok(())
}

#[tokio::test]
async fn test_lookup_propagates_backend_failure() -> Result<()> {
    let backend = Arc::new(FakeBackend::new(Reply::Status(
        reqwest::StatusCode::BAD_GATEWAY,
    )));
    let engine = engine_with(backend);

    let result = engine
        .lookup(&SearchRequest::new("oil", Method::Tfidf), "0")
        .await;
    assert!(result.is_err());
    Ok(())
}

#[tokio::test]
async fn test_slow_earlier_response_does_not_overwrite_cache() -> Result<()> {
    let backend = Arc::new(
        FakeBackend::new(Reply::Outcome(outcome(3))).with_first_call_delay(Duration::from_millis(100)),
    );
    let engine = engine_with(backend.clone());
    let request = SearchRequest::new("oil", Method::Tfidf);

    let (slow, fast) = tokio::join!(
        engine.results(request.clone(), Navigation::NewSearch),
        engine.results(request.clone(), Navigation::NewSearch),
    );
    assert_eq!(slow.status(), &ViewStatus::Loaded);
    assert_eq!(fast.status(), &ViewStatus::Loaded);

    // The second request (call 1) was issued last and must be the one kept.
    let cached = engine.cache().get(&request).expect("outcome cached");
    assert_eq!(cached.metrics.recall, Some(1.0));
    assert_eq!(backend.calls(), 2);
    Ok(())
}

#[test]
fn test_view_resets_to_first_page_on_new_search() {
    let mut view = ResultsView::new(SearchRequest::new("oil", Method::Tfidf));
    view.apply(Ok(Arc::new(outcome(40))));
    view.go_to_page(4);
    assert_eq!(view.pagination().current_page(), 4);

    view.apply(Ok(Arc::new(outcome(40))));
    assert_eq!(view.pagination().current_page(), 1);
}

#[test]
fn test_view_failure_replaces_loaded_results() {
    let mut view = ResultsView::new(SearchRequest::new("oil", Method::Tfidf));
    view.apply(Ok(Arc::new(outcome(4))));
    assert_eq!(view.status(), &ViewStatus::Loaded);

    view.apply(Err(FrontendError::Status(reqwest::StatusCode::BAD_GATEWAY)));
    assert_eq!(
        view.status(),
        &ViewStatus::Failed(SEARCH_FAILED_MESSAGE.into())
    );
    assert!(view.results().is_empty());
    assert_eq!(view.metrics(), Default::default());
    assert!(!view.shows_no_results());
}

#[test]
fn test_new_view_is_idle() {
    let view = ResultsView::new(SearchRequest::new("oil", Method::Word2vec));
    assert_eq!(view.status(), &ViewStatus::Idle);
    assert_eq!(view.request().method, Method::Word2vec);
    assert!(view.shows_no_results());
}

#[test]
fn test_empty_outcome_shows_no_results() {
    let mut view = ResultsView::new(SearchRequest::new("zzz", Method::Tfidf));
    view.apply(Ok(Arc::new(SearchOutcome::default())));

    assert!(view.shows_no_results());
    assert!(view.pagination().links().is_empty());
}

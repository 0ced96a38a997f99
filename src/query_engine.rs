use std::sync::Arc;

use crate::backend::{HttpSearchBackend, SearchBackend};
use crate::cache::OutcomeCache;
use crate::config::Config;
use crate::data_models::{SearchOutcome, SearchRequest, SearchResult};
use crate::error::Result;
use crate::results_view::ResultsView;

/// How the results page was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// A submitted search: always asks the backend and starts on page 1.
    NewSearch,
    /// Moving to another page of a search already shown: served from the cache.
    Page(usize),
}

/// Sits between the views and the backend: issues searches, keeps their
/// outcomes for pagination and the detail view, and never lets a stale
/// response win.
pub struct QueryEngine {
    backend: Arc<dyn SearchBackend>,
    cache: OutcomeCache,
}

impl QueryEngine {
    pub fn new(backend: Arc<dyn SearchBackend>, cache: OutcomeCache) -> Self {
        Self { backend, cache }
    }

    /// Engine talking to the HTTP backend described by `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let backend = HttpSearchBackend::new(&config.backend_url, config.backend_timeout)?;
        Ok(Self::new(
            Arc::new(backend),
            OutcomeCache::new(config.cache_capacity, config.cache_ttl),
        ))
    }

    pub fn cache(&self) -> &OutcomeCache {
        &self.cache
    }

    /// Builds the results view for one navigation. Issues at most one backend request.
    pub async fn results(&self, request: SearchRequest, navigation: Navigation) -> ResultsView {
        let mut view = ResultsView::new(request.clone());

        // Nothing to search for; the view stays idle and lists nothing.
        if request.query.is_empty() {
            return view;
        }

        if let Navigation::Page(page) = navigation {
            if let Some(outcome) = self.cache.get(&request) {
                view.restore(request, outcome, page);
                return view;
            }
            tracing::debug!(query = %request.query, page, "page requested for an uncached search");
        }

        view.apply(self.fetch(&request).await);

        if let Navigation::Page(page) = navigation {
            view.go_to_page(page);
        }
        view
    }

    /// Finds one result of a search by its key, fetching the search only if it is not cached.
    pub async fn lookup(&self, request: &SearchRequest, key: &str) -> Result<Option<SearchResult>> {
        let outcome = match self.cache.get(request) {
            Some(outcome) => outcome,
            None => self.fetch(request).await?,
        };
        Ok(outcome.find(key).cloned())
    }

    async fn fetch(&self, request: &SearchRequest) -> Result<Arc<SearchOutcome>> {
        let ticket = self.cache.issue_ticket();
        let outcome = Arc::new(self.backend.search(request).await?);
        self.cache.store(request.clone(), ticket, outcome.clone());
        Ok(outcome)
    }
}

use std::sync::Arc;

use crate::data_models::{EvaluationMetrics, SearchOutcome, SearchRequest, SearchResult};
use crate::error::FrontendError;
use crate::pagination::Pagination;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewStatus {
    Idle,
    Loaded,
    Failed(String),
}

/// State behind the results page: the active request, what came back for
/// it and which page of it is showing.
#[derive(Debug)]
pub struct ResultsView {
    request: SearchRequest,
    status: ViewStatus,
    outcome: Arc<SearchOutcome>,
    pagination: Pagination,
}

impl Default for ResultsView {
    fn default() -> Self {
        Self::new(SearchRequest::new("", Default::default()))
    }
}

impl ResultsView {
    pub fn new(request: SearchRequest) -> Self {
        Self {
            request,
            status: ViewStatus::Idle,
            outcome: Arc::new(SearchOutcome::default()),
            pagination: Pagination::new(0, 1),
        }
    }

    /// Shows the answer to a new search of the view's request, starting on page 1.
    /// A failure clears results and metrics.
    pub fn apply(&mut self, result: Result<Arc<SearchOutcome>, FrontendError>) {
        match result {
            Ok(outcome) => {
                self.pagination = Pagination::new(outcome.results.len(), 1);
                self.outcome = outcome;
                self.status = ViewStatus::Loaded;
            }
            Err(e) => {
                tracing::error!(query = %self.request.query, method = %self.request.method, "search failed: {e:#}");
                self.outcome = Arc::new(SearchOutcome::default());
                self.pagination = Pagination::new(0, 1);
                self.status = ViewStatus::Failed(e.user_message().to_string());
            }
        }
    }

    /// Shows an outcome fetched earlier, at the given page, without a new search.
    pub fn restore(&mut self, request: SearchRequest, outcome: Arc<SearchOutcome>, page: usize) {
        self.request = request;
        self.pagination = Pagination::new(outcome.results.len(), page);
        self.outcome = outcome;
        self.status = ViewStatus::Loaded;
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.pagination.go_to(page);
    }

    pub fn request(&self) -> &SearchRequest {
        &self.request
    }

    pub fn status(&self) -> &ViewStatus {
        &self.status
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            ViewStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.outcome.results
    }

    pub fn metrics(&self) -> EvaluationMetrics {
        self.outcome.metrics
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Results on the current page, each with its position in the full list.
    pub fn page_entries(&self) -> impl Iterator<Item = (usize, &SearchResult)> {
        let range = self.pagination.range();
        let start = range.start;
        self.pagination
            .slice(&self.outcome.results)
            .iter()
            .enumerate()
            .map(move |(offset, result)| (start + offset, result))
    }

    /// Nothing to list and nothing failed.
    pub fn shows_no_results(&self) -> bool {
        self.results().is_empty() && self.error().is_none()
    }
}

use serde::Deserialize;

use crate::data_models::{Method, SearchRequest};
use crate::query_engine::Navigation;

/// Query string of `/results`.
#[derive(Debug, Default, Deserialize)]
pub struct ResultsParams {
    pub query: Option<String>,
    pub method: Option<String>,
    pub page: Option<String>,
}

impl ResultsParams {
    pub fn search_request(&self) -> SearchRequest {
        search_request(self.query.as_deref(), self.method.as_deref())
    }

    /// No `page` means a freshly submitted search.
    pub fn navigation(&self) -> Navigation {
        match &self.page {
            None => Navigation::NewSearch,
            Some(page) => Navigation::Page(parse_page(page)),
        }
    }
}

/// Query string of `/content`.
#[derive(Debug, Default, Deserialize)]
pub struct ContentParams {
    pub query: Option<String>,
    pub method: Option<String>,
    pub item: Option<String>,
    pub page: Option<String>,
}

impl ContentParams {
    pub fn search_request(&self) -> SearchRequest {
        search_request(self.query.as_deref(), self.method.as_deref())
    }

    pub fn page(&self) -> usize {
        self.page.as_deref().map_or(1, parse_page)
    }
}

fn search_request(query: Option<&str>, method: Option<&str>) -> SearchRequest {
    SearchRequest::new(query.unwrap_or_default(), Method::from_param(method))
}

// Garbage page numbers land on the first page.
fn parse_page(raw: &str) -> usize {
    raw.trim().parse::<usize>().unwrap_or(1).max(1)
}

#[test]
fn test_results_params_defaults() {
    let params = ResultsParams::default();
    let request = params.search_request();
    assert_eq!(request.query, "");
    assert_eq!(request.method, Method::Tfidf);
    assert_eq!(params.navigation(), Navigation::NewSearch);
}

#[test]
fn test_page_parsing() {
    let mut params = ResultsParams {
        page: Some("3".into()),
        ..Default::default()
    };
    assert_eq!(params.navigation(), Navigation::Page(3));
    params.page = Some("zero".into());
    assert_eq!(params.navigation(), Navigation::Page(1));
    params.page = Some("0".into());
    assert_eq!(params.navigation(), Navigation::Page(1));
}

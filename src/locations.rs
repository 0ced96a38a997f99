//! Navigation targets between the views. Everything a view needs travels
//! in its URL, so each one can be bookmarked or reloaded.

use url::form_urlencoded::Serializer;

use crate::data_models::{Method, SearchRequest};

pub const HOME_PATH: &str = "/";
pub const RESULTS_PATH: &str = "/results";
pub const CONTENT_PATH: &str = "/content";

/// Target of a submitted search. Always lands on page 1.
pub fn results_location(query: &str, method: Method) -> String {
    let params = Serializer::new(String::new())
        .append_pair("query", query)
        .append_pair("method", method.as_str())
        .finish();
    format!("{RESULTS_PATH}?{params}")
}

/// Another page of a search already shown.
pub fn page_location(request: &SearchRequest, page: usize) -> String {
    let params = Serializer::new(String::new())
        .append_pair("query", &request.query)
        .append_pair("method", request.method.as_str())
        .append_pair("page", &page.to_string())
        .finish();
    format!("{RESULTS_PATH}?{params}")
}

/// Detail view of one result. `page` is where the back link returns to.
pub fn content_location(request: &SearchRequest, key: &str, page: usize) -> String {
    let params = Serializer::new(String::new())
        .append_pair("query", &request.query)
        .append_pair("method", request.method.as_str())
        .append_pair("item", key)
        .append_pair("page", &page.to_string())
        .finish();
    format!("{CONTENT_PATH}?{params}")
}

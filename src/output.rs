//! Terminal rendering of a results page for the `search` command.

use serde::Serialize;

use crate::data_models::{EvaluationMetrics, SearchResult};
use crate::pages::{NOT_AVAILABLE, format_metric, results::NO_RESULTS_MESSAGE};
use crate::pagination::PageLink;
use crate::results_view::ResultsView;

/// Characters of content shown per result in the terminal.
const SNIPPET_MAX_CHARS: usize = 200;

#[derive(Serialize)]
pub struct JsonOutput<'a> {
    pub query: &'a str,
    pub method: &'a str,
    pub page: usize,
    pub total_pages: usize,
    pub total_results: usize,
    pub metrics: EvaluationMetrics,
    pub error: Option<&'a str>,
    pub results: Vec<&'a SearchResult>,
}

pub fn format_json(view: &ResultsView) -> serde_json::Result<String> {
    let pagination = view.pagination();
    let output = JsonOutput {
        query: &view.request().query,
        method: view.request().method.as_str(),
        page: pagination.current_page(),
        total_pages: pagination.total_pages(),
        total_results: view.results().len(),
        metrics: view.metrics(),
        error: view.error(),
        results: view.page_entries().map(|(_, result)| result).collect(),
    };
    serde_json::to_string_pretty(&output)
}

pub fn format_human(view: &ResultsView) -> String {
    let mut out = String::new();
    let request = view.request();
    out.push_str(&format!(
        "Query: \"{}\" ({})\n",
        request.query,
        request.method.label()
    ));

    let metrics = view.metrics();
    out.push_str(&format!(
        "Precisión: {}  Recall: {}  F1-Score: {}\n\n",
        format_metric(metrics.precision),
        format_metric(metrics.recall),
        format_metric(metrics.f1_score)
    ));

    if let Some(message) = view.error() {
        out.push_str(&format!("Error: {message}\n"));
        return out;
    }
    if view.shows_no_results() {
        out.push_str(NO_RESULTS_MESSAGE);
        out.push('\n');
        return out;
    }

    for (position, result) in view.page_entries() {
        out.push_str(&format!(
            "{}. {} [{}]\n   Similitud: {}\n   {}\n\n",
            position + 1,
            result.title,
            result.key(position),
            result.similarity,
            snippet(&result.content)
        ));
    }

    let pages = view
        .pagination()
        .links()
        .into_iter()
        .filter_map(|link| match link {
            PageLink::Page { number, current: true } => Some(format!("[{number}]")),
            PageLink::Page { number, .. } => Some(number.to_string()),
            PageLink::Ellipsis => Some("...".to_string()),
            PageLink::Previous(_) | PageLink::Next(_) => None,
        })
        .collect::<Vec<_>>();
    out.push_str(&format!("Páginas: {}\n", pages.join(" ")));
    out
}

fn snippet(content: &str) -> String {
    let flat = content.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() > SNIPPET_MAX_CHARS {
        let cut: String = flat.chars().take(SNIPPET_MAX_CHARS).collect();
        format!("{cut}...")
    } else if flat.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        flat
    }
}

#[test]
fn test_snippet_truncates_on_char_boundary() {
    let long = "ñ".repeat(250);
    let cut = snippet(&long);
    assert_eq!(cut.chars().count(), SNIPPET_MAX_CHARS + 3);
    assert!(cut.ends_with("..."));
    assert_eq!(snippet("  short \n text "), "short text");
}

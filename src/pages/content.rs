use super::{APP_TITLE, escape, layout};
use crate::data_models::{SearchRequest, SearchResult};
use crate::locations::page_location;

pub const MISSING_RESULT_MESSAGE: &str = "Resultado no disponible";

fn navbar(back: &str) -> String {
    format!(
        "<nav>\n<a class=\"back-arrow\" href=\"{}\">&larr;</a>\n<h1>{APP_TITLE}</h1>\n</nav>\n",
        escape(back)
    )
}

/// Full view of one result. The back link returns to the results page it was opened from.
pub fn render(result: &SearchResult, request: &SearchRequest, page: usize) -> String {
    let back = page_location(request, page);
    let body = format!(
        "{}<main>\n<h1 class=\"title\">{}</h1>\n<p class=\"content\">{}</p>\n\
         <p class=\"similarity\">Similitud: {}</p>\n\
         <a class=\"back\" href=\"{}\">Volver</a>\n</main>",
        navbar(&back),
        escape(&result.title),
        escape(&result.content),
        result.similarity,
        escape(&back)
    );
    layout(&result.title, &body)
}

/// Shown when the requested item is not part of the search it names.
pub fn render_missing(request: &SearchRequest, page: usize) -> String {
    let back = page_location(request, page);
    let body = format!(
        "{}<main>\n<p class=\"missing\">{MISSING_RESULT_MESSAGE}</p>\n\
         <a class=\"back\" href=\"{}\">Volver</a>\n</main>",
        navbar(&back),
        escape(&back)
    );
    layout(APP_TITLE, &body)
}

/// Shown when the search behind the item could not be fetched.
pub fn render_failed(message: &str, request: &SearchRequest, page: usize) -> String {
    let back = page_location(request, page);
    let body = format!(
        "{}<main>\n<p class=\"error\">Error: {}</p>\n\
         <a class=\"back\" href=\"{}\">Volver</a>\n</main>",
        navbar(&back),
        escape(message),
        escape(&back)
    );
    layout(APP_TITLE, &body)
}

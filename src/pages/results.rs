use super::{APP_TITLE, escape, format_metric, layout, method_select};
use crate::locations::{RESULTS_PATH, content_location, page_location};
use crate::pagination::PageLink;
use crate::results_view::ResultsView;

pub const NO_RESULTS_MESSAGE: &str = "No se encontraron resultados";

pub fn render(view: &ResultsView) -> String {
    let request = view.request();
    let mut body = format!(
        "<nav>\n<a href=\"/\"><h1>{APP_TITLE}</h1></a>\n\
         <form action=\"{RESULTS_PATH}\" method=\"get\" id=\"search-form\">\n\
         <input type=\"text\" name=\"query\" value=\"{}\" placeholder=\"Search in Reuters...\">\n\
         <button type=\"submit\">Buscar</button>\n{}\n</form>\n</nav>\n<main>\n",
        escape(&request.query),
        method_select(request.method, true)
    );

    body.push_str(&render_metrics(view));

    if let Some(message) = view.error() {
        body.push_str(&format!("<p class=\"error\">Error: {}</p>\n", escape(message)));
    }

    if view.shows_no_results() {
        body.push_str(&format!("<p class=\"empty\">{NO_RESULTS_MESSAGE}</p>\n"));
    }

    let page = view.pagination().current_page();
    for (position, result) in view.page_entries() {
        body.push_str(&format!(
            "<a class=\"result\" href=\"{}\">\n<h3>{}</h3>\n<p>{}</p>\n<p class=\"similarity\">Similitud: {}</p>\n</a>\n",
            escape(&content_location(request, &result.key(position), page)),
            escape(&result.title),
            escape(&result.content),
            result.similarity
        ));
    }

    body.push_str(&render_pagination(view));
    body.push_str("</main>");

    let title = if request.query.is_empty() {
        APP_TITLE.to_string()
    } else {
        format!("{} - {APP_TITLE}", request.query)
    };
    layout(&title, &body)
}

fn render_metrics(view: &ResultsView) -> String {
    let metrics = view.metrics();
    format!(
        "<div class=\"metrics\">\n<h3>Métricas de Evaluación:</h3>\n\
         <p><strong>Precisión:</strong> <span id=\"precision\">{}</span></p>\n\
         <p><strong>Recall:</strong> <span id=\"recall\">{}</span></p>\n\
         <p><strong>F1-Score:</strong> <span id=\"f1-score\">{}</span></p>\n</div>\n",
        format_metric(metrics.precision),
        format_metric(metrics.recall),
        format_metric(metrics.f1_score)
    )
}

fn render_pagination(view: &ResultsView) -> String {
    let request = view.request();
    let mut html = String::from("<div class=\"pagination\">");
    for link in view.pagination().links() {
        let item = match link {
            PageLink::Previous(page) => format!(
                "<a class=\"page-link prev\" href=\"{}\">&lt; Anterior</a>",
                escape(&page_location(request, page))
            ),
            PageLink::Page { number, current } => format!(
                "<a class=\"page-link{}\" href=\"{}\">{number}</a>",
                if current { " current" } else { "" },
                escape(&page_location(request, number))
            ),
            PageLink::Ellipsis => "<span class=\"ellipsis\">...</span>".to_string(),
            PageLink::Next(page) => format!(
                "<a class=\"page-link next\" href=\"{}\">Siguiente &gt;</a>",
                escape(&page_location(request, page))
            ),
        };
        html.push_str(&item);
    }
    html.push_str("</div>\n");
    html
}

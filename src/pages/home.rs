use super::{APP_TITLE, layout, method_select};
use crate::data_models::Method;
use crate::locations::RESULTS_PATH;

/// Landing page: a search box and the method selector.
///
/// Submitting the form (button or Enter) navigates to the results view with
/// `query` and `method` in the URL; the browser does the URL-encoding.
pub fn render() -> String {
    let body = format!(
        "<main class=\"hero\">\n<h1>{APP_TITLE}</h1>\n\
         <form action=\"{RESULTS_PATH}\" method=\"get\" id=\"search-form\">\n\
         <input type=\"text\" name=\"query\" placeholder=\"Search in Reuters...\" autofocus>\n\
         {}\n<button type=\"submit\">Buscar</button>\n</form>\n</main>",
        method_select(Method::default(), false)
    );
    layout(APP_TITLE, &body)
}

//! Server-rendered HTML for the three views.

pub mod content;
pub mod home;
pub mod results;

use crate::data_models::Method;

pub const APP_TITLE: &str = "Reuters Search";
pub const NOT_AVAILABLE: &str = "No disponible";

const STYLE: &str = r#"
body { font-family: Arial, sans-serif; background: #f8f9fa; margin: 0; }
nav { display: flex; align-items: center; gap: 10px; background: linear-gradient(to right, #00bcd4, #007bff); color: #fff; padding: 10px 20px; }
nav a { color: #fff; text-decoration: none; }
main { max-width: 800px; margin: 20px auto; padding: 0 20px; }
.hero { text-align: center; margin-top: 20vh; }
.hero h1 { font-size: 4rem; color: #0056b3; }
input[type=text] { padding: 10px 20px; border-radius: 25px; border: 1px solid #ddd; width: 60%; }
select, button { padding: 10px 15px; border-radius: 5px; border: 1px solid #ddd; }
.metrics { background: #e0f7fa; padding: 10px; border-radius: 5px; margin-bottom: 20px; }
.result { display: block; color: inherit; text-decoration: none; margin-bottom: 20px; }
.pagination a, .pagination span { display: inline-block; padding: 10px 15px; margin: 2px; border: 1px solid #ddd; border-radius: 5px; color: #007bff; text-decoration: none; }
.pagination a.current { background: #007bff; color: #fff; font-weight: bold; }
.pagination span.ellipsis { border: none; color: #888; }
"#;

/// Wraps a page body in the shared document shell.
pub fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        escape(title)
    )
}

/// Escapes text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// `<select name="method">` with `selected` on the active method.
pub fn method_select(selected: Method, submit_on_change: bool) -> String {
    let mut html = String::from("<select name=\"method\" id=\"method\"");
    if submit_on_change {
        html.push_str(" onchange=\"this.form.submit()\"");
    }
    html.push('>');
    for method in Method::ALL {
        let marker = if method == selected { " selected" } else { "" };
        html.push_str(&format!(
            "<option value=\"{}\"{marker}>{}</option>",
            method.as_str(),
            method.label()
        ));
    }
    html.push_str("</select>");
    html
}

pub fn format_metric(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string())
}

/// Page shown for a route that does not exist.
pub fn not_found() -> String {
    layout(
        APP_TITLE,
        &format!(
            "<nav><a href=\"/\">{APP_TITLE}</a></nav>\n<main>\n\
             <h1>404</h1>\n<p class=\"not-found\">Página no encontrada</p>\n\
             <a href=\"/\">Volver al inicio</a>\n</main>"
        ),
    )
}

#[test]
fn test_escape() {
    assert_eq!(
        escape(r#"<b>"Oil" & 'gas'</b>"#),
        "&lt;b&gt;&quot;Oil&quot; &amp; &#39;gas&#39;&lt;/b&gt;"
    );
    assert_eq!(escape("plain"), "plain");
}

#[test]
fn test_format_metric() {
    assert_eq!(format_metric(None), NOT_AVAILABLE);
    assert_eq!(format_metric(Some(0.25)), "0.25");
    assert_eq!(format_metric(Some(0.0)), "0");
}

use std::fmt::Write;

use crate::types::SummaryPayload;

const PAGE_TITLE: &str = "Blog Post Summarizer";

const STYLE: &str = "\
body { font-family: system-ui, sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; color: #222; }
textarea { width: 100%; min-height: 10rem; font: inherit; padding: .5rem; box-sizing: border-box; }
button { margin-top: .5rem; padding: .5rem 1.25rem; font: inherit; cursor: pointer; }
.alert { padding: .6rem .9rem; border-radius: 4px; margin: .5rem 0; }
.alert-info { background: #e7f1fb; }
.alert-success { background: #e6f4ea; }
.alert-warning { background: #fff4d6; }
.alert-danger { background: #fde8e8; }
.source { color: #555; font-style: italic; }
";

/// Escape text for HTML element and attribute content
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the summarizer page
///
/// `user_input` is echoed back into the form.
pub fn render_page(payload: &SummaryPayload, user_input: &str) -> String {
    let mut html = String::with_capacity(4096);

    // Writing to a String cannot fail
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<style>\n{style}</style>\n</head>\n<body>\n<h1>{title}</h1>\n",
        title = PAGE_TITLE,
        style = STYLE,
    );

    for message in &payload.messages {
        let _ = writeln!(
            html,
            "<div class=\"alert alert-{}\">{}</div>",
            message.category.as_str(),
            escape_html(&message.text)
        );
    }

    let _ = write!(
        html,
        "<form method=\"post\" action=\"/\">\n\
         <label for=\"user_input\">Enter a blog post URL or paste the article text:</label>\n\
         <textarea id=\"user_input\" name=\"user_input\">{}</textarea>\n\
         <button type=\"submit\">Summarize</button>\n</form>\n",
        escape_html(user_input)
    );

    if !payload.source_info.is_empty() {
        let _ = writeln!(html, "<p class=\"source\">{}</p>", escape_html(&payload.source_info));
    }

    if !payload.bullet_points.is_empty() {
        html.push_str("<section class=\"summary\">\n<h2>Summary</h2>\n<ul>\n");
        for point in &payload.bullet_points {
            let _ = writeln!(html, "<li>{}</li>", escape_html(point));
        }
        html.push_str("</ul>\n</section>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

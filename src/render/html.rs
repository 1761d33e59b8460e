//! HTML renderer: embed cell content in a self-contained page.
//!
//! One rendered block per cell: code in `<pre><code>`, markdown as its raw
//! (escaped) text. Markdown is escaped rather than interpreted; a client-side
//! markdown renderer can still pick the text up from the page, but the core
//! never emits unescaped source into the document.

use crate::Result;
use crate::raw;

use serde_json::Value;

/// Fragment vs. complete document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HtmlMode {
    Fragment,
    Document,
}

/// Render a raw record as HTML.
///
/// Important: the page template is applied with `replace` rather than
/// `format!` so that literal `{}` in the embedded CSS cannot collide with
/// Rust format braces.
pub fn to_html(record: &Value, mode: HtmlMode) -> Result<String> {
    let mut body = String::new();

    for cell in raw::cells(record)? {
        let source = raw::source_lines(cell).concat();
        match cell.get("cell_type").and_then(Value::as_str) {
            Some("code") => {
                body.push_str("<div class=\"cell code\"><pre><code>");
                body.push_str(&escape_html(&source));
                body.push_str("</code></pre></div>\n");
            }
            Some("markdown") => {
                body.push_str("<div class=\"cell markdown\">");
                body.push_str(&escape_html(&source));
                body.push_str("</div>\n");
            }
            // Unknown cell types have no presentation.
            _ => continue,
        }
    }

    match mode {
        HtmlMode::Fragment => Ok(body),
        HtmlMode::Document => {
            const TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Notebook</title>
<style>
  body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 0 auto; max-width: 860px; padding: 16px; }
  .cell { border: 1px solid #ddd; border-radius: 6px; padding: 8px 12px; margin: 12px 0; }
  .cell.markdown { background: #fafafa; white-space: pre-wrap; }
  pre { margin: 0; overflow-x: auto; }
  code { font-family: ui-monospace, SFMono-Regular, Menlo, Consolas, monospace; font-size: 13px; }
</style>
</head>
<body>
__CONTENT__</body>
</html>
"#;
            Ok(TEMPLATE.replace("__CONTENT__", &body))
        }
    }
}

/// Escape text for embedding in HTML element content or attributes.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

//! Py-percent renderer.
//!
//! Cell boundaries are marker lines: `# %%` for code, `# %% [markdown]` for
//! markdown. Markdown bodies are commented out with `# ` so the whole output
//! stays a valid code-only text file.

use crate::Result;
use crate::model::Notebook;
use crate::raw;
use crate::serialize;

use serde_json::Value;

const CODE_MARKER: &str = "# %%";
const MARKDOWN_MARKER: &str = "# %% [markdown]";

/// Render a raw record as py-percent text.
///
/// Source lines inconsistently carry trailing newlines (a single-line source
/// has none, multi-line sources have them on all but the last line), so each
/// cell body is normalized to end with exactly one `\n`. Consecutive cells
/// are separated by exactly one blank line; there is no trailing blank line
/// after the final cell.
pub fn to_percent(record: &Value) -> Result<String> {
    let mut blocks = Vec::new();

    for cell in raw::cells(record)? {
        let markdown = match cell.get("cell_type").and_then(Value::as_str) {
            Some("code") => false,
            Some("markdown") => true,
            // Unknown cell types are not representable in percent text.
            _ => continue,
        };

        let mut block = String::new();
        block.push_str(if markdown { MARKDOWN_MARKER } else { CODE_MARKER });
        block.push('\n');

        for line in raw::source_lines(cell) {
            if markdown {
                block.push_str("# ");
            }
            block.push_str(&line);
        }
        if !block.ends_with('\n') {
            block.push('\n');
        }

        blocks.push(block);
    }

    Ok(blocks.join("\n"))
}

/// Render a notebook as py-percent text, via the serializer bridge.
pub fn notebook_to_percent(notebook: &Notebook) -> Result<String> {
    to_percent(&serialize::to_value(notebook)?)
}

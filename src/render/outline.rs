//! Outline renderer: a compact tree summary of a notebook's structure.
//!
//! One paragraph per cell. Single-line bodies use a plain `|` gutter;
//! multi-line bodies get corner glyphs on the first and last lines so block
//! sources read as a bracketed unit:
//!
//! ```text
//! Jupyter Notebook v4.5
//! └─▶ Markdown cell #a9541506
//!     ┌ Hello world!
//!     | ============
//!     └ Print `Hello world!`:
//! └─▶ Code cell #b777420a (1)
//!     | print("Hello world!")
//! ```

use crate::model::{CellKind, Notebook};

/// Render a notebook outline. Never fails: empty sources simply emit no
/// body lines.
pub fn outline(notebook: &Notebook) -> String {
    let mut out = format!("Jupyter Notebook v{}\n", notebook.version);

    for cell in notebook {
        match cell.kind {
            CellKind::Markdown => {
                out.push_str(&format!("└─▶ Markdown cell #{}\n", cell.id));
            }
            CellKind::Code { execution_count } => {
                out.push_str(&format!(
                    "└─▶ Code cell #{} ({})\n",
                    cell.id, execution_count
                ));
            }
        }

        let last = cell.source.len().saturating_sub(1);
        for (i, line) in cell.source.iter().enumerate() {
            let gutter = if cell.source.len() == 1 {
                "    | "
            } else if i == 0 {
                "    ┌ "
            } else if i == last {
                "    └ "
            } else {
                "    | "
            };
            push_line(&mut out, gutter, line);
        }
    }

    out
}

/// Emit one gutter-prefixed body line, forcing the trailing newline when the
/// source line lacks one (typically the last line of a cell).
fn push_line(out: &mut String, gutter: &str, line: &str) {
    out.push_str(gutter);
    out.push_str(line);
    if !line.ends_with('\n') {
        out.push('\n');
    }
}

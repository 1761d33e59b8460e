//! Structural rewrites producing a new notebook from an existing one.
//!
//! Transforms never mutate their input; cells are cloned into a fresh
//! `Notebook` with the version carried over unchanged.

use crate::model::{Cell, CellKind, Notebook};

/// Keep only code cells, in their original relative order.
pub fn strip_markdown(notebook: &Notebook) -> Notebook {
    Notebook::new(
        notebook.version.clone(),
        notebook
            .iter()
            .filter(|cell| cell.is_code())
            .cloned()
            .collect(),
    )
}

/// Replace every code cell with a markdown cell whose source is the original
/// code wrapped in a fenced block. Markdown cells pass through unchanged;
/// cell ids are preserved.
pub fn markdownize(notebook: &Notebook) -> Notebook {
    let cells = notebook
        .iter()
        .map(|cell| match cell.kind {
            CellKind::Code { .. } => {
                let mut source = Vec::with_capacity(cell.source.len() + 2);
                source.push("```python\n".to_string());
                source.extend(cell.source.iter().cloned());
                source.push("```\n".to_string());
                Cell::markdown(cell.id.clone(), source)
            }
            CellKind::Markdown => cell.clone(),
        })
        .collect();

    Notebook::new(notebook.version.clone(), cells)
}

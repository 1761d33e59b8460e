//! Loader: raw record to `Notebook`.
//!
//! Loading is best-effort over a heterogeneous cell list: cells with an
//! unknown `cell_type` (e.g. `"raw"`) are skipped with a warning rather than
//! aborting the load. Missing `execution_count` on a code cell has no safe
//! default and fails hard.

use crate::Result;
use crate::diagnostics;
use crate::error::NotebookError;
use crate::model::{Cell, NO_ID, Notebook};
use crate::raw;

use anyhow::Context;
use serde::Deserialize;
use serde_json::Value;
use std::fs;

/// Raw cell shape as it appears inside the `cells` array. Unknown keys
/// (outputs, attachments, cell metadata) are ignored here; the serializer is
/// where the lossy boundary is asserted.
#[derive(Debug, Clone, Deserialize)]
struct RawCell {
    #[serde(default)]
    cell_type: Option<String>,

    #[serde(default)]
    id: Option<String>,

    #[serde(default)]
    source: Vec<String>,

    #[serde(default)]
    execution_count: Option<i64>,
}

/// Build a `Notebook` from a raw record.
pub fn from_value(record: &Value) -> Result<Notebook> {
    let version = raw::format_version(record)?;

    let mut cells = Vec::new();
    for (index, raw_cell) in raw::cells(record)?.iter().enumerate() {
        let cell: RawCell = match serde_json::from_value(raw_cell.clone()) {
            Ok(cell) => cell,
            Err(e) => {
                diagnostics::warn(format!("skipping malformed cell {}: {}", index, e));
                continue;
            }
        };

        let id = cell.id.unwrap_or_else(|| NO_ID.to_string());

        match cell.cell_type.as_deref() {
            Some("code") => {
                let execution_count =
                    cell.execution_count
                        .ok_or_else(|| NotebookError::InvalidCell {
                            index,
                            reason: "code cell has no execution_count".to_string(),
                        })?;
                cells.push(Cell::code(id, cell.source, execution_count));
            }
            Some("markdown") => cells.push(Cell::markdown(id, cell.source)),
            other => diagnostics::warn(format!(
                "skipping cell {} with unrecognized cell_type {:?}",
                index, other
            )),
        }
    }

    Ok(Notebook::new(version, cells))
}

/// Parse JSON text and load it as a notebook.
pub fn from_str(text: &str) -> Result<Notebook> {
    let record: Value = serde_json::from_str(text)?;
    from_value(&record)
}

/// Read an .ipynb file and load it as a notebook. Content is treated as
/// UTF-8 text end to end, so emoji and other multi-byte content survive.
pub fn from_path(path: &str) -> Result<Notebook> {
    let text = fs::read_to_string(path)
        .with_context(|| diagnostics::error_message(format!("read notebook file {}", path)))?;
    from_str(&text).with_context(|| diagnostics::error_message(format!("load notebook {}", path)))
}

/// Load a notebook from py-percent text.
///
/// Known gap: the py-percent input path is not implemented yet (the output
/// path is, see `render::percent`). TODO: parse `# %%` / `# %% [markdown]`
/// marker blocks into cells once ids and execution counts have an agreed
/// default for text-born cells.
pub fn from_percent(_text: &str) -> Result<Notebook> {
    Err(NotebookError::Unsupported("loading py-percent input").into())
}

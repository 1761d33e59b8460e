//! Serializer: `Notebook` back to a raw record.
//!
//! Key order is canonical (`cells, metadata, nbformat, nbformat_minor` at
//! the top, and a fixed per-cell order below) so that external tooling doing
//! ordered JSON diffs sees stable output. Two boundaries are lossy by
//! design: cell `outputs` are always emitted empty, and notebook-level
//! `metadata` is always emitted as `{}` — neither survives the model.

use crate::Result;
use crate::error::NotebookError;
use crate::model::{Cell, CellKind, Notebook};

use regex::Regex;
use serde_json::{Map, Value, json};

/// Serialize a notebook to a raw record.
pub fn to_value(notebook: &Notebook) -> Result<Value> {
    let (major, minor) = split_version(&notebook.version)?;

    let cells: Vec<Value> = notebook.iter().map(cell_to_value).collect();

    let mut record = Map::new();
    record.insert("cells".to_string(), Value::Array(cells));
    record.insert("metadata".to_string(), json!({}));
    record.insert("nbformat".to_string(), json!(major));
    record.insert("nbformat_minor".to_string(), json!(minor));
    Ok(Value::Object(record))
}

/// Serialize to pretty-printed JSON text, ready to write to disk.
pub fn to_json_string(notebook: &Notebook) -> Result<String> {
    let record = to_value(notebook)?;
    Ok(serde_json::to_string_pretty(&record)?)
}

fn cell_to_value(cell: &Cell) -> Value {
    let mut obj = Map::new();
    match cell.kind {
        CellKind::Code { execution_count } => {
            obj.insert("cell_type".to_string(), json!("code"));
            obj.insert("id".to_string(), json!(cell.id));
            obj.insert("metadata".to_string(), json!({}));
            obj.insert("execution_count".to_string(), json!(execution_count));
            obj.insert("outputs".to_string(), json!([]));
            obj.insert("source".to_string(), json!(cell.source));
        }
        CellKind::Markdown => {
            obj.insert("cell_type".to_string(), json!("markdown"));
            obj.insert("id".to_string(), json!(cell.id));
            obj.insert("metadata".to_string(), json!({}));
            obj.insert("source".to_string(), json!(cell.source));
        }
    }
    Value::Object(obj)
}

/// Split `"<major>.<minor>"` back into the two integer fields.
///
/// Multi-digit components are valid (`"10.23"` is major 10, minor 23), so
/// this parses with a regex rather than indexing into the string.
fn split_version(version: &str) -> Result<(i64, i64)> {
    let re = Regex::new(r"^(\d+)\.(\d+)$")?;
    let caps = re
        .captures(version)
        .ok_or_else(|| NotebookError::BadVersion(version.to_string()))?;
    let major: i64 = caps[1].parse()?;
    let minor: i64 = caps[2].parse()?;
    Ok((major, minor))
}

//! Raw-record layer: accessors and rewrites over the on-disk JSON shape.
//!
//! A raw record is the untyped `serde_json::Value` matching the notebook
//! wire format. Nothing in this module mutates its input; rewrites return a
//! new value so the on-disk record stays the source of truth.

use crate::Result;
use crate::error::NotebookError;

use serde_json::{Map, Value, json};

/// Read `nbformat` / `nbformat_minor` and return `"<major>.<minor>"`.
pub fn format_version(record: &Value) -> Result<String> {
    let major = int_field(record, "nbformat")?;
    let minor = int_field(record, "nbformat_minor")?;
    Ok(format!("{}.{}", major, minor))
}

/// Return the notebook-level `metadata` mapping verbatim.
///
/// Absence is treated as an empty mapping, not an error.
pub fn metadata(record: &Value) -> Map<String, Value> {
    match record.get("metadata").and_then(Value::as_object) {
        Some(map) => map.clone(),
        None => Map::new(),
    }
}

/// Return the raw cell records in document order.
pub fn cells(record: &Value) -> Result<&Vec<Value>> {
    record
        .get("cells")
        .and_then(Value::as_array)
        .ok_or_else(|| NotebookError::MissingField("cells").into())
}

/// Source lines of a raw cell. A missing or malformed `source` reads as
/// empty; renderers must tolerate empty sources anyway.
pub fn source_lines(cell: &Value) -> Vec<String> {
    match cell.get("source").and_then(Value::as_array) {
        Some(lines) => lines
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    }
}

/// Return a copy of the record in which every code cell has `outputs: []`
/// and `execution_count: null`. The input record is not touched.
pub fn clear_outputs(record: &Value) -> Value {
    let mut cleared = record.clone();
    if let Some(cells) = cleared.get_mut("cells").and_then(Value::as_array_mut) {
        for cell in cells {
            if cell.get("cell_type").and_then(Value::as_str) != Some("code") {
                continue;
            }
            if let Some(obj) = cell.as_object_mut() {
                // Re-inserting existing keys keeps their position in the record.
                obj.insert("outputs".to_string(), json!([]));
                obj.insert("execution_count".to_string(), Value::Null);
            }
        }
    }
    cleared
}

/// Concatenate the text of `stream` outputs on the selected channels, in
/// document order.
///
/// Cells with no outputs (or with non-stream outputs, e.g. images and
/// errors) contribute nothing. Stream text may be a single string or a list
/// of lines; both shapes appear in real notebooks.
pub fn stream_output(record: &Value, stdout: bool, stderr: bool) -> Result<String> {
    let mut out = String::new();
    for cell in cells(record)? {
        if cell.get("cell_type").and_then(Value::as_str) != Some("code") {
            continue;
        }
        let Some(outputs) = cell.get("outputs").and_then(Value::as_array) else {
            continue;
        };
        for output in outputs {
            if output.get("output_type").and_then(Value::as_str) != Some("stream") {
                continue;
            }
            let selected = match output.get("name").and_then(Value::as_str) {
                Some("stdout") => stdout,
                Some("stderr") => stderr,
                _ => false,
            };
            if !selected {
                continue;
            }
            match output.get("text") {
                Some(Value::String(text)) => out.push_str(text),
                Some(Value::Array(lines)) => {
                    for line in lines.iter().filter_map(Value::as_str) {
                        out.push_str(line);
                    }
                }
                _ => {}
            }
        }
    }
    Ok(out)
}

fn int_field(record: &Value, key: &'static str) -> Result<i64> {
    let value = record
        .get(key)
        .ok_or(NotebookError::MissingField(key))?;
    value
        .as_i64()
        .ok_or_else(|| anyhow::anyhow!("field `{}` is not an integer: {}", key, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record_with_streams() -> Value {
        json!({
            "nbformat": 4,
            "nbformat_minor": 5,
            "metadata": {"lang": "python"},
            "cells": [
                {
                    "cell_type": "code",
                    "id": "a",
                    "execution_count": 1,
                    "outputs": [
                        {"output_type": "stream", "name": "stdout", "text": ["out1\n", "out2\n"]},
                        {"output_type": "stream", "name": "stderr", "text": "boom\n"},
                        {"output_type": "execute_result", "data": {}}
                    ],
                    "source": ["print(1)"]
                },
                {"cell_type": "markdown", "id": "b", "source": ["hi"]},
                {"cell_type": "code", "id": "c", "execution_count": 2, "outputs": [], "source": []}
            ]
        })
    }

    #[test]
    fn format_version_joins_major_and_minor() {
        let record = record_with_streams();
        assert_eq!(format_version(&record).unwrap(), "4.5");
    }

    #[test]
    fn format_version_reports_the_missing_key() {
        let err = format_version(&json!({"nbformat": 4})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing required field `nbformat_minor` in notebook record"
        );
    }

    #[test]
    fn metadata_defaults_to_empty() {
        assert!(metadata(&json!({})).is_empty());
        assert_eq!(
            metadata(&record_with_streams()).get("lang"),
            Some(&json!("python"))
        );
    }

    #[test]
    fn cells_is_required() {
        assert!(cells(&json!({"nbformat": 4})).is_err());
        assert_eq!(cells(&record_with_streams()).unwrap().len(), 3);
    }

    #[test]
    fn clear_outputs_leaves_the_input_alone() {
        let record = record_with_streams();
        let cleared = clear_outputs(&record);

        // Input untouched.
        assert_eq!(record["cells"][0]["outputs"].as_array().unwrap().len(), 3);

        // Copy cleared.
        assert_eq!(cleared["cells"][0]["outputs"], json!([]));
        assert_eq!(cleared["cells"][0]["execution_count"], Value::Null);
        // Markdown cell untouched.
        assert_eq!(cleared["cells"][1], record["cells"][1]);
    }

    #[test]
    fn stream_output_selects_channels() {
        let record = record_with_streams();
        assert_eq!(stream_output(&record, true, false).unwrap(), "out1\nout2\n");
        assert_eq!(stream_output(&record, false, true).unwrap(), "boom\n");
        assert_eq!(
            stream_output(&record, true, true).unwrap(),
            "out1\nout2\nboom\n"
        );
    }

    #[test]
    fn stream_output_tolerates_empty_outputs() {
        let record = json!({
            "cells": [
                {"cell_type": "code", "execution_count": null, "outputs": [], "source": []}
            ]
        });
        assert_eq!(stream_output(&record, true, true).unwrap(), "");
    }
}

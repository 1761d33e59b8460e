//! Error taxonomy for notebook loading and serialization.
//!
//! Top-level structural problems (missing `nbformat`, missing `cells`) abort
//! the whole operation. A single malformed cell is either skipped by the
//! loader (unknown `cell_type`) or, when no safe default exists
//! (`execution_count`), surfaced as `InvalidCell`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotebookError {
    /// A required key is absent from a raw record and has no default.
    #[error("missing required field `{0}` in notebook record")]
    MissingField(&'static str),

    /// A cell record cannot be turned into a model cell.
    #[error("invalid cell at index {index}: {reason}")]
    InvalidCell { index: usize, reason: String },

    /// A notebook version string does not match `<major>.<minor>`.
    #[error("malformed format version {0:?} (expected \"<major>.<minor>\")")]
    BadVersion(String),

    /// A documented gap, not a data problem.
    #[error("{0} is not yet supported")]
    Unsupported(&'static str),
}

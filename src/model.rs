//! Notebook model: typed cells plus the ordered notebook aggregate.
//!
//! Two structurally distinct cell shapes exist in the wire format (code and
//! markdown), so the model is a tagged union: every `Cell` carries a
//! `CellKind` discriminator and consumers dispatch by pattern match, never by
//! inspecting the raw record again.

/// Sentinel id for cells whose raw record carries no `id` field.
///
/// The notebook format does not guarantee an id on every cell; sample
/// notebooks in the wild omit it, so lookups default instead of failing.
pub const NO_ID: &str = "no documented id";

/// Variant tag plus variant-specific fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellKind {
    /// Executable code cell. `execution_count` is how many times it ran.
    Code { execution_count: i64 },
    /// Markdown markup cell.
    Markdown,
}

/// One unit of a notebook document.
///
/// `source` holds one physical line per entry. A line's trailing `\n` may or
/// may not be present depending on provenance (single-line sources usually
/// have none); renderers normalize at their own boundaries. An empty source
/// is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub id: String,
    pub source: Vec<String>,
    pub kind: CellKind,
}

impl Cell {
    pub fn code(id: impl Into<String>, source: Vec<String>, execution_count: i64) -> Self {
        Self {
            id: id.into(),
            source,
            kind: CellKind::Code { execution_count },
        }
    }

    pub fn markdown(id: impl Into<String>, source: Vec<String>) -> Self {
        Self {
            id: id.into(),
            source,
            kind: CellKind::Markdown,
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self.kind, CellKind::Code { .. })
    }
}

/// An ordered collection of cells plus the format version.
///
/// Cell order is document order and is semantically meaningful; every
/// transform preserves it unless it explicitly filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notebook {
    /// Format version as `"<major>.<minor>"`, e.g. `"4.5"`.
    pub version: String,
    pub cells: Vec<Cell>,
}

impl Notebook {
    pub fn new(version: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            version: version.into(),
            cells,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }
}

impl<'a> IntoIterator for &'a Notebook {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

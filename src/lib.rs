//! Structured model of Jupyter-style notebooks and conversions between the
//! persisted JSON form and derived presentations: py-percent text, HTML, and
//! a readable outline.
//!
//! Data flow: raw record -> `load` -> `model::Notebook` -> (`render`,
//! `transform`) -> text output, or back through `serialize` to a raw record.
//! No code is executed; everything here is structural transformation of
//! already-executed cell records.

pub mod diagnostics;
pub mod error;
pub mod load;
pub mod model;
pub mod raw;
pub mod render;
pub mod serialize;
pub mod transform;

pub type Result<T> = anyhow::Result<T>;

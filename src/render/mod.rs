//! Renderers: stateless transformations to a target text representation.
//!
//! Each renderer is independent. `percent` and `html` work at the raw-record
//! level (with a serializer bridge for `Notebook` inputs); `outline` works
//! on the typed model.

pub mod html;
pub mod outline;
pub mod percent;

//! Per-component rule lists.
//!
//! One module per target file, each exposing its relative `TARGET` path
//! and an ordered `rules()` list. The literals and patterns here must
//! match the current text of the component files exactly; a shape that
//! has drifted reports as a zero-match outcome at run time.

pub mod canvas;
pub mod edge;
pub mod node;

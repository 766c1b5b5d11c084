//! Core editor modules
//!
//! - `parser`: paste format detection and HTML / TSV / CSV parsing
//! - `grid`: the table model (rows, cells, spans, stable cell ids)
//! - `edit`: structural edits on a grid
//! - `markup`: grid to compact HTML rendering
//! - `options`: editor configuration

pub mod edit;
pub mod grid;
pub mod markup;
pub mod options;
pub mod parser;

// Re-export main types and functions
pub use edit::{ClassTarget, Direction};
pub use grid::{Cell, CellId, CellKind, CellPos, Document, Grid, Row, Section, Wrapper};
pub use markup::{render, render_with_selection};
pub use options::EditorOptions;
pub use parser::{detect_format, parse, Format};

//! # tabled
//!
//! Table structural-edit engine for a paste-driven HTML table editor.
//!
//! ## Features
//!
//! - **Paste Detection**: HTML tables, TSV (spreadsheet copies) and CSV
//! - **Grid Model**: rows, sections, row/column spans, classes, stable cell ids
//! - **Structural Edits**: add/delete/move rows and columns, merge/split cells
//! - **Class Tagging**: by cell selection, row or column
//! - **Export**: generic HTML pretty-printer with the selection marker stripped
//! - **WASM Support**: the editor session compiles to WebAssembly for browser hosts
//!
//! ## Usage Examples
//!
//! ### One-shot Conversion
//!
//! ```rust
//! use tabled::format_table;
//!
//! let html = format_table("Name,Age\nAnn,30").unwrap();
//! assert!(html.starts_with("<table>"));
//! assert!(html.contains("Ann"));
//! ```
//!
//! ### Editing Session
//!
//! ```rust
//! use tabled::{Command, Editor, EditorOptions};
//!
//! let mut editor = Editor::new(EditorOptions::default());
//! editor.dispatch(Command::Parse("a\tb\n1\t2".to_string())).unwrap();
//! editor.dispatch(Command::Select { row: 1, col: 0, extend: false }).unwrap();
//! editor.dispatch(Command::Select { row: 1, col: 1, extend: true }).unwrap();
//! editor.dispatch(Command::MergeCells).unwrap();
//!
//! assert!(editor.output().contains("colspan=\"2\""));
//! ```

/// Core editor modules
pub mod core;

/// Data layer - static tag tables
pub mod data;

/// Feature modules - export formatting and the editing session
pub mod features;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core types
pub use core::edit::{ClassTarget, Direction};
pub use core::grid::{Cell, CellId, CellKind, CellPos, Document, Grid, Row, Section, Wrapper};
pub use core::markup::{render, render_with_selection};
pub use core::options::EditorOptions;
pub use core::parser::{detect_format, parse, Format};

// Re-export feature modules
pub use features::pretty::{format_html, strip_class};
pub use features::session::{Command, Editor, Outcome};

// Re-export utilities
pub use utils::error::{EditorError, EditorResult, ErrorKind};
pub use utils::notify::{Notice, Severity};

/// Parse pasted content with default options
pub fn parse_table(input: &str) -> EditorResult<Document> {
    parse(input, &EditorOptions::default())
}

/// Parse pasted content and return it as formatted HTML
pub fn format_table(input: &str) -> EditorResult<String> {
    format_table_with_options(input, &EditorOptions::default())
}

/// Parse pasted content and return it as formatted HTML, with custom options
pub fn format_table_with_options(input: &str, options: &EditorOptions) -> EditorResult<String> {
    let document = parse(input, options)?;
    Ok(format_html(&render(&document), options))
}

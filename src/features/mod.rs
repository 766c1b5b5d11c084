//! Feature modules - export formatting and the editing session
//!
//! This module contains the pieces built on top of the core:
//! - HTML pretty-printing for export
//! - The editor session (command dispatch, persistence, clipboard export)

pub mod pretty;
pub mod session;

// Re-export commonly used types
pub use pretty::{format_html, strip_class};
pub use session::{Command, Editor, Outcome};

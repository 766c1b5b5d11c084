//! Data layer - Static tables
//!
//! This module contains static data used by the parser and the
//! pretty-printer:
//! - Void element names
//! - Table section and cell tag names
//! - Span limits

pub mod elements;

// Re-export commonly used items
pub use elements::{
    is_void_element, CELL_TAGS, MAX_COLSPAN, MAX_ROWSPAN, SECTION_TAGS, VOID_ELEMENTS,
};

//! Format Detector & Parser
//!
//! Turns raw pasted text into a [`Document`].
//!
//! # Architecture
//!
//! ```text
//! Raw text -> detect_format -> HTML extractor      -> Document
//!                           -> TSV / CSV reader    -> Grid -> Document
//! ```
//!
//! # Example
//!
//! ```rust
//! use tabled::core::options::EditorOptions;
//! use tabled::core::parser::parse;
//!
//! let document = parse("a,b\n1,2", &EditorOptions::default()).unwrap();
//! assert_eq!(document.grid.row_count(), 2);
//! ```

mod delimited;
mod detect;
mod html;

#[cfg(test)]
mod tests;

pub use delimited::{parse_delimited, read_records, Delimiter};
pub use detect::{detect_format, has_table_tag, Format};
pub use html::{parse_html, parse_html_table};

use log::debug;

use crate::core::grid::Document;
use crate::core::options::EditorOptions;
use crate::utils::error::{EditorError, EditorResult};

/// Parse pasted content into a document
pub fn parse(input: &str, options: &EditorOptions) -> EditorResult<Document> {
    parse_detected(input, options).map(|(_, document)| document)
}

/// Parse pasted content, also reporting which format it was read as
pub fn parse_detected(input: &str, options: &EditorOptions) -> EditorResult<(Format, Document)> {
    if input.trim().is_empty() {
        return Err(EditorError::EmptyInput);
    }

    let format = detect_format(input).ok_or(EditorError::UnrecognizedFormat)?;
    debug!("detected {} paste ({} bytes)", format, input.len());

    let document = match format {
        Format::Html => parse_html(input.trim(), options),
        Format::Tsv => parse_delimited(input, Delimiter::Tab).map(Document::new)?,
        Format::Csv => parse_delimited(input, Delimiter::Comma).map(Document::new)?,
    };
    Ok((format, document))
}

/// Rebuild a document from previously saved markup
///
/// Returns `None` for the placeholder, empty markup, or markup without a
/// table.
pub fn load_document(markup: &str, options: &EditorOptions) -> Option<Document> {
    if options.is_placeholder(markup) || !has_table_tag(markup) {
        return None;
    }
    parse_html_table(markup.trim(), options)
}

//! Paste format detection

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    // A table start tag: `<table` followed by whitespace, `>` or `/`
    static ref TABLE_START: Regex = Regex::new(r"(?i)<table(?:[\s>/]|$)").unwrap();
}

/// Shape of pasted content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Markup containing a table element
    Html,
    /// Tab-separated values (spreadsheet copy)
    Tsv,
    /// Comma-separated values
    Csv,
}

impl Format {
    pub fn name(self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::Tsv => "tsv",
            Format::Csv => "csv",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Detect the format of pasted content
///
/// First match wins: a table start tag, then a tab, then a comma.
pub fn detect_format(input: &str) -> Option<Format> {
    if TABLE_START.is_match(input) {
        Some(Format::Html)
    } else if input.contains('\t') {
        Some(Format::Tsv)
    } else if input.contains(',') {
        Some(Format::Csv)
    } else {
        None
    }
}

/// Check whether the input contains a table start tag
pub fn has_table_tag(input: &str) -> bool {
    TABLE_START.is_match(input)
}

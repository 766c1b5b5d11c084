//! HTML element tables
//!
//! Static sets used by the pretty-printer and the table extractor.

use phf::phf_set;

/// Elements that never have a closing tag
pub static VOID_ELEMENTS: phf::Set<&'static str> = phf_set! {
    "area",
    "base",
    "br",
    "col",
    "embed",
    "hr",
    "img",
    "input",
    "link",
    "meta",
    "param",
    "source",
    "track",
    "wbr",
};

/// Table section container tags
pub static SECTION_TAGS: phf::Set<&'static str> = phf_set! {
    "thead",
    "tbody",
    "tfoot",
};

/// Table cell tags
pub static CELL_TAGS: phf::Set<&'static str> = phf_set! {
    "td",
    "th",
};

/// Largest column span a browser honours
pub const MAX_COLSPAN: usize = 1000;

/// Largest row span a browser honours
pub const MAX_ROWSPAN: usize = 65534;

/// Check whether `tag` is a void element (case-insensitive)
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(tag.to_ascii_lowercase().as_str())
}

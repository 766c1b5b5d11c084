//! Cell and row types for the grid model

use indexmap::IndexSet;
use scraper::Html;
use std::fmt;

use crate::data::{MAX_COLSPAN, MAX_ROWSPAN};

/// Stable identity of a cell within one grid
///
/// Ids are allocated by the owning [`Grid`](super::Grid) and never reused, so
/// a stored id either resolves to the same cell or to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub(crate) u64);

impl CellId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Header (`th`) or data (`td`) cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellKind {
    Header,
    #[default]
    Data,
}

impl CellKind {
    pub fn tag(self) -> &'static str {
        match self {
            CellKind::Header => "th",
            CellKind::Data => "td",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "th" => Some(CellKind::Header),
            "td" => Some(CellKind::Data),
            _ => None,
        }
    }
}

/// Row section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    Header,
    #[default]
    Body,
    Footer,
}

impl Section {
    pub fn tag(self) -> &'static str {
        match self {
            Section::Header => "thead",
            Section::Body => "tbody",
            Section::Footer => "tfoot",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "thead" => Some(Section::Header),
            "tbody" => Some(Section::Body),
            "tfoot" => Some(Section::Footer),
            _ => None,
        }
    }
}

/// A single table cell
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    id: CellId,
    /// `th` or `td`
    pub kind: CellKind,
    /// Inner markup; text from delimited input is already escaped
    pub content: String,
    colspan: usize,
    rowspan: usize,
    /// Class names, unique, in insertion order
    pub classes: IndexSet<String>,
    /// Other attributes, kept verbatim
    pub attrs: Vec<(String, String)>,
}

impl Cell {
    pub(crate) fn new(id: CellId, kind: CellKind, content: String) -> Self {
        Self {
            id,
            kind,
            content,
            colspan: 1,
            rowspan: 1,
            classes: IndexSet::new(),
            attrs: Vec::new(),
        }
    }

    pub fn id(&self) -> CellId {
        self.id
    }

    pub fn colspan(&self) -> usize {
        self.colspan
    }

    pub fn rowspan(&self) -> usize {
        self.rowspan
    }

    /// Set the column span, clamped to `1..=MAX_COLSPAN`
    pub fn set_colspan(&mut self, span: usize) {
        self.colspan = span.clamp(1, MAX_COLSPAN);
    }

    /// Set the row span, clamped to `1..=MAX_ROWSPAN`
    pub fn set_rowspan(&mut self, span: usize) {
        self.rowspan = span.clamp(1, MAX_ROWSPAN);
    }

    /// Whether the cell spans more than one slot
    pub fn is_merged(&self) -> bool {
        self.colspan > 1 || self.rowspan > 1
    }

    /// Plain text of the content; see [`markup_text`]
    pub fn text(&self) -> String {
        markup_text(&self.content)
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.contains(name)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// A table row
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    pub section: Section,
    /// Cells in DOM order; build them with [`Grid::new_cell`](super::Grid::new_cell)
    pub cells: Vec<Cell>,
    pub classes: IndexSet<String>,
    pub attrs: Vec<(String, String)>,
}

impl Row {
    pub fn new(section: Section) -> Self {
        Self {
            section,
            ..Self::default()
        }
    }

    pub fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Index of the cell with `id` in this row
    pub fn index_of(&self, id: CellId) -> Option<usize> {
        self.cells.iter().position(|cell| cell.id == id)
    }
}

/// Add whitespace-separated class tokens; returns how many were new
pub fn add_class_tokens(classes: &mut IndexSet<String>, names: &str) -> usize {
    names
        .split_whitespace()
        .filter(|token| classes.insert(token.to_string()))
        .count()
}

/// Remove whitespace-separated class tokens; returns how many were present
pub fn remove_class_tokens(classes: &mut IndexSet<String>, names: &str) -> usize {
    names
        .split_whitespace()
        .filter(|token| classes.shift_remove(*token))
        .count()
}

/// Plain text of an HTML fragment, as a browser lays it out: tags dropped,
/// entities decoded, and runs of ASCII whitespace collapsed to one space
///
/// Collapsing makes the text independent of how the markup was indented, so
/// pretty-printed output reads back with the same cell texts.
pub fn markup_text(markup: &str) -> String {
    if !markup.contains('<') && !markup.contains('&') {
        return collapse_whitespace(markup);
    }
    let fragment = Html::parse_fragment(markup);
    let text: String = fragment.root_element().text().collect();
    collapse_whitespace(&text)
}

fn collapse_whitespace(text: &str) -> String {
    text.split(|c: char| c.is_ascii_whitespace())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

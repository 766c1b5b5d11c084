//! Grid Model
//!
//! The canonical in-memory table: rows of cells with spans, sections and
//! class sets, plus the optional wrapper element a pasted table came in.
//!
//! # Identity
//!
//! Every cell carries a [`CellId`] allocated by its grid. Selections and the
//! current cell are stored as ids and resolved to positions on use, so they
//! never point at the wrong cell after rows or columns move.
//!
//! ```text
//! Document
//!   wrapper?  <figure class="wp-block-table"> ... </figure>
//!   Grid
//!     caption?
//!     Row (thead)  [th] [th] [th]
//!     Row (tbody)  [td colspan=2] [td]
//! ```

mod cell;
mod occupancy;


pub use cell::{
    add_class_tokens, markup_text, remove_class_tokens, Cell, CellId, CellKind, Row, Section,
};
pub use occupancy::SlotLayout;

use crate::core::options::EditorOptions;
use crate::utils::escape::escape_text;

/// Position of a cell: row index and index within the row's cell list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Container element kept around a pasted table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wrapper {
    /// Lowercase tag name, e.g. `figure`
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    /// Raw markup of the wrapper's children before the table
    pub before: String,
    /// Raw markup of the wrapper's children after the table (e.g. a figcaption)
    pub after: String,
}

impl Wrapper {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            before: String::new(),
            after: String::new(),
        }
    }
}

/// A table with its optional wrapper
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub wrapper: Option<Wrapper>,
    pub grid: Grid,
}

impl Document {
    pub fn new(grid: Grid) -> Self {
        Self {
            wrapper: None,
            grid,
        }
    }

    pub fn with_wrapper(grid: Grid, wrapper: Wrapper) -> Self {
        Self {
            wrapper: Some(wrapper),
            grid,
        }
    }
}

/// Complete table structure
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Grid {
    rows: Vec<Row>,
    /// Raw inner markup of the table's caption
    pub caption: Option<String>,
    /// Attributes of the `table` element, including `class`
    pub attrs: Vec<(String, String)>,
    next_id: u64,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Placeholder table: one header row of generic headers, the remaining
    /// rows of generic cells
    pub fn placeholder(options: &EditorOptions) -> Self {
        let mut grid = Grid::new();
        let cols = options.default_cols.max(1);

        let mut header = Row::new(Section::Header);
        for c in 0..cols {
            let text = format!("{} {}", options.default_header_text, c + 1);
            header.push(grid.new_cell(CellKind::Header, escape_text(&text)));
        }
        grid.push_row(header);

        for _ in 1..options.default_rows.max(1) {
            let mut row = Row::new(Section::Body);
            for _ in 0..cols {
                row.push(grid.new_cell(CellKind::Data, escape_text(&options.default_cell_text)));
            }
            grid.push_row(row);
        }

        grid
    }

    /// Build a grid from delimited records: the first record becomes the
    /// header row, the rest body rows. Field counts are taken as-is.
    pub fn from_records(records: &[Vec<String>]) -> Self {
        let mut grid = Grid::new();

        for (index, record) in records.iter().enumerate() {
            let (section, kind) = if index == 0 {
                (Section::Header, CellKind::Header)
            } else {
                (Section::Body, CellKind::Data)
            };

            let mut row = Row::new(section);
            for field in record {
                row.push(grid.new_cell(kind, escape_text(field)));
            }
            grid.push_row(row);
        }

        grid
    }

    /// Allocate a fresh cell owned by this grid
    pub fn new_cell(&mut self, kind: CellKind, content: impl Into<String>) -> Cell {
        let id = CellId(self.next_id);
        self.next_id += 1;
        Cell::new(id, kind, content.into())
    }

    /// Append a row; its cells must have been allocated by this grid
    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub(crate) fn insert_row(&mut self, index: usize, row: Row) {
        self.rows.insert(index, row);
    }

    pub(crate) fn remove_row(&mut self, index: usize) -> Row {
        self.rows.remove(index)
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn row_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell count of the first row, the reference width for edits
    pub fn column_count(&self) -> usize {
        self.rows.first().map(Row::len).unwrap_or(0)
    }

    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Row::len).sum()
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flat_map(|row| row.cells.iter())
    }

    /// Resolve a cell id to its current position
    pub fn position(&self, id: CellId) -> Option<CellPos> {
        self.rows.iter().enumerate().find_map(|(row_index, row)| {
            row.index_of(id).map(|col| CellPos::new(row_index, col))
        })
    }

    pub fn contains(&self, id: CellId) -> bool {
        self.position(id).is_some()
    }

    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells().find(|cell| cell.id() == id)
    }

    pub fn cell_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        self.rows
            .iter_mut()
            .flat_map(|row| row.cells.iter_mut())
            .find(|cell| cell.id() == id)
    }

    pub fn cell_at(&self, pos: CellPos) -> Option<&Cell> {
        self.rows.get(pos.row)?.cells.get(pos.col)
    }

    pub fn cell_at_mut(&mut self, pos: CellPos) -> Option<&mut Cell> {
        self.rows.get_mut(pos.row)?.cells.get_mut(pos.col)
    }

    /// Id of the cell at `(row, col)`
    pub fn id_at(&self, row: usize, col: usize) -> Option<CellId> {
        self.cell_at(CellPos::new(row, col)).map(Cell::id)
    }

    /// Slot occupancy of every row
    pub fn layout(&self) -> SlotLayout {
        SlotLayout::compute(&self.rows)
    }

    /// Whether every row covers the same number of column slots
    pub fn is_rectangular(&self) -> bool {
        self.layout().is_rectangular()
    }

    /// Plain text of every cell, row by row
    pub fn texts(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.cells.iter().map(Cell::text).collect())
            .collect()
    }

    /// Rows of the section group containing `row`
    ///
    /// A group is a run of consecutive rows with the same section; it
    /// renders as one `thead`/`tbody`/`tfoot` element, and row spans never
    /// reach past it.
    pub fn section_group(&self, row: usize) -> std::ops::Range<usize> {
        let section = match self.rows.get(row) {
            Some(r) => r.section,
            None => return row..row,
        };
        let start = self.rows[..row]
            .iter()
            .rposition(|r| r.section != section)
            .map_or(0, |index| index + 1);
        let end = self.rows[row..]
            .iter()
            .position(|r| r.section != section)
            .map_or(self.rows.len(), |offset| row + offset);
        start..end
    }

    /// Index of `row` within its section group
    pub fn section_row_index(&self, row: usize) -> usize {
        row - self.section_group(row).start
    }

    /// Index where a new body row goes: after the last body row, before any
    /// footer rows
    pub(crate) fn body_insert_index(&self) -> usize {
        match self.rows.iter().rposition(|row| row.section == Section::Body) {
            Some(index) => index + 1,
            None => self
                .rows
                .iter()
                .position(|row| row.section == Section::Footer)
                .unwrap_or(self.rows.len()),
        }
    }
}

//! Row insertion and deletion

use log::debug;

use super::locate;
use crate::core::grid::{CellId, CellKind, Grid, Row, Section};
use crate::core::options::EditorOptions;
use crate::utils::error::{EditorError, EditorResult};
use crate::utils::escape::escape_text;

/// Append a body row of default cells, as wide as the first row
///
/// The row goes after the last body row, ahead of any footer rows. Returns
/// the new row's index.
pub fn add_row(grid: &mut Grid, options: &EditorOptions) -> usize {
    let width = match grid.column_count() {
        0 => options.default_cols.max(1),
        n => n,
    };

    let content = escape_text(&options.default_cell_text);
    let mut row = Row::new(Section::Body);
    for _ in 0..width {
        row.push(grid.new_cell(CellKind::Data, content.clone()));
    }

    let index = grid.body_insert_index();
    grid.insert_row(index, row);
    debug!("added row {} with {} cells", index, width);
    index
}

/// Remove the row containing `target`
pub fn delete_row(grid: &mut Grid, target: CellId) -> EditorResult<Row> {
    let pos = locate(grid, target, "in the row you want to delete")?;
    if grid.row_count() <= 1 {
        return Err(EditorError::LastRow);
    }

    debug!("deleting row {}", pos.row);
    Ok(grid.remove_row(pos.row))
}

//! Column insertion, deletion and movement
//!
//! A "column" here is a DOM index: the cells at the same index of each row.
//! Rows shorter than the index are skipped.

use log::debug;

use super::locate;
use crate::core::grid::{CellId, CellKind, Grid, Section};
use crate::core::options::EditorOptions;
use crate::utils::error::{EditorError, EditorResult};
use crate::utils::escape::escape_text;

/// Direction of a column move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn name(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Append one cell to every row
///
/// Header-section rows get a header cell, all other rows a data cell.
pub fn add_column(grid: &mut Grid, options: &EditorOptions) {
    let header = escape_text(&options.default_header_text);
    let data = escape_text(&options.default_cell_text);

    for index in 0..grid.row_count() {
        let is_header = grid.rows()[index].section == Section::Header;
        let cell = if is_header {
            grid.new_cell(CellKind::Header, header.clone())
        } else {
            grid.new_cell(CellKind::Data, data.clone())
        };
        grid.rows_mut()[index].push(cell);
    }

    debug!("added column to {} rows", grid.row_count());
}

/// Remove the cell at `target`'s column index from every row that has one
///
/// Returns the removed column index.
pub fn delete_column(grid: &mut Grid, target: CellId) -> EditorResult<usize> {
    let pos = locate(grid, target, "in the column you want to delete")?;
    if grid.column_count() <= 1 {
        return Err(EditorError::LastColumn);
    }

    for row in grid.rows_mut() {
        if pos.col < row.len() {
            row.cells.remove(pos.col);
        }
    }

    debug!("deleted column {}", pos.col);
    Ok(pos.col)
}

/// Swap `target`'s column with its neighbour in `direction`
///
/// The destination must lie within the first row. Rows lacking either index
/// are left alone. Returns the column's new index.
pub fn move_column(grid: &mut Grid, target: CellId, direction: Direction) -> EditorResult<usize> {
    let pos = locate(grid, target, "in the column you want to move")?;

    let destination = match direction {
        Direction::Left => pos.col.checked_sub(1),
        Direction::Right => Some(pos.col + 1),
    }
    .filter(|&index| index < grid.column_count())
    .ok_or(EditorError::CannotMoveFurther)?;

    for row in grid.rows_mut() {
        if pos.col < row.len() && destination < row.len() {
            row.cells.swap(pos.col, destination);
        }
    }

    debug!("moved column {} {} to {}", pos.col, direction.name(), destination);
    Ok(destination)
}

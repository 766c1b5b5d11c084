//! Structural Edit Engine
//!
//! Row/column insertion, deletion and movement, cell merge/split and class
//! tagging. Every operation works on a `&mut Grid` with explicit cell ids as
//! targets, and either applies completely or returns an [`EditorError`]
//! without touching the grid.
//!
//! Positions are DOM indices (a cell's index within its row), not slot
//! indices. Merge and split use bounding-box arithmetic over those indices,
//! so merging a non-rectangular selection can leave overlapping spans.
//!
//! [`EditorError`]: crate::utils::error::EditorError

mod classes;
mod columns;
mod merge;
mod rows;


pub use classes::{add_classes, remove_classes, ClassTarget};
pub use columns::{add_column, delete_column, move_column, Direction};
pub use merge::{merge_cells, split_cell};
pub use rows::{add_row, delete_row};

use crate::core::grid::{CellId, CellPos, Grid};
use crate::utils::error::{EditorError, EditorResult};

/// Resolve the target of a single-cell operation, treating a stale id as
/// no target at all
fn locate(grid: &Grid, target: CellId, action: &'static str) -> EditorResult<CellPos> {
    grid.position(target)
        .ok_or_else(|| EditorError::no_current_cell(action))
}

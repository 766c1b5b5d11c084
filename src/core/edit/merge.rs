//! Cell merge and split

use log::{debug, warn};

use super::locate;
use crate::core::grid::{CellId, CellPos, Grid};
use crate::core::options::EditorOptions;
use crate::utils::error::{EditorError, EditorResult};
use crate::utils::escape::escape_text;

/// Merge the selected cells into the first one
///
/// The first cell's spans are set from the bounding box of all selected
/// positions (only where the box extends past one row or column). Row
/// indices count within each row's section group, and the row span stops at
/// the end of the first cell's group. The content becomes the space-joined
/// plain text of every selected cell, and the other cells are removed. Stale
/// ids are ignored. Returns the id of the merged cell.
pub fn merge_cells(grid: &mut Grid, selection: &[CellId]) -> EditorResult<CellId> {
    let resolved: Vec<(CellId, CellPos)> = selection
        .iter()
        .filter_map(|&id| grid.position(id).map(|pos| (id, pos)))
        .collect();

    if resolved.len() < selection.len() {
        warn!(
            "merge ignoring {} stale cell ids",
            selection.len() - resolved.len()
        );
    }
    if resolved.len() < 2 {
        return Err(EditorError::TooFewCellsSelected);
    }

    let section_rows: Vec<usize> = resolved
        .iter()
        .map(|(_, pos)| grid.section_row_index(pos.row))
        .collect();
    let min_row = section_rows.iter().copied().min().unwrap_or(0);
    let max_row = section_rows.iter().copied().max().unwrap_or(0);
    let min_col = resolved.iter().map(|(_, pos)| pos.col).min().unwrap_or(0);
    let max_col = resolved.iter().map(|(_, pos)| pos.col).max().unwrap_or(0);
    let (first, first_pos) = resolved[0];
    let rows_left = grid.section_group(first_pos.row).end - first_pos.row;
    let colspan = max_col - min_col + 1;
    let rowspan = (max_row - min_row + 1).min(rows_left);

    let text = resolved
        .iter()
        .filter_map(|(_, pos)| grid.cell_at(*pos))
        .map(|cell| cell.text().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if let Some(cell) = grid.cell_at_mut(first_pos) {
        cell.content = escape_text(&text);
        if colspan > 1 {
            cell.set_colspan(colspan);
        }
        if rowspan > 1 {
            cell.set_rowspan(rowspan);
        }
    }

    let removed: Vec<CellId> = resolved[1..].iter().map(|(id, _)| *id).collect();
    for row in grid.rows_mut() {
        row.cells.retain(|cell| !removed.contains(&cell.id()));
    }

    debug!(
        "merged {} cells into {} ({}x{})",
        resolved.len(),
        first,
        rowspan,
        colspan
    );
    Ok(first)
}

/// Undo the spans of `target`, filling the freed slots with default cells
///
/// A column span inserts cells right after the target; a row span inserts
/// one cell at the target's column index in each following row of the same
/// section group (appended when that row is shorter). New cells share the
/// target's kind.
/// Returns the ids of the inserted cells.
pub fn split_cell(
    grid: &mut Grid,
    target: CellId,
    options: &EditorOptions,
) -> EditorResult<Vec<CellId>> {
    let pos = locate(grid, target, "to split")?;
    let (kind, colspan, rowspan) = match grid.cell_at(pos) {
        Some(cell) if cell.is_merged() => (cell.kind, cell.colspan(), cell.rowspan()),
        _ => return Err(EditorError::NotMerged),
    };

    let content = escape_text(&options.default_cell_text);
    let mut inserted = Vec::new();

    if colspan > 1 {
        if let Some(cell) = grid.cell_at_mut(pos) {
            cell.set_colspan(1);
        }
        for offset in 1..colspan {
            let cell = grid.new_cell(kind, content.clone());
            inserted.push(cell.id());
            let row = &mut grid.rows_mut()[pos.row];
            let index = (pos.col + offset).min(row.len());
            row.cells.insert(index, cell);
        }
    }

    if rowspan > 1 {
        if let Some(cell) = grid.cell_at_mut(pos) {
            cell.set_rowspan(1);
        }
        let group_end = grid.section_group(pos.row).end;
        for offset in 1..rowspan {
            let row_index = pos.row + offset;
            if row_index >= group_end {
                break;
            }
            let cell = grid.new_cell(kind, content.clone());
            inserted.push(cell.id());
            let row = &mut grid.rows_mut()[row_index];
            let index = pos.col.min(row.len());
            row.cells.insert(index, cell);
        }
    }

    debug!("split {} into {} new cells", target, inserted.len());
    Ok(inserted)
}

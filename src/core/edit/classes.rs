//! Class tagging of cells, rows and columns

use indexmap::IndexSet;
use log::debug;

use crate::core::grid::{add_class_tokens, remove_class_tokens, CellId, CellPos, Grid};
use crate::utils::error::{EditorError, EditorResult};

/// What a class operation applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassTarget {
    /// Each targeted cell
    #[default]
    Cell,
    /// The row containing the anchor cell
    Row,
    /// Every row's cell at the anchor's column index
    Column,
}

impl ClassTarget {
    pub fn name(self) -> &'static str {
        match self {
            ClassTarget::Cell => "cell",
            ClassTarget::Row => "row",
            ClassTarget::Column => "column",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "cell" => Some(ClassTarget::Cell),
            "row" => Some(ClassTarget::Row),
            "column" | "col" => Some(ClassTarget::Column),
            _ => None,
        }
    }
}

type TokenOp = fn(&mut IndexSet<String>, &str) -> usize;

/// Add whitespace-separated class names
///
/// `cells` are the targeted cells; for [`ClassTarget::Row`] and
/// [`ClassTarget::Column`] only the first live one is used as the anchor.
/// Returns how many class tokens were newly added.
pub fn add_classes(
    grid: &mut Grid,
    names: &str,
    target: ClassTarget,
    cells: &[CellId],
) -> EditorResult<usize> {
    apply(grid, names, target, cells, add_class_tokens)
}

/// Remove whitespace-separated class names; see [`add_classes`]
///
/// Returns how many class tokens were actually removed.
pub fn remove_classes(
    grid: &mut Grid,
    names: &str,
    target: ClassTarget,
    cells: &[CellId],
) -> EditorResult<usize> {
    apply(grid, names, target, cells, remove_class_tokens)
}

fn apply(
    grid: &mut Grid,
    names: &str,
    target: ClassTarget,
    cells: &[CellId],
    op: TokenOp,
) -> EditorResult<usize> {
    let names = names.trim();
    if names.is_empty() {
        return Err(EditorError::EmptyClassName);
    }

    let positions: Vec<CellPos> = cells.iter().filter_map(|&id| grid.position(id)).collect();
    let anchor = *positions.first().ok_or(EditorError::NoClassTarget)?;

    let changed: usize = match target {
        ClassTarget::Cell => {
            let mut changed = 0;
            for pos in positions {
                if let Some(cell) = grid.cell_at_mut(pos) {
                    changed += op(&mut cell.classes, names);
                }
            }
            changed
        }
        ClassTarget::Row => match grid.row_mut(anchor.row) {
            Some(row) => op(&mut row.classes, names),
            None => 0,
        },
        ClassTarget::Column => grid
            .rows_mut()
            .iter_mut()
            .filter_map(|row| row.cells.get_mut(anchor.col))
            .map(|cell| op(&mut cell.classes, names))
            .sum(),
    };

    debug!(
        "class update on {} ({:?}): {} tokens changed",
        target.name(),
        names,
        changed
    );
    Ok(changed)
}

//! Slot occupancy of a grid
//!
//! Walks the rows the way a browser lays out a table: each cell is anchored
//! at the first slot not covered by a row span from an earlier row, and
//! covers `colspan` slots. Row spans stop at the end of their section group.
//! Used to measure rectangularity; the edit engine itself works on DOM
//! indices.

use super::cell::Row;

/// Occupancy of every row of a grid
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlotLayout {
    /// Distinct slots occupied in each row (own cells plus row spans from above)
    pub widths: Vec<usize>,
    /// Anchor slot of each cell, row by row
    pub anchors: Vec<Vec<usize>>,
}

impl SlotLayout {
    pub fn compute(rows: &[Row]) -> Self {
        let mut layout = SlotLayout::default();
        // Remaining rows each slot stays covered by a row span
        let mut col_coverage: Vec<usize> = Vec::new();
        let mut section = None;

        for row in rows {
            if section.is_some_and(|previous| previous != row.section) {
                col_coverage.clear();
            }
            section = Some(row.section);

            let mut occupied: Vec<bool> = col_coverage.iter().map(|&rows| rows > 0).collect();
            let mut next_coverage: Vec<usize> =
                col_coverage.iter().map(|rows| rows.saturating_sub(1)).collect();
            let mut anchors = Vec::with_capacity(row.cells.len());
            let mut current_col = 0;

            for cell in &row.cells {
                while current_col < col_coverage.len() && col_coverage[current_col] > 0 {
                    current_col += 1;
                }
                anchors.push(current_col);

                let end = current_col + cell.colspan();
                if occupied.len() < end {
                    occupied.resize(end, false);
                }
                if next_coverage.len() < end {
                    next_coverage.resize(end, 0);
                }
                for slot in current_col..end {
                    occupied[slot] = true;
                    next_coverage[slot] = next_coverage[slot].max(cell.rowspan() - 1);
                }
                current_col = end;
            }

            layout.widths.push(occupied.iter().filter(|&&slot| slot).count());
            layout.anchors.push(anchors);
            col_coverage = next_coverage;
        }

        layout
    }

    /// Whether every row occupies the same number of slots
    pub fn is_rectangular(&self) -> bool {
        self.widths.windows(2).all(|pair| pair[0] == pair[1])
    }

    /// Widest row, in slots
    pub fn width(&self) -> usize {
        self.widths.iter().copied().max().unwrap_or(0)
    }
}

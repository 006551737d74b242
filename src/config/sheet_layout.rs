// Geometry of a pairing sheet: where the name cells, counters and button
// rows sit, derived from nothing but the grid dimensions.

use crate::document::{CellRange, CellRef, GridDocument};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetLayout {
    pub rows: usize,
    pub cols: usize,
}

impl Default for SheetLayout {
    fn default() -> Self {
        // Six-person sheet
        Self::for_roster(6)
    }
}

impl SheetLayout {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Layout of a sheet tracking `people` names: one row per person, two
    /// button rows at the bottom, one name column on the left.
    pub fn for_roster(people: usize) -> Self {
        Self {
            rows: people + 2,
            cols: people + 1,
        }
    }

    pub fn of<D: GridDocument + ?Sized>(doc: &D) -> Self {
        Self::new(doc.max_rows(), doc.max_columns())
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Every cell of the sheet.
    pub fn full_sheet(&self) -> CellRange {
        CellRange::new(1, 1, self.rows, self.cols)
    }

    /// The diagonal name cells (r, r+1), one per person row, skipping the
    /// two button rows at the bottom.
    pub fn diagonal_cells(&self) -> impl Iterator<Item = CellRef> {
        let cols = self.cols;
        (1..=self.rows.saturating_sub(2))
            .map(|r| CellRef::new(r, r + 1))
            .filter(move |c| c.col <= cols)
    }

    /// The name column block (column 1, rows 2 through rows-2), when the
    /// sheet is tall enough to have one.
    pub fn name_column(&self) -> Option<CellRange> {
        let height = self.rows.saturating_sub(3);
        if height == 0 {
            None
        } else {
            Some(CellRange::new(2, 1, height, 1))
        }
    }

    /// The region swept when resetting counters: everything below the
    /// header row and left of the last column.
    pub fn counter_region(&self) -> CellRange {
        CellRange::new(
            2,
            1,
            self.rows.saturating_sub(1),
            self.cols.saturating_sub(1),
        )
    }
}

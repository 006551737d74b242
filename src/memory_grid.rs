// In-memory GridDocument used by the tests and the demo binary. Dense
// storage, one Cell per coordinate, with inspection accessors the engine
// itself never needs.

use crate::config::SheetLayout;
use crate::document::{CellColor, CellRange, CellRef, CellValue, GridDocument};
use crate::errors::{PairGridError, PairGridResult};
use log::debug;
use std::path::Path;

#[derive(Clone, Debug, Default)]
struct Cell {
    value: CellValue,
    background: CellColor,
    border: bool,
    note: Option<String>,
}

#[derive(Debug)]
pub struct MemoryGrid {
    layout: SheetLayout,
    cells: Vec<Vec<Cell>>,
    active: Option<CellRef>,
}

impl MemoryGrid {
    /// A blank grid of the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            layout: SheetLayout::new(rows, cols),
            cells: vec![vec![Cell::default(); cols]; rows],
            active: None,
        }
    }

    /// Rebuild the pairing sheet for a roster of names: each person gets a
    /// row, with their name on the diagonal and in the name column, and a
    /// zeroed counter for every earlier person. The bottom two rows stay
    /// blank (button area).
    pub fn with_roster<S: AsRef<str>>(names: &[S]) -> PairGridResult<Self> {
        if names.is_empty() {
            return Err(PairGridError::EmptyRoster);
        }
        let people = names.len();
        let layout = SheetLayout::for_roster(people);
        let mut grid = Self::new(layout.rows, layout.cols);

        for (i, name) in names.iter().enumerate() {
            let k = i + 1;
            let name = name.as_ref();
            grid.set_value(CellRef::new(k, k + 1), CellValue::from(name));
            if k >= 2 {
                grid.set_value(CellRef::new(k, 1), CellValue::from(name));
            }
        }
        for r in 2..=people {
            for c in 2..=r {
                grid.set_value(CellRef::new(r, c), CellValue::Number(0.0));
            }
        }

        debug!(
            "built {}x{} pairing sheet for {} people",
            layout.rows, layout.cols, people
        );
        Ok(grid)
    }

    /// Read a roster out of a CSV file, one name per record (first field).
    pub fn roster_from_csv(path: &Path) -> PairGridResult<Vec<String>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)?;

        let mut names = Vec::new();
        for result in reader.records() {
            let record = result?;
            if let Some(field) = record.get(0) {
                let name = field.trim();
                if !name.is_empty() {
                    names.push(name.to_string());
                }
            }
        }
        Ok(names)
    }

    pub fn layout(&self) -> SheetLayout {
        self.layout
    }

    /// Model the sheet selection the buttons operate on.
    pub fn set_active_cell(&mut self, cell: CellRef) {
        self.active = Some(cell);
    }

    pub fn background(&self, cell: CellRef) -> CellColor {
        self.cell(cell).map(|c| c.background).unwrap_or_default()
    }

    pub fn border(&self, cell: CellRef) -> bool {
        self.cell(cell).map(|c| c.border).unwrap_or(false)
    }

    pub fn note(&self, cell: CellRef) -> Option<&str> {
        self.cell(cell).and_then(|c| c.note.as_deref())
    }

    fn cell(&self, cell: CellRef) -> Option<&Cell> {
        if cell.row < 1 || cell.col < 1 {
            return None;
        }
        self.cells.get(cell.row - 1)?.get(cell.col - 1)
    }

    fn cell_mut(&mut self, cell: CellRef) -> Option<&mut Cell> {
        if cell.row < 1 || cell.col < 1 {
            return None;
        }
        self.cells.get_mut(cell.row - 1)?.get_mut(cell.col - 1)
    }
}

impl GridDocument for MemoryGrid {
    fn max_rows(&self) -> usize {
        self.layout.rows
    }

    fn max_columns(&self) -> usize {
        self.layout.cols
    }

    fn active_cell(&self) -> Option<CellRef> {
        self.active
    }

    fn value(&self, cell: CellRef) -> CellValue {
        self.cell(cell).map(|c| c.value.clone()).unwrap_or_default()
    }

    fn set_value(&mut self, cell: CellRef, value: CellValue) {
        if let Some(cell) = self.cell_mut(cell) {
            cell.value = value;
        }
    }

    fn set_background(&mut self, range: CellRange, color: CellColor) {
        for cell in range.cells() {
            if let Some(cell) = self.cell_mut(cell) {
                cell.background = color;
            }
        }
    }

    fn set_border(&mut self, range: CellRange, on: bool) {
        for cell in range.cells() {
            if let Some(cell) = self.cell_mut(cell) {
                cell.border = on;
            }
        }
    }

    fn set_note(&mut self, range: CellRange, text: &str) {
        for cell in range.cells() {
            if let Some(cell) = self.cell_mut(cell) {
                cell.note = Some(text.to_string());
            }
        }
    }

    fn clear_note(&mut self, range: CellRange) {
        for cell in range.cells() {
            if let Some(cell) = self.cell_mut(cell) {
                cell.note = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_sheet_shape() {
        let grid = MemoryGrid::with_roster(&["Ann", "Bo", "Cy", "Di"]).unwrap();
        assert_eq!(grid.max_rows(), 6);
        assert_eq!(grid.max_columns(), 5);

        // Names on the diagonal for everyone, name column from row 2 down.
        assert_eq!(grid.value(CellRef::new(1, 2)), CellValue::from("Ann"));
        assert_eq!(grid.value(CellRef::new(3, 4)), CellValue::from("Cy"));
        assert_eq!(grid.value(CellRef::new(1, 1)), CellValue::Empty);
        assert_eq!(grid.value(CellRef::new(2, 1)), CellValue::from("Bo"));
        assert_eq!(grid.value(CellRef::new(4, 1)), CellValue::from("Di"));

        // Lower-triangle counters start at zero.
        assert_eq!(grid.value(CellRef::new(2, 2)), CellValue::Number(0.0));
        assert_eq!(grid.value(CellRef::new(4, 3)), CellValue::Number(0.0));
        // Upper triangle and button rows stay empty.
        assert_eq!(grid.value(CellRef::new(2, 4)), CellValue::Empty);
        assert_eq!(grid.value(CellRef::new(5, 2)), CellValue::Empty);
    }

    #[test]
    fn empty_roster_is_an_error() {
        let names: [&str; 0] = [];
        assert_eq!(
            MemoryGrid::with_roster(&names).unwrap_err(),
            PairGridError::EmptyRoster
        );
    }

    #[test]
    fn range_writes_clip_to_bounds() {
        let mut grid = MemoryGrid::new(3, 3);
        grid.set_background(CellRange::new(2, 2, 5, 5), CellColor::Green);
        assert_eq!(grid.background(CellRef::new(3, 3)), CellColor::Green);
        assert_eq!(grid.background(CellRef::new(1, 1)), CellColor::Default);
        // No panic for the out-of-range part; nothing to observe there.
        assert_eq!(grid.value(CellRef::new(9, 9)), CellValue::Empty);
    }

    #[test]
    fn notes_and_borders_round_trip() {
        let mut grid = MemoryGrid::new(4, 4);
        let cell = CellRef::new(2, 2);
        grid.set_note(cell.to_range(), "Mon Aug 24 2026");
        grid.set_border(cell.to_range(), true);
        assert_eq!(grid.note(cell), Some("Mon Aug 24 2026"));
        assert!(grid.border(cell));

        grid.clear_note(cell.to_range());
        grid.set_border(cell.to_range(), false);
        assert_eq!(grid.note(cell), None);
        assert!(!grid.border(cell));
    }

    #[test]
    fn roster_csv_takes_first_field_and_skips_blanks() {
        let path = std::env::temp_dir().join("pair_grid_roster_test.csv");
        std::fs::write(&path, "Ann,notes about Ann\n  Bo  \n   \nCy\n").unwrap();

        let names = MemoryGrid::roster_from_csv(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(names, vec!["Ann", "Bo", "Cy"]);
        let grid = MemoryGrid::with_roster(&names).unwrap();
        assert_eq!(grid.max_rows(), 5);
        assert_eq!(grid.value(CellRef::new(2, 1)), CellValue::from("Bo"));
    }

    #[test]
    fn roster_csv_missing_file_is_a_csv_error() {
        let missing = std::env::temp_dir().join("pair_grid_no_such_roster.csv");
        assert!(matches!(
            MemoryGrid::roster_from_csv(&missing).unwrap_err(),
            PairGridError::Csv(_)
        ));
    }

    #[test]
    fn active_cell_tracking() {
        let mut grid = MemoryGrid::new(4, 4);
        assert_eq!(grid.active_cell(), None);
        grid.set_active_cell(CellRef::new(3, 2));
        assert_eq!(grid.active_cell(), Some(CellRef::new(3, 2)));
    }
}

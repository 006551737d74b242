// Cell addressing, cell contents, and the GridDocument capability that the
// pairing engine is generic over. The trait mirrors the operations the real
// spreadsheet document exposes; implementations live elsewhere.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed name-cell palette used by the pairing sheet.
pub const GREEN_HEX: &str = "#38761d";
pub const ORANGE_HEX: &str = "#e69138";
pub const BLUE_HEX: &str = "#3c78d8";

/// A single cell coordinate. 1-based, like spreadsheet addressing:
/// row 1 is the header row, column 1 the name column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The 1x1 range covering just this cell.
    pub fn to_range(self) -> CellRange {
        CellRange::cell(self)
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A rectangular block of cells, shaped like the document's
/// `getRange(row, col, numRows, numCols)` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRange {
    pub row: usize,
    pub col: usize,
    pub rows: usize,
    pub cols: usize,
}

impl CellRange {
    pub fn new(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        Self {
            row,
            col,
            rows,
            cols,
        }
    }

    pub fn cell(cell: CellRef) -> Self {
        Self::new(cell.row, cell.col, 1, 1)
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Iterate the covered cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellRef> {
        let (row, col, cols) = (self.row, self.col, self.cols);
        (0..self.rows).flat_map(move |dr| (0..cols).map(move |dc| CellRef::new(row + dr, col + dc)))
    }
}

/// What a cell holds. Counters are numbers; headers are text.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    #[default]
    Empty,
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Numeric reading of the cell; non-numbers read as zero.
    pub fn as_number(&self) -> f64 {
        match self {
            CellValue::Number(n) => *n,
            _ => 0.0,
        }
    }

    /// True iff the cell holds a number other than exactly zero.
    /// Labels and empty cells are never nonzero numbers.
    pub fn is_nonzero_number(&self) -> bool {
        matches!(self, CellValue::Number(n) if *n != 0.0)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(s.to_string())
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Number(n) => {
                if n.fract() == 0.0 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            CellValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Background color of a cell. The three non-default colors carry the
/// fixed hex values of the sheet's pairing buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellColor {
    #[default]
    Default,
    Green,
    Orange,
    Blue,
}

impl CellColor {
    pub fn hex(self) -> Option<&'static str> {
        match self {
            CellColor::Default => None,
            CellColor::Green => Some(GREEN_HEX),
            CellColor::Orange => Some(ORANGE_HEX),
            CellColor::Blue => Some(BLUE_HEX),
        }
    }

    pub fn from_hex(hex: &str) -> Option<Self> {
        match hex {
            GREEN_HEX => Some(CellColor::Green),
            ORANGE_HEX => Some(CellColor::Orange),
            BLUE_HEX => Some(CellColor::Blue),
            _ => None,
        }
    }
}

/// Synchronous cell access to the pairing sheet. One invocation at a time;
/// concurrent external edits are not guarded against.
pub trait GridDocument {
    fn max_rows(&self) -> usize;
    fn max_columns(&self) -> usize;

    /// The currently selected cell, if the document tracks a selection.
    fn active_cell(&self) -> Option<CellRef>;

    fn value(&self, cell: CellRef) -> CellValue;
    fn set_value(&mut self, cell: CellRef, value: CellValue);

    fn set_background(&mut self, range: CellRange, color: CellColor);
    fn set_border(&mut self, range: CellRange, on: bool);
    fn set_note(&mut self, range: CellRange, text: &str);
    fn clear_note(&mut self, range: CellRange);
}

use std::fmt;

/// Errors surfaced by the pairing engine and the in-memory document.
#[derive(Debug, Clone, PartialEq)]
pub enum PairGridError {
    /// Coordinates outside the grid bounds.
    InvalidCoordinates {
        row: usize,
        col: usize,
        max_rows: usize,
        max_cols: usize,
    },
    /// Coordinates landing on the header row or name column, where no
    /// pairing counter can live.
    HeaderCell { row: usize, col: usize },
    /// A button operation was requested with no cell selected.
    NoActiveCell,
    /// A roster with no names in it.
    EmptyRoster,
    /// Roster CSV could not be read.
    Csv(String),
}

impl fmt::Display for PairGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairGridError::InvalidCoordinates {
                row,
                col,
                max_rows,
                max_cols,
            } => {
                write!(
                    f,
                    "Invalid coordinates ({}, {}) - grid is {}x{}",
                    row, col, max_rows, max_cols
                )
            }
            PairGridError::HeaderCell { row, col } => {
                write!(f, "Cell ({}, {}) is a header cell, not a counter", row, col)
            }
            PairGridError::NoActiveCell => write!(f, "No cell is selected"),
            PairGridError::EmptyRoster => write!(f, "Roster contains no names"),
            PairGridError::Csv(msg) => write!(f, "Roster CSV error: {}", msg),
        }
    }
}

impl std::error::Error for PairGridError {}

impl From<csv::Error> for PairGridError {
    fn from(err: csv::Error) -> Self {
        PairGridError::Csv(err.to_string())
    }
}

/// Result type alias for pairing grid operations.
pub type PairGridResult<T> = Result<T, PairGridError>;

/// Check that (row, col) addresses a counter cell: inside the grid and
/// clear of the header row and name column.
pub fn validate_counter_cell(
    row: usize,
    col: usize,
    max_rows: usize,
    max_cols: usize,
) -> PairGridResult<()> {
    if row < 1 || col < 1 || row > max_rows || col > max_cols {
        return Err(PairGridError::InvalidCoordinates {
            row,
            col,
            max_rows,
            max_cols,
        });
    }
    if row < 2 || col < 2 {
        return Err(PairGridError::HeaderCell { row, col });
    }
    Ok(())
}

//! Pairing tracker engine for a shared spreadsheet grid: a matrix of
//! per-pair counters with name cells recolored to show who is currently
//! paired. The engine talks to an abstract [`GridDocument`]; an in-memory
//! implementation is provided for tests and the demo binary.

pub mod config;
pub mod display;
pub mod document;
pub mod engine;
pub mod errors;
pub mod memory_grid;

pub use config::SheetLayout;
pub use document::{CellColor, CellRange, CellRef, CellValue, GridDocument};
pub use engine::{current_date_note, PairState, PairingContext, PairingGridEngine};
pub use errors::{validate_counter_cell, PairGridError, PairGridResult};
pub use memory_grid::MemoryGrid;

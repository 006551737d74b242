// The pairing engine: derives a per-operation context around the selected
// counter cell, then applies a pairing transition to it and recolors the
// name cells that reference it. Stateless; every operation takes the grid
// document it should mutate.

use crate::config::SheetLayout;
use crate::document::{CellColor, CellRef, CellValue, GridDocument};
use crate::errors::{validate_counter_cell, PairGridError, PairGridResult};
use chrono::Local;
use log::{debug, info};

/// The pairing transition a button requests. Tow-truck pairing counts the
/// same as a normal pairing; only the display color differs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairState {
    Unpaired,
    Paired,
    TowTruckPaired,
}

impl PairState {
    pub fn is_paired(self) -> bool {
        !matches!(self, PairState::Unpaired)
    }

    /// Name-cell color for this state.
    pub fn color(self) -> CellColor {
        match self {
            PairState::Unpaired => CellColor::Green,
            PairState::Paired => CellColor::Orange,
            PairState::TowTruckPaired => CellColor::Blue,
        }
    }
}

/// Immutable view around one selected counter cell, built fresh per
/// operation and discarded after.
///
/// The two top name cells belong to the person the selected column refers
/// to: their name-column cell (absent for the two leftmost counter columns)
/// and their diagonal cell. The two bottom name cells belong to the person
/// the selected row refers to. Rows within two of the bottom edge have no
/// usable bottom name cells.
#[derive(Clone, Debug, PartialEq)]
pub struct PairingContext {
    pub cell: CellRef,
    pub value: f64,
    pub in_bottom_two: bool,
    pub top_name_cells: [Option<CellRef>; 2],
    pub bottom_name_cells: [CellRef; 2],
}

/// Stateless handler set behind the sheet's buttons.
pub struct PairingGridEngine;

impl PairingGridEngine {
    /// Pure read: everything an apply step needs to know about (row, col).
    pub fn derive_context<D: GridDocument + ?Sized>(
        doc: &D,
        row: usize,
        col: usize,
    ) -> PairGridResult<PairingContext> {
        let max_rows = doc.max_rows();
        let max_cols = doc.max_columns();
        validate_counter_cell(row, col, max_rows, max_cols)?;

        let cell = CellRef::new(row, col);
        Ok(PairingContext {
            cell,
            value: doc.value(cell).as_number(),
            in_bottom_two: row + 2 > max_rows,
            top_name_cells: [
                if col < 3 {
                    None
                } else {
                    Some(CellRef::new(col - 1, 1))
                },
                Some(CellRef::new(col - 1, col)),
            ],
            bottom_name_cells: [
                CellRef::new(row, 1),
                CellRef::new(row, (row + 1).min(max_cols)),
            ],
        })
    }

    /// Apply one transition to the context's counter cell: step the count,
    /// set or clear the border and date note, and recolor the name cells.
    pub fn apply_pairing<D: GridDocument + ?Sized>(
        doc: &mut D,
        context: &PairingContext,
        state: PairState,
    ) {
        let pairing = state.is_paired();
        let stepped = if pairing {
            context.value + 1.0
        } else {
            context.value - 1.0
        };
        // Counters never go negative, however many unpairs are issued.
        let next = stepped.max(0.0);
        doc.set_value(context.cell, CellValue::Number(next));

        let selected = context.cell.to_range();
        doc.set_border(selected, pairing);
        if pairing {
            doc.set_note(selected, &current_date_note());
        } else {
            doc.clear_note(selected);
        }

        let color = state.color();
        for cell in context.top_name_cells.iter().flatten() {
            doc.set_background(cell.to_range(), color);
        }
        if !context.in_bottom_two {
            for cell in context.bottom_name_cells {
                doc.set_background(cell.to_range(), color);
            }
        }

        debug!(
            "{:?} at {}: {} -> {}",
            state, context.cell, context.value, next
        );
    }

    /// Put every name cell back to green and strip borders and notes from
    /// the whole sheet. Counter values are left alone.
    pub fn restart_visual_state<D: GridDocument + ?Sized>(doc: &mut D) {
        let layout = SheetLayout::of(doc);

        for cell in layout.diagonal_cells() {
            doc.set_background(cell.to_range(), CellColor::Green);
        }
        if let Some(name_column) = layout.name_column() {
            doc.set_background(name_column, CellColor::Green);
        }

        let all = layout.full_sheet();
        doc.set_border(all, false);
        doc.clear_note(all);

        info!(
            "restarted visual state on {}x{} sheet",
            layout.rows, layout.cols
        );
    }

    /// Zero every nonzero counter, then restart the visual state. Labels
    /// and empty cells are never touched.
    pub fn reset_all_counters<D: GridDocument + ?Sized>(doc: &mut D) {
        let layout = SheetLayout::of(doc);
        let mut zeroed = 0usize;

        for cell in layout.counter_region().cells() {
            if doc.value(cell).is_nonzero_number() {
                doc.set_value(cell, CellValue::Number(0.0));
                zeroed += 1;
            }
        }
        info!("zeroed {} counters", zeroed);

        Self::restart_visual_state(doc);
    }

    /// Orange PAIR button: increment the selected counter.
    pub fn pair<D: GridDocument + ?Sized>(doc: &mut D) -> PairGridResult<()> {
        Self::transition(doc, PairState::Paired)
    }

    /// Green UNPAIR button: decrement the selected counter.
    pub fn unpair<D: GridDocument + ?Sized>(doc: &mut D) -> PairGridResult<()> {
        Self::transition(doc, PairState::Unpaired)
    }

    /// Blue TOW TRUCK button: increment, colored blue.
    pub fn tow_truck_pair<D: GridDocument + ?Sized>(doc: &mut D) -> PairGridResult<()> {
        Self::transition(doc, PairState::TowTruckPaired)
    }

    /// Gray "Restart Pairing" button.
    pub fn restart_pairing<D: GridDocument + ?Sized>(doc: &mut D) {
        Self::restart_visual_state(doc);
    }

    /// Gray "Reset All" button.
    pub fn reset_all<D: GridDocument + ?Sized>(doc: &mut D) {
        Self::reset_all_counters(doc);
    }

    fn transition<D: GridDocument + ?Sized>(doc: &mut D, state: PairState) -> PairGridResult<()> {
        let cell = doc.active_cell().ok_or(PairGridError::NoActiveCell)?;
        let context = Self::derive_context(doc, cell.row, cell.col)?;
        Self::apply_pairing(doc, &context, state);
        info!("{:?} applied at {}", state, cell);
        Ok(())
    }
}

/// Today, in the shape the pairing notes use (`Mon Aug 24 2026`).
pub fn current_date_note() -> String {
    Local::now().format("%a %b %d %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_grid::MemoryGrid;

    fn six_person_grid() -> MemoryGrid {
        MemoryGrid::with_roster(&["Ann", "Bo", "Cy", "Di", "Ed", "Flo"]).unwrap()
    }

    #[test]
    fn state_color_table() {
        assert_eq!(PairState::Unpaired.color(), CellColor::Green);
        assert_eq!(PairState::Paired.color(), CellColor::Orange);
        assert_eq!(PairState::TowTruckPaired.color(), CellColor::Blue);
        assert!(PairState::Paired.is_paired());
        assert!(PairState::TowTruckPaired.is_paired());
        assert!(!PairState::Unpaired.is_paired());
    }

    #[test]
    fn context_has_both_top_name_cells_from_column_three() {
        let grid = six_person_grid();
        let context = PairingGridEngine::derive_context(&grid, 5, 4).unwrap();
        assert_eq!(
            context.top_name_cells,
            [Some(CellRef::new(3, 1)), Some(CellRef::new(3, 4))]
        );
        assert_eq!(
            context.bottom_name_cells,
            [CellRef::new(5, 1), CellRef::new(5, 6)]
        );
        assert!(!context.in_bottom_two);
    }

    #[test]
    fn context_omits_left_name_cell_in_edge_columns() {
        let grid = six_person_grid();
        let context = PairingGridEngine::derive_context(&grid, 4, 2).unwrap();
        assert_eq!(
            context.top_name_cells,
            [None, Some(CellRef::new(1, 2))]
        );
    }

    #[test]
    fn context_flags_bottom_two_rows() {
        let grid = six_person_grid(); // 8 rows
        assert!(!PairingGridEngine::derive_context(&grid, 6, 3)
            .unwrap()
            .in_bottom_two);
        assert!(PairingGridEngine::derive_context(&grid, 7, 3)
            .unwrap()
            .in_bottom_two);
        assert!(PairingGridEngine::derive_context(&grid, 8, 3)
            .unwrap()
            .in_bottom_two);
    }

    #[test]
    fn context_clamps_bottom_diagonal_to_last_column() {
        let grid = six_person_grid(); // 7 columns
        let context = PairingGridEngine::derive_context(&grid, 8, 3).unwrap();
        assert_eq!(context.bottom_name_cells[1], CellRef::new(8, 7));
    }

    #[test]
    fn context_rejects_headers_and_out_of_bounds() {
        let grid = six_person_grid();
        assert_eq!(
            PairingGridEngine::derive_context(&grid, 1, 4).unwrap_err(),
            PairGridError::HeaderCell { row: 1, col: 4 }
        );
        assert!(matches!(
            PairingGridEngine::derive_context(&grid, 20, 4).unwrap_err(),
            PairGridError::InvalidCoordinates { .. }
        ));
    }

    #[test]
    fn buttons_need_a_selection() {
        let mut grid = six_person_grid();
        assert_eq!(
            PairingGridEngine::pair(&mut grid).unwrap_err(),
            PairGridError::NoActiveCell
        );
    }

    #[test]
    fn date_note_shape() {
        let note = current_date_note();
        // "Mon Aug 24 2026": four space-separated fields, 2-digit day.
        let fields: Vec<&str> = note.split(' ').collect();
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[0].len(), 3);
        assert_eq!(fields[1].len(), 3);
        assert_eq!(fields[2].len(), 2);
        assert_eq!(fields[3].len(), 4);
    }
}

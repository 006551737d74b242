// Terminal rendering of a pairing sheet. Used by the demo binary; the
// engine itself never reads this.

use crate::document::{CellColor, CellRef, CellValue, GridDocument};
use crate::memory_grid::MemoryGrid;
use crossterm::style::{Color, Stylize};

const CELL_WIDTH: usize = 8;

fn terminal_color(color: CellColor) -> Option<Color> {
    match color {
        CellColor::Default => None,
        CellColor::Green => Some(Color::DarkGreen),
        CellColor::Orange => Some(Color::DarkYellow),
        CellColor::Blue => Some(Color::Blue),
    }
}

fn cell_text(value: &CellValue, bordered: bool) -> String {
    let text: String = value.to_string().chars().take(CELL_WIDTH - 2).collect();
    if bordered {
        format!("[{:^width$}]", text, width = CELL_WIDTH - 2)
    } else {
        format!(" {:^width$} ", text, width = CELL_WIDTH - 2)
    }
}

/// Print the whole sheet: header banner, column numbers, one line per row
/// with cells painted in their background color, then any notes.
pub fn display_grid(grid: &MemoryGrid, title: Option<&str>) {
    let rows = grid.max_rows();
    let cols = grid.max_columns();

    println!();
    println!("{}", "=".repeat(cols * CELL_WIDTH + 4));
    match title {
        Some(title) => println!("{}", title),
        None => println!("Pairing sheet - {}x{}", rows, cols),
    }
    println!("{}", "=".repeat(cols * CELL_WIDTH + 4));

    print!("    ");
    for col in 1..=cols {
        print!("{:^width$}", col, width = CELL_WIDTH);
    }
    println!();

    for row in 1..=rows {
        print!("{:2}: ", row);
        for col in 1..=cols {
            let cell = CellRef::new(row, col);
            let text = cell_text(&grid.value(cell), grid.border(cell));
            match terminal_color(grid.background(cell)) {
                Some(bg) => print!("{}", text.with(Color::White).on(bg)),
                None => print!("{}", text),
            }
        }
        println!();
    }

    let mut any_notes = false;
    for row in 1..=rows {
        for col in 1..=cols {
            let cell = CellRef::new(row, col);
            if let Some(note) = grid.note(cell) {
                if !any_notes {
                    println!();
                    any_notes = true;
                }
                println!("  note {}: {}", cell, note);
            }
        }
    }

    if let Some(active) = grid.active_cell() {
        println!();
        println!("  selected: {}", active);
    }
}

// Interactive demo of the pairing grid engine against an in-memory sheet.
// Optional argument: a roster CSV, one name per line.

use pair_grid::display::display_grid;
use pair_grid::{CellRef, MemoryGrid, PairGridResult, PairingGridEngine};
use std::io::{self, BufRead, Write};
use std::path::Path;

const DEFAULT_ROSTER: [&str; 6] = ["Alice", "Bob", "Carol", "Dave", "Erin", "Frank"];

fn print_help() {
    println!("Commands:");
    println!("  select R C   select the counter cell at row R, column C");
    println!("  pair         increment the selected counter (orange)");
    println!("  tow          increment the selected counter (blue)");
    println!("  unpair       decrement the selected counter (green)");
    println!("  restart      restart pairing: green names, no borders or notes");
    println!("  reset        zero all counters, then restart pairing");
    println!("  show         redraw the sheet");
    println!("  quit         exit");
}

fn report(result: PairGridResult<()>, grid: &MemoryGrid) {
    match result {
        Ok(()) => display_grid(grid, None),
        Err(err) => println!("error: {}", err),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut grid = match std::env::args().nth(1) {
        Some(path) => {
            let names = MemoryGrid::roster_from_csv(Path::new(&path))?;
            MemoryGrid::with_roster(&names)?
        }
        None => MemoryGrid::with_roster(&DEFAULT_ROSTER)?,
    };

    println!("Pairing grid demo - 'help' lists commands");
    display_grid(&grid, None);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => {}
            ["quit"] | ["q"] => break,
            ["help"] => print_help(),
            ["show"] => display_grid(&grid, None),
            ["select", row, col] => match (row.parse(), col.parse()) {
                (Ok(row), Ok(col)) => {
                    grid.set_active_cell(CellRef::new(row, col));
                    display_grid(&grid, None);
                }
                _ => println!("usage: select R C"),
            },
            ["pair"] => report(PairingGridEngine::pair(&mut grid), &grid),
            ["tow"] => report(PairingGridEngine::tow_truck_pair(&mut grid), &grid),
            ["unpair"] => report(PairingGridEngine::unpair(&mut grid), &grid),
            ["restart"] => {
                PairingGridEngine::restart_pairing(&mut grid);
                display_grid(&grid, None);
            }
            ["reset"] => {
                PairingGridEngine::reset_all(&mut grid);
                display_grid(&grid, None);
            }
            _ => println!("unknown command - 'help' lists commands"),
        }
    }

    Ok(())
}

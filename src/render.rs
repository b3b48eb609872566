//! Terminal output of a carved maze.

use std::io::Write;

use crossterm::{cursor, queue, terminal};

use crate::maze::{Grid, Unit};

/// Write the grid row by row, two terminal columns per unit.
pub fn display(grid: &Grid, out: &mut impl Write) -> std::io::Result<()> {
    for row in grid.rows() {
        for unit in row {
            write!(out, "{}", unit)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Clear the terminal and draw the grid from the top-left corner.
pub fn render(grid: &Grid, out: &mut impl Write) -> std::io::Result<()> {
    queue!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0),
    )?;
    display(grid, out)?;
    out.flush()
}

/// Check if the terminal is large enough to show the whole grid.
pub fn fits_terminal(grid: &Grid) -> std::io::Result<bool> {
    let (term_width, term_height) = terminal::size()?;
    let needed_width = grid.width().saturating_mul(Unit::UNIT_WIDTH as usize);
    Ok(needed_width <= term_width as usize && grid.depth() <= term_height as usize)
}

use crate::error::{MazeError, Result};

use super::cell::Unit;

/// A coordinate in grid-unit space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Shift by a signed offset. Returns `None` if either coordinate would leave `usize`.
    pub fn offset(self, dx: isize, dy: isize) -> Option<Position> {
        Some(Position {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Position { x, y }
    }
}

/// Row-major occupancy buffer of the carved maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[Unit]>,
    width: usize,
    depth: usize,
}

impl Grid {
    /// `width * depth` must not overflow; `GridConfig` guarantees this for carved grids.
    pub(crate) fn new(width: usize, depth: usize, unit: Unit) -> Self {
        let data = vec![unit; width * depth].into_boxed_slice();
        Grid { data, width, depth }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.depth
    }

    fn ravel_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub fn get(&self, pos: Position) -> Option<Unit> {
        self.is_in_bounds(pos).then(|| self.data[self.ravel_index(pos.x, pos.y)])
    }

    /// `true` if `pos` is inside the grid and still wall.
    pub fn is_filled(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(Unit::is_filled)
    }

    /// Set every unit of the `size.0 × size.1` rectangle at `origin` to `unit`.
    ///
    /// The far edges are clamped to the grid, so a rectangle hanging over the boundary
    /// is truncated. An origin outside the grid is an error.
    pub fn fill_region(
        &mut self,
        origin: Position,
        size: (usize, usize),
        unit: Unit,
    ) -> Result<()> {
        if !self.is_in_bounds(origin) {
            return Err(MazeError::OutOfBounds {
                x: origin.x,
                y: origin.y,
                width: self.width,
                depth: self.depth,
            });
        }
        let x_max = origin.x.saturating_add(size.0).min(self.width);
        let y_max = origin.y.saturating_add(size.1).min(self.depth);
        for y in origin.y..y_max {
            let start = self.ravel_index(origin.x, y);
            let end = self.ravel_index(x_max, y);
            self.data[start..end].fill(unit);
        }
        Ok(())
    }

    /// One row of units, `y` counted from the top.
    ///
    /// # Panics
    /// If `y` is not below the grid depth
    pub fn row(&self, y: usize) -> &[Unit] {
        let start = self.ravel_index(0, y);
        &self.data[start..start + self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Unit]> {
        self.data.chunks_exact(self.width.max(1))
    }

    pub fn count(&self, unit: Unit) -> usize {
        self.data.iter().filter(|&&u| u == unit).count()
    }

    /// Bit-addressable view of the grid: one `Vec<bool>` per row, `true` for wall.
    pub fn to_bit_rows(&self) -> Vec<Vec<bool>> {
        self.rows()
            .map(|row| row.iter().map(|u| u.is_filled()).collect())
            .collect()
    }
}

impl std::ops::Index<(usize, usize)> for Grid {
    type Output = Unit;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.width && index.1 < self.depth,
            "Index {:?} out of bounds for {}x{} grid",
            index,
            self.width,
            self.depth
        );
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

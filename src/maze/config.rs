use crate::{
    error::{MazeError, Result},
    maze::{cell::Unit, grid::Position},
};

/// Validated maze dimensions.
///
/// Width and depth are counted in logical cells. Each cell is a square block of
/// `corridor_width` grid units, and neighbouring cells are separated by
/// `wall_thickness` units of wall. One extra wall closes the far edges, so a maze of
/// `n` cells along an axis spans `n * (corridor_width + wall_thickness) + wall_thickness`
/// grid units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    logical_width: usize,
    logical_depth: usize,
    corridor_width: usize,
    wall_thickness: usize,
    step: usize,
    physical_width: usize,
    physical_depth: usize,
}

impl GridConfig {
    pub fn new(
        logical_width: usize,
        logical_depth: usize,
        corridor_width: usize,
        wall_thickness: usize,
    ) -> Result<Self> {
        for (parameter, value) in [
            ("logical_width", logical_width),
            ("logical_depth", logical_depth),
            ("corridor_width", corridor_width),
            ("wall_thickness", wall_thickness),
        ] {
            if value < 1 {
                return Err(MazeError::InvalidConfig {
                    parameter,
                    value,
                    reason: "must be at least 1",
                });
            }
        }

        let overflow = |parameter, value| MazeError::InvalidConfig {
            parameter,
            value,
            reason: "physical grid size overflows",
        };

        let step = corridor_width
            .checked_add(wall_thickness)
            .ok_or_else(|| overflow("corridor_width", corridor_width))?;
        let physical_width = logical_width
            .checked_mul(step)
            .and_then(|w| w.checked_add(wall_thickness))
            .ok_or_else(|| overflow("logical_width", logical_width))?;
        let physical_depth = logical_depth
            .checked_mul(step)
            .and_then(|d| d.checked_add(wall_thickness))
            .ok_or_else(|| overflow("logical_depth", logical_depth))?;
        // The buffer itself must be allocatable, which caps it at isize::MAX bytes
        physical_width
            .checked_mul(physical_depth)
            .filter(|&units| units <= isize::MAX as usize / size_of::<Unit>())
            .ok_or_else(|| overflow("logical_depth", logical_depth))?;

        Ok(Self {
            logical_width,
            logical_depth,
            corridor_width,
            wall_thickness,
            step,
            physical_width,
            physical_depth,
        })
    }

    /// Width of the maze in cells.
    pub fn logical_width(&self) -> usize {
        self.logical_width
    }

    /// Depth of the maze in cells.
    pub fn logical_depth(&self) -> usize {
        self.logical_depth
    }

    pub fn corridor_width(&self) -> usize {
        self.corridor_width
    }

    pub fn wall_thickness(&self) -> usize {
        self.wall_thickness
    }

    /// Grid-unit distance between the origins of two adjacent cells.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Width of the occupancy grid in units.
    pub fn physical_width(&self) -> usize {
        self.physical_width
    }

    /// Depth of the occupancy grid in units.
    pub fn physical_depth(&self) -> usize {
        self.physical_depth
    }

    /// Total number of logical cells.
    pub fn cell_count(&self) -> usize {
        self.logical_width * self.logical_depth
    }

    /// Origin corner of the first cell, where carving starts.
    pub fn start(&self) -> Position {
        Position::new(self.wall_thickness, self.wall_thickness)
    }

    /// Origin corner of the logical cell `(cx, cy)`, or `None` if the cell is outside the maze.
    pub fn cell_origin(&self, cx: usize, cy: usize) -> Option<Position> {
        if cx >= self.logical_width || cy >= self.logical_depth {
            return None;
        }
        Some(Position::new(
            self.wall_thickness + cx * self.step,
            self.wall_thickness + cy * self.step,
        ))
    }

    /// Logical cell whose origin corner is `pos`, or `None` if `pos` is not a cell origin.
    pub fn logical_cell(&self, pos: Position) -> Option<(usize, usize)> {
        let rx = pos.x.checked_sub(self.wall_thickness)?;
        let ry = pos.y.checked_sub(self.wall_thickness)?;
        if rx % self.step != 0 || ry % self.step != 0 {
            return None;
        }
        let cell = (rx / self.step, ry / self.step);
        (cell.0 < self.logical_width && cell.1 < self.logical_depth).then_some(cell)
    }
}

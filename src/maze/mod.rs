pub mod cell;
pub mod config;
pub mod grid;

pub use cell::Unit;
pub use config::GridConfig;
pub use grid::{Grid, Position};

use crate::{
    error::{MazeError, Result},
    generators::recursive_backtrack,
    random::RandomSource,
};

/// A maze that is carved once and then read.
///
/// The occupancy grid only exists after a successful [`MazeGrid::generate`]; a failed
/// generation leaves the maze ungenerated.
pub struct MazeGrid {
    config: GridConfig,
    grid: Option<Grid>,
}

impl MazeGrid {
    /// Creates an ungenerated maze of `logical_width × logical_depth` cells.
    pub fn new(
        logical_width: usize,
        logical_depth: usize,
        corridor_width: usize,
        wall_thickness: usize,
    ) -> Result<Self> {
        let config = GridConfig::new(logical_width, logical_depth, corridor_width, wall_thickness)?;
        Ok(Self::from_config(config))
    }

    pub fn from_config(config: GridConfig) -> Self {
        MazeGrid { config, grid: None }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn is_generated(&self) -> bool {
        self.grid.is_some()
    }

    /// Carves the maze, drawing neighbor choices from `random`.
    ///
    /// # Errors
    /// * [`MazeError::AlreadyGenerated`] if called a second time
    /// * [`MazeError::RandomSourceExhausted`] or [`MazeError::RandomOutOfRange`] if
    ///   `random` cannot supply a valid choice
    pub fn generate(&mut self, random: &mut impl RandomSource) -> Result<&Grid> {
        if self.grid.is_some() {
            return Err(MazeError::AlreadyGenerated);
        }

        tracing::debug!(
            "[generate] {}x{} cells, corridor {}, wall {} -> {}x{} units",
            self.config.logical_width(),
            self.config.logical_depth(),
            self.config.corridor_width(),
            self.config.wall_thickness(),
            self.config.physical_width(),
            self.config.physical_depth()
        );

        let mut grid = Grid::new(
            self.config.physical_width(),
            self.config.physical_depth(),
            Unit::FILLED,
        );
        let connections = recursive_backtrack(&mut grid, &self.config, random).inspect_err(|e| {
            tracing::debug!("[generate] failed ({}): {}", e.code(), e);
        })?;

        tracing::debug!(
            "[generate] done, {} connections over {} cells",
            connections,
            self.config.cell_count()
        );
        Ok(&*self.grid.insert(grid))
    }

    /// The carved occupancy grid.
    pub fn occupancy(&self) -> Result<&Grid> {
        self.grid.as_ref().ok_or(MazeError::NotGenerated)
    }
}

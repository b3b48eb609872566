//! Perfect maze generation at tile resolution.
//!
//! Each logical cell of the maze is a square block of open grid units and neighbouring
//! cells are separated by walls of configurable thickness, so the finished occupancy grid
//! can be drawn or collided against directly.

pub mod error;
pub mod generators;
pub mod logging;
pub mod maze;
pub mod random;
pub mod render;

pub use error::{MazeError, Result};
pub use maze::{Grid, GridConfig, MazeGrid, Position, Unit};
pub use random::{FixedSequence, RandomSource};

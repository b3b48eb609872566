use crate::{
    error::{MazeError, Result},
    maze::{
        GridConfig,
        cell::Unit,
        grid::{Grid, Position},
    },
    random::RandomSource,
};

/// Carve a perfect maze into `grid` with a randomized depth-first search.
///
/// `grid` must be sized for `config` and entirely filled. Carving starts at the first
/// cell and returns the number of walls removed between cells, which is always one less
/// than the number of cells.
pub fn recursive_backtrack(
    grid: &mut Grid,
    config: &GridConfig,
    random: &mut impl RandomSource,
) -> Result<usize> {
    let start = config.start();
    carve_cell(grid, config, start)?;

    let mut draws = 0;
    let mut connections = 0;

    // Initialize the stack with the starting point
    // The stack will keep only carved cells
    let mut stack = vec![start];

    while let Some(cell) = stack.pop() {
        let neighbors = unvisited_neighbors(cell, grid, config);

        let neighbor = match neighbors.len() {
            // Dead end, backtrack
            0 => continue,
            1 => neighbors[0],
            len => {
                let idx = random
                    .next_below(len)
                    .ok_or(MazeError::RandomSourceExhausted { draws })?;
                draws += 1;
                *neighbors
                    .get(idx)
                    .ok_or(MazeError::RandomOutOfRange {
                        value: idx,
                        bound: len,
                    })?
            }
        };

        tracing::trace!("[carve] {:?} -> {:?}", cell, neighbor);
        connect(grid, config, cell, neighbor)?;
        carve_cell(grid, config, neighbor)?;
        connections += 1;

        // Put the cell back first so we can look at another neighbor of this cell later
        stack.push(cell);
        // Put the neighbor to carve the maze in that neighbor's direction
        stack.push(neighbor);
    }

    Ok(connections)
}

/// Clear the corridor block whose origin corner is `pos`.
fn carve_cell(grid: &mut Grid, config: &GridConfig, pos: Position) -> Result<()> {
    let size = config.corridor_width();
    grid.fill_region(pos, (size, size), Unit::EMPTY)
}

/// Get unvisited neighbors of a cell.
/// A neighbor is the cell one step away in a cardinal direction, checked in the order
/// right, down, left, up. It is unvisited if it is inside the grid and its block is
/// still filled.
pub fn unvisited_neighbors(pos: Position, grid: &Grid, config: &GridConfig) -> Vec<Position> {
    // Grid dimensions fit in a Vec, so step always fits in isize
    let step = config.step() as isize;
    [(step, 0), (0, step), (-step, 0), (0, -step)]
        .into_iter()
        // Underflow and overflow yield None and are filtered out with the out-of-bounds ones
        .filter_map(|(dx, dy)| pos.offset(dx, dy))
        .filter(|&n| grid.is_filled(n))
        .collect()
}

/// Remove the wall segment between two axis-adjacent cells `a` and `b`.
///
/// At most one of the four direction checks holds for cells that are exactly one step
/// apart; anything else clears nothing.
pub fn connect(grid: &mut Grid, config: &GridConfig, a: Position, b: Position) -> Result<()> {
    let corridor = config.corridor_width();
    let wall = config.wall_thickness();

    let (origin, size) = if b.x > a.x && b.y == a.y {
        // b is to the right
        (Position::new(a.x + corridor, a.y), (wall, corridor))
    } else if a.x > b.x && b.y == a.y {
        // b is to the left
        (Position::new(b.x + corridor, b.y), (wall, corridor))
    } else if b.y > a.y && b.x == a.x {
        // b is below
        (Position::new(a.x, a.y + corridor), (corridor, wall))
    } else if a.y > b.y && b.x == a.x {
        // b is above
        (Position::new(b.x, b.y + corridor), (corridor, wall))
    } else {
        return Ok(());
    };

    grid.fill_region(origin, size, Unit::EMPTY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{FixedSequence, get_rng};

    fn filled_grid(config: &GridConfig) -> Grid {
        Grid::new(config.physical_width(), config.physical_depth(), Unit::FILLED)
    }

    #[test]
    fn test_unvisited_neighbors() {
        let config = GridConfig::new(3, 3, 1, 1).unwrap();
        let mut grid = filled_grid(&config);
        let center = config.cell_origin(1, 1).unwrap();
        assert_eq!(
            unvisited_neighbors(center, &grid, &config),
            vec![
                Position::new(5, 3),
                Position::new(3, 5),
                Position::new(1, 3),
                Position::new(3, 1)
            ]
        );

        // The corner only sees two neighbors, and visited ones drop out
        carve_cell(&mut grid, &config, Position::new(3, 1)).unwrap();
        assert_eq!(
            unvisited_neighbors(config.start(), &grid, &config),
            vec![Position::new(1, 3)]
        );
    }

    #[test]
    fn test_connect_each_direction() {
        let config = GridConfig::new(3, 3, 2, 1).unwrap();
        let center = config.cell_origin(1, 1).unwrap();
        let cases = [
            (config.cell_origin(2, 1).unwrap(), Position::new(6, 4), (1, 2)),
            (config.cell_origin(0, 1).unwrap(), Position::new(3, 4), (1, 2)),
            (config.cell_origin(1, 2).unwrap(), Position::new(4, 6), (2, 1)),
            (config.cell_origin(1, 0).unwrap(), Position::new(4, 3), (2, 1)),
        ];
        for (neighbor, origin, (w, h)) in cases {
            let mut grid = filled_grid(&config);
            connect(&mut grid, &config, center, neighbor).unwrap();
            assert_eq!(grid.count(Unit::EMPTY), w * h, "neighbor {neighbor:?}");
            for y in origin.y..origin.y + h {
                for x in origin.x..origin.x + w {
                    assert_eq!(grid[(x, y)], Unit::EMPTY);
                }
            }
        }
    }

    #[test]
    fn test_connect_ignores_non_adjacent() {
        let config = GridConfig::new(3, 3, 1, 1).unwrap();
        let mut grid = filled_grid(&config);
        connect(&mut grid, &config, Position::new(1, 1), Position::new(3, 3)).unwrap();
        connect(&mut grid, &config, Position::new(1, 1), Position::new(1, 1)).unwrap();
        assert_eq!(grid.count(Unit::EMPTY), 0);
    }

    #[test]
    fn test_single_candidate_needs_no_draw() {
        // A 1-wide corridor never offers more than one unvisited neighbor
        let config = GridConfig::new(1, 6, 1, 1).unwrap();
        let mut grid = filled_grid(&config);
        let mut seq = FixedSequence::new(vec![]);
        let edges = recursive_backtrack(&mut grid, &config, &mut seq).unwrap();
        assert_eq!(edges, 5);
        assert_eq!(seq.consumed(), 0);
    }

    #[test]
    fn test_scripted_traversal_order() {
        // From the start of a 2x2 maze the candidates are [right, down]; drawing 1 goes down
        let config = GridConfig::new(2, 2, 1, 1).unwrap();
        let mut grid = filled_grid(&config);
        let mut seq = FixedSequence::new(vec![1]);
        let edges = recursive_backtrack(&mut grid, &config, &mut seq).unwrap();
        assert_eq!(edges, 3);
        assert_eq!(seq.consumed(), 1);
        // down from (1,1), then right from (1,3), then up from (3,3)
        assert_eq!(grid[(1, 2)], Unit::EMPTY);
        assert_eq!(grid[(2, 3)], Unit::EMPTY);
        assert_eq!(grid[(3, 2)], Unit::EMPTY);
        assert_eq!(grid[(2, 1)], Unit::FILLED);
    }

    #[test]
    fn test_exhausted_source() {
        let config = GridConfig::new(3, 3, 1, 1).unwrap();
        let mut grid = filled_grid(&config);
        let err = recursive_backtrack(&mut grid, &config, &mut FixedSequence::new(vec![]))
            .unwrap_err();
        assert_eq!(err, MazeError::RandomSourceExhausted { draws: 0 });
    }

    #[test]
    fn test_out_of_range_draw() {
        let config = GridConfig::new(3, 3, 1, 1).unwrap();
        let mut grid = filled_grid(&config);
        let err = recursive_backtrack(&mut grid, &config, &mut FixedSequence::new(vec![9]))
            .unwrap_err();
        assert_eq!(err, MazeError::RandomOutOfRange { value: 9, bound: 2 });
    }

    #[test]
    fn test_removes_one_wall_per_extra_cell() {
        let config = GridConfig::new(9, 7, 2, 3).unwrap();
        let mut grid = filled_grid(&config);
        let edges = recursive_backtrack(&mut grid, &config, &mut get_rng(Some(3))).unwrap();
        assert_eq!(edges, config.cell_count() - 1);
        let open = config.cell_count() * 2 * 2 + edges * 2 * 3;
        assert_eq!(grid.count(Unit::EMPTY), open);
    }
}

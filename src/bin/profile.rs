use std::time::Instant;

use mazegrid::{MazeGrid, logging, random::get_rng};

fn main() -> Result<(), mazegrid::MazeError> {
    let _guard = logging::init("profile.log");

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(1);

    for i in 0..num_iters {
        let mut maze = MazeGrid::new(u8::MAX as usize, u8::MAX as usize, 2, 1)?;
        let started = Instant::now();
        let grid = maze.generate(&mut get_rng(Some(i as u64)))?;
        tracing::info!(
            "[profile] iteration {} carved {}x{} units in {:?}",
            i,
            grid.width(),
            grid.depth(),
            started.elapsed()
        );
    }
    Ok(())
}

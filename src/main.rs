use mazegrid::{MazeGrid, logging, random::get_rng, render};

const USAGE: &str = "Usage: mazegrid [WIDTH DEPTH [CORRIDOR [WALL [SEED]]]]";

fn main() -> std::io::Result<()> {
    let _guard = logging::init("mazegrid.log");

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{USAGE}");
        return Ok(());
    }

    // Parse the positional arguments, falling back to defaults for missing ones
    let mut dims = [10usize, 10, 1, 1];
    for (slot, arg) in dims.iter_mut().zip(args.iter()) {
        match arg.parse::<usize>() {
            Ok(value) => *slot = value,
            Err(_) => {
                eprintln!("'{arg}' is not a valid number.\n{USAGE}");
                return Ok(());
            }
        }
    }
    let seed = match args.get(4).map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => Some(seed),
        Some(Err(_)) => {
            eprintln!("Seed must be a non-negative integer.\n{USAGE}");
            return Ok(());
        }
        None => None,
    };

    let [width, depth, corridor, wall] = dims;
    let mut maze = match MazeGrid::new(width, depth, corridor, wall) {
        Ok(maze) => maze,
        Err(e) => {
            tracing::warn!("[main] rejected configuration: {}", e);
            eprintln!("{e}");
            return Ok(());
        }
    };

    tracing::info!("[main] generating maze with seed {:?}", seed);
    let grid = match maze.generate(&mut get_rng(seed)) {
        Ok(grid) => grid,
        Err(e) => {
            tracing::error!("[main] generation failed: {}", e);
            eprintln!("{e}");
            return Ok(());
        }
    };

    if !render::fits_terminal(grid).unwrap_or(true) {
        tracing::info!("[main] maze is larger than the terminal");
        eprintln!("The maze is larger than the terminal window; output will wrap.");
    }
    render::render(grid, &mut std::io::stdout())
}

//! Terminal A* demo.
//!
//! Run: cargo run --bin gridstar -- [size] [wall-percent] [seed]
//!
//! Builds a square grid, scatters walls, picks a random goal and searches a
//! path from the top-left corner. Set `RUST_LOG=debug` for search statistics.

use std::io;

use gridstar_core::{GridEnv, Position};
use gridstar_demo::{DemoConfig, fits_terminal, random_goal, render, scatter_walls};
use gridstar_paths::{Pathfinder, SearchOutcome};
use log::info;
use rand::{RngExt, SeedableRng};

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = DemoConfig::from_args(std::env::args().skip(1))?;
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    info!("config {config:?}, seed {seed}");

    let start = Position::ZERO;
    let mut grid = GridEnv::open(config.size, config.size)?;
    let walls = scatter_walls(&mut grid, &mut rng, config.wall_percent, &[start]);
    let goal = random_goal(&grid, &mut rng, start).unwrap_or(start);
    info!("grid {}, {walls} walls, goal {goal}", grid.bounds());

    let mut pathfinder = Pathfinder::new();
    let outcome = pathfinder.astar_path(&grid, start, goal)?;
    let stats = pathfinder.stats();

    if fits_terminal(grid.cols()) {
        render(&mut io::stdout(), &grid, start, goal, outcome.path())?;
    }

    match &outcome {
        SearchOutcome::Found(path) => println!(
            "{start} -> {goal}: {} steps, {} cells expanded (seed {seed})",
            path.steps(),
            stats.expanded
        ),
        SearchOutcome::Exhausted => println!(
            "{start} -> {goal}: no path, {} cells expanded (seed {seed})",
            stats.expanded
        ),
        SearchOutcome::Aborted { expanded } => {
            println!("{start} -> {goal}: gave up after {expanded} expansions (seed {seed})")
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

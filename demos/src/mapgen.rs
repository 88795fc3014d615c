//! Grid population and goal selection.

use gridstar_core::{GridEnv, Position};
use rand::{Rng, RngExt};

/// Turn roughly `percent`% of the cells into walls, leaving every position
/// in `keep_open` traversable.
///
/// Returns the number of walls placed.
pub fn scatter_walls(
    grid: &mut GridEnv,
    rng: &mut impl Rng,
    percent: u32,
    keep_open: &[Position],
) -> usize {
    let mut walls = 0;
    for p in grid.bounds() {
        if keep_open.contains(&p) {
            continue;
        }
        if rng.random_range(0..100u32) < percent {
            grid.set_traversable(p, false);
            walls += 1;
        }
    }
    walls
}

/// Pick a traversable position uniformly at random, skipping `exclude`.
///
/// Returns `None` if no candidate exists.
pub fn random_goal(grid: &GridEnv, rng: &mut impl Rng, exclude: Position) -> Option<Position> {
    let candidates: Vec<Position> = grid
        .iter()
        .filter(|&(p, open)| open && p != exclude)
        .map(|(p, _)| p)
        .collect();
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.random_range(0..candidates.len())])
}

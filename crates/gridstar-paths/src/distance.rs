use gridstar_core::Position;

use crate::traits::Heuristic;

/// Manhattan (L1) distance between two positions.
#[inline]
pub fn manhattan(a: Position, b: Position) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Manhattan distance heuristic.
///
/// Admissible and consistent for unit-cost 4-directional movement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    #[inline]
    fn estimate(&self, from: Position, to: Position) -> i32 {
        manhattan(from, to)
    }
}

/// Always-zero heuristic; turns A* into uniform-cost search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Zero;

impl Heuristic for Zero {
    #[inline]
    fn estimate(&self, _from: Position, _to: Position) -> i32 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance() {
        let a = Position::new(0, 0);
        assert_eq!(manhattan(a, a), 0);
        assert_eq!(manhattan(a, Position::new(2, 2)), 4);
        assert_eq!(manhattan(Position::new(9, 0), a), 9);
        assert_eq!(manhattan(Position::new(-1, 3), Position::new(2, -1)), 7);
    }

    #[test]
    fn manhattan_is_consistent_on_unit_edges() {
        let goal = Position::new(3, 5);
        for r in -2..8 {
            for c in -2..8 {
                let p = Position::new(r, c);
                for n in p.neighbors_4() {
                    assert!(Manhattan.estimate(p, goal) <= 1 + Manhattan.estimate(n, goal));
                }
            }
        }
    }
}

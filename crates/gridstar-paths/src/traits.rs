use gridstar_core::{Bounds, GridEnv, Position};

/// Read-only grid oracle a search runs over.
///
/// Implementations must not change while a search is borrowing them.
pub trait Environment {
    /// The rectangle of valid positions.
    fn bounds(&self) -> Bounds;

    /// Whether `p` can be walked on. Must be `false` outside the bounds.
    fn is_traversable(&self, p: Position) -> bool;

    /// Whether `p` lies inside the bounds.
    #[inline]
    fn in_bounds(&self, p: Position) -> bool {
        self.bounds().contains(p)
    }

    /// Append the in-bounds cardinal neighbours of `p` into `buf`, in the
    /// order up, down, left, right. The caller clears `buf` before calling.
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>) {
        for n in p.neighbors_4() {
            if self.in_bounds(n) {
                buf.push(n);
            }
        }
    }
}

/// Estimate of the remaining cost between two positions.
pub trait Heuristic {
    /// Heuristic estimate of the cost from `from` to `to`.
    /// Must be non-negative and never overestimate the true cost.
    fn estimate(&self, from: Position, to: Position) -> i32;
}

impl Environment for GridEnv {
    #[inline]
    fn bounds(&self) -> Bounds {
        GridEnv::bounds(self)
    }

    #[inline]
    fn is_traversable(&self, p: Position) -> bool {
        GridEnv::is_traversable(self, p)
    }
}

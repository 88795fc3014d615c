use gridstar_core::{Bounds, Position};

/// Closed set of an A* search: positions whose optimal cost is final.
///
/// Membership is a per-cell generation stamp, so [`reset`](Self::reset) is
/// O(1) whenever the new bounds fit the existing storage.
pub struct VisitedSet {
    bounds: Bounds,
    stamps: Vec<u32>,
    generation: u32,
    len: usize,
}

impl VisitedSet {
    /// Create an empty set for positions inside `bounds`.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            stamps: vec![0; bounds.len()],
            generation: 1,
            len: 0,
        }
    }

    /// Forget every member, switching to `bounds`.
    pub fn reset(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.len = 0;

        let len = bounds.len();
        if len <= self.stamps.len() {
            self.generation = self.generation.wrapping_add(1);
            if self.generation == 0 {
                self.stamps.fill(0);
                self.generation = 1;
            }
            return;
        }

        self.stamps.clear();
        self.stamps.resize(len, 0);
        self.generation = 1;
    }

    /// Mark `pos` as visited. Returns `false` if it already was, or if it
    /// lies outside the bounds.
    pub fn mark(&mut self, pos: Position) -> bool {
        let Some(i) = self.bounds.index(pos) else {
            return false;
        };
        if self.stamps[i] == self.generation {
            return false;
        }
        self.stamps[i] = self.generation;
        self.len += 1;
        true
    }

    /// Whether `pos` has been marked since the last reset.
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        self.bounds
            .index(pos)
            .is_some_and(|i| self.stamps[i] == self.generation)
    }

    /// Number of visited positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_once() {
        let mut v = VisitedSet::new(Bounds::new(3, 3));
        let p = Position::new(1, 2);
        assert!(!v.contains(p));
        assert!(v.mark(p));
        assert!(v.contains(p));
        assert!(!v.mark(p));
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn out_of_bounds_never_member() {
        let mut v = VisitedSet::new(Bounds::new(3, 3));
        assert!(!v.mark(Position::new(3, 0)));
        assert!(!v.contains(Position::new(3, 0)));
        assert!(v.is_empty());
    }

    #[test]
    fn reset_forgets_members() {
        let mut v = VisitedSet::new(Bounds::new(4, 4));
        v.mark(Position::new(0, 0));
        v.mark(Position::new(3, 3));
        v.reset(Bounds::new(2, 2));
        assert!(v.is_empty());
        assert!(!v.contains(Position::new(0, 0)));
        assert_eq!(v.stamps.len(), 16);

        v.reset(Bounds::new(10, 10));
        assert_eq!(v.stamps.len(), 100);
        assert!(v.mark(Position::new(9, 9)));
    }
}

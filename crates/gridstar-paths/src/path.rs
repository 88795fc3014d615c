use std::fmt;

use gridstar_core::Position;

/// An ordered sequence of positions from start to goal, both inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Position>", into = "Vec<Position>")
)]
pub struct Path(Vec<Position>);

impl Path {
    /// The positions, start first.
    #[inline]
    pub fn positions(&self) -> &[Position] {
        &self.0
    }

    /// First position.
    #[inline]
    pub fn start(&self) -> Position {
        self.0[0]
    }

    /// Last position.
    #[inline]
    pub fn goal(&self) -> Position {
        self.0[self.0.len() - 1]
    }

    /// Number of positions, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`: a path holds at least its start.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of moves, which is also the cost under unit edges.
    #[inline]
    pub fn steps(&self) -> usize {
        self.0.len() - 1
    }

    /// Whether the path passes through `p`.
    pub fn contains(&self, p: Position) -> bool {
        self.0.contains(&p)
    }

    /// Whether every consecutive pair of positions is 4-adjacent.
    pub fn is_connected(&self) -> bool {
        self.0.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Position> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<Position> {
        self.0
    }
}

impl AsRef<[Position]> for Path {
    fn as_ref(&self) -> &[Position] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Path> for Vec<Position> {
    fn from(p: Path) -> Self {
        p.0
    }
}

impl TryFrom<Vec<Position>> for Path {
    type Error = &'static str;

    fn try_from(v: Vec<Position>) -> Result<Self, Self::Error> {
        if v.is_empty() {
            return Err("path: empty position list");
        }
        Ok(Self(v))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{p}")?;
        }
        Ok(())
    }
}

/// Build the path ending at `goal` by following `predecessor_of` back to a
/// position with no predecessor (the start), then reversing.
///
/// `predecessor_of` must describe an acyclic relation.
pub fn reconstruct(goal: Position, predecessor_of: impl Fn(Position) -> Option<Position>) -> Path {
    let mut positions = vec![goal];
    let mut cur = goal;
    while let Some(prev) = predecessor_of(cur) {
        positions.push(prev);
        cur = prev;
    }
    positions.reverse();
    Path(positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn reconstruct_single() {
        let p = Position::new(0, 0);
        let path = reconstruct(p, |_| None);
        assert_eq!(path.positions(), &[p]);
        assert_eq!(path.steps(), 0);
        assert_eq!(path.start(), path.goal());
        assert!(path.is_connected());
    }

    #[test]
    fn reconstruct_reverses_chain() {
        let links: HashMap<Position, Position> = [
            (Position::new(1, 1), Position::new(1, 0)),
            (Position::new(1, 0), Position::new(0, 0)),
        ]
        .into_iter()
        .collect();
        let path = reconstruct(Position::new(1, 1), |p| links.get(&p).copied());
        assert_eq!(
            path.into_vec(),
            vec![Position::new(0, 0), Position::new(1, 0), Position::new(1, 1)]
        );
    }

    #[test]
    fn display_and_connectivity() {
        let path = Path(vec![Position::new(0, 0), Position::new(0, 1)]);
        assert_eq!(path.to_string(), "(0, 0) -> (0, 1)");
        assert!(path.is_connected());

        let broken = Path(vec![Position::new(0, 0), Position::new(1, 1)]);
        assert!(!broken.is_connected());
    }
}

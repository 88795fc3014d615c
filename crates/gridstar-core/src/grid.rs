//! The [`GridEnv`] type: a static traversability grid.
//!
//! A `GridEnv` is populated up front (all open, from boolean rows, or from an
//! ASCII layout) and then only read while searches run over it. It owns its
//! storage outright, so a shared `&GridEnv` can be handed to searches running
//! on different threads.

use crate::error::GridError;
use crate::geom::{Bounds, Position};

/// Layout character for a traversable cell.
pub const OPEN: char = '.';
/// Layout character for an untraversable cell.
pub const WALL: char = '#';

/// A rectangular grid of traversable / untraversable cells.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridRepr", into = "GridRepr")
)]
pub struct GridEnv {
    bounds: Bounds,
    open: Vec<bool>,
}

impl GridEnv {
    /// Create a fully traversable grid.
    pub fn open(rows: i32, cols: i32) -> Result<Self, GridError> {
        if rows <= 0 || cols <= 0 {
            return Err(GridError::NonPositiveSize { rows, cols });
        }
        let bounds = Bounds::new(rows, cols);
        Ok(Self {
            bounds,
            open: vec![true; bounds.len()],
        })
    }

    /// Create a grid from rows of cells, `true` meaning traversable.
    ///
    /// Every row must have the same, non-zero length.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(GridError::NonPositiveSize {
                rows: height as i32,
                cols: width as i32,
            });
        }
        let mut open = Vec::with_capacity(height * width);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::InconsistentRows {
                    row: i,
                    expected: width,
                    found: row.len(),
                });
            }
            open.extend_from_slice(row);
        }
        Ok(Self {
            bounds: Bounds::new(height as i32, width as i32),
            open,
        })
    }

    /// Parse an ASCII layout, one line per row.
    ///
    /// `.` is open and `#` is a wall. `S` and `G` are accepted as open cells
    /// so start and goal can be marked in the layout. Leading and trailing
    /// whitespace is trimmed from the whole string but not from lines.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let mut rows = Vec::new();
        for (r, line) in s.trim().lines().enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (c, ch) in line.chars().enumerate() {
                let open = match ch {
                    OPEN | 'S' | 'G' => true,
                    WALL => false,
                    _ => return Err(GridError::InvalidChar { ch, row: r, col: c }),
                };
                row.push(open);
            }
            rows.push(row);
        }
        Self::from_rows(&rows)
    }

    /// The bounds of this grid.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn in_bounds(&self, p: Position) -> bool {
        self.bounds.contains(p)
    }

    /// Whether `p` is inside the grid and can be walked on.
    #[inline]
    pub fn is_traversable(&self, p: Position) -> bool {
        self.bounds.index(p).is_some_and(|i| self.open[i])
    }

    /// Mark `p` open or blocked. No-op if `p` is outside the grid.
    pub fn set_traversable(&mut self, p: Position, open: bool) {
        if let Some(i) = self.bounds.index(p) {
            self.open[i] = open;
        }
    }

    /// In-bounds cardinal neighbours of `p`, in the order up, down, left,
    /// right. Traversability is not checked.
    pub fn neighbors(&self, p: Position) -> impl Iterator<Item = Position> + '_ {
        p.neighbors_4()
            .into_iter()
            .filter(move |&n| self.bounds.contains(n))
    }

    /// Number of traversable cells.
    pub fn traversable_count(&self) -> usize {
        self.open.iter().filter(|&&o| o).count()
    }

    /// Row-major iterator over `(Position, traversable)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Position, bool)> + '_ {
        self.bounds.iter().zip(self.open.iter().copied())
    }

    /// Render the grid back to its ASCII layout.
    pub fn to_layout(&self) -> Vec<String> {
        self.open
            .chunks(self.bounds.cols.max(1) as usize)
            .map(|row| row.iter().map(|&o| if o { OPEN } else { WALL }).collect())
            .collect()
    }
}

/// Serialized form of a [`GridEnv`]: its ASCII layout.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    layout: Vec<String>,
}

#[cfg(feature = "serde")]
impl From<GridEnv> for GridRepr {
    fn from(g: GridEnv) -> Self {
        Self {
            layout: g.to_layout(),
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for GridEnv {
    type Error = GridError;

    fn try_from(r: GridRepr) -> Result<Self, GridError> {
        GridEnv::parse(&r.layout.join("\n"))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = GridEnv::parse("..#\n#..").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, r##"{"layout":["..#","#.."]}"##);
        let back: GridEnv = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn grid_rejects_ragged_layout() {
        let res: Result<GridEnv, _> = serde_json::from_str(r#"{"layout":["...",".."]}"#);
        assert!(res.is_err());
    }
}

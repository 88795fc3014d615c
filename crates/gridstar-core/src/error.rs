//! Errors raised while constructing a [`GridEnv`](crate::GridEnv).

use std::fmt;

/// The grid description is not a valid rectangle of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Row or column count is zero or negative.
    NonPositiveSize { rows: i32, cols: i32 },
    /// A row does not have the same length as the first one.
    InconsistentRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A layout character that is neither open nor wall.
    InvalidChar { ch: char, row: usize, col: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveSize { rows, cols } => {
                write!(f, "grid: non-positive size {rows}x{cols}")
            }
            Self::InconsistentRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} columns, expected {expected}"
            ),
            Self::InvalidChar { ch, row, col } => {
                write!(
                    f,
                    "grid: invalid cell \u{201c}{ch}\u{201d} at ({row}, {col})"
                )
            }
        }
    }
}

impl std::error::Error for GridError {}

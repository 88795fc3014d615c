use std::fmt;

use gridstar_core::Position;

/// Which end of a search failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Invalid search request. Raised before any frontier work happens.
///
/// An unreachable goal is not an error; see
/// [`SearchOutcome::Exhausted`](crate::SearchOutcome::Exhausted).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// An endpoint lies outside the grid.
    OutOfBounds { endpoint: Endpoint, pos: Position },
    /// An endpoint is inside the grid but cannot be walked on.
    UntraversableEndpoint { endpoint: Endpoint, pos: Position },
}

impl SearchError {
    /// The endpoint that failed validation.
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::OutOfBounds { endpoint, .. } | Self::UntraversableEndpoint { endpoint, .. } => {
                *endpoint
            }
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { endpoint, pos } => {
                write!(f, "search: {endpoint} {pos} is out of bounds")
            }
            Self::UntraversableEndpoint { endpoint, pos } => {
                write!(f, "search: {endpoint} {pos} is not traversable")
            }
        }
    }
}

impl std::error::Error for SearchError {}

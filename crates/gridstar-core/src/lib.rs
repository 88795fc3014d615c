//! **gridstar-core**: geometry and grid environment types.
//!
//! This crate provides the foundational types shared across the *gridstar*
//! workspace: integer grid positions, rectangular bounds, and a static
//! traversability grid that path searches run over.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::{Bounds, BoundsIter, Position};
pub use grid::GridEnv;

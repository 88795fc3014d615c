//! Collaborators around the gridstar search core.
//!
//! Demonstrates: grid population with random walls, random goal selection,
//! and terminal rendering of the grid and the path found between start and
//! goal.

pub mod config;
pub mod mapgen;
pub mod render;

pub use config::{ConfigError, DemoConfig};
pub use mapgen::{random_goal, scatter_walls};
pub use render::{Glyph, fits_terminal, glyphs, render};

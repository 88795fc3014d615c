//! A* shortest-path search on uniform-cost, 4-directional grids.
//!
//! The search is split into small pieces that can be used on their own:
//!
//! - [`Environment`]: bounds and traversability oracle (implemented for
//!   [`GridEnv`](gridstar_core::GridEnv))
//! - [`Heuristic`]: remaining-cost estimate, [`Manhattan`] by default
//! - [`Frontier`]: open set ordered by `f = g + h`
//! - [`VisitedSet`]: closed set of finalized positions
//! - [`Pathfinder`]: the search driver ([`Pathfinder::astar_path`])
//! - [`reconstruct`]: turns predecessor links into a [`Path`]
//!
//! [`Pathfinder`] keeps its frontier and visited buffers between calls, so
//! repeated queries on grids of the same size do not reallocate.
//!
//! ```
//! use gridstar_core::{GridEnv, Position};
//! use gridstar_paths::find_path;
//!
//! let grid = GridEnv::open(3, 3).unwrap();
//! let path = find_path(&grid, Position::new(0, 0), Position::new(2, 2))
//!     .unwrap()
//!     .expect("open grid is connected");
//! assert_eq!(path.steps(), 4);
//! ```

mod astar;
mod distance;
mod error;
mod frontier;
mod path;
mod pathfinder;
mod traits;
mod visited;

pub use astar::{SearchOutcome, find_path};
pub use distance::{Manhattan, Zero, manhattan};
pub use error::{Endpoint, SearchError};
pub use frontier::{Frontier, FrontierEntry, Push};
pub use path::{Path, reconstruct};
pub use pathfinder::{Pathfinder, SearchConfig, SearchStats};
pub use traits::{Environment, Heuristic};

//! Grid pathfinding for moving an agent across a tile map.
//!
//! The centre of the crate is [`PathFinder`], an A\* search over a
//! 4-connected grid with unit step cost and a Manhattan heuristic:
//!
//! - **A\*** shortest path ([`PathFinder::find_path`], [`PathFinder::astar_path`])
//! - **Route following** for a moving agent ([`Agent`])
//!
//! Which cells may be entered is decided by an [`Obstacles`] oracle supplied
//! by the caller, typically an [`ObstacleSet`]. `PathFinder` owns and reuses
//! its internal caches, so repeated queries on one grid allocate little.
//!
//! ```
//! use tilepath::{Cell, GridBounds, ObstacleSet, PathFinder};
//!
//! let walls: ObstacleSet = [Cell::new(1, 0), Cell::new(1, 1)].into_iter().collect();
//! let mut finder = PathFinder::new(GridBounds::square(3));
//! let path = finder.find_path(Cell::new(0, 0), Cell::new(2, 0), &walls);
//! assert_eq!(path.steps(), 6);
//! ```

mod agent;
mod astar;
mod distance;
mod error;
mod neighbors;
mod path;
mod pathfinder;
mod traits;

pub use agent::Agent;
pub use astar::find_path;
pub use distance::manhattan;
pub use error::PathError;
pub use neighbors::GridPather;
pub use path::Path;
pub use pathfinder::PathFinder;
pub use traits::Pather;

pub use tilepath_core::{Cell, GridBounds, NoObstacles, ObstacleSet, Obstacles};

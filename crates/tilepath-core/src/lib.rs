//! **tilepath-core** — grid geometry and obstacle data for tile pathfinding.
//!
//! This crate provides the foundational types shared by the *tilepath*
//! workspace: the [`Cell`] coordinate, the [`GridBounds`] of a map, and the
//! [`Obstacles`] oracle (usually an [`ObstacleSet`]) that tells the search
//! which cells are impassable.

pub mod geom;
pub mod obstacles;

pub use geom::{BoundsError, Cell, CellIter, GridBounds, ParseCellError};
pub use obstacles::{MapError, NoObstacles, ObstacleSet, Obstacles};

use std::fmt;

use tilepath_core::{Cell, GridBounds};

/// Errors reported by [`PathFinder::try_find_path`](crate::PathFinder::try_find_path).
///
/// An unreachable goal is not an error; it yields an empty path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The start or goal lies outside the grid.
    OutOfBounds { cell: Cell, bounds: GridBounds },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { cell, bounds } => {
                write!(f, "cell {cell} is outside the {bounds} grid")
            }
        }
    }
}

impl std::error::Error for PathError {}

use tilepath_core::Cell;

use crate::distance::manhattan;

/// Search interface: neighbor enumeration plus a heuristic.
///
/// Every step between neighbors costs 1.
pub trait Pather {
    /// Append passable neighbors of `c` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>);

    /// Estimate of the number of steps from `from` to `to`.
    /// Must never overestimate (admissible). Defaults to Manhattan distance.
    fn estimate(&self, from: Cell, to: Cell) -> i32 {
        manhattan(from, to)
    }
}

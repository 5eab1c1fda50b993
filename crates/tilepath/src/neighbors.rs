use tilepath_core::{Cell, GridBounds, Obstacles};

use crate::traits::Pather;

/// [`Pather`] for a bounded grid with blocked cells.
///
/// Neighbors are the four axis-aligned cells (right, left, down, up) that
/// lie inside the bounds and are not blocked.
pub struct GridPather<'a, O: ?Sized> {
    bounds: GridBounds,
    obstacles: &'a O,
}

impl<'a, O: Obstacles + ?Sized> GridPather<'a, O> {
    pub fn new(bounds: GridBounds, obstacles: &'a O) -> Self {
        Self { bounds, obstacles }
    }

    /// Whether `c` is inside the grid and not blocked.
    #[inline]
    pub fn passable(&self, c: Cell) -> bool {
        self.bounds.contains(c) && !self.obstacles.is_blocked(c)
    }
}

impl<O: Obstacles + ?Sized> Pather for GridPather<'_, O> {
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        for n in c.neighbors_4() {
            if self.passable(n) {
                buf.push(n);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilepath_core::{NoObstacles, ObstacleSet};

    #[test]
    fn corner_has_two_neighbors() {
        let p = GridPather::new(GridBounds::square(3), &NoObstacles);
        let mut buf = Vec::new();
        p.neighbors(Cell::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Cell::new(1, 0), Cell::new(0, 1)]);
    }

    #[test]
    fn blocked_cells_are_skipped() {
        let set: ObstacleSet = [Cell::new(2, 1), Cell::new(1, 0)].into_iter().collect();
        let p = GridPather::new(GridBounds::square(3), &set);
        let mut buf = Vec::new();
        p.neighbors(Cell::new(1, 1), &mut buf);
        assert_eq!(buf, vec![Cell::new(0, 1), Cell::new(1, 2)]);
    }

    #[test]
    fn closure_oracle() {
        let wall = |c: Cell| c.y == 1;
        let p = GridPather::new(GridBounds::square(3), &wall);
        assert!(!p.passable(Cell::new(0, 1)));
        assert!(p.passable(Cell::new(0, 2)));
        assert!(!p.passable(Cell::new(0, 3)));
    }
}

use tilepath_core::{Cell, GridBounds, Obstacles};

use crate::error::PathError;
use crate::neighbors::GridPather;
use crate::path::Path;
use crate::pathfinder::{NO_PARENT, Node, NodeRef, PathFinder};
use crate::traits::Pather;

impl PathFinder {
    /// Compute the shortest 4-connected path from `start` to `goal`, avoiding
    /// cells for which `obstacles` reports blocked.
    ///
    /// Returns an empty path when the goal is unreachable, and also when
    /// either endpoint lies outside the grid. `start == goal` inside the grid
    /// yields the single-cell path `[start]`. The start cell itself is never
    /// checked against `obstacles`.
    pub fn find_path<O: Obstacles + ?Sized>(
        &mut self,
        start: Cell,
        goal: Cell,
        obstacles: &O,
    ) -> Path {
        if !self.bounds.contains(start) || !self.bounds.contains(goal) {
            log::debug!(
                "find_path {start} -> {goal}: endpoint outside {} grid",
                self.bounds
            );
            return Path::default();
        }
        let pather = GridPather::new(self.bounds, obstacles);
        self.astar_path(&pather, start, goal)
    }

    /// Like [`find_path`](Self::find_path), but rejects out-of-grid
    /// endpoints instead of reporting them as unreachable.
    pub fn try_find_path<O: Obstacles + ?Sized>(
        &mut self,
        start: Cell,
        goal: Cell,
        obstacles: &O,
    ) -> Result<Path, PathError> {
        for cell in [start, goal] {
            if !self.bounds.contains(cell) {
                return Err(PathError::OutOfBounds {
                    cell,
                    bounds: self.bounds,
                });
            }
        }
        Ok(self.find_path(start, goal, obstacles))
    }

    /// Run A* with an arbitrary [`Pather`].
    ///
    /// Among open nodes with equal `f`, the one discovered first is expanded
    /// first, so results are deterministic. Neighbors outside the grid are
    /// ignored. Returns an empty path if no route exists.
    pub fn astar_path<P: Pather>(&mut self, pather: &P, start: Cell, goal: Cell) -> Path {
        let (Some(start_idx), Some(_)) = (self.bounds.index(start), self.bounds.index(goal))
        else {
            return Path::default();
        };

        self.reset_search();
        self.open_node(
            start_idx,
            Node::new(start, 0, pather.estimate(start, goal), NO_PARENT),
        );

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut expanded = 0usize;

        let found = 'search: loop {
            let Some(current) = self.open.pop() else {
                break 'search None;
            };
            let ci = current.id;

            // Skip entries superseded by a cheaper update, or already closed.
            let node = &self.nodes[ci];
            if node.closed || node.f != current.f {
                continue;
            }
            if node.cell == goal {
                break 'search Some(ci);
            }

            let (cp, cg) = (node.cell, node.g);
            self.nodes[ci].closed = true;
            expanded += 1;
            log::trace!("astar: expand {cp} g={cg} f={}", current.f);

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.bounds.index(np) else {
                    continue;
                };
                let tentative_g = cg + 1;
                match self.lookup(ni) {
                    Some(id) => {
                        let n = &mut self.nodes[id];
                        if n.closed || tentative_g >= n.g {
                            continue;
                        }
                        n.relax(tentative_g, ci);
                        let f = n.f;
                        self.open.push(NodeRef { id, f });
                    }
                    None => {
                        let h = pather.estimate(np, goal);
                        self.open_node(ni, Node::new(np, tentative_g, h, ci));
                    }
                }
            }
        };

        self.nbuf = nbuf;

        let Some(goal_id) = found else {
            log::debug!("astar {start} -> {goal}: no path, expanded {expanded}");
            return Path::default();
        };

        let mut cells = Vec::with_capacity(self.nodes[goal_id].g as usize + 1);
        let mut ci = goal_id;
        while ci != NO_PARENT {
            cells.push(self.nodes[ci].cell);
            ci = self.nodes[ci].parent;
        }
        cells.reverse();
        log::debug!(
            "astar {start} -> {goal}: {} steps, expanded {expanded}",
            cells.len() - 1
        );
        Path::new(cells)
    }
}

/// One-shot search: shortest path from `start` to `goal` on a grid of
/// `bounds`, where `is_blocked` marks impassable cells.
///
/// Equivalent to `PathFinder::new(bounds).find_path(start, goal, &is_blocked)`.
pub fn find_path<O: Obstacles>(start: Cell, goal: Cell, bounds: GridBounds, is_blocked: O) -> Path {
    PathFinder::new(bounds).find_path(start, goal, &is_blocked)
}

//! Route bookkeeping for an agent that walks along found paths.

use std::collections::VecDeque;

use tilepath_core::{Cell, Obstacles};

use crate::{Path, PathFinder};

/// An agent on the grid with a queue of cells still to walk through.
///
/// The agent's logical [`cell`](Self::cell) moves to the destination as soon
/// as a route is accepted; the waypoints are kept for whoever animates the
/// walk and are drained with [`next_waypoint`](Self::next_waypoint).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agent {
    cell: Cell,
    route: VecDeque<Cell>,
}

impl Agent {
    /// Create an idle agent standing on `cell`.
    pub fn new(cell: Cell) -> Self {
        Self {
            cell,
            route: VecDeque::new(),
        }
    }

    /// The cell the agent occupies (or is committed to reaching).
    #[inline]
    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// Teleport to `cell`, dropping any pending route.
    pub fn place(&mut self, cell: Cell) {
        self.cell = cell;
        self.route.clear();
    }

    /// Plan a route from the current cell to `goal`.
    ///
    /// If no path exists nothing changes and `false` is returned. Otherwise
    /// the pending route is replaced by the new one and the agent's cell
    /// becomes `goal`.
    pub fn travel_to<O: Obstacles + ?Sized>(
        &mut self,
        finder: &mut PathFinder,
        goal: Cell,
        obstacles: &O,
    ) -> bool {
        let path = finder.find_path(self.cell, goal, obstacles);
        if path.is_empty() {
            log::debug!("agent at {}: {goal} is unreachable", self.cell);
            return false;
        }
        self.follow(path)
    }

    /// Adopt an already computed route.
    ///
    /// The path must start on the agent's cell; an empty path or one that
    /// starts elsewhere is ignored and `false` is returned.
    pub fn follow(&mut self, path: Path) -> bool {
        let (Some(start), Some(goal)) = (path.start(), path.goal()) else {
            return false;
        };
        if start != self.cell {
            log::debug!("agent at {}: route starts at {start}", self.cell);
            return false;
        }
        self.route.clear();
        self.route.extend(path.into_iter().skip(1));
        self.cell = goal;
        true
    }

    /// Pop the next cell to step onto, if any.
    pub fn next_waypoint(&mut self) -> Option<Cell> {
        self.route.pop_front()
    }

    /// Whether waypoints remain.
    #[inline]
    pub fn is_moving(&self) -> bool {
        !self.route.is_empty()
    }

    /// The waypoints not yet consumed, in walking order.
    pub fn pending(&self) -> impl Iterator<Item = Cell> + '_ {
        self.route.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilepath_core::{GridBounds, NoObstacles, ObstacleSet};

    #[test]
    fn travel_queues_waypoints_and_commits_cell() {
        let mut pf = PathFinder::new(GridBounds::square(10));
        let mut agent = Agent::new(Cell::new(0, 0));
        assert!(agent.travel_to(&mut pf, Cell::new(3, 0), &NoObstacles));
        assert_eq!(agent.cell(), Cell::new(3, 0));
        assert!(agent.is_moving());

        let walked: Vec<Cell> = std::iter::from_fn(|| agent.next_waypoint()).collect();
        assert_eq!(walked, vec![Cell::new(1, 0), Cell::new(2, 0), Cell::new(3, 0)]);
        assert!(!agent.is_moving());
    }

    #[test]
    fn unreachable_goal_changes_nothing() {
        let mut pf = PathFinder::new(GridBounds::square(5));
        let walls: ObstacleSet = [Cell::new(3, 4), Cell::new(4, 3)].into_iter().collect();
        let mut agent = Agent::new(Cell::new(0, 0));
        assert!(agent.travel_to(&mut pf, Cell::new(0, 2), &walls));
        let before = agent.clone();

        assert!(!agent.travel_to(&mut pf, Cell::new(4, 4), &walls));
        assert!(!agent.travel_to(&mut pf, Cell::new(7, 7), &walls));
        assert_eq!(agent, before);
    }

    #[test]
    fn new_route_replaces_pending_one() {
        let mut pf = PathFinder::new(GridBounds::square(10));
        let mut agent = Agent::new(Cell::new(0, 0));
        agent.travel_to(&mut pf, Cell::new(0, 5), &NoObstacles);
        agent.next_waypoint();

        // Planning starts from the committed cell, not the half-walked one.
        assert!(agent.travel_to(&mut pf, Cell::new(2, 5), &NoObstacles));
        let pending: Vec<Cell> = agent.pending().collect();
        assert_eq!(pending, vec![Cell::new(1, 5), Cell::new(2, 5)]);
    }

    #[test]
    fn travel_to_own_cell_is_accepted_without_waypoints() {
        let mut pf = PathFinder::new(GridBounds::square(10));
        let mut agent = Agent::new(Cell::new(4, 4));
        assert!(agent.travel_to(&mut pf, Cell::new(4, 4), &NoObstacles));
        assert!(!agent.is_moving());
    }

    #[test]
    fn follow_reuses_a_found_path() {
        let mut pf = PathFinder::new(GridBounds::square(10));
        let path = pf.find_path(Cell::new(0, 0), Cell::new(0, 2), &NoObstacles);
        let mut agent = Agent::new(Cell::new(0, 0));
        assert!(agent.follow(path));
        assert_eq!(agent.cell(), Cell::new(0, 2));
        let pending: Vec<Cell> = agent.pending().collect();
        assert_eq!(pending, vec![Cell::new(0, 1), Cell::new(0, 2)]);
    }

    #[test]
    fn follow_rejects_empty_or_foreign_paths() {
        let mut pf = PathFinder::new(GridBounds::square(10));
        let elsewhere = pf.find_path(Cell::new(5, 5), Cell::new(5, 7), &NoObstacles);
        let mut agent = Agent::new(Cell::new(0, 0));
        assert!(!agent.follow(Path::default()));
        assert!(!agent.follow(elsewhere));
        assert_eq!(agent, Agent::new(Cell::new(0, 0)));
    }

    #[test]
    fn place_drops_route() {
        let mut pf = PathFinder::new(GridBounds::square(10));
        let mut agent = Agent::new(Cell::new(0, 0));
        agent.travel_to(&mut pf, Cell::new(9, 9), &NoObstacles);
        agent.place(Cell::new(1, 1));
        assert_eq!(agent.cell(), Cell::new(1, 1));
        assert_eq!(agent.next_waypoint(), None);
    }
}

//! Shared scene setup and text rendering for the command-line demos.

use std::fmt;
use std::path::Path as FsPath;

use tilepath::{Agent, Path, PathError, PathFinder};
use tilepath_core::{Cell, GridBounds, MapError, ObstacleSet};

/// Side of the default square grid.
pub const DEFAULT_SIZE: i32 = 10;

const PATH_MARK: char = '*';
const START_MARK: char = 'S';
const GOAL_MARK: char = 'G';

/// The classic walled demo layout.
pub fn default_obstacles() -> ObstacleSet {
    [
        (2, 2),
        (2, 3),
        (2, 4),
        (2, 5),
        (4, 4),
        (5, 2),
        (5, 4),
        (6, 6),
        (7, 6),
        (8, 6),
        (9, 6),
    ]
    .into_iter()
    .map(Cell::from)
    .collect()
}

/// A grid and its blocked cells.
#[derive(Debug, Clone)]
pub struct Scene {
    pub bounds: GridBounds,
    pub obstacles: ObstacleSet,
}

impl Scene {
    /// A `size` x `size` grid with the default layout, clipped to the grid.
    pub fn with_size(size: i32) -> Result<Self, DemoError> {
        let bounds = GridBounds::try_new(size, size).map_err(|_| DemoError::Size(size))?;
        let obstacles = default_obstacles()
            .iter()
            .filter(|&c| bounds.contains(c))
            .collect();
        Ok(Self { bounds, obstacles })
    }

    /// Load a text map (`#` blocked, `.` open).
    pub fn from_file(path: &FsPath) -> Result<Self, DemoError> {
        let text = std::fs::read_to_string(path).map_err(|e| DemoError::Io(path.display().to_string(), e))?;
        let (bounds, obstacles) = ObstacleSet::parse_map(&text)?;
        log::info!("loaded {bounds} map with {} obstacles", obstacles.len());
        Ok(Self { bounds, obstacles })
    }

    /// Search once from `start` to `goal`, draw the result and hand the route
    /// to an agent standing on `start`.
    ///
    /// Endpoints outside the grid are rejected. An unreachable goal leaves
    /// the agent idle on `start`.
    pub fn walk(&self, start: Cell, goal: Cell) -> Result<Walk, PathError> {
        let route = PathFinder::new(self.bounds).try_find_path(start, goal, &self.obstacles)?;
        let map = self.render(start, goal, &route);
        let mut agent = Agent::new(start);
        let found = agent.follow(route);
        Ok(Walk { map, agent, found })
    }

    /// Draw the grid with `route` overlaid.
    pub fn render(&self, start: Cell, goal: Cell, route: &Path) -> String {
        let mut rows: Vec<Vec<char>> = self
            .obstacles
            .render_map(self.bounds)
            .lines()
            .map(|l| l.chars().collect())
            .collect();
        let mut mark = |c: Cell, ch: char| {
            if let Some(row) = rows.get_mut(c.y as usize) {
                if let Some(slot) = row.get_mut(c.x as usize) {
                    *slot = ch;
                }
            }
        };
        for c in route {
            mark(*c, PATH_MARK);
        }
        if self.bounds.contains(start) {
            mark(start, START_MARK);
        }
        if self.bounds.contains(goal) {
            mark(goal, GOAL_MARK);
        }
        let mut out = String::new();
        for row in rows {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}

/// Outcome of [`Scene::walk`].
#[derive(Debug, Clone)]
pub struct Walk {
    /// The grid with the route drawn on it.
    pub map: String,
    /// An agent holding the route's waypoints.
    pub agent: Agent,
    /// Whether a route was found.
    pub found: bool,
}

/// Errors setting up a demo scene.
#[derive(Debug)]
pub enum DemoError {
    /// The map file could not be read.
    Io(String, std::io::Error),
    /// The map file is malformed.
    Map(MapError),
    /// The requested grid size is negative.
    Size(i32),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(path, e) => write!(f, "cannot read {path}: {e}"),
            Self::Map(e) => write!(f, "{e}"),
            Self::Size(n) => write!(f, "grid size must not be negative, got {n}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(_, e) => Some(e),
            Self::Map(e) => Some(e),
            Self::Size(_) => None,
        }
    }
}

impl From<MapError> for DemoError {
    fn from(e: MapError) -> Self {
        Self::Map(e)
    }
}

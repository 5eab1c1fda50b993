//! Blocked tiles: the [`Obstacles`] oracle and the [`ObstacleSet`] that
//! callers usually back it with.

use std::collections::HashSet;
use std::fmt;

use crate::geom::{Cell, GridBounds};

/// Read-only query answering whether a cell can be entered.
///
/// Implemented by [`ObstacleSet`], [`NoObstacles`] and any
/// `Fn(Cell) -> bool` closure.
pub trait Obstacles {
    /// Whether `c` is impassable.
    fn is_blocked(&self, c: Cell) -> bool;
}

impl<F: Fn(Cell) -> bool> Obstacles for F {
    #[inline]
    fn is_blocked(&self, c: Cell) -> bool {
        self(c)
    }
}

/// Oracle for an open grid where every cell is passable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoObstacles;

impl Obstacles for NoObstacles {
    #[inline]
    fn is_blocked(&self, _c: Cell) -> bool {
        false
    }
}

/// Character used for blocked cells in text maps.
pub const BLOCKED: char = '#';
/// Character used for open cells in text maps.
pub const OPEN: char = '.';

/// A set of impassable cells with O(1) membership.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObstacleSet {
    cells: HashSet<Cell>,
}

impl ObstacleSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Block `c`. Returns `false` if it was already blocked.
    #[inline]
    pub fn insert(&mut self, c: Cell) -> bool {
        self.cells.insert(c)
    }

    /// Unblock `c`. Returns `false` if it was not blocked.
    #[inline]
    pub fn remove(&mut self, c: Cell) -> bool {
        self.cells.remove(&c)
    }

    /// Flip the state of `c` and return whether it is now blocked.
    pub fn toggle(&mut self, c: Cell) -> bool {
        if self.cells.remove(&c) {
            false
        } else {
            self.cells.insert(c);
            true
        }
    }

    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        self.cells.contains(&c)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Iterate over blocked cells in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Parse a text map where `#` is blocked and `.` is open.
    ///
    /// Row `y` of the text is grid row `y`. Blank lines before and after the
    /// map are ignored; trailing whitespace on a row is not.
    pub fn parse_map(text: &str) -> Result<(GridBounds, ObstacleSet), MapError> {
        let rows: Vec<&str> = text
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .skip_while(|l| l.trim().is_empty())
            .collect();
        let end = rows
            .iter()
            .rposition(|l| !l.trim().is_empty())
            .map_or(0, |i| i + 1);
        let rows = &rows[..end];

        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut set = ObstacleSet::new();
        for (y, row) in rows.iter().enumerate() {
            let len = row.chars().count();
            if len != width {
                return Err(MapError::InconsistentWidth {
                    row: y,
                    expected: width,
                    found: len,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let cell = Cell::new(x as i32, y as i32);
                match ch {
                    BLOCKED => {
                        set.insert(cell);
                    }
                    OPEN => {}
                    _ => return Err(MapError::InvalidChar { ch, cell }),
                }
            }
        }
        Ok((GridBounds::new(width as i32, rows.len() as i32), set))
    }

    /// Render the cells of `bounds` as a text map, one line per row.
    pub fn render_map(&self, bounds: GridBounds) -> String {
        let mut out = String::with_capacity(bounds.len() + bounds.height() as usize);
        for c in bounds {
            out.push(if self.contains(c) { BLOCKED } else { OPEN });
            if c.x == bounds.width() - 1 {
                out.push('\n');
            }
        }
        out
    }
}

impl Obstacles for ObstacleSet {
    #[inline]
    fn is_blocked(&self, c: Cell) -> bool {
        self.contains(c)
    }
}

impl FromIterator<Cell> for ObstacleSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<Cell> for ObstacleSet {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

/// Errors that can occur when parsing a text map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// A row's length differs from the first row's.
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character other than `#` or `.` was found.
    InvalidChar { ch: char, cell: Cell },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "map row {row} has width {found}, expected {expected}"
            ),
            Self::InvalidChar { ch, cell } => {
                write!(f, "map contains invalid character \u{201c}{ch}\u{201d} at {cell}")
            }
        }
    }
}

impl std::error::Error for MapError {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn obstacle_set_round_trip() {
        let set: ObstacleSet = [Cell::new(2, 2), Cell::new(2, 3)].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        let back: ObstacleSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}

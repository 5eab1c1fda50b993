//! Geometry primitives: [`Cell`] and [`GridBounds`].

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A discrete grid position. X grows right, Y grows down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new cell.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a cell shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether the cell lies inside `bounds`.
    #[inline]
    pub fn in_bounds(self, bounds: GridBounds) -> bool {
        bounds.contains(self)
    }

    /// The four axis-aligned neighbours, in search order: right, left, down, up.
    ///
    /// The order is part of the search contract: it decides which of several
    /// equally short paths is discovered first.
    #[inline]
    pub const fn neighbors_4(self) -> [Cell; 4] {
        [
            Self::new(self.x + 1, self.y),
            Self::new(self.x - 1, self.y),
            Self::new(self.x, self.y + 1),
            Self::new(self.x, self.y - 1),
        ]
    }

    /// Whether `other` is one unit away on exactly one axis.
    #[inline]
    pub fn is_adjacent_4(self, other: Cell) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Cell {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Cell {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Cell {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl FromStr for Cell {
    type Err = ParseCellError;

    /// Parse `"x,y"`, tolerating whitespace around either number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (xs, ys) = s
            .split_once(',')
            .ok_or_else(|| ParseCellError(s.to_string()))?;
        let x = xs
            .trim()
            .parse::<i32>()
            .map_err(|_| ParseCellError(s.to_string()))?;
        let y = ys
            .trim()
            .parse::<i32>()
            .map_err(|_| ParseCellError(s.to_string()))?;
        Ok(Self::new(x, y))
    }
}

/// Returned when a string is not of the form `"x,y"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCellError(pub String);

impl fmt::Display for ParseCellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid cell \u{201c}{}\u{201d}: expected x,y", self.0)
    }
}

impl std::error::Error for ParseCellError {}

// ---------------------------------------------------------------------------
// GridBounds
// ---------------------------------------------------------------------------

/// The valid coordinate range of a grid: `0 <= x < width`, `0 <= y < height`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridBounds {
    width: i32,
    height: i32,
}

impl GridBounds {
    /// Create bounds of the given size. Negative sizes become an empty grid.
    #[inline]
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
        }
    }

    /// Create bounds, rejecting negative sizes.
    pub fn try_new(width: i32, height: i32) -> Result<Self, BoundsError> {
        if width < 0 || height < 0 {
            return Err(BoundsError::Negative { width, height });
        }
        Ok(Self { width, height })
    }

    /// Square bounds with side `size`.
    #[inline]
    pub fn square(size: i32) -> Self {
        Self::new(size, size)
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        self.width as usize * self.height as usize
    }

    /// Whether the bounds contain no cell at all.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Whether `c` is inside the half-open bounds.
    #[inline]
    pub fn contains(self, c: Cell) -> bool {
        c.x >= 0 && c.x < self.width && c.y >= 0 && c.y < self.height
    }

    /// Row-major flat index of `c`, or `None` when out of bounds.
    #[inline]
    pub fn index(self, c: Cell) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.y as usize * self.width as usize + c.x as usize)
    }

    /// Inverse of [`index`](Self::index). The index is not range-checked.
    #[inline]
    pub fn cell(self, idx: usize) -> Cell {
        let w = self.width.max(1) as usize;
        Cell::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Row-major iterator over every cell.
    #[inline]
    pub fn iter(self) -> CellIter {
        CellIter {
            bounds: self,
            cur: Cell::ZERO,
        }
    }
}

impl IntoIterator for GridBounds {
    type Item = Cell;
    type IntoIter = CellIter;
    #[inline]
    fn into_iter(self) -> CellIter {
        self.iter()
    }
}

impl fmt::Display for GridBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Errors building a [`GridBounds`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundsError {
    /// One of the dimensions was below zero.
    Negative { width: i32, height: i32 },
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative { width, height } => {
                write!(f, "grid bounds must not be negative, got {width}x{height}")
            }
        }
    }
}

impl std::error::Error for BoundsError {}

// ---------------------------------------------------------------------------
// CellIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the cells of a [`GridBounds`].
#[derive(Clone, Debug)]
pub struct CellIter {
    bounds: GridBounds,
    cur: Cell,
}

impl Iterator for CellIter {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        if self.bounds.is_empty() || self.cur.y >= self.bounds.height {
            return None;
        }
        let c = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.bounds.width {
            self.cur.x = 0;
            self.cur.y += 1;
        }
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.bounds.is_empty() || self.cur.y >= self.bounds.height {
            return (0, Some(0));
        }
        let w = self.bounds.width as usize;
        let remaining_in_row = (self.bounds.width - self.cur.x) as usize;
        let remaining_rows = (self.bounds.height - self.cur.y - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for CellIter {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cell_json() {
        let c = Cell::new(3, 7);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"x":3,"y":7}"#);
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn bounds_json() {
        let b = GridBounds::new(12, 8);
        let json = serde_json::to_string(&b).unwrap();
        let back: GridBounds = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
    }
}

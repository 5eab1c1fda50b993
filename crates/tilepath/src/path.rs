use std::fmt;

use tilepath_core::Cell;

/// An ordered route from start to goal, both inclusive.
///
/// An empty path means the goal could not be reached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Path(Vec<Cell>);

impl Path {
    pub(crate) fn new(cells: Vec<Cell>) -> Self {
        Self(cells)
    }

    /// Whether no route was found.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether a route was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        !self.0.is_empty()
    }

    /// Number of cells, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Number of moves needed to walk the path.
    #[inline]
    pub fn steps(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    #[inline]
    pub fn start(&self) -> Option<Cell> {
        self.0.first().copied()
    }

    #[inline]
    pub fn goal(&self) -> Option<Cell> {
        self.0.last().copied()
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.0.iter().copied()
    }

    pub fn into_vec(self) -> Vec<Cell> {
        self.0
    }
}

impl IntoIterator for Path {
    type Item = Cell;
    type IntoIter = std::vec::IntoIter<Cell>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Path> for Vec<Cell> {
    fn from(p: Path) -> Self {
        p.0
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "no path");
        }
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path() {
        let p = Path::default();
        assert!(p.is_empty());
        assert!(!p.is_found());
        assert_eq!(p.steps(), 0);
        assert_eq!(p.start(), None);
        assert_eq!(p.to_string(), "no path");
    }

    #[test]
    fn accessors() {
        let p = Path::new(vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(1, 1)]);
        assert_eq!(p.len(), 3);
        assert_eq!(p.steps(), 2);
        assert_eq!(p.start(), Some(Cell::new(0, 0)));
        assert_eq!(p.goal(), Some(Cell::new(1, 1)));
        assert_eq!(p.to_string(), "(0, 0) -> (1, 0) -> (1, 1)");
        let v: Vec<Cell> = p.into();
        assert_eq!(v.len(), 3);
    }

    #[test]
    fn single_cell_has_no_steps() {
        let p = Path::new(vec![Cell::new(5, 5)]);
        assert!(p.is_found());
        assert_eq!(p.steps(), 0);
        assert_eq!(p.start(), p.goal());
    }
}

use std::collections::BinaryHeap;

use tilepath_core::{Cell, GridBounds};

/// Parent id of the root node.
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Search records
// ---------------------------------------------------------------------------

/// One search record in the node arena. Ids are creation order.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) cell: Cell,
    pub(crate) g: i32,
    pub(crate) h: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) closed: bool,
}

impl Node {
    pub(crate) fn new(cell: Cell, g: i32, h: i32, parent: usize) -> Self {
        Self {
            cell,
            g,
            h,
            f: g + h,
            parent,
            closed: false,
        }
    }

    /// Lower the cost from the start and re-parent. `f` follows `g`.
    pub(crate) fn relax(&mut self, g: i32, parent: usize) {
        self.g = g;
        self.f = g + self.h;
        self.parent = parent;
    }
}

/// Per-cell lookup from grid index to node id, valid for one generation.
#[derive(Clone, Copy, Default)]
pub(crate) struct Slot {
    pub(crate) generation: u32,
    pub(crate) node: usize,
}

/// Heap entry ordered so that `BinaryHeap` pops the smallest `f` first and,
/// among equal `f`, the node created earliest.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub(crate) struct NodeRef {
    pub(crate) id: usize,
    pub(crate) f: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other.f.cmp(&self.f).then(other.id.cmp(&self.id))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// A* path search over one grid.
///
/// `PathFinder` owns the node arena, the coordinate-keyed slot table and the
/// open heap so that repeated queries reuse their allocations. None of that
/// state carries meaning from one call to the next.
pub struct PathFinder {
    pub(crate) bounds: GridBounds,
    // A* state
    pub(crate) nodes: Vec<Node>,
    pub(crate) slots: Vec<Slot>,
    pub(crate) generation: u32,
    pub(crate) open: BinaryHeap<NodeRef>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Cell>,
}

impl PathFinder {
    /// Create a finder for the given grid.
    pub fn new(bounds: GridBounds) -> Self {
        let len = bounds.len();
        Self {
            bounds,
            nodes: Vec::new(),
            slots: vec![Slot::default(); len],
            generation: 0,
            open: BinaryHeap::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Switch to a different grid, growing the caches if needed.
    pub fn set_bounds(&mut self, bounds: GridBounds) {
        let len = bounds.len();
        self.bounds = bounds;
        if len <= self.slots.len() {
            // Stale slots are ignored once the generation moves on.
            self.next_generation();
            return;
        }
        self.slots.clear();
        self.slots.resize(len, Slot::default());
        self.generation = 0;
    }

    /// The grid being searched.
    #[inline]
    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// Start a fresh search: forget all nodes and invalidate every slot.
    pub(crate) fn reset_search(&mut self) {
        self.nodes.clear();
        self.open.clear();
        self.next_generation();
    }

    fn next_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            for s in self.slots.iter_mut() {
                s.generation = 0;
            }
            self.generation = 1;
        }
    }

    /// Node id registered for grid index `idx` in the current search.
    #[inline]
    pub(crate) fn lookup(&self, idx: usize) -> Option<usize> {
        let s = self.slots[idx];
        (s.generation == self.generation).then_some(s.node)
    }

    /// Create a node for `cell` (grid index `idx`) and put it on the open heap.
    pub(crate) fn open_node(&mut self, idx: usize, node: Node) {
        let id = self.nodes.len();
        self.open.push(NodeRef { id, f: node.f });
        self.nodes.push(node);
        self.slots[idx] = Slot {
            generation: self.generation,
            node: id,
        };
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PathFinder {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.bounds.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PathFinder {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bounds = GridBounds::deserialize(deserializer)?;
        Ok(PathFinder::new(bounds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heap_pops_lowest_f_then_earliest_id() {
        let mut heap = BinaryHeap::new();
        heap.push(NodeRef { id: 3, f: 5 });
        heap.push(NodeRef { id: 1, f: 7 });
        heap.push(NodeRef { id: 2, f: 5 });
        heap.push(NodeRef { id: 0, f: 9 });
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|r| r.id)).collect();
        assert_eq!(order, vec![2, 3, 1, 0]);
    }

    #[test]
    fn relax_keeps_f_equal_to_g_plus_h() {
        let mut n = Node::new(Cell::new(1, 1), 6, 4, NO_PARENT);
        assert_eq!(n.f, 10);
        n.relax(3, 7);
        assert_eq!((n.g, n.h, n.f, n.parent), (3, 4, 7, 7));
    }

    #[test]
    fn set_bounds_smaller_preserves_capacity() {
        let mut pf = PathFinder::new(GridBounds::square(20));
        let cap = pf.slots.len();
        let small = GridBounds::new(5, 4);
        pf.set_bounds(small);
        assert_eq!(pf.bounds(), small);
        assert_eq!(pf.slots.len(), cap);
        assert!(pf.generation > 0);
    }

    #[test]
    fn set_bounds_larger_reallocates() {
        let mut pf = PathFinder::new(GridBounds::square(5));
        pf.set_bounds(GridBounds::square(20));
        assert_eq!(pf.slots.len(), 400);
    }

    #[test]
    fn generation_wrap_clears_slots() {
        let mut pf = PathFinder::new(GridBounds::square(2));
        pf.generation = u32::MAX;
        pf.slots[0] = Slot {
            generation: 1,
            node: 0,
        };
        pf.reset_search();
        assert_eq!(pf.generation, 1);
        assert_eq!(pf.lookup(0), None);
    }
}

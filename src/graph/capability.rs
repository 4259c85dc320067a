//! The narrow graph interface consumed by triplet listing.
//!
//! Any backing storage (adjacency lists, CSR, a third-party graph type) can
//! take part in triplet listing by reporting its node count and, per node,
//! the ids of its neighbors.

/// Read-only undirected graph with dense node ids.
///
/// Node ids are `0..node_count()` and follow creation order. Neighbors may be
/// reported in any order and may repeat; an edge counts as present when
/// either endpoint reports it.
pub trait NeighborGraph {
    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// Neighbors of `node`.
    ///
    /// Callers only pass ids below [`node_count`](Self::node_count).
    fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_;

    /// All node ids in creation order.
    fn nodes(&self) -> core::ops::Range<usize> {
        0..self.node_count()
    }
}

impl<G: NeighborGraph + ?Sized> NeighborGraph for &G {
    fn node_count(&self) -> usize {
        (**self).node_count()
    }

    fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        (**self).neighbors(node)
    }
}

/// Plain adjacency lists are the simplest backing.
impl NeighborGraph for [Vec<usize>] {
    fn node_count(&self) -> usize {
        self.len()
    }

    fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self[node].iter().copied()
    }
}

impl NeighborGraph for Vec<Vec<usize>> {
    fn node_count(&self) -> usize {
        self.len()
    }

    fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self[node].iter().copied()
    }
}

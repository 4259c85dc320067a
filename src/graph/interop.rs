//! [`NeighborGraph`] for undirected `petgraph` graphs.
//!
//! `petgraph::Graph` hands out dense node indices in insertion order, which
//! is exactly the id scheme triplet listing reports in. `StableGraph` is not
//! covered: removals leave holes in its index space.

use petgraph::graph::{Graph, IndexType};
use petgraph::Undirected;

use crate::graph::NeighborGraph;

impl<N, E, Ix: IndexType> NeighborGraph for Graph<N, E, Undirected, Ix> {
    fn node_count(&self) -> usize {
        Graph::node_count(self)
    }

    fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        Graph::neighbors(self, petgraph::graph::NodeIndex::new(node)).map(|n| n.index())
    }
}

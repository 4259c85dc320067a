//! A growable undirected adjacency-list graph of pairwise relations.
//!
//! Nodes are created one at a time and receive dense ids in creation order;
//! edges are recorded on both endpoints exactly as inserted. Like a list
//! graph, this type does not police multiplicity or loops: duplicate edges
//! and self-loops are stored and reported, leaving policy to the consumer
//! (see [`ForwardAdjacency`](crate::graph::triplet::ForwardAdjacency)).

use crate::graph::NeighborGraph;

/// An undirected multigraph with creation-ordered node ids.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_node` | \(O(1)\) amortized | Appends an empty adjacency list |
/// | `add_edge` | \(O(1)\) amortized | Pushes on both endpoint lists |
/// | `neighbors` | \(O(1)\) | Iterator over the stored list |
/// | `degree` | \(O(1)\) | Returns `Vec::len` |
/// | `has_edge` | \(O(\text{degree})\) | Linear scan of the shorter list |
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationGraph {
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

impl RelationGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with `node_count` isolated nodes `0..node_count`.
    pub fn with_nodes(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
            edge_count: 0,
        }
    }

    /// Builds a graph with `node_count` nodes and the given undirected edges.
    ///
    /// # Panics
    /// Panics if an edge endpoint is out of bounds.
    pub fn from_edges(node_count: usize, edges: &[(usize, usize)]) -> Self {
        let mut graph = Self::with_nodes(node_count);
        for &(u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Adds a node and returns its id.
    pub fn add_node(&mut self) -> usize {
        let id = self.adjacency.len();
        self.adjacency.push(Vec::new());
        id
    }

    /// Records the undirected edge `{u, v}`.
    ///
    /// A self-loop is stored once on its node.
    ///
    /// # Panics
    /// Panics if `u` or `v` is out of bounds.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        let n = self.node_count();
        assert!(u < n, "node {u} out of bounds for n={n}");
        assert!(v < n, "node {v} out of bounds for n={n}");
        self.adjacency[u].push(v);
        if u != v {
            self.adjacency[v].push(u);
        }
        self.edge_count += 1;
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges as inserted, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of stored incidences of `node`.
    ///
    /// # Panics
    /// Panics if `node` is out of bounds.
    pub fn degree(&self, node: usize) -> usize {
        assert!(node < self.node_count(), "node {node} out of bounds");
        self.adjacency[node].len()
    }

    /// Neighbors of `node` in insertion order.
    ///
    /// # Panics
    /// Panics if `node` is out of bounds.
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        assert!(node < self.node_count(), "node {node} out of bounds");
        self.adjacency[node].iter().copied()
    }

    /// Checks whether `{u, v}` was recorded.
    ///
    /// # Panics
    /// Panics if `u` or `v` is out of bounds.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        assert!(u < self.node_count(), "node {u} out of bounds");
        assert!(v < self.node_count(), "node {v} out of bounds");
        let (from, to) = if self.degree(u) <= self.degree(v) {
            (u, v)
        } else {
            (v, u)
        };
        self.adjacency[from].contains(&to)
    }
}

impl NeighborGraph for RelationGraph {
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency[node].iter().copied()
    }
}

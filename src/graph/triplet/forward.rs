//! Forward/backward adjacency index.
//!
//! Splits every node's neighborhood into *forward* neighbors (larger ids) and
//! *backward* neighbors (smaller ids), each stored as a sorted, deduplicated
//! CSR row. Every undirected edge `{u, v}` with `u < v` is stored exactly once
//! in the forward rows (row `u`) and once in the backward rows (row `v`), so
//! membership is a binary search in the forward row of the smaller endpoint.

use crate::error::InvalidGraph;
use crate::graph::NeighborGraph;

/// Sorted forward and backward neighbor rows of a simple undirected graph.
///
/// Built once from a [`NeighborGraph`], read-only afterwards. Parallel edges
/// are merged, and an edge is present when either endpoint reports it.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `build` | \(O(n + m \log d_{max})\) | Bucket, then sort and dedup each row |
/// | `forward` / `backward` | \(O(1)\) | Slice of a CSR row |
/// | `contains_edge` | \(O(\log d)\) | Binary search in one forward row |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardAdjacency {
    forward_offsets: Vec<usize>,
    forward_targets: Vec<usize>,
    backward_offsets: Vec<usize>,
    backward_targets: Vec<usize>,
}

impl ForwardAdjacency {
    /// Builds the index, validating the graph on the way.
    ///
    /// # Errors
    /// - [`InvalidGraph::SelfLoop`] if a node lists itself.
    /// - [`InvalidGraph::NeighborOutOfRange`] if a node lists an id
    ///   `>= graph.node_count()`.
    pub fn build<G: NeighborGraph + ?Sized>(graph: &G) -> Result<Self, InvalidGraph> {
        let n = graph.node_count();

        // Every reported incidence lands in the row of its smaller endpoint.
        let mut rows: Vec<Vec<usize>> = vec![Vec::new(); n];
        for u in graph.nodes() {
            for v in graph.neighbors(u) {
                if v >= n {
                    return Err(reject(InvalidGraph::NeighborOutOfRange {
                        node: u,
                        neighbor: v,
                        node_count: n,
                    }));
                }
                match u.cmp(&v) {
                    core::cmp::Ordering::Less => rows[u].push(v),
                    core::cmp::Ordering::Greater => rows[v].push(u),
                    core::cmp::Ordering::Equal => {
                        return Err(reject(InvalidGraph::SelfLoop { node: u }))
                    }
                }
            }
        }

        let mut forward_offsets = Vec::with_capacity(n + 1);
        forward_offsets.push(0);
        let mut forward_targets = Vec::new();
        let mut backward_degree = vec![0usize; n];
        for row in &mut rows {
            row.sort_unstable();
            row.dedup();
            for &v in row.iter() {
                backward_degree[v] += 1;
            }
            forward_targets.extend_from_slice(row.as_slice());
            forward_offsets.push(forward_targets.len());
        }
        drop(rows);

        let mut backward_offsets = Vec::with_capacity(n + 1);
        backward_offsets.push(0);
        let mut total = 0usize;
        for d in &backward_degree {
            total += d;
            backward_offsets.push(total);
        }

        // Walking `u` ascending fills each backward row in ascending order.
        let mut cursor = backward_offsets[..n].to_vec();
        let mut backward_targets = vec![0usize; total];
        for u in 0..n {
            for &v in &forward_targets[forward_offsets[u]..forward_offsets[u + 1]] {
                backward_targets[cursor[v]] = u;
                cursor[v] += 1;
            }
        }

        let index = Self {
            forward_offsets,
            forward_targets,
            backward_offsets,
            backward_targets,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            nodes = index.node_count(),
            edges = index.edge_count(),
            "built forward adjacency"
        );

        Ok(index)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.forward_offsets.len().saturating_sub(1)
    }

    /// Number of distinct undirected edges.
    pub fn edge_count(&self) -> usize {
        self.forward_targets.len()
    }

    /// Neighbors of `node` with larger ids, ascending.
    ///
    /// # Panics
    /// Panics if `node` is out of bounds.
    pub fn forward(&self, node: usize) -> &[usize] {
        assert!(node < self.node_count(), "node {node} out of bounds");
        &self.forward_targets[self.forward_offsets[node]..self.forward_offsets[node + 1]]
    }

    /// Neighbors of `node` with smaller ids, ascending.
    ///
    /// # Panics
    /// Panics if `node` is out of bounds.
    pub fn backward(&self, node: usize) -> &[usize] {
        assert!(node < self.node_count(), "node {node} out of bounds");
        &self.backward_targets[self.backward_offsets[node]..self.backward_offsets[node + 1]]
    }

    /// Number of forward neighbors of `node`.
    pub fn forward_degree(&self, node: usize) -> usize {
        self.forward(node).len()
    }

    /// Number of distinct neighbors of `node`.
    pub fn degree(&self, node: usize) -> usize {
        self.forward(node).len() + self.backward(node).len()
    }

    /// Whether the undirected edge `{u, v}` exists.
    ///
    /// `false` for `u == v` and for ids outside the graph.
    pub fn contains_edge(&self, u: usize, v: usize) -> bool {
        let (lo, hi) = if u < v { (u, v) } else { (v, u) };
        if lo == hi || hi >= self.node_count() {
            return false;
        }
        self.forward(lo).binary_search(&hi).is_ok()
    }
}

#[inline]
fn reject(err: InvalidGraph) -> InvalidGraph {
    #[cfg(feature = "tracing")]
    tracing::warn!(node = err.node(), error = %err, "rejected relation graph");
    err
}

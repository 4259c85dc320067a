//! A compact CSR (compressed sparse row) adjacency.
//!
//! CSR is the standard sparse matrix format for graphs, storing each node's
//! neighbor list contiguously in row-major order.
//!
//! Memory layout:
//! - `offsets`: `Vec<usize>` of length `n + 1` (row offsets)
//! - `targets`: contiguous `usize` neighbor ids for each row

use crate::graph::NeighborGraph;

/// An immutable CSR adjacency.
///
/// Rows are stored exactly as supplied; an undirected relation graph stores
/// each edge in both endpoint rows (see [`CsrGraph::from_edges`]).
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `from_adjacency` | \(O(n + m)\) | Builds CSR from adjacency lists |
/// | `from_edges` | \(O(n + m)\) | Counting pass then fill pass |
/// | `neighbors` | \(O(1)\) | Returns iterator over the row |
/// | `degree` | \(O(1)\) | Row length |
/// | `has_edge` | \(O(\text{degree})\) | Linear scan of the row |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrGraph {
    offsets: Vec<usize>,
    targets: Vec<usize>,
}

impl CsrGraph {
    /// Builds a CSR graph from adjacency lists.
    ///
    /// # Panics
    ///
    /// Panics if any entry references a node index out of bounds.
    pub fn from_adjacency(adjacency: &[Vec<usize>]) -> Self {
        let n = adjacency.len();

        let mut offsets = Vec::with_capacity(n + 1);
        offsets.push(0);

        let mut total = 0usize;
        for nbrs in adjacency {
            total = total.saturating_add(nbrs.len());
            offsets.push(total);
        }

        let mut targets = Vec::with_capacity(total);
        for (u, nbrs) in adjacency.iter().enumerate() {
            for &v in nbrs {
                assert!(v < n, "edge {u}->{v} is out of bounds for n={n}");
                targets.push(v);
            }
        }

        Self { offsets, targets }
    }

    /// Builds a CSR graph directly from CSR parts.
    ///
    /// # Panics
    /// - if `offsets.is_empty()`
    /// - if offsets are not monotone or do not start at zero
    /// - if `offsets.last() != targets.len()`
    /// - if a target is out of bounds
    pub fn from_csr_parts(offsets: Vec<usize>, targets: Vec<usize>) -> Self {
        assert!(!offsets.is_empty(), "offsets must have length n+1");
        assert!(offsets[0] == 0, "offsets must start at 0");
        let n = offsets.len() - 1;
        for w in offsets.windows(2) {
            assert!(w[0] <= w[1], "offsets must be monotone");
        }
        assert!(
            offsets[n] == targets.len(),
            "offsets last must equal targets length"
        );
        for &v in &targets {
            assert!(v < n, "edge to {v} out of bounds for n={n}");
        }
        Self { offsets, targets }
    }

    /// Builds a symmetric CSR graph from undirected edges.
    ///
    /// Each edge `{u, v}` lands in row `u` and row `v` (once for a loop).
    /// Within a row, neighbors keep edge-list order.
    ///
    /// # Panics
    /// Panics if an endpoint is out of bounds.
    pub fn from_edges(node_count: usize, edges: &[(usize, usize)]) -> Self {
        let n = node_count;
        let mut degree = vec![0usize; n];
        for &(u, v) in edges {
            assert!(u < n && v < n, "edge {u}-{v} is out of bounds for n={n}");
            degree[u] += 1;
            if u != v {
                degree[v] += 1;
            }
        }

        let mut offsets = Vec::with_capacity(n + 1);
        offsets.push(0);
        let mut total = 0usize;
        for d in &degree {
            total += d;
            offsets.push(total);
        }

        // `cursor[u]` is the next free slot of row `u`.
        let mut cursor = offsets[..n].to_vec();
        let mut targets = vec![0usize; total];
        for &(u, v) in edges {
            targets[cursor[u]] = v;
            cursor[u] += 1;
            if u != v {
                targets[cursor[v]] = u;
                cursor[v] += 1;
            }
        }

        Self { offsets, targets }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        // `offsets` is length `n + 1` by construction.
        self.offsets.len().saturating_sub(1)
    }

    /// Number of stored row entries (twice the undirected edge count for
    /// symmetric input without loops).
    pub fn entry_count(&self) -> usize {
        self.targets.len()
    }

    /// Returns the row of `node`.
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.row(node).iter().copied()
    }

    /// Returns the row length of `node`.
    pub fn degree(&self, node: usize) -> usize {
        self.row(node).len()
    }

    /// Checks if `to` appears in the row of `from`.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        assert!(to < self.node_count(), "to vertex {to} out of bounds");
        self.row(from).contains(&to)
    }

    fn row(&self, node: usize) -> &[usize] {
        assert!(node < self.node_count(), "node {node} out of bounds");
        &self.targets[self.offsets[node]..self.offsets[node + 1]]
    }
}

impl NeighborGraph for CsrGraph {
    fn node_count(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.row(node).iter().copied()
    }
}

//! Error types for relation-graph validation and triplet construction.

use core::fmt;

/// The input graph violates the simple-graph assumption.
///
/// Raised once, while the forward adjacency is being built, before any
/// triplet is produced. Parallel edges are never an error; they are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidGraph {
    /// `node` reported itself as a neighbor.
    SelfLoop {
        /// The offending node.
        node: usize,
    },
    /// `node` reported a neighbor id that does not name a node of the graph.
    NeighborOutOfRange {
        /// The node whose neighbor list is malformed.
        node: usize,
        /// The reported neighbor id.
        neighbor: usize,
        /// Number of nodes in the graph.
        node_count: usize,
    },
}

impl InvalidGraph {
    /// The node whose neighborhood triggered the error.
    pub fn node(&self) -> usize {
        match *self {
            Self::SelfLoop { node } | Self::NeighborOutOfRange { node, .. } => node,
        }
    }
}

impl fmt::Display for InvalidGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::SelfLoop { node } => write!(f, "node {node} has a self-loop"),
            Self::NeighborOutOfRange {
                node,
                neighbor,
                node_count,
            } => write!(
                f,
                "node {node} lists neighbor {neighbor}, out of range for {node_count} nodes"
            ),
        }
    }
}

impl std::error::Error for InvalidGraph {}

/// Three node ids that cannot form a triplet because two of them coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidTriplet {
    /// The ids as supplied.
    pub nodes: [usize; 3],
}

impl fmt::Display for InvalidTriplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.nodes;
        write!(f, "nodes ({a}, {b}, {c}) are not pairwise distinct")
    }
}

impl std::error::Error for InvalidTriplet {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_violation() {
        let err = InvalidGraph::SelfLoop { node: 4 };
        assert_eq!(err.to_string(), "node 4 has a self-loop");
        assert_eq!(err.node(), 4);

        let err = InvalidGraph::NeighborOutOfRange {
            node: 1,
            neighbor: 9,
            node_count: 3,
        };
        assert_eq!(
            err.to_string(),
            "node 1 lists neighbor 9, out of range for 3 nodes"
        );
        assert_eq!(err.node(), 1);
    }

    #[test]
    fn invalid_triplet_lists_ids() {
        let err = InvalidTriplet { nodes: [2, 2, 5] };
        assert_eq!(err.to_string(), "nodes (2, 2, 5) are not pairwise distinct");
    }
}

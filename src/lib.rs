//! # `relgraph` - Triplet Listing for Relation Graphs
//!
//! In multi-view reconstruction, images (or cameras) are linked by verified
//! pairwise relations: two views share enough geometrically consistent
//! matches. The resulting *relation graph* is sparse, and its triangles,
//! three views related pairwise, are the smallest loops on which closure
//! constraints (trifocal checks, rotation-averaging consistency) can be
//! evaluated.
//!
//! This crate lists those triangles ("triplets") exactly once each.
//!
//! ## Guarantees
//!
//! - **Canonical triplets**: every [`Triplet`] holds `i < j < k`; equality is
//!   node-set equality.
//! - **Exactly once**: each 3-clique is reported once, found from its
//!   smallest vertex. No seen-set is kept.
//! - **Deterministic**: the output is sorted, so repeated runs over the same
//!   graph are identical, serial or parallel.
//! - **All or nothing**: a malformed graph (self-loop, unknown neighbor id)
//!   is rejected with [`InvalidGraph`] before any triplet is produced.
//!   Parallel edges are merged silently.
//!
//! ## Architecture
//!
//! 1. **Graph capability** ([`NeighborGraph`]): node count plus neighbor
//!    enumeration. Implemented by [`RelationGraph`], [`CsrGraph`], plain
//!    `Vec<Vec<usize>>` adjacency and (feature `petgraph`) undirected
//!    `petgraph::Graph`.
//! 2. **Forward adjacency** ([`ForwardAdjacency`]): sorted CSR rows of
//!    larger-id and smaller-id neighbors, with `O(log d)` membership.
//! 3. **Listing** ([`Triplets`], [`list_triplets`]): for each node `i`, each
//!    pair of forward neighbors `j < k` closes a triplet when `{j, k}` is an
//!    edge.
//!
//! ## Cargo features
//!
//! - `parallel`: `par_list_triplets`, spreading lead vertices over rayon.
//! - `tracing`: `debug!`/`warn!` events for index construction and listing.
//! - `petgraph`: [`NeighborGraph`] for `petgraph::Graph<_, _, Undirected, _>`.
//!
//! ## Example
//!
//! ```rust
//! use relgraph::{list_triplets, RelationGraph};
//!
//! // a__b
//! // |\ |
//! // | \|
//! // c--d
//! let mut graph = RelationGraph::new();
//! let (a, b, c, d) = (graph.add_node(), graph.add_node(), graph.add_node(), graph.add_node());
//! graph.add_edge(a, b);
//! graph.add_edge(a, c);
//! graph.add_edge(a, d);
//! graph.add_edge(c, d);
//! graph.add_edge(b, d);
//!
//! let triplets = list_triplets(&graph).unwrap();
//! assert_eq!(triplets.len(), 2);
//! assert_eq!(triplets[0].nodes(), [a, b, d]);
//! assert_eq!(triplets[1].nodes(), [a, c, d]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;

pub use error::{InvalidGraph, InvalidTriplet};
pub use graph::triplet::{
    count_triplets, list_triplets, list_triplets_into, ForwardAdjacency, Triplet, Triplets,
};
#[cfg(feature = "parallel")]
pub use graph::triplet::par_list_triplets;
pub use graph::{CsrGraph, NeighborGraph, RelationGraph};

// Compile-time layout checks
const _: () = {
    use core::mem;

    // A triplet is exactly its three ids.
    assert!(mem::size_of::<Triplet>() == 3 * mem::size_of::<usize>());

    // Errors stay small enough to return by value.
    assert!(mem::size_of::<InvalidGraph>() <= 4 * mem::size_of::<usize>());
};

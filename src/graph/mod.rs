//! Relation graphs and the triplet listing that runs over them.
//!
//! Graph implementations are organized into categories:
//! - `basic`: growable adjacency lists
//! - `compressed`: immutable CSR storage
//! - `triplet`: forward adjacency index and triplet listing
//!
//! All of them meet at [`NeighborGraph`], the only thing listing asks of a graph.

pub mod basic;
mod capability;
pub mod compressed;
#[cfg(feature = "petgraph")]
mod interop;
pub mod triplet;

pub use basic::RelationGraph;
pub use capability::NeighborGraph;
pub use compressed::CsrGraph;

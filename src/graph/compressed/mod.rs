//! Compressed graph implementations.
//!
//! Immutable, memory-efficient representations for graphs that are built
//! once and then only read.

pub mod csr_graph;

pub use csr_graph::CsrGraph;

//! Basic graph implementations.
//!
//! Growable adjacency-list graphs that relation graphs are assembled in.

pub mod relation_graph;

pub use relation_graph::RelationGraph;

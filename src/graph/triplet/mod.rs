//! Triplet (three-cycle) listing over relation graphs.
//!
//! A relation graph links entities (images, cameras) by verified pairwise
//! relations. Triplets, sets of three mutually related entities, are the
//! smallest closed loops in such a graph and are what trifocal checks and
//! rotation-averaging filters consume.
//!
//! The pipeline is `NeighborGraph` → [`ForwardAdjacency`] → [`Triplets`]:
//! the index validates and normalises the graph, the iterator walks it
//! lowest vertex first.

mod forward;
mod listing;
mod value;

pub use forward::ForwardAdjacency;
#[cfg(feature = "parallel")]
pub use listing::par_list_triplets;
pub use listing::{count_triplets, list_triplets, list_triplets_into, Triplets};
pub use value::Triplet;

#[cfg(test)]
mod tests;

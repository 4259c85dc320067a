//! Lowest-vertex-first triplet listing.
//!
//! Every triangle `{i, j, k}` with `i < j < k` is reached only from `i`:
//! the walk pairs up forward neighbors `j < k` of the lead vertex `i` and
//! keeps the pair when `{j, k}` is an edge. Since `j` and `k` only look at
//! ids above themselves when they lead, the same triangle can never be
//! reached twice, and the output needs no deduplication.

use crate::error::InvalidGraph;
use crate::graph::triplet::{ForwardAdjacency, Triplet};
use crate::graph::NeighborGraph;

/// Iterator over the triplets of a [`ForwardAdjacency`].
///
/// Yields triplets sorted ascending: by lead vertex, then middle, then
/// largest id.
#[derive(Debug, Clone)]
pub struct Triplets<'a> {
    index: &'a ForwardAdjacency,
    lead: usize,
    end: usize,
    // Positions within `index.forward(lead)` of the next `(j, k)` pair.
    first: usize,
    second: usize,
}

impl<'a> Triplets<'a> {
    fn new(index: &'a ForwardAdjacency, lead: usize, end: usize) -> Self {
        Self {
            index,
            lead,
            end,
            first: 0,
            second: 1,
        }
    }
}

impl Iterator for Triplets<'_> {
    type Item = Triplet;

    fn next(&mut self) -> Option<Self::Item> {
        while self.lead < self.end {
            let row = self.index.forward(self.lead);
            while self.first < row.len() {
                let j = row[self.first];
                while self.second < row.len() {
                    let k = row[self.second];
                    self.second += 1;
                    if self.index.contains_edge(j, k) {
                        return Some(Triplet::from_ascending(self.lead, j, k));
                    }
                }
                self.first += 1;
                self.second = self.first + 1;
            }
            self.lead += 1;
            self.first = 0;
            self.second = 1;
        }
        None
    }
}

impl core::iter::FusedIterator for Triplets<'_> {}

impl ForwardAdjacency {
    /// All triplets of the indexed graph.
    pub fn triplets(&self) -> Triplets<'_> {
        Triplets::new(self, 0, self.node_count())
    }

    /// Triplets whose smallest vertex is `lead`.
    ///
    /// # Panics
    /// Panics if `lead` is out of bounds.
    pub fn triplets_from(&self, lead: usize) -> Triplets<'_> {
        assert!(lead < self.node_count(), "node {lead} out of bounds");
        Triplets::new(self, lead, lead + 1)
    }
}

/// Lists every triplet of `graph` exactly once, ascending.
///
/// # Errors
/// Returns [`InvalidGraph`] if the graph has a self-loop or reports an
/// unknown neighbor id. No triplets are produced in that case.
///
/// # Examples
///
/// ```rust
/// use relgraph::{list_triplets, RelationGraph};
///
/// let g = RelationGraph::from_edges(4, &[(0, 1), (1, 2), (1, 3), (2, 3)]);
/// let triplets = list_triplets(&g).unwrap();
/// assert_eq!(triplets.len(), 1);
/// assert_eq!(triplets[0].nodes(), [1, 2, 3]);
/// ```
pub fn list_triplets<G: NeighborGraph + ?Sized>(graph: &G) -> Result<Vec<Triplet>, InvalidGraph> {
    let mut out = Vec::new();
    list_triplets_into(graph, &mut out)?;
    Ok(out)
}

/// Appends every triplet of `graph` to `out`.
///
/// Returns whether at least one triplet was found. On error `out` is left
/// untouched.
///
/// # Errors
/// Same as [`list_triplets`].
pub fn list_triplets_into<G: NeighborGraph + ?Sized>(
    graph: &G,
    out: &mut Vec<Triplet>,
) -> Result<bool, InvalidGraph> {
    let index = ForwardAdjacency::build(graph)?;
    let before = out.len();
    out.extend(index.triplets());

    #[cfg(feature = "tracing")]
    tracing::debug!(triplets = out.len() - before, "listed triplets");

    Ok(out.len() > before)
}

/// Number of triplets in `graph`.
///
/// # Errors
/// Same as [`list_triplets`].
pub fn count_triplets<G: NeighborGraph + ?Sized>(graph: &G) -> Result<usize, InvalidGraph> {
    let index = ForwardAdjacency::build(graph)?;
    Ok(index.triplets().count())
}

/// Parallel [`list_triplets`]: lead vertices are spread over the rayon pool.
///
/// Each lead vertex fills its own buffer and buffers are concatenated in
/// ascending lead order, so the result equals the serial one.
///
/// # Errors
/// Same as [`list_triplets`].
#[cfg(feature = "parallel")]
pub fn par_list_triplets<G: NeighborGraph + ?Sized>(
    graph: &G,
) -> Result<Vec<Triplet>, InvalidGraph> {
    use rayon::prelude::*;

    let index = ForwardAdjacency::build(graph)?;
    let per_lead: Vec<Vec<Triplet>> = (0..index.node_count())
        .into_par_iter()
        .map(|lead| index.triplets_from(lead).collect())
        .collect();
    let out = per_lead.concat();

    #[cfg(feature = "tracing")]
    tracing::debug!(triplets = out.len(), "listed triplets in parallel");

    Ok(out)
}

//! The triplet value type.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InvalidTriplet;

/// Three pairwise-connected nodes `i < j < k`.
///
/// The ascending form is canonical, so two triplets are equal exactly when
/// they name the same node set. Serialized as the sequence `[i, j, k]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "[usize; 3]", into = "[usize; 3]")]
pub struct Triplet {
    i: usize,
    j: usize,
    k: usize,
}

impl Triplet {
    /// Builds the triplet over `{a, b, c}` in canonical order.
    ///
    /// Returns `None` if two of the ids coincide.
    pub fn new(a: usize, b: usize, c: usize) -> Option<Self> {
        let mut nodes = [a, b, c];
        nodes.sort_unstable();
        let [i, j, k] = nodes;
        (i < j && j < k).then_some(Self { i, j, k })
    }

    /// Caller guarantees `i < j < k`.
    #[inline]
    pub(crate) fn from_ascending(i: usize, j: usize, k: usize) -> Self {
        debug_assert!(i < j && j < k, "({i}, {j}, {k}) is not ascending");
        Self { i, j, k }
    }

    /// Smallest node id.
    #[inline]
    pub const fn i(&self) -> usize {
        self.i
    }

    /// Middle node id.
    #[inline]
    pub const fn j(&self) -> usize {
        self.j
    }

    /// Largest node id.
    #[inline]
    pub const fn k(&self) -> usize {
        self.k
    }

    /// The three node ids, ascending.
    #[inline]
    pub const fn nodes(&self) -> [usize; 3] {
        [self.i, self.j, self.k]
    }

    /// Whether `node` is one of the three.
    pub fn contains_node(&self, node: usize) -> bool {
        node == self.i || node == self.j || node == self.k
    }

    /// Whether `{a, b}` is one of the three sides, in either orientation.
    pub fn contains_edge(&self, a: usize, b: usize) -> bool {
        a != b && self.contains_node(a) && self.contains_node(b)
    }

    /// The three sides as ascending pairs: `(i, j)`, `(i, k)`, `(j, k)`.
    pub const fn edges(&self) -> [(usize, usize); 3] {
        [(self.i, self.j), (self.i, self.k), (self.j, self.k)]
    }
}

impl TryFrom<[usize; 3]> for Triplet {
    type Error = InvalidTriplet;

    fn try_from(nodes: [usize; 3]) -> Result<Self, Self::Error> {
        let [a, b, c] = nodes;
        Self::new(a, b, c).ok_or(InvalidTriplet { nodes })
    }
}

impl From<Triplet> for [usize; 3] {
    fn from(t: Triplet) -> Self {
        t.nodes()
    }
}

impl fmt::Display for Triplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.i, self.j, self.k)
    }
}

//! Tests for triplet listing.

use super::*;
use crate::graph::{CsrGraph, RelationGraph};
use crate::InvalidGraph;

fn nodes_of(triplets: &[Triplet]) -> Vec<[usize; 3]> {
    triplets.iter().map(Triplet::nodes).collect()
}

fn list(node_count: usize, edges: &[(usize, usize)]) -> Vec<[usize; 3]> {
    let g = RelationGraph::from_edges(node_count, edges);
    nodes_of(&list_triplets(&g).unwrap())
}

#[test]
fn path_has_no_triplet() {
    // a_b_c
    let g = RelationGraph::from_edges(3, &[(0, 1), (1, 2)]);
    let mut out = Vec::new();
    assert!(!list_triplets_into(&g, &mut out).unwrap());
    assert!(out.is_empty());
}

#[test]
fn single_triangle() {
    // a_b
    // |/
    // c
    assert_eq!(list(3, &[(0, 1), (0, 2), (1, 2)]), vec![[0, 1, 2]]);
}

#[test]
fn triangle_behind_a_pendant() {
    // a_b__c
    //    |/
    //    d
    assert_eq!(list(4, &[(0, 1), (1, 2), (1, 3), (2, 3)]), vec![[1, 2, 3]]);
}

#[test]
fn two_triangles_sharing_an_edge() {
    // a__b
    // |\ |
    // | \|
    // c--d
    assert_eq!(
        list(4, &[(0, 1), (0, 2), (0, 3), (2, 3), (1, 3)]),
        vec![[0, 1, 3], [0, 2, 3]]
    );
}

#[test]
fn two_triangles_sharing_a_vertex() {
    // a   c
    // |\ /|
    // | b |
    // |/ \|
    // d   e
    assert_eq!(
        list(5, &[(0, 1), (1, 2), (2, 4), (4, 1), (1, 3), (3, 0)]),
        vec![[0, 1, 3], [1, 2, 4]]
    );
}

#[test]
fn two_triangles_joined_by_a_doubled_bridge() {
    // a      c
    // |\    /|
    // | b--f |
    // |/    \|
    // d      e
    //
    // b--f is inserted twice.
    assert_eq!(
        list(
            6,
            &[(0, 1), (1, 5), (5, 2), (2, 4), (4, 5), (5, 1), (1, 3), (3, 0)]
        ),
        vec![[0, 1, 3], [2, 4, 5]]
    );
}

#[test]
fn three_triangles_around_a_hub() {
    // a   b
    // |\ /|
    // c-d-e
    // |/
    // f
    assert_eq!(
        list(
            6,
            &[(0, 2), (0, 3), (2, 3), (2, 5), (5, 3), (3, 1), (1, 4), (4, 3)]
        ),
        vec![[0, 2, 3], [1, 3, 4], [2, 3, 5]]
    );
}

#[test]
fn three_triangles_in_a_chain() {
    // a        b--g--h
    // | \    / |   \/
    // |  d--e  |    i
    // | /    \ |
    // c        f
    assert_eq!(
        list(
            9,
            &[
                (0, 2),
                (0, 3),
                (3, 2),
                (3, 4),
                (4, 1),
                (4, 5),
                (1, 5),
                (1, 6),
                (6, 7),
                (7, 8),
                (8, 6),
            ]
        ),
        vec![[0, 2, 3], [1, 4, 5], [6, 7, 8]]
    );
}

#[test]
fn three_triangles_in_a_strip() {
    // a---b
    // |\  |\
    // | \ | \
    // |  \|  \
    // c---d---e
    assert_eq!(
        list(5, &[(0, 1), (1, 3), (3, 2), (2, 0), (0, 3), (1, 4), (3, 4)]),
        vec![[0, 1, 3], [0, 2, 3], [1, 3, 4]]
    );
}

#[test]
fn complete_graph_on_four_nodes() {
    // a__b
    // |\/|
    // |/\|
    // c--d
    assert_eq!(
        list(4, &[(0, 1), (0, 2), (0, 3), (2, 3), (1, 3), (2, 1)]),
        vec![[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]]
    );
}

#[test]
fn complete_graphs_yield_binomial_counts() {
    for m in 0..9usize {
        let mut edges = Vec::new();
        for u in 0..m {
            for v in u + 1..m {
                edges.push((u, v));
            }
        }
        let g = RelationGraph::from_edges(m, &edges);
        let expected = if m < 3 { 0 } else { m * (m - 1) * (m - 2) / 6 };
        assert_eq!(count_triplets(&g).unwrap(), expected, "K{m}");
    }
}

#[test]
fn square_without_diagonal_has_no_triplet() {
    assert!(list(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).is_empty());
}

#[test]
fn tiny_and_edgeless_graphs() {
    for n in 0..3 {
        assert!(list(n, &[]).is_empty());
    }
    assert!(list(2, &[(0, 1)]).is_empty());
    assert!(list(10, &[]).is_empty());
}

#[test]
fn into_appends_after_existing_entries() {
    let g = RelationGraph::from_edges(3, &[(0, 1), (0, 2), (1, 2)]);
    let seed = Triplet::new(7, 8, 9).unwrap();
    let mut out = vec![seed];
    assert!(list_triplets_into(&g, &mut out).unwrap());
    assert_eq!(out.len(), 2);
    assert_eq!(out[0], seed);
    assert_eq!(out[1].nodes(), [0, 1, 2]);
}

#[test]
fn error_leaves_buffer_untouched() {
    let mut g = RelationGraph::from_edges(3, &[(0, 1), (0, 2), (1, 2)]);
    g.add_edge(2, 2);
    let mut out = Vec::new();
    assert_eq!(
        list_triplets_into(&g, &mut out),
        Err(InvalidGraph::SelfLoop { node: 2 })
    );
    assert!(out.is_empty());
    assert_eq!(count_triplets(&g), Err(InvalidGraph::SelfLoop { node: 2 }));
}

#[test]
fn backings_agree() {
    let edges = [(0, 2), (0, 3), (2, 3), (2, 5), (5, 3), (3, 1), (1, 4), (4, 3)];
    let from_list = list_triplets(&RelationGraph::from_edges(6, &edges)).unwrap();
    let from_csr = list_triplets(&CsrGraph::from_edges(6, &edges)).unwrap();

    let mut adjacency = vec![Vec::new(); 6];
    for &(u, v) in &edges {
        adjacency[u].push(v);
    }
    let one_sided = list_triplets(&adjacency).unwrap();

    assert_eq!(from_list, from_csr);
    assert_eq!(from_list, one_sided);
}

#[test]
fn per_lead_iteration_partitions_the_output() {
    let g = RelationGraph::from_edges(5, &[(0, 1), (1, 3), (3, 2), (2, 0), (0, 3), (1, 4), (3, 4)]);
    let index = ForwardAdjacency::build(&g).unwrap();

    let stitched: Vec<Triplet> = (0..index.node_count())
        .flat_map(|lead| index.triplets_from(lead))
        .collect();
    assert_eq!(stitched, index.triplets().collect::<Vec<_>>());
    assert_eq!(index.triplets_from(0).count(), 2);
    assert_eq!(index.triplets_from(1).count(), 1);
    assert_eq!(index.triplets_from(4).count(), 0);
}

#[test]
fn repeated_runs_are_identical() {
    let g = RelationGraph::from_edges(5, &[(3, 4), (0, 1), (1, 3), (3, 2), (2, 0), (0, 3), (1, 4)]);
    let first = list_triplets(&g).unwrap();
    let second = list_triplets(&g).unwrap();
    assert_eq!(first, second);
    assert!(first.windows(2).all(|w| w[0] < w[1]));
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_matches_serial() {
    let mut edges = Vec::new();
    for u in 0..40usize {
        for v in u + 1..40 {
            if (u * 7 + v * 3) % 5 < 2 {
                edges.push((u, v));
            }
        }
    }
    let g = RelationGraph::from_edges(40, &edges);
    assert_eq!(par_list_triplets(&g).unwrap(), list_triplets(&g).unwrap());
}

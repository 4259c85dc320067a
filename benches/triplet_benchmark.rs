use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use relgraph::{count_triplets, list_triplets, CsrGraph, ForwardAdjacency, RelationGraph};

/// Sequential-capture style relation graph: every view relates to the next
/// `window` views, plus a loop-closure link every 50 views.
fn sequential_views(nodes: usize, window: usize) -> Vec<(usize, usize)> {
    let mut edges = Vec::new();
    for u in 0..nodes {
        for d in 1..=window {
            if u + d < nodes {
                edges.push((u, u + d));
            }
        }
        if u % 50 == 0 && u + nodes / 2 < nodes {
            edges.push((u, u + nodes / 2));
        }
    }
    edges
}

fn complete(nodes: usize) -> Vec<(usize, usize)> {
    let mut edges = Vec::with_capacity(nodes * nodes / 2);
    for u in 0..nodes {
        for v in u + 1..nodes {
            edges.push((u, v));
        }
    }
    edges
}

fn bench_sparse_listing(c: &mut Criterion) {
    let mut group = c.benchmark_group("triplets_sparse");
    for &nodes in &[1_000usize, 10_000] {
        let edges = sequential_views(nodes, 8);
        let graph = CsrGraph::from_edges(nodes, &edges);
        group.throughput(Throughput::Elements(edges.len() as u64));

        group.bench_with_input(BenchmarkId::new("list", nodes), &graph, |b, g| {
            b.iter(|| black_box(list_triplets(g).unwrap()));
        });

        #[cfg(feature = "parallel")]
        group.bench_with_input(BenchmarkId::new("par_list", nodes), &graph, |b, g| {
            b.iter(|| black_box(relgraph::par_list_triplets(g).unwrap()));
        });
    }
    group.finish();
}

fn bench_dense_cluster(c: &mut Criterion) {
    let nodes = 120;
    let edges = complete(nodes);
    let graph = RelationGraph::from_edges(nodes, &edges);

    let mut group = c.benchmark_group("triplets_dense");
    group.throughput(Throughput::Elements(edges.len() as u64));
    group.bench_function("count_k120", |b| {
        b.iter(|| black_box(count_triplets(&graph).unwrap()));
    });
    group.finish();
}

fn bench_index_build(c: &mut Criterion) {
    let nodes = 10_000;
    let edges = sequential_views(nodes, 8);
    let graph = RelationGraph::from_edges(nodes, &edges);

    c.bench_function("forward_adjacency_build", |b| {
        b.iter(|| black_box(ForwardAdjacency::build(&graph).unwrap()));
    });
}

criterion_group!(benches, bench_sparse_listing, bench_dense_cluster, bench_index_build);
criterion_main!(benches);

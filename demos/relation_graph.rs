//! Lists the triplets of a small relation graph and prints them as JSON.
//!
//! Nine views whose relations close three separate loops, linked by the
//! bridges `d--e` and `b--g`.
//!
//! ```text
//! a        b--g--h
//! | \    / |   \/
//! |  d--e  |    i
//! | /    \ |
//! c        f
//! ```

use anyhow::{Context, Result};
use relgraph::{ForwardAdjacency, RelationGraph, Triplet};

fn main() -> Result<()> {
    let mut graph = RelationGraph::new();
    let names = ["a", "b", "c", "d", "e", "f", "g", "h", "i"];
    for _ in names {
        graph.add_node();
    }

    let [a, b, c, d, e, f, g, h, i] = [0, 1, 2, 3, 4, 5, 6, 7, 8];
    for (u, v) in [
        (a, c),
        (a, d),
        (d, c),
        (d, e),
        (e, b),
        (e, f),
        (b, f),
        (b, g),
        (g, h),
        (h, i),
        (i, g),
    ] {
        graph.add_edge(u, v);
    }

    let index = ForwardAdjacency::build(&graph).context("relation graph is not simple")?;
    println!(
        "{} views, {} relations",
        index.node_count(),
        index.edge_count()
    );

    let triplets: Vec<Triplet> = index.triplets().collect();
    for t in &triplets {
        let [x, y, z] = t.nodes();
        println!("  {} {} {}", names[x], names[y], names[z]);
    }

    let json = serde_json::to_string_pretty(&triplets).context("serializing triplets")?;
    println!("{json}");
    Ok(())
}

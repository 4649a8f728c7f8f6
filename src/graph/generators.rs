use crate::graph::{Graph, LabeledGraph, MutableGraph, VertexId};
use crate::Result;
use rand::prelude::*;

/// Label used by the generators for the vertex at `index`
pub fn vertex_label(index: usize) -> String {
    format!("v{index}")
}

/// Generates a random directed graph with `n` vertices and roughly
/// `edge_factor * n` edges with weights in `1..=max_weight`.
/// Self-loops are skipped; parallel edges may occur.
pub fn generate_random<R: Rng>(
    n: usize,
    edge_factor: f64,
    max_weight: u64,
    rng: &mut R,
) -> Result<LabeledGraph<u64>> {
    let mut graph = LabeledGraph::with_capacity(n);
    for i in 0..n {
        graph.add_vertex(&vertex_label(i))?;
    }
    if n < 2 {
        return Ok(graph);
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = rng.gen_range(1..=max_weight.max(1));
            graph.add_edge_between(VertexId(u), VertexId(v), weight)?;
        }
    }

    Ok(graph)
}

/// Generates a 2D grid graph with edges in both directions between 4-neighbours.
/// Vertex `(x, y)` is labeled `r{y}c{x}`.
pub fn generate_grid(width: usize, height: usize, weight: u64) -> Result<LabeledGraph<u64>> {
    let mut graph = LabeledGraph::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            graph.add_vertex(&format!("r{y}c{x}"))?;
        }
    }

    let index = |x: usize, y: usize| VertexId(y * width + x);
    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                graph.add_edge_between(index(x, y), index(x + 1, y), weight)?;
                graph.add_edge_between(index(x + 1, y), index(x, y), weight)?;
            }
            if y + 1 < height {
                graph.add_edge_between(index(x, y), index(x, y + 1), weight)?;
                graph.add_edge_between(index(x, y + 1), index(x, y), weight)?;
            }
        }
    }

    Ok(graph)
}

/// Generates a one-way chain `v0 -> v1 -> ... -> v{n-1}`
pub fn generate_chain(n: usize, weight: u64) -> Result<LabeledGraph<u64>> {
    let mut graph = LabeledGraph::with_capacity(n);
    for i in 0..n {
        graph.add_vertex(&vertex_label(i))?;
    }
    for i in 1..n {
        graph.add_edge_between(VertexId(i - 1), VertexId(i), weight)?;
    }
    debug_assert_eq!(graph.edge_count(), n.saturating_sub(1));
    Ok(graph)
}

use std::env;
use std::time::{Duration, Instant};

use dijkstra_table::algorithm::ShortestPathAlgorithm;
use dijkstra_table::graph::generators::{generate_random, vertex_label};
use dijkstra_table::graph::Graph;
use dijkstra_table::{Dijkstra, LabeledGraph, MarkingTable, Selection};
use rand::rngs::StdRng;
use rand::SeedableRng;

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm<A>(
    algorithm: &A,
    graph: &LabeledGraph<u64>,
    source: &str,
) -> dijkstra_table::Result<(Duration, MarkingTable<u64>)>
where
    A: ShortestPathAlgorithm<u64, LabeledGraph<u64>>,
{
    println!("Running {} on graph with {} vertices...", algorithm.name(), graph.vertex_count());

    let start = Instant::now();
    let table = algorithm.compute_shortest_paths(graph, source)?;
    let duration = start.elapsed();

    println!("  - Found {} reachable vertices in {:?}", table.reachable_count(), duration);

    Ok((duration, table))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Usage: benchmark [edge_factor] [sizes...]
    let args: Vec<String> = env::args().skip(1).collect();
    let edge_factor: f64 = match args.first() {
        Some(arg) => arg.parse()?,
        None => 2.0,
    };
    let graph_sizes: Vec<usize> = if args.len() > 1 {
        args[1..].iter().map(|s| s.parse()).collect::<Result<_, _>>()?
    } else {
        vec![100, 500, 1_000, 2_000, 5_000]
    };

    println!("=====================================================");
    println!("Benchmark: linear scan vs binary heap selection");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let linear = Dijkstra::with_selection(Selection::LinearScan);
    let heap = Dijkstra::with_selection(Selection::BinaryHeap);
    let mut rng = StdRng::seed_from_u64(42);
    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generate_random(size, edge_factor, 100, &mut rng)?;
        let source = vertex_label(0);

        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let (linear_time, linear_table) = benchmark_algorithm(&linear, &graph, &source)?;
        let (heap_time, heap_table) = benchmark_algorithm(&heap, &graph, &source)?;

        if linear_table != heap_table {
            return Err("selection strategies disagree".into());
        }

        let speedup = linear_time.as_secs_f64() / heap_time.as_secs_f64();
        println!("Speedup - binary heap vs linear scan: {:.2}x", speedup);
        results.push((size, linear_time, heap_time, speedup));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15} | {:<10}", "Vertices", "Linear (ms)", "Heap (ms)", "Speedup");
    println!("-----------------------------------------------------");

    for (size, linear_time, heap_time, speedup) in &results {
        println!(
            "{:<10} | {:<15.2} | {:<15.2} | {:<10.2}",
            size,
            linear_time.as_secs_f64() * 1000.0,
            heap_time.as_secs_f64() * 1000.0,
            speedup
        );
    }

    Ok(())
}

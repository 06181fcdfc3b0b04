use std::env;
use std::time::{Duration, Instant};

use frontier_sssp::graph::generators::generate_random;
use frontier_sssp::{DirectedGraph, Dijkstra, FrontierRelaxation, Graph, ShortestPathAlgorithm};
use log::warn;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm<A>(name: &str, algorithm: &A, graph: &DirectedGraph<u32>, source: usize) -> (Duration, Vec<u32>)
where
    A: ShortestPathAlgorithm<u32, DirectedGraph<u32>>,
{
    println!("Running {} on graph with {} nodes...", name, graph.node_count());

    let start = Instant::now();
    let result = match algorithm.compute_shortest_paths(graph, source) {
        Ok(result) => result,
        Err(err) => {
            warn!("{} failed: {}", name, err);
            return (start.elapsed(), Vec::new());
        }
    };
    let duration = start.elapsed();

    println!("  - Found {} reachable nodes in {:?}", result.reachable_count(), duration);

    (duration, result.distances())
}

fn main() {
    env_logger::init();

    // Graph sizes from the command line, or a default ladder
    let graph_sizes: Vec<usize> = {
        let parsed: Vec<usize> = env::args().skip(1).filter_map(|arg| arg.parse().ok()).collect();
        if parsed.is_empty() {
            vec![1_000, 10_000, 50_000, 100_000]
        } else {
            parsed
        }
    };

    // Average number of edges per node
    let edges_per_node = 3;

    println!("=====================================================");
    println!("Benchmark: FrontierRelaxation vs Dijkstra");
    println!("Edges per node: {}", edges_per_node);
    println!("=====================================================");

    let frontier = FrontierRelaxation::new();
    let dijkstra = Dijkstra::new();
    let mut rng = StdRng::seed_from_u64(42);

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} nodes...", size);
        let graph = generate_random(size, edges_per_node, &mut rng, |rng| rng.gen_range(1..100u32));
        println!("Graph has {} nodes and {} edges", graph.node_count(), graph.edge_count());

        let source = 0;
        let (frontier_time, frontier_distances) = benchmark_algorithm("FrontierRelaxation", &frontier, &graph, source);
        let (dijkstra_time, dijkstra_distances) = benchmark_algorithm("Dijkstra", &dijkstra, &graph, source);

        if frontier_distances != dijkstra_distances {
            warn!("distance mismatch on graph with {} nodes", size);
        }

        let ratio = frontier_time.as_secs_f64() / dijkstra_time.as_secs_f64().max(f64::EPSILON);
        println!("FrontierRelaxation / Dijkstra time: {:.2}x", ratio);

        results.push((size, frontier_time, dijkstra_time, ratio));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15} | {:<10}", "Nodes", "Frontier (ms)", "Dijkstra (ms)", "Ratio");
    println!("-----------------------------------------------------");

    for (size, frontier_time, dijkstra_time, ratio) in &results {
        println!(
            "{:<10} | {:<15.2} | {:<15.2} | {:<10.2}",
            size,
            frontier_time.as_secs_f64() * 1000.0,
            dijkstra_time.as_secs_f64() * 1000.0,
            ratio
        );
    }
}

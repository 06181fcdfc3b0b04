use frontier_sssp::algorithm::traits::ShortestPathAlgorithm;
use frontier_sssp::graph::generators::{generate_grid, generate_random};
use frontier_sssp::graph::Graph;
use frontier_sssp::{compute_from_sources, Dijkstra, DirectedGraph, Error, FrontierRelaxation, PathResultSet};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Random graphs with zero weights allowed and, at low fanout, unreachable nodes
fn random_graphs() -> Vec<DirectedGraph<u32>> {
    let mut rng = StdRng::seed_from_u64(7);
    let mut graphs = Vec::new();
    for &(n, fanout) in &[(1, 0), (2, 1), (20, 1), (60, 2), (60, 4), (200, 3)] {
        for _ in 0..3 {
            graphs.push(generate_random(n, fanout, &mut rng, |rng| rng.gen_range(0..20u32)));
        }
    }
    graphs
}

fn check_properties(graph: &DirectedGraph<u32>, result: &PathResultSet<u32>) {
    let source = result.source();
    let n = graph.node_count();
    assert_eq!(result.len(), n);

    // Zero self-distance
    assert_eq!(result.distance(source), Some(0));
    assert_eq!(result.path(source).unwrap(), &[source]);

    for u in 0..n {
        if !result.is_reachable(u) {
            assert_eq!(result.distance(u), Some(u32::MAX));
            assert!(result.path(u).unwrap().is_empty(), "unreachable node {} has a path", u);
            continue;
        }
        let du = result.distance(u).unwrap();

        // Triangle inequality over every edge leaving a reachable node
        for edge in graph.outgoing_edges(u) {
            assert!(result.is_reachable(edge.target), "{} reachable but {} is not", u, edge.target);
            let dv = result.distance(edge.target).unwrap();
            assert!(dv <= du + edge.weight, "edge {} -> {} can still be relaxed", u, edge.target);
        }

        // Path starts at the source, ends here, follows edges and sums to the distance
        let path = result.path(u).unwrap();
        assert_eq!(path.first(), Some(&source));
        assert_eq!(path.last(), Some(&u));
        let mut total = 0u32;
        for hop in path.windows(2) {
            let weight = graph
                .edge_weight(hop[0], hop[1])
                .unwrap_or_else(|| panic!("path to {} uses missing edge {} -> {}", u, hop[0], hop[1]));
            total += weight;
        }
        assert_eq!(total, du, "path to {} does not sum to its distance", u);
    }
}

#[test]
fn test_properties_hold_on_random_graphs() {
    let engine = FrontierRelaxation::new();
    for graph in random_graphs() {
        for source in [0, graph.node_count() / 2, graph.node_count() - 1] {
            let result = engine.compute_shortest_paths(&graph, source).unwrap();
            check_properties(&graph, &result);
        }
    }
}

#[test]
fn test_agrees_with_dijkstra_on_random_graphs() {
    let frontier = FrontierRelaxation::new();
    let dijkstra = Dijkstra::new();
    for graph in random_graphs() {
        let expected = dijkstra.compute_shortest_paths(&graph, 0).unwrap();
        check_properties(&graph, &expected);

        let actual = frontier.compute_shortest_paths(&graph, 0).unwrap();
        assert_eq!(actual.distances(), expected.distances());
    }
}

#[test]
fn test_agrees_with_dijkstra_on_grids() {
    let mut rng = StdRng::seed_from_u64(11);
    let graph = generate_grid(12, 9, &mut rng, |rng| rng.gen_range(1..50u32));

    let expected = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    let actual = FrontierRelaxation::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(actual.reachable_count(), 12 * 9);
    assert_eq!(actual.distances(), expected.distances());
    check_properties(&graph, &actual);
}

#[test]
fn test_runs_are_idempotent() {
    let engine = FrontierRelaxation::new();
    for graph in random_graphs() {
        let first = engine.compute_shortest_paths(&graph, 0).unwrap();
        let second = engine.compute_shortest_paths(&graph, 0).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_parallel_sources_match_sequential_runs() {
    let mut rng = StdRng::seed_from_u64(3);
    let graph = generate_random(150, 3, &mut rng, |rng| rng.gen_range(1..30u32));
    let sources: Vec<usize> = (0..150).step_by(7).collect();
    let engine = FrontierRelaxation::new();

    let batch = compute_from_sources(&engine, &graph, &sources).unwrap();

    assert_eq!(batch.len(), sources.len());
    for (result, &source) in batch.iter().zip(&sources) {
        assert_eq!(result.source(), source);
        assert_eq!(result, &engine.compute_shortest_paths(&graph, source).unwrap());
    }
}

#[test]
fn test_parallel_sources_fail_on_unknown_source() {
    let mut rng = StdRng::seed_from_u64(5);
    let graph = generate_random(10, 2, &mut rng, |rng| rng.gen_range(1..30u32));

    let err = compute_from_sources(&FrontierRelaxation::new(), &graph, &[0, 3, 10]).unwrap_err();
    assert_eq!(err, Error::SourceNotFound(10));
}

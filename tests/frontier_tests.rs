use frontier_sssp::algorithm::traits::ShortestPathAlgorithm;
use frontier_sssp::{
    Dijkstra, DirectedGraph, Error, FrontierRelaxation, GraphBuilder, InvalidGraph, Node, RelaxationStats,
};
use ordered_float::OrderedFloat;

// The four-node sample graph, every connection usable both ways
fn sample_graph() -> DirectedGraph<u32> {
    DirectedGraph::build(vec![
        Node::new(0).with_edge(5, 1).with_edge(15, 2),
        Node::new(1).with_edge(5, 0).with_edge(6, 2),
        Node::new(2).with_edge(15, 0).with_edge(6, 1).with_edge(2, 3),
        Node::new(3).with_edge(2, 2),
    ])
}

#[test]
fn test_sample_graph_distances_and_paths() {
    let graph = sample_graph();
    let result = FrontierRelaxation::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.source(), 0);
    assert_eq!(result.distances(), vec![0, 5, 11, 13]);
    assert_eq!(result.path(0).unwrap(), &[0]);
    assert_eq!(result.path(1).unwrap(), &[0, 1]);
    assert_eq!(result.path(2).unwrap(), &[0, 1, 2]);
    assert_eq!(result.path(3).unwrap(), &[0, 1, 2, 3]);
    assert_eq!(result.reachable_count(), 4);
}

#[test]
fn test_sample_graph_round_counters() {
    let graph = sample_graph();
    let (_, stats) = FrontierRelaxation::new().compute_with_stats(&graph, 0).unwrap();

    // {0}, then {1, 2}, then {2, 3} which improves nothing
    assert_eq!(
        stats,
        RelaxationStats {
            rounds: 3,
            relaxations: 4,
            edges_scanned: 2 + 5 + 4,
        }
    );
}

#[test]
fn test_sample_graph_from_other_source() {
    let graph = sample_graph();
    let result = FrontierRelaxation::new().compute_shortest_paths(&graph, 3).unwrap();

    assert_eq!(result.distances(), vec![13, 8, 2, 0]);
    assert_eq!(result.path(0).unwrap(), &[3, 2, 1, 0]);
    assert_eq!(result.predecessor(0), Some(1));
    assert_eq!(result.predecessor(3), None);
}

#[test]
fn test_isolated_node_is_unreachable() {
    let mut nodes = sample_graph().into_nodes();
    nodes.push(Node::new(4));
    let graph = DirectedGraph::build(nodes);

    let result = FrontierRelaxation::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distance(4), Some(u32::MAX));
    assert!(!result.is_reachable(4));
    assert!(result.path(4).unwrap().is_empty());
    assert_eq!(result.predecessor(4), None);
    assert_eq!(result.reachable_count(), 4);
}

#[test]
fn test_isolated_source_reaches_only_itself() {
    let graph = DirectedGraph::build(vec![
        Node::new(0).with_edge(1, 1),
        Node::new(1).with_edge(1, 0),
        Node::new(2),
    ]);

    let result = FrontierRelaxation::new().compute_shortest_paths(&graph, 2).unwrap();

    assert_eq!(result.distance(2), Some(0));
    assert_eq!(result.path(2).unwrap(), &[2]);
    assert!(!result.is_reachable(0));
    assert!(!result.is_reachable(1));
}

#[test]
fn test_misplaced_node_fails_without_result() {
    let graph = DirectedGraph::build(vec![
        Node::new(1).with_edge(5, 0),
        Node::new(0).with_edge(5, 1),
    ]);

    let err = FrontierRelaxation::new().compute_shortest_paths(&graph, 0).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidGraph(InvalidGraph::MisplacedNode { position: 0, id: 1 })
    );

    // The oracle applies the same precondition
    let err = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap_err();
    assert!(matches!(err, Error::InvalidGraph(_)));
}

#[test]
fn test_gap_in_ids_is_invalid() {
    let graph: DirectedGraph<u32> = DirectedGraph::build(vec![Node::new(0), Node::new(2)]);

    let err = FrontierRelaxation::new().compute_shortest_paths(&graph, 0).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidGraph(InvalidGraph::MisplacedNode { position: 1, id: 2 })
    );
}

#[test]
fn test_dangling_edge_is_invalid() {
    let graph = DirectedGraph::build(vec![Node::new(0).with_edge(1, 1), Node::new(1).with_edge(3, 7)]);

    let err = FrontierRelaxation::new().compute_shortest_paths(&graph, 0).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidGraph(InvalidGraph::DanglingEdge { from: 1, target: 7 })
    );
}

#[test]
fn test_eager_build_rejects_what_lazy_build_defers() {
    let nodes = vec![Node::new(1).with_edge(5u32, 0), Node::new(0)];

    let lazy = DirectedGraph::build(nodes.clone());
    assert!(FrontierRelaxation::new().compute_shortest_paths(&lazy, 0).is_err());

    let eager = DirectedGraph::build_checked(nodes);
    assert_eq!(
        eager.unwrap_err(),
        Error::InvalidGraph(InvalidGraph::MisplacedNode { position: 0, id: 1 })
    );

    assert!(DirectedGraph::build_checked(sample_graph().into_nodes()).is_ok());
}

#[test]
fn test_unknown_source() {
    let graph = sample_graph();
    let err = FrontierRelaxation::new().compute_shortest_paths(&graph, 4).unwrap_err();
    assert_eq!(err, Error::SourceNotFound(4));

    let empty: DirectedGraph<u32> = DirectedGraph::empty();
    let err = FrontierRelaxation::new().compute_shortest_paths(&empty, 0).unwrap_err();
    assert_eq!(err, Error::SourceNotFound(0));
}

#[test]
fn test_self_loops_and_zero_weights() {
    let graph = DirectedGraph::build(vec![
        Node::new(0).with_edge(0, 0).with_edge(0, 1),
        Node::new(1).with_edge(3, 1).with_edge(0, 2).with_edge(0, 0),
        Node::new(2),
    ]);

    let result = FrontierRelaxation::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distances(), vec![0, 0, 0]);
    assert_eq!(result.path(0).unwrap(), &[0]);
    assert_eq!(result.path(1).unwrap(), &[0, 1]);
    assert_eq!(result.path(2).unwrap(), &[0, 1, 2]);
}

#[test]
fn test_parallel_edges_use_the_cheapest() {
    let graph = DirectedGraph::build(vec![
        Node::new(0).with_edge(7, 1).with_edge(3, 1).with_edge(9, 1),
        Node::new(1),
    ]);

    let result = FrontierRelaxation::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distance(1), Some(3));
    assert_eq!(result.path(1).unwrap(), &[0, 1]);
}

#[test]
fn test_cheaper_route_found_in_a_later_round() {
    // 0 -> 1 directly costs 10; 0 -> 2 -> 3 -> 1 costs 3 but is only seen in round 3
    let graph = DirectedGraph::build(vec![
        Node::new(0).with_edge(10, 1).with_edge(1, 2),
        Node::new(1).with_edge(1, 4),
        Node::new(2).with_edge(1, 3),
        Node::new(3).with_edge(1, 1),
        Node::new(4),
    ]);

    let (result, stats) = FrontierRelaxation::new().compute_with_stats(&graph, 0).unwrap();

    assert_eq!(result.distances(), vec![0, 3, 1, 2, 4]);
    assert_eq!(result.path(1).unwrap(), &[0, 2, 3, 1]);
    // Node 4's first path went through the expensive edge and is replaced
    assert_eq!(result.path(4).unwrap(), &[0, 2, 3, 1, 4]);
    assert_eq!(stats.rounds, 5);
    assert_eq!(stats.relaxations, 6);
}

#[test]
fn test_node_improved_twice_in_a_round_is_expanded_once() {
    let graph = DirectedGraph::build(vec![
        Node::new(0).with_edge(1, 1).with_edge(1, 2),
        Node::new(1).with_edge(5, 3),
        Node::new(2).with_edge(4, 3),
        Node::new(3).with_edge(1, 4),
        Node::new(4),
    ]);

    let (result, stats) = FrontierRelaxation::new().compute_with_stats(&graph, 0).unwrap();

    assert_eq!(result.distance(3), Some(5));
    assert_eq!(result.path(3).unwrap(), &[0, 2, 3]);
    assert_eq!(result.path(4).unwrap(), &[0, 2, 3, 4]);
    assert_eq!(stats.relaxations, 5);
    // Node 3's single outgoing edge is scanned once, in round 3
    assert_eq!(stats.edges_scanned, 5);
    assert_eq!(stats.rounds, 4);
}

#[test]
fn test_repeated_runs_are_identical() {
    let graph = sample_graph();
    let engine = FrontierRelaxation::new().with_round_log(true);

    let first = engine.compute_shortest_paths(&graph, 0).unwrap();
    let second = engine.compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_distance_saturates_instead_of_overflowing() {
    let graph = DirectedGraph::build(vec![
        Node::new(0).with_edge(u32::MAX - 1, 1),
        Node::new(1).with_edge(10, 2),
        Node::new(2),
    ]);

    let result = FrontierRelaxation::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distance(1), Some(u32::MAX - 1));
    assert!(!result.is_reachable(2));
    assert!(result.path(2).unwrap().is_empty());
}

#[test]
fn test_float_weights() {
    let mut builder = GraphBuilder::with_nodes(4);
    builder.add_edge(0, 1, OrderedFloat(0.5));
    builder.add_edge(1, 2, OrderedFloat(0.25));
    builder.add_edge(0, 2, OrderedFloat(1.0));
    builder.add_edge(2, 3, OrderedFloat(1.5));
    let graph = builder.build();

    let result = FrontierRelaxation::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distance(2), Some(OrderedFloat(0.75)));
    assert_eq!(result.distance(3), Some(OrderedFloat(2.25)));
    assert_eq!(result.path(3).unwrap(), &[0, 1, 2, 3]);
}

#[test]
fn test_dijkstra_matches_sample() {
    let graph = sample_graph();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distances(), vec![0, 5, 11, 13]);
    assert_eq!(result.path(3).unwrap(), &[0, 1, 2, 3]);
    assert_eq!(
        <Dijkstra as ShortestPathAlgorithm<u32, DirectedGraph<u32>>>::name(&Dijkstra::new()),
        "Dijkstra"
    );
}

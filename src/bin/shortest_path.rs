use std::env;
use std::process::ExitCode;

use frontier_sssp::{DirectedGraph, FrontierRelaxation, Graph, Node, PathTable};
use log::error;

/// The four-node sample: 0 -5- 1 -6- 2 -2- 3, plus a direct 0 -15- 2 link,
/// every connection usable both ways
fn sample_graph() -> DirectedGraph<u32> {
    DirectedGraph::build(vec![
        Node::new(0).with_edge(5, 1).with_edge(15, 2),
        Node::new(1).with_edge(5, 0).with_edge(6, 2),
        Node::new(2).with_edge(15, 0).with_edge(6, 1).with_edge(2, 3),
        Node::new(3).with_edge(2, 2),
    ])
}

fn main() -> ExitCode {
    env_logger::init();

    // Optional source node as the first argument
    let args: Vec<String> = env::args().collect();
    let source = if args.len() > 1 {
        match args[1].parse() {
            Ok(source) => source,
            Err(_) => {
                error!("source must be a node id, got {:?}", args[1]);
                return ExitCode::FAILURE;
            }
        }
    } else {
        0
    };

    let graph = sample_graph();
    println!(
        "Graph has {} nodes and {} edges, source {}",
        graph.node_count(),
        graph.edge_count(),
        source
    );

    match FrontierRelaxation::new().compute_with_stats(&graph, source) {
        Ok((result, stats)) => {
            print!("\n{}", PathTable::new(&result));
            println!(
                "\n{} rounds, {} relaxations, {} edges scanned",
                stats.rounds, stats.relaxations, stats.edges_scanned
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

//! Structural checks on a graph before it is traversed.

use log::warn;

use crate::graph::traits::{Graph, Weight};
use crate::{InvalidGraph, Result};

/// Validate that the node at every position `i` declares `id == i`, and that
/// every edge targets a node that exists.
pub fn validate_indexing<W, G>(graph: &G) -> Result<()>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    let n = graph.node_count();

    for position in 0..n {
        match graph.node_id(position) {
            Some(id) if id == position => {}
            Some(id) => {
                warn!("node at position {} declares id {}", position, id);
                return Err(InvalidGraph::MisplacedNode { position, id }.into());
            }
            None => {
                return Err(InvalidGraph::MisplacedNode {
                    position,
                    id: usize::MAX,
                }
                .into());
            }
        }
    }

    // Targets are ids, so a target outside 0..n has nothing to resolve to
    for from in 0..n {
        if let Some(edge) = graph.outgoing_edges(from).find(|edge| edge.target >= n) {
            warn!("edge from node {} targets unknown node {}", from, edge.target);
            return Err(InvalidGraph::DanglingEdge {
                from,
                target: edge.target,
            }
            .into());
        }
    }

    Ok(())
}

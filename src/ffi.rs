//! C ABI over the graph builder and the frontier relaxation.
//!
//! Every handle returned here must be released with its matching `*_free`
//! function. Null handles are accepted everywhere and treated as a failure.

use crate::algorithm::frontier::FrontierRelaxation;
use crate::graph::GraphBuilder;
use libc::c_double;
use ordered_float::OrderedFloat;

/// Opaque graph handle under construction
pub struct FfiGraph {
    builder: GraphBuilder<OrderedFloat<f64>>,
}

#[no_mangle]
pub extern "C" fn frontier_graph_new() -> *mut FfiGraph {
    Box::into_raw(Box::new(FfiGraph {
        builder: GraphBuilder::new(),
    }))
}

/// Adds a node and returns its id, or `usize::MAX` for a null handle
#[no_mangle]
pub extern "C" fn frontier_graph_add_node(g: *mut FfiGraph) -> usize {
    match unsafe { g.as_mut() } {
        Some(graph) => graph.builder.add_node(),
        None => usize::MAX,
    }
}

/// Adds an edge. Returns false for a null handle, an unknown endpoint, or a
/// weight that is negative, infinite or NaN.
#[no_mangle]
pub extern "C" fn frontier_graph_add_edge(
    g: *mut FfiGraph,
    from: usize,
    to: usize,
    weight: c_double,
) -> bool {
    if !weight.is_finite() {
        return false;
    }
    match unsafe { g.as_mut() } {
        Some(graph) => graph.builder.add_edge(from, to, OrderedFloat(weight)),
        None => false,
    }
}

#[no_mangle]
pub extern "C" fn frontier_graph_free(g: *mut FfiGraph) {
    if !g.is_null() {
        unsafe {
            drop(Box::from_raw(g));
        }
    }
}

/// Per-node arrays of length `len`, indexed by node id.
///
/// Distances are `INFINITY` for unreachable nodes; predecessors are
/// `usize::MAX` for the source and unreachable nodes.
#[repr(C)]
pub struct FfiResult {
    pub distances: *mut c_double,
    pub predecessors: *mut usize,
    pub len: usize,
}

#[no_mangle]
pub extern "C" fn frontier_result_free(res: *mut FfiResult) {
    if !res.is_null() {
        unsafe {
            if !(*res).distances.is_null() {
                drop(Vec::from_raw_parts((*res).distances, (*res).len, (*res).len));
            }
            if !(*res).predecessors.is_null() {
                drop(Vec::from_raw_parts((*res).predecessors, (*res).len, (*res).len));
            }
            drop(Box::from_raw(res));
        }
    }
}

/// Returns null for a null handle or when the source is not a node of the graph
#[no_mangle]
pub extern "C" fn frontier_compute_shortest_paths(
    g: *const FfiGraph,
    source: usize,
) -> *mut FfiResult {
    let graph = match unsafe { g.as_ref() } {
        Some(graph) => graph.builder.clone().build(),
        None => return std::ptr::null_mut(),
    };
    match FrontierRelaxation::new().compute_with_stats(&graph, source) {
        Ok((result, _)) => {
            let len = result.len();
            let distances: Vec<c_double> = result
                .iter()
                .map(|(node, distance, _)| {
                    if result.is_reachable(node) {
                        distance.into_inner()
                    } else {
                        f64::INFINITY
                    }
                })
                .collect();
            let predecessors: Vec<usize> = (0..len)
                .map(|node| result.predecessor(node).unwrap_or(usize::MAX))
                .collect();
            // Boxed slices have capacity == len, which frontier_result_free relies on
            let distances = Box::into_raw(distances.into_boxed_slice()) as *mut c_double;
            let predecessors = Box::into_raw(predecessors.into_boxed_slice()) as *mut usize;
            Box::into_raw(Box::new(FfiResult {
                distances,
                predecessors,
                len,
            }))
        }
        Err(err) => {
            log::warn!("ffi shortest paths from {} failed: {}", source, err);
            std::ptr::null_mut()
        }
    }
}

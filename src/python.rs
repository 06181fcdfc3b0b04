use crate::algorithm::frontier::FrontierRelaxation;
use crate::graph::GraphBuilder;
use ordered_float::OrderedFloat;
use pyo3::prelude::*;

#[pyclass]
pub struct PyGraph {
    builder: GraphBuilder<OrderedFloat<f64>>,
}

#[pymethods]
impl PyGraph {
    #[new]
    fn new() -> Self {
        PyGraph {
            builder: GraphBuilder::new(),
        }
    }

    fn add_node(&mut self) -> usize {
        self.builder.add_node()
    }

    /// Returns False for an unknown endpoint or a negative, infinite or NaN weight
    fn add_edge(&mut self, from: usize, to: usize, weight: f64) -> bool {
        weight.is_finite() && self.builder.add_edge(from, to, OrderedFloat(weight))
    }
}

#[pyclass]
pub struct PyFrontierRelaxation {
    inner: FrontierRelaxation,
}

#[pymethods]
impl PyFrontierRelaxation {
    #[new]
    fn new() -> Self {
        PyFrontierRelaxation {
            inner: FrontierRelaxation::new(),
        }
    }

    /// Returns `(distances, paths)`; unreachable nodes get `None` and an empty path
    fn compute_shortest_paths(
        &self,
        graph: &PyGraph,
        source: usize,
    ) -> PyResult<(Vec<Option<f64>>, Vec<Vec<usize>>)> {
        let graph = graph.builder.clone().build();
        let (result, _) = self
            .inner
            .compute_with_stats(&graph, source)
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))?;
        let distances = result
            .iter()
            .map(|(node, distance, _)| result.is_reachable(node).then(|| distance.into_inner()))
            .collect();
        let paths = result.iter().map(|(_, _, path)| path.to_vec()).collect();
        Ok((distances, paths))
    }
}

#[pymodule]
fn frontier_sssp(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyGraph>()?;
    m.add_class::<PyFrontierRelaxation>()?;
    Ok(())
}

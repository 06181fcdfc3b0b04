use crate::graph::{DirectedGraph, GraphBuilder, Weight};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use std::collections::HashSet;

/// Generates a random directed graph with `n` nodes, each with up to
/// `edges_per_node` distinct outgoing edges to uniformly chosen targets.
/// Weights are drawn from `weight`.
pub fn generate_random<W, R, F>(
    n: usize,
    edges_per_node: usize,
    rng: &mut R,
    mut weight: F,
) -> DirectedGraph<W>
where
    W: Weight,
    R: Rng + ?Sized,
    F: FnMut(&mut R) -> W,
{
    let mut builder = GraphBuilder::with_nodes(n);
    if n < 2 {
        return builder.build();
    }

    let fanout = edges_per_node.min(n - 1);
    for from in 0..n {
        let mut targets = HashSet::with_capacity(fanout);
        while targets.len() < fanout {
            let to = rng.gen_range(0..n);
            if to != from && targets.insert(to) {
                let w = weight(rng);
                builder.add_edge(from, to, w);
            }
        }
    }

    builder.build()
}

/// Generates a width x height grid with 4-connectivity in both directions.
/// Node `(x, y)` has id `y * width + x`.
pub fn generate_grid<W, R, F>(width: usize, height: usize, rng: &mut R, mut weight: F) -> DirectedGraph<W>
where
    W: Weight,
    R: Rng + ?Sized,
    F: FnMut(&mut R) -> W,
{
    let mut builder = GraphBuilder::with_nodes(width * height);

    let index = |x: usize, y: usize| y * width + x;

    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);
            if x + 1 < width {
                let w = weight(rng);
                builder.add_edge(current, index(x + 1, y), w);
                let w = weight(rng);
                builder.add_edge(index(x + 1, y), current, w);
            }
            if y + 1 < height {
                let w = weight(rng);
                builder.add_edge(current, index(x, y + 1), w);
                let w = weight(rng);
                builder.add_edge(index(x, y + 1), current, w);
            }
        }
    }

    builder.build()
}

/// Generates a random geometric graph in the unit square.
/// Points within distance `r` are connected both ways, weighted by their distance.
pub fn generate_geometric<R>(n: usize, r: f64, rng: &mut R) -> DirectedGraph<OrderedFloat<f64>>
where
    R: Rng + ?Sized,
{
    let mut builder = GraphBuilder::with_nodes(n);

    let points: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
        .collect();

    for i in 0..n {
        for j in 0..n {
            if i != j {
                let (x1, y1) = points[i];
                let (x2, y2) = points[j];
                let dist = ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt();

                if dist <= r {
                    builder.add_edge(i, j, OrderedFloat(dist));
                }
            }
        }
    }

    builder.build()
}

//! Plain-text rendering of a result set.

use std::fmt;

use crate::algorithm::PathResultSet;
use crate::graph::Weight;

/// Table of `distance` and `path` per node, one row per node in id order.
///
/// ```text
/// node    distance    path
/// 0       0           0
/// 1       5           0 1
/// 4       -           unreachable
/// ```
pub struct PathTable<'a, W>
where
    W: Weight,
{
    result: &'a PathResultSet<W>,
}

impl<'a, W> PathTable<'a, W>
where
    W: Weight,
{
    pub fn new(result: &'a PathResultSet<W>) -> Self {
        PathTable { result }
    }
}

impl<W> fmt::Display for PathTable<'_, W>
where
    W: Weight + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<8}{:<12}path", "node", "distance")?;
        for (id, distance, path) in self.result.iter() {
            if distance == W::unreachable() {
                writeln!(f, "{:<8}{:<12}unreachable", id, "-")?;
                continue;
            }
            let hops: Vec<String> = path.iter().map(|node| node.to_string()).collect();
            writeln!(f, "{:<8}{:<12}{}", id, distance.to_string(), hops.join(" "))?;
        }
        Ok(())
    }
}

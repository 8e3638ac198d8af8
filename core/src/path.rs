//! Result of a shortest-path query

use serde::Serialize;
use std::fmt;

/// Edge weight
pub type Weight = u64;

/// Sum of edge weights along a path; wide enough for any simple path
pub type Distance = u128;

/// Ordered node sequence from start to end (inclusive) and its total weight.
///
/// A path never visits the same node twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path {
    nodes: Vec<String>,
    total_weight: Distance,
}

impl Path {
    pub(crate) fn new(nodes: Vec<String>, total_weight: Distance) -> Self {
        Self {
            nodes,
            total_weight,
        }
    }

    /// Nodes in traversal order
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Sum of edge weights along the path
    pub fn total_weight(&self) -> Distance {
        self.total_weight
    }

    pub fn start(&self) -> &str {
        &self.nodes[0]
    }

    pub fn end(&self) -> &str {
        &self.nodes[self.nodes.len() - 1]
    }

    /// Number of edges traversed
    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Consecutive node pairs, i.e. the edges walked
    pub fn hops(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.nodes
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }

    /// Whether the undirected edge {a, b} is one of the path's hops.
    ///
    /// Renderers use this to highlight the route.
    pub fn traverses(&self, a: &str, b: &str) -> bool {
        self.hops()
            .any(|(x, y)| (x == a && y == b) || (x == b && y == a))
    }

    pub fn into_nodes(self) -> Vec<String> {
        self.nodes
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.nodes.join(" → "))
    }
}

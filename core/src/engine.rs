//! Thread-safe handle over a single graph

use crate::error::GraphError;
use crate::graph::{Graph, Snapshot};
use crate::path::{Path, Weight};
use parking_lot::Mutex;
use std::sync::Arc;

/// Shared graph engine.
///
/// Every operation holds one lock for its whole duration, so a query always
/// runs against a consistent graph and mutations are serialized. Clones share
/// the same graph.
#[derive(Clone, Default)]
pub struct Engine {
    graph: Arc<Mutex<Graph>>,
}

impl Engine {
    /// Create an engine over an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine that takes ownership of an existing graph
    pub fn from_graph(graph: Graph) -> Self {
        Self {
            graph: Arc::new(Mutex::new(graph)),
        }
    }

    pub fn add_connection(&self, a: &str, b: &str, weight: i64) -> Result<(), GraphError> {
        self.graph.lock().add_connection(a, b, weight)
    }

    pub fn remove_connection(&self, a: &str, b: &str) -> Result<(), GraphError> {
        self.graph.lock().remove_connection(a, b)
    }

    pub fn shortest_path(&self, start: &str, end: &str) -> Result<Path, GraphError> {
        self.graph.lock().shortest_path(start, end)
    }

    pub fn contains_node(&self, node: &str) -> bool {
        self.graph.lock().contains_node(node)
    }

    pub fn weight(&self, a: &str, b: &str) -> Option<Weight> {
        self.graph.lock().weight(a, b)
    }

    /// Consistent copy of all nodes and edges
    pub fn snapshot(&self) -> Snapshot {
        self.graph.lock().snapshot()
    }

    /// Run several reads under one lock
    pub fn read<R>(&self, f: impl FnOnce(&Graph) -> R) -> R {
        f(&self.graph.lock())
    }

    /// Run several mutations under one lock
    ///
    /// # Example
    /// ```
    /// use saferoute_core::Engine;
    ///
    /// let engine = Engine::new();
    /// engine
    ///     .write(|g| {
    ///         g.add_connection("Camp", "Bridge", 4)?;
    ///         g.add_connection("Bridge", "Hospital", 3)
    ///     })
    ///     .unwrap();
    /// assert_eq!(engine.shortest_path("Camp", "Hospital").unwrap().total_weight(), 7);
    /// ```
    pub fn write<R>(&self, f: impl FnOnce(&mut Graph) -> R) -> R {
        f(&mut self.graph.lock())
    }
}

//! # SafeRoute Core
//!
//! Mutable, undirected, weighted road graph with shortest-path queries.
//!
//! ## Example
//!
//! ```rust
//! use saferoute_core::{Graph, GraphError};
//!
//! let mut graph = Graph::new();
//! graph.add_connection("A", "B", 4).unwrap();
//! graph.add_connection("B", "C", 3).unwrap();
//! graph.add_connection("A", "C", 10).unwrap();
//!
//! let path = graph.shortest_path("A", "C").unwrap();
//! assert_eq!(path.nodes(), ["A", "B", "C"]);
//! assert_eq!(path.total_weight(), 7);
//!
//! graph.remove_connection("B", "C").unwrap();
//! graph.remove_connection("A", "C").unwrap();
//! assert!(matches!(graph.shortest_path("A", "C"), Err(GraphError::NoPath(..))));
//! ```

pub mod engine;
pub mod error;
pub mod graph;
pub mod path;

pub use engine::Engine;
pub use error::GraphError;
pub use graph::{Edge, Graph, Snapshot};
pub use path::{Distance, Path, Weight};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_serializes_for_renderers() {
        let engine = Engine::new();
        engine.add_connection("A", "B", 4).unwrap();
        let json = serde_json::to_value(engine.snapshot()).unwrap();
        assert_eq!(json["nodes"], serde_json::json!(["A", "B"]));
        assert_eq!(json["edges"][0]["weight"], 4);
    }

    #[test]
    fn path_serializes_nodes_and_weight() {
        let engine = Engine::new();
        engine.add_connection("A", "B", 4).unwrap();
        let path = engine.shortest_path("A", "B").unwrap();
        let json = serde_json::to_value(&path).unwrap();
        assert_eq!(json["nodes"], serde_json::json!(["A", "B"]));
        assert_eq!(json["total_weight"], 4);
    }
}

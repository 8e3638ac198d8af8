//! Graph store: nodes, undirected weighted edges, shortest-path search

use crate::error::GraphError;
use crate::path::{Distance, Path, Weight};
use log::{debug, trace};
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, HashMap};

/// Dense node index, assigned in registration order
type NodeIx = usize;

/// An undirected edge as seen by readers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub a: String,
    pub b: String,
    pub weight: Weight,
}

/// Read-only copy of the graph for rendering collaborators
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub nodes: Vec<String>,
    pub edges: Vec<Edge>,
}

/// Mutable undirected weighted graph
#[derive(Debug, Clone, Default)]
pub struct Graph {
    index: HashMap<String, NodeIx>,
    names: Vec<String>,
    /// Neighbor index → weight. Each edge is stored on both endpoints.
    adjacency: Vec<BTreeMap<NodeIx, Weight>>,
    edge_count: usize,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the weight of edge {a, b}, creating either node on first sight.
    ///
    /// An existing edge between the pair is overwritten. Nothing changes
    /// when the request is rejected.
    pub fn add_connection(&mut self, a: &str, b: &str, weight: i64) -> Result<(), GraphError> {
        validate_id(a)?;
        validate_id(b)?;
        if a == b {
            return Err(GraphError::InvalidInput(format!(
                "self-loop on {} is not allowed",
                a
            )));
        }
        let weight = Weight::try_from(weight).map_err(|_| {
            GraphError::InvalidInput(format!("negative weight {} for {}-{}", weight, a, b))
        })?;

        let ia = self.intern(a);
        let ib = self.intern(b);
        let previous = self.adjacency[ia].insert(ib, weight);
        self.adjacency[ib].insert(ia, weight);

        match previous {
            Some(old) => debug!("updated {} ↔ {}: {} -> {}", a, b, old, weight),
            None => {
                self.edge_count += 1;
                debug!("added {} ↔ {} ({})", a, b, weight);
            }
        }
        Ok(())
    }

    /// Delete edge {a, b}. Both nodes stay in the graph.
    pub fn remove_connection(&mut self, a: &str, b: &str) -> Result<(), GraphError> {
        let not_found = || GraphError::NotFound(a.to_string(), b.to_string());
        let (Some(&ia), Some(&ib)) = (self.index.get(a), self.index.get(b)) else {
            return Err(not_found());
        };
        self.adjacency[ia].remove(&ib).ok_or_else(not_found)?;
        self.adjacency[ib].remove(&ia);
        self.edge_count -= 1;
        debug!("removed {} ↔ {}", a, b);
        Ok(())
    }

    /// Minimum-weight path from `start` to `end`.
    ///
    /// Both nodes must have been registered, otherwise `UnknownNode` is
    /// returned before any traversal.
    pub fn shortest_path(&self, start: &str, end: &str) -> Result<Path, GraphError> {
        let source = self.lookup(start)?;
        let target = self.lookup(end)?;

        let n = self.names.len();
        let mut dist: Vec<Option<Distance>> = vec![None; n];
        let mut prev: Vec<Option<NodeIx>> = vec![None; n];
        let mut settled = vec![false; n];
        // (distance, registration index): equal distances pop oldest node first
        let mut frontier: BinaryHeap<Reverse<(Distance, NodeIx)>> = BinaryHeap::new();

        dist[source] = Some(0);
        frontier.push(Reverse((0, source)));

        while let Some(Reverse((cost, node))) = frontier.pop() {
            if settled[node] {
                continue;
            }
            settled[node] = true;

            if node == target {
                let path = self.reconstruct(&prev, target, cost);
                debug!("path {} -> {}: {} ({})", start, end, path, cost);
                return Ok(path);
            }

            for (&next, &weight) in &self.adjacency[node] {
                if settled[next] {
                    continue;
                }
                let candidate = cost + Distance::from(weight);
                if dist[next].map_or(true, |known| candidate < known) {
                    trace!(
                        "relax {} via {}: {}",
                        self.names[next],
                        self.names[node],
                        candidate
                    );
                    dist[next] = Some(candidate);
                    prev[next] = Some(node);
                    frontier.push(Reverse((candidate, next)));
                }
            }
        }

        debug!("no path {} -> {}", start, end);
        Err(GraphError::NoPath(start.to_string(), end.to_string()))
    }

    fn reconstruct(&self, prev: &[Option<NodeIx>], target: NodeIx, cost: Distance) -> Path {
        let mut order = vec![target];
        let mut cursor = target;
        while let Some(p) = prev[cursor] {
            order.push(p);
            cursor = p;
        }
        order.reverse();
        let nodes = order.into_iter().map(|ix| self.names[ix].clone()).collect();
        Path::new(nodes, cost)
    }

    /// Check if a node was ever registered
    pub fn contains_node(&self, node: &str) -> bool {
        self.index.contains_key(node)
    }

    /// Weight of edge {a, b}, if present
    pub fn weight(&self, a: &str, b: &str) -> Option<Weight> {
        let ia = *self.index.get(a)?;
        let ib = *self.index.get(b)?;
        self.adjacency[ia].get(&ib).copied()
    }

    /// Number of edges attached to `node` (0 for unknown nodes)
    pub fn degree(&self, node: &str) -> usize {
        self.index
            .get(node)
            .map_or(0, |&ix| self.adjacency[ix].len())
    }

    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Nodes in registration order
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(|s| s.as_str())
    }

    /// Every edge once, earlier-registered endpoint first
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency.iter().enumerate().flat_map(move |(ia, neighbors)| {
            neighbors
                .range(ia + 1..)
                .map(move |(&ib, &weight)| Edge {
                    a: self.names[ia].clone(),
                    b: self.names[ib].clone(),
                    weight,
                })
        })
    }

    /// Copy of all nodes and edges
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            nodes: self.names.clone(),
            edges: self.edges().collect(),
        }
    }

    fn lookup(&self, node: &str) -> Result<NodeIx, GraphError> {
        self.index
            .get(node)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode(node.to_string()))
    }

    fn intern(&mut self, node: &str) -> NodeIx {
        if let Some(&ix) = self.index.get(node) {
            return ix;
        }
        let ix = self.names.len();
        self.names.push(node.to_string());
        self.adjacency.push(BTreeMap::new());
        self.index.insert(node.to_string(), ix);
        ix
    }
}

fn validate_id(node: &str) -> Result<(), GraphError> {
    if node.is_empty() {
        return Err(GraphError::InvalidInput(
            "node identifier must not be empty".to_string(),
        ));
    }
    Ok(())
}

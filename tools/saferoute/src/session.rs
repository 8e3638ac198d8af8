//! Executes commands against an engine and reports outcomes

use crate::command::Command;
use log::{info, warn};
use saferoute_core::{Engine, GraphError, Path, Snapshot};
use serde::Serialize;
use std::fmt;

/// Result of one command, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Added { from: String, to: String, weight: i64 },
    Blocked { from: String, to: String },
    Route { path: Path },
    Graph { graph: Snapshot },
    Warning { message: String },
    Error { message: String, code: i32 },
}

impl Outcome {
    fn from_error(err: GraphError) -> Self {
        if err.is_warning() {
            warn!("{}", err);
            return Outcome::Warning {
                message: "Road does not exist!".to_string(),
            };
        }
        let message = match &err {
            GraphError::NoPath(..) => "No safe path found.".to_string(),
            other => other.to_string(),
        };
        Outcome::Error {
            message,
            code: err.code(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error { .. })
    }

    /// Numeric status of the outcome (0 for anything but an error)
    pub fn code(&self) -> i32 {
        match self {
            Outcome::Error { code, .. } => *code,
            _ => saferoute_core::error::CODE_OK,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Added { from, to, weight } => {
                write!(f, "Path added: {} ↔ {} (Distance: {})", from, to, weight)
            }
            Outcome::Blocked { from, to } => write!(f, "Road blocked between {} and {}", from, to),
            Outcome::Route { path } => {
                write!(f, "Path: {}\nDistance: {}", path, path.total_weight())
            }
            Outcome::Graph { graph } => {
                write!(f, "Nodes: {}", graph.nodes.join(", "))?;
                for edge in &graph.edges {
                    write!(f, "\n  {} ↔ {} ({})", edge.a, edge.b, edge.weight)?;
                }
                Ok(())
            }
            Outcome::Warning { message } => write!(f, "Warning: {}", message),
            Outcome::Error { message, .. } => write!(f, "Error: {}", message),
        }
    }
}

/// A command session bound to one engine
#[derive(Clone, Default)]
pub struct Session {
    engine: Engine,
}

impl Session {
    pub fn new(engine: Engine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Parse and execute one input line. Returns `None` for blank lines and comments.
    pub fn execute_line(&self, line: &str) -> Option<Outcome> {
        match Command::parse(line) {
            Ok(Some(command)) => Some(self.execute(command)),
            Ok(None) => None,
            Err(err) => Some(Outcome::from_error(err)),
        }
    }

    pub fn execute(&self, command: Command) -> Outcome {
        let result = match command {
            Command::Add { from, to, weight } => self
                .engine
                .add_connection(&from, &to, weight)
                .map(|()| Outcome::Added { from, to, weight }),
            Command::Block { from, to } => self
                .engine
                .remove_connection(&from, &to)
                .map(|()| Outcome::Blocked { from, to }),
            Command::Path { start, end } => self
                .engine
                .shortest_path(&start, &end)
                .map(|path| Outcome::Route { path }),
            Command::Show => Ok(Outcome::Graph {
                graph: self.engine.snapshot(),
            }),
        };
        match result {
            Ok(outcome) => {
                info!("{}", outcome);
                outcome
            }
            Err(err) => Outcome::from_error(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_follow_the_road_metaphor() {
        let session = Session::default();
        let added = session.execute_line("add A-B-4").unwrap();
        assert_eq!(added.to_string(), "Path added: A ↔ B (Distance: 4)");

        let route = session.execute_line("path A B").unwrap();
        assert_eq!(route.to_string(), "Path: A → B\nDistance: 4");

        let blocked = session.execute_line("block A-B").unwrap();
        assert_eq!(blocked.to_string(), "Road blocked between A and B");

        let again = session.execute_line("block A-B").unwrap();
        assert_eq!(again.to_string(), "Warning: Road does not exist!");
        assert!(!again.is_error());

        let none = session.execute_line("path A B").unwrap();
        assert_eq!(none.to_string(), "Error: No safe path found.");
        assert_eq!(none.code(), saferoute_core::error::CODE_NO_PATH);
    }

    #[test]
    fn unknown_node_and_bad_input_are_distinct_errors() {
        let session = Session::default();
        session.execute_line("add A-B-1");
        let unknown = session.execute_line("path A Z").unwrap();
        assert_eq!(unknown.code(), saferoute_core::error::CODE_UNKNOWN_NODE);
        let negative = session.execute_line("add A-C--2").unwrap();
        assert_eq!(negative.code(), saferoute_core::error::CODE_INVALID_INPUT);
        let malformed = session.execute_line("add A-C").unwrap();
        assert_eq!(malformed.code(), saferoute_core::error::CODE_INVALID_INPUT);
        assert!(!session.engine().contains_node("C"));
    }

    #[test]
    fn comments_produce_no_outcome() {
        let session = Session::default();
        assert!(session.execute_line("# nothing").is_none());
    }

    #[test]
    fn outcome_json_is_tagged() {
        let session = Session::default();
        session.execute_line("add A-B-4");
        let route = session.execute_line("path A B").unwrap();
        let json = serde_json::to_value(&route).unwrap();
        assert_eq!(json["status"], "route");
        assert_eq!(json["path"]["total_weight"], 4);
    }
}

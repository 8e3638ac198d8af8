//! YAML scenario files: a list of command lines run in order

use crate::session::{Outcome, Session};
use anyhow::{Context as AnyhowContext, Result};
use log::debug;
use saferoute_core::error::CODE_OK;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub name: Option<String>,
    #[serde(default)]
    pub steps: Vec<String>,
}

impl Scenario {
    pub fn from_yaml(s: &str) -> Result<Scenario> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Scenario> {
        let s = fs::read_to_string(path)
            .with_context(|| format!("read {}", path.display()))?;
        Scenario::from_yaml(&s).with_context(|| format!("parse {}", path.display()))
    }

    /// Run every step; with `fail_fast` stop after the first error outcome.
    pub fn run(&self, session: &Session, fail_fast: bool) -> Vec<Outcome> {
        debug!(
            "running scenario {} ({} steps)",
            self.name.as_deref().unwrap_or("<unnamed>"),
            self.steps.len()
        );
        let mut outcomes = Vec::new();
        for step in &self.steps {
            let Some(outcome) = session.execute_line(step) else {
                continue;
            };
            let stop = fail_fast && outcome.is_error();
            outcomes.push(outcome);
            if stop {
                break;
            }
        }
        outcomes
    }

    /// Process status for a run: the first error's code, or `CODE_OK`
    pub fn exit_code(outcomes: &[Outcome]) -> i32 {
        outcomes
            .iter()
            .find(|o| o.is_error())
            .map_or(CODE_OK, Outcome::code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_default_to_empty() {
        let scenario = Scenario::from_yaml("name: empty\n").unwrap();
        assert_eq!(scenario.name.as_deref(), Some("empty"));
        assert!(scenario.steps.is_empty());
    }

    #[test]
    fn fail_fast_stops_at_first_error() {
        let scenario = Scenario::from_yaml(
            "steps:\n  - add A-B-1\n  - path A Z\n  - add B-C-1\n",
        )
        .unwrap();
        let session = Session::default();
        let outcomes = scenario.run(&session, true);
        assert_eq!(outcomes.len(), 2);
        assert!(!session.engine().contains_node("C"));
        assert_eq!(
            Scenario::exit_code(&outcomes),
            saferoute_core::error::CODE_UNKNOWN_NODE
        );
    }

    #[test]
    fn warnings_do_not_change_exit_code() {
        let scenario =
            Scenario::from_yaml("steps:\n  - add A-B-1\n  - block B-C\n").unwrap();
        let outcomes = scenario.run(&Session::default(), true);
        assert_eq!(outcomes.len(), 2);
        assert_eq!(Scenario::exit_code(&outcomes), CODE_OK);
    }

    #[test]
    fn exit_code_uses_first_error() {
        let scenario = Scenario::from_yaml(
            "steps:\n  - add A-A-1\n  - add A-B-1\n  - path A Z\n",
        )
        .unwrap();
        let outcomes = scenario.run(&Session::default(), false);
        assert_eq!(outcomes.len(), 3);
        assert_eq!(
            Scenario::exit_code(&outcomes),
            saferoute_core::error::CODE_INVALID_INPUT
        );
    }
}

//! Command-line front end for the SafeRoute road graph.

pub mod command;
pub mod config;
pub mod scenario;
pub mod session;

pub use command::Command;
pub use config::OutputFormat;
pub use scenario::Scenario;
pub use session::{Outcome, Session};

use anyhow::Result;
use std::io::Write;

/// Write one outcome in the chosen format
pub fn render(out: &mut impl Write, outcome: &Outcome, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", outcome)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(outcome)?)?,
    }
    Ok(())
}

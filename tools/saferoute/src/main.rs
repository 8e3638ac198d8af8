use anyhow::Result;
use saferoute_cli::{config, render, OutputFormat, Scenario, Session};
use std::io::{self, BufRead};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "saferoute", about = "Find safe routes through a road network")]
struct Opt {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[structopt(short = "v", long = "verbose", parse(from_occurrences), global = true)]
    verbose: u64,

    /// Output format: text or json
    #[structopt(long = "format", default_value = "text", global = true)]
    format: OutputFormat,

    #[structopt(subcommand)]
    cmd: Cmd,
}

#[derive(StructOpt, Debug)]
enum Cmd {
    /// Run a YAML scenario file
    Run {
        #[structopt(parse(from_os_str))]
        input: PathBuf,

        /// Stop at the first error and exit with its status code
        #[structopt(long = "fail-fast")]
        fail_fast: bool,
    },
    /// Read commands from stdin, one per line
    Shell,
}

fn main() -> Result<()> {
    let opt = Opt::from_args();
    config::init_logging(opt.verbose);

    let session = Session::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match opt.cmd {
        Cmd::Run { input, fail_fast } => {
            let scenario = Scenario::load(&input)?;
            let outcomes = scenario.run(&session, fail_fast);
            for outcome in &outcomes {
                render(&mut out, outcome, opt.format)?;
            }
            if fail_fast {
                let code = Scenario::exit_code(&outcomes);
                if code != saferoute_core::error::CODE_OK {
                    std::process::exit(code);
                }
            }
        }
        Cmd::Shell => {
            for line in io::stdin().lock().lines() {
                if let Some(outcome) = session.execute_line(&line?) {
                    render(&mut out, &outcome, opt.format)?;
                }
            }
        }
    }
    Ok(())
}

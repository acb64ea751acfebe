//! The `defuse` binary: an interactive console session that walks an
//! operator through defusing a bomb, one module at a time.

mod console;
mod error;
mod mission;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use defuse_core::bomb::{BombOutcome, BombSolver};
use defuse_core::console::Console;
use defuse_core::edgework::EdgeworkReport;
use defuse_core::pool::{PoolEntry, modules_from_pool};
use defuse_core::solver::ModuleSolver;
use defuse_modules::pools;

use crate::console::StdConsole;
use crate::error::CliError;
use crate::mission::Mission;

/// Exit code for a bomb lost to the strike limit, distinct from software
/// failures.
const EXIT_DETONATED: u8 = 10;

#[derive(Debug, Parser)]
#[command(
    name = "defuse",
    version,
    about = "Expert-side console assistant for cooperative bomb defusal"
)]
struct Args {
    /// Mission file (RON). Defaults to a freeplay session over every
    /// solvable module.
    #[arg(long)]
    mission: Option<PathBuf>,

    /// Log filter when RUST_LOG is unset, e.g. "defuse_core=debug".
    #[arg(long, default_value = "warn")]
    log: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log);
    match run(&args) {
        Ok(BombOutcome::Defused) => ExitCode::SUCCESS,
        Ok(BombOutcome::Detonated) => ExitCode::from(EXIT_DETONATED),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(fallback: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback.to_string()));
    // stderr keeps the operator dialogue on stdout clean
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<BombOutcome, CliError> {
    let mission = match &args.mission {
        Some(path) => mission::load(path)?,
        None => Mission::freeplay(),
    };
    let mut console = StdConsole::new();
    console.emit(&format!("Mission: {}", mission.name));

    let mut solvers: Vec<Box<dyn ModuleSolver>> = Vec::new();
    for name in &mission.fixed {
        let entry = resolve(name)?;
        solvers.push((entry.build)(1));
    }
    for spec in &mission.pools {
        let entries: Vec<PoolEntry> = spec
            .modules
            .iter()
            .map(|name| resolve(name))
            .collect::<Result<_, _>>()?;
        solvers.extend(modules_from_pool(
            &mut console,
            &entries,
            spec.count as usize,
            true,
        )?);
    }

    let mut bomb = BombSolver::new(solvers);
    tracing::info!(
        mission = %mission.name,
        modules = bomb.module_count(),
        "starting session"
    );
    let report = EdgeworkReport {
        start_time_mins: mission.start_time_mins,
        max_strikes: mission.max_strikes,
        ..Default::default()
    };
    Ok(bomb.run(&mut console, report)?)
}

fn resolve(name: &str) -> Result<PoolEntry, CliError> {
    pools::find_entry(name).ok_or_else(|| CliError::UnknownModule {
        name: name.to_string(),
    })
}

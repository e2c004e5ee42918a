//! AOC CLI - Command-line interface for running Advent of Code solvers

mod cli;
mod config;
mod error;
mod inputs;
mod output;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::{SolverRegistry, SolverRegistryBuilder};
use clap::Parser;
use cli::Args;
use config::{Config, InputSource};
use error::CliError;
use inputs::InputStore;
use output::OutputFormatter;
use std::error::Error;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(Config::from_args(args)) {
        eprintln!("Error: {}", e);
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
        std::process::exit(1);
    }
}

fn run(config: Config) -> Result<(), CliError> {
    let formatter = OutputFormatter::new(config.quiet);
    let registry = build_registry()?;

    let input = inputs::load(&config.source, config.year, config.day, config.kind)?;
    if config.save && !matches!(config.source, InputSource::Store(_)) {
        InputStore::new(config.input_dir.clone()).put(config.year, config.day, config.kind, &input)?;
    }

    let mut solver = registry.create_solver(config.year, config.day, &input, config.kind)?;
    let parts = match config.part {
        Some(part) => part..=part,
        None => 1..=solver.parts(),
    };

    for part in parts {
        let result = solver.solve(part).map_err(|source| CliError::Solve {
            year: config.year,
            day: config.day,
            part,
            source,
        })?;
        formatter.print_result(config.year, config.day, &result, solver.parse_duration());
    }

    formatter.print_summary();
    Ok(())
}

/// Build the registry from every linked solver plugin
fn build_registry() -> Result<SolverRegistry, CliError> {
    Ok(SolverRegistryBuilder::new().register_all_plugins()?.build())
}

//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// No input file where the store expects one
    #[error("No input at {}", .0.display())]
    MissingInput(PathBuf),

    /// Reading an input failed
    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Saving an input into the store failed
    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading standard input failed
    #[error("Failed to read standard input")]
    Stdin(#[source] std::io::Error),

    /// Solver lookup or parsing failed
    #[error("Solver error")]
    Solver(#[from] aoc_solver::SolverError),

    /// A part failed to solve
    #[error("{year}/{day:02} part {part} failed")]
    Solve {
        year: u16,
        day: u8,
        part: u8,
        #[source]
        source: aoc_solver::SolveError,
    },

    /// Registration error
    #[error("Registration error")]
    Registration(#[from] aoc_solver::RegistrationError),
}

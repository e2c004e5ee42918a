//! Errors raised while parsing, solving and registering puzzles

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Puzzle input could not be turned into shared data
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input does not follow the puzzle's format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Input is empty or lacks a section the puzzle needs
    #[error("Missing data: {0}")]
    MissingData(String),
    /// A toolkit decoder (grid, Intcode program, ...) rejected the input
    #[error("Malformed input: {0}")]
    Malformed(#[source] BoxError),
}

impl ParseError {
    /// Keep `error` as the source so its chain stays visible to the caller
    pub fn malformed(error: impl Into<BoxError>) -> Self {
        ParseError::Malformed(error.into())
    }
}

/// One part of a puzzle could not be answered
#[derive(Debug, Error)]
pub enum SolveError {
    /// The solver declares the part but does not answer it yet
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// Part 0 or a part above `Solver::PARTS`
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The puzzle input admits no answer for this part
    #[error("No solution: {0}")]
    NoSolution(String),
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] BoxError),
}

impl SolveError {
    /// Wrap any error raised by the toolkit while solving
    pub fn failed(error: impl Into<BoxError>) -> Self {
        SolveError::SolveFailed(error.into())
    }
}

/// Looking up or building a solver through the registry failed
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    /// Year or day outside the supported calendar
    #[error("Invalid year/day: {0}/{1}")]
    InvalidYearDay(u16, u8),
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// A solver could not be added to the registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Two solvers claim the same (year, day)
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    /// Year or day outside the supported calendar
    #[error("Cannot register solver for year {0} day {1}: out of range")]
    InvalidYearDay(u16, u8),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[derive(Debug, Error)]
    #[error("ragged line 3")]
    struct Ragged;

    #[test]
    fn test_malformed_keeps_source() {
        let err = SolverError::from(ParseError::malformed(Ragged));
        let parse = err.source().expect("parse error is the source");
        assert_eq!(parse.to_string(), "Malformed input: ragged line 3");
        assert_eq!(parse.source().map(|e| e.to_string()).as_deref(), Some("ragged line 3"));
    }

    #[test]
    fn test_missing_data_message() {
        let err = ParseError::MissingData("empty map".into());
        assert_eq!(err.to_string(), "Missing data: empty map");
    }

    #[test]
    fn test_failed_wraps_strings() {
        let err = SolveError::failed("no path");
        assert_eq!(err.to_string(), "Solve failed: no path");
    }
}

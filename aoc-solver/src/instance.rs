//! Parsed puzzles and the type-erased handle the registry hands out

use crate::error::{ParseError, SolveError};
use crate::solver::{InputKind, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Wall-clock interval around one phase of a run (parsing or one part)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Span {
    /// Run `f`, returning its value and the interval it took
    pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Span) {
        let start = Utc::now();
        let value = f();
        let end = Utc::now();
        (value, Span { start, end })
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// Answer to one part of a puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    /// Which part was answered (1-based)
    pub part: u8,
    /// The answer, as submitted to the puzzle site
    pub answer: String,
    /// How long the part took, parsing excluded
    pub span: Span,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.span.duration()
    }
}

/// A puzzle input parsed by solver type `S`
///
/// Parsing happens once, in [`SolverInstance::new`]; every part then runs
/// against the same shared data, so later parts may reuse work stored there
/// by earlier ones.
pub struct SolverInstance<'a, S: SolverExt> {
    year: u16,
    day: u8,
    kind: InputKind,
    shared: S::SharedData<'a>,
    parsed: Span,
}

impl<'a, S: SolverExt> SolverInstance<'a, S> {
    /// Parse `input` the way `kind` asks for, timing the parse
    pub fn new(year: u16, day: u8, kind: InputKind, input: &'a str) -> Result<Self, ParseError> {
        let (shared, parsed) = Span::measure(|| S::parse_kind(input, kind));
        Ok(Self {
            year,
            day,
            kind,
            shared: shared?,
            parsed,
        })
    }

    pub fn shared(&self) -> &S::SharedData<'a> {
        &self.shared
    }
}

/// Object-safe view of a [`SolverInstance`], whatever its solver type
///
/// # Example
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn report(mut solver: Box<dyn DynSolver>) -> Result<(), Box<dyn std::error::Error>> {
///     println!("{}/{:02} parsed in {:?}", solver.year(), solver.day(), solver.parse_duration());
///     for part in 1..=solver.parts() {
///         let result = solver.solve(part)?;
///         println!("Part {}: {} (took {:?})", result.part, result.answer, result.duration());
///     }
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Answer `part`, timing only the part itself
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    /// When parsing started and finished
    fn parse_span(&self) -> Span;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    /// Which input this solver was built from
    fn kind(&self) -> InputKind;

    /// Number of parts the solver answers
    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_span().duration()
    }
}

impl<S: SolverExt> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let (answer, span) = Span::measure(|| S::solve_part_checked_range(&mut self.shared, part));
        Ok(SolveResult {
            part,
            answer: answer?,
            span,
        })
    }

    fn parse_span(&self) -> Span {
        self.parsed
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn kind(&self) -> InputKind {
        self.kind
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_orders_timestamps() {
        let (value, span) = Span::measure(|| 6 * 7);
        assert_eq!(value, 42);
        assert!(span.start <= span.end);
        assert!(span.duration() >= TimeDelta::zero());
    }

    #[test]
    fn test_result_duration_is_span_length() {
        let start = Utc::now();
        let result = SolveResult {
            part: 2,
            answer: "ok".to_string(),
            span: Span {
                start,
                end: start + TimeDelta::milliseconds(5),
            },
        };
        assert_eq!(result.duration(), TimeDelta::milliseconds(5));
    }
}

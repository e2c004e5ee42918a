use crate::utils::intcode::{Intcode, Program, State};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2019, day = 7, tags = ["intcode"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Program;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim_end()
            .parse()
            .map_err(ParseError::malformed)
    }
}

/// Amplifiers wired in series; each gets its phase setting, then the signal
fn chain(program: &Program, phases: &[i64]) -> Result<i64, SolveError> {
    let mut amplifier = Intcode::new(program.clone());
    phases.iter().try_fold(0, |signal, &phase| {
        amplifier.reset();
        let outputs = amplifier.run([phase, signal]).map_err(SolveError::failed)?;
        outputs
            .last()
            .copied()
            .ok_or_else(|| SolveError::NoSolution("amplifier produced no signal".into()))
    })
}

/// Amplifiers wired in a ring, run round-robin until the first one halts
fn feedback(program: &Program, phases: &[i64]) -> Result<i64, SolveError> {
    let mut amplifiers: Vec<Intcode> = phases
        .iter()
        .map(|&phase| {
            let mut amplifier = Intcode::new(program.clone());
            amplifier.add_input(phase);
            amplifier
        })
        .collect();

    let mut signal = 0;
    loop {
        for amplifier in amplifiers.iter_mut() {
            amplifier.add_input(signal);
            match amplifier.resume().map_err(SolveError::failed)? {
                State::Output(value) => signal = value,
                State::Halted => return Ok(signal),
                State::NeedsInput => {
                    return Err(SolveError::NoSolution("amplifier stalled waiting for input".into()));
                }
            }
        }
    }
}

fn best_signal(
    program: &Program,
    phases: std::ops::Range<i64>,
    wiring: fn(&Program, &[i64]) -> Result<i64, SolveError>,
) -> Result<String, SolveError> {
    let count = phases.clone().count();
    let mut best = None;
    for permutation in phases.permutations(count) {
        let signal = wiring(program, &permutation)?;
        best = best.max(Some(signal));
    }
    best.map(|signal| signal.to_string())
        .ok_or_else(|| SolveError::NoSolution("no phase settings".into()))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        best_signal(shared, 0..5, chain)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        best_signal(shared, 5..10, feedback)
    }
}

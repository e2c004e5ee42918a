use crate::utils::intcode::{Intcode, Program};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2019, day = 9, tags = ["intcode"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Intcode;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim_end()
            .parse::<Program>()
            .map(Intcode::new)
            .map_err(ParseError::malformed)
    }
}

/// Run BOOST in `mode`. A healthy run prints a single value; anything more is
/// the list of opcodes the program found broken.
fn boost(vm: &mut Intcode, mode: i64) -> Result<String, SolveError> {
    vm.reset();
    match vm.run([mode]).map_err(SolveError::failed)?.as_slice() {
        [keycode] => Ok(keycode.to_string()),
        [] => Err(SolveError::NoSolution("BOOST produced no output".into())),
        malfunctions => Err(SolveError::NoSolution(format!(
            "BOOST reported malfunctioning opcodes {malfunctions:?}"
        ))),
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        boost(shared, 1)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        boost(shared, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_large_output() {
        let mut shared = Solver::parse_sample("104,1125899906842624,99\n").unwrap();
        assert_eq!(
            <Solver as PartSolver<1>>::solve(&mut shared).unwrap(),
            "1125899906842624"
        );
    }

    #[test]
    fn test_quine_is_a_malfunction_report() {
        let mut shared =
            Solver::parse_sample("109,1,204,-1,1001,100,1,100,1008,100,16,101,1006,101,0,99")
                .unwrap();
        assert!(matches!(
            <Solver as PartSolver<2>>::solve(&mut shared),
            Err(SolveError::NoSolution(_))
        ));
        assert_eq!(shared.relative_base(), 16);
    }
}

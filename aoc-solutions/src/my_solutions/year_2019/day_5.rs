use crate::utils::intcode::{Intcode, Program};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

/// System ID of the ship's air conditioner unit
const AIR_CONDITIONER: i64 = 1;
/// System ID of the thermal radiator controller
const THERMAL_RADIATOR: i64 = 5;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2019, day = 5, tags = ["intcode"])]
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

/// Run the diagnostic for `system`; every output but the last is a test result
/// that must be 0, the last one is the diagnostic code.
fn diagnostic(vm: &mut Intcode, system: i64) -> Result<String, SolveError> {
    vm.reset();
    let outputs = vm.run([system]).map_err(SolveError::failed)?;
    let Some((code, checks)) = outputs.split_last() else {
        return Err(SolveError::NoSolution("diagnostic produced no output".into()));
    };
    if let Some(failed) = checks.iter().position(|&check| check != 0) {
        return Err(SolveError::NoSolution(format!(
            "diagnostic check {failed} failed with {}",
            checks[failed]
        )));
    }
    Ok(code.to_string())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        diagnostic(shared, AIR_CONDITIONER)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        diagnostic(shared, THERMAL_RADIATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "3,21,1008,21,8,20,1005,20,22,107,8,21,20,1006,20,31,\
1106,0,36,98,0,0,1002,21,125,20,4,20,1105,1,46,104,999,1105,1,46,1101,1000,1,20,4,20,\
1105,1,46,98,99\n";

    #[test]
    fn test_sample() {
        let mut shared = Solver::parse_sample(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "999");
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "999");
    }

    #[test]
    fn test_failed_check_is_reported() {
        let mut vm: Intcode = "104,3,104,0,99".parse().unwrap();
        assert!(matches!(
            diagnostic(&mut vm, 1),
            Err(SolveError::NoSolution(_))
        ));
    }

    #[test]
    fn test_equal_to_eight() {
        let mut vm: Intcode = "3,3,1108,-1,8,3,4,3,99".parse().unwrap();
        assert_eq!(diagnostic(&mut vm, 8).unwrap(), "1");
        assert_eq!(diagnostic(&mut vm, 5).unwrap(), "0");
    }
}

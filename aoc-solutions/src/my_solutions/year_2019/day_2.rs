use crate::utils::intcode::{Intcode, IntcodeError, Program};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

/// Output the gravity assist program must produce in part 2
const TARGET: i64 = 19_690_720;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2019, day = 2, tags = ["intcode"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    vm: Intcode,
    /// The real input is patched to the "1202 program alarm" state before running
    restore_alarm: bool,
}

fn parse_program(input: &str, restore_alarm: bool) -> Result<SharedData, ParseError> {
    let program: Program = input
        .trim_end()
        .parse()
        .map_err(ParseError::malformed)?;
    Ok(SharedData {
        vm: Intcode::new(program),
        restore_alarm,
    })
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_program(input, true)
    }

    fn parse_sample<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_program(input, false)
    }
}

/// Run from a clean memory with `noun` and `verb` patched in; returns address 0
fn run_with(vm: &mut Intcode, noun: i64, verb: i64) -> Result<i64, IntcodeError> {
    vm.reset();
    vm.poke(1, noun);
    vm.poke(2, verb);
    vm.run([])?;
    Ok(vm.peek(0))
}

fn find_noun_verb(vm: &mut Intcode, target: i64) -> Result<Option<i64>, IntcodeError> {
    for noun in 0..=99 {
        for verb in 0..=99 {
            // Some patches send the program off the rails; those pairs are simply wrong
            match run_with(vm, noun, verb) {
                Ok(value) if value == target => return Ok(Some(100 * noun + verb)),
                Ok(_) | Err(IntcodeError::UnknownOpcode { .. } | IntcodeError::Address { .. }) => {}
                Err(e) => return Err(e),
            }
        }
    }
    Ok(None)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let value = if shared.restore_alarm {
            run_with(&mut shared.vm, 12, 2)
        } else {
            shared.vm.reset();
            shared.vm.run([]).map(|_| shared.vm.peek(0))
        };
        value.map(|v| v.to_string()).map_err(SolveError::failed)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        find_noun_verb(&mut shared.vm, TARGET)
            .map_err(SolveError::failed)?
            .map(|answer| answer.to_string())
            .ok_or_else(|| SolveError::NoSolution(format!("no noun/verb produces {TARGET}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_part_1() {
        let mut shared = Solver::parse_sample("1,9,10,3,2,3,11,0,99,30,40,50\n").unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "3500");
        assert_eq!(shared.vm.peek(3), 70);
    }

    #[test]
    fn test_noun_verb_search() {
        let mut vm: Intcode = "1,0,0,0,99".parse().unwrap();
        assert_eq!(find_noun_verb(&mut vm, 198), Ok(Some(404)));
        assert_eq!(find_noun_verb(&mut vm, 1_000_000), Ok(None));
    }
}

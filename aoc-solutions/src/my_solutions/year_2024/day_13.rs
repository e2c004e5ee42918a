use crate::utils::matrix::{Matrix, MatrixError};
use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use num_traits::{Signed, ToPrimitive};

/// Tokens spent per press of button A and B
const COST_A: i64 = 3;
const COST_B: i64 = 1;
/// Presses allowed per button in part 1
const PRESS_LIMIT: i64 = 100;
/// Unit conversion error added to every prize coordinate in part 2
const PRIZE_OFFSET: i64 = 10_000_000_000_000;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 13, tags = ["matrix"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClawMachine {
    a: (i64, i64),
    b: (i64, i64),
    prize: (i64, i64),
}

/// The two unsigned integers on a line like `Button A: X+94, Y+34`
fn coordinates(line: Option<&str>, label: &str) -> anyhow::Result<(i64, i64)> {
    let line = line.with_context(|| format!("missing {label} line"))?;
    let rest = line
        .strip_prefix(label)
        .and_then(|rest| rest.strip_prefix(':'))
        .with_context(|| format!("expected {label:?}, found {line:?}"))?;
    let numbers = rest
        .split(|c: char| !c.is_ascii_digit())
        .filter(|word| !word.is_empty())
        .map(str::parse)
        .collect::<Result<Vec<i64>, _>>()?;
    match numbers[..] {
        [x, y] => Ok((x, y)),
        _ => Err(anyhow!("expected two coordinates in {line:?}")),
    }
}

impl ClawMachine {
    fn parse(block: &str) -> anyhow::Result<Self> {
        let mut lines = block.lines().map(str::trim_end);
        Ok(ClawMachine {
            a: coordinates(lines.next(), "Button A")?,
            b: coordinates(lines.next(), "Button B")?,
            prize: coordinates(lines.next(), "Prize")?,
        })
    }

    /// Fewest tokens that win the prize moved by `offset`, if it can be won.
    ///
    /// Two buttons and two axes make a 2x2 system; a winning play is its
    /// solution when both press counts are non-negative integers.
    fn cost(&self, offset: i64, limit: Option<i64>) -> Result<Option<i64>, SolveError> {
        let mut system = Matrix::from_integers([
            [self.a.0, self.b.0, self.prize.0 + offset],
            [self.a.1, self.b.1, self.prize.1 + offset],
        ])
        .map_err(SolveError::failed)?;

        let presses = match system.solve_gaussian() {
            Ok(presses) => presses,
            Err(MatrixError::Inconsistent { .. }) => return Ok(None),
            Err(e) => return Err(SolveError::failed(e)),
        };

        let mut counts = Vec::with_capacity(2);
        for press in &presses {
            if !press.is_integer() || press.is_negative() {
                return Ok(None);
            }
            let count = press
                .to_integer()
                .to_i64()
                .ok_or_else(|| SolveError::NoSolution(format!("{press} presses overflow")))?;
            if limit.is_some_and(|limit| count > limit) {
                return Ok(None);
            }
            counts.push(count);
        }
        Ok(Some(COST_A * counts[0] + COST_B * counts[1]))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<ClawMachine>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .split("\n\n")
            .map(str::trim)
            .filter(|block| !block.is_empty())
            .enumerate()
            .map(|(i, block)| {
                ClawMachine::parse(block).map_err(|e| anyhow!("(machine {}) {:#}", i + 1, e))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn total_cost(
    machines: &[ClawMachine],
    offset: i64,
    limit: Option<i64>,
) -> Result<String, SolveError> {
    let mut total = 0;
    for machine in machines {
        total += machine.cost(offset, limit)?.unwrap_or(0);
    }
    Ok(total.to_string())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total_cost(shared, 0, Some(PRESS_LIMIT))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total_cost(shared, PRIZE_OFFSET, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Button A: X+94, Y+34
Button B: X+22, Y+67
Prize: X=8400, Y=5400

Button A: X+26, Y+66
Button B: X+67, Y+21
Prize: X=12748, Y=12176

Button A: X+17, Y+86
Button B: X+84, Y+37
Prize: X=7870, Y=6450

Button A: X+69, Y+23
Button B: X+27, Y+71
Prize: X=18641, Y=10279
";

    #[test]
    fn test_sample_part_1() {
        let mut shared = Solver::parse_sample(SAMPLE).unwrap();
        assert_eq!(shared.len(), 4);
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "480");
    }

    #[test]
    fn test_individual_machines() {
        let machines = Solver::parse(SAMPLE).unwrap();
        let costs: Vec<Option<i64>> = machines
            .iter()
            .map(|m| m.cost(0, Some(PRESS_LIMIT)).unwrap())
            .collect();
        assert_eq!(costs, vec![Some(280), None, Some(200), None]);
    }

    #[test]
    fn test_offset_prizes() {
        let machines = Solver::parse(SAMPLE).unwrap();
        let winnable: Vec<bool> = machines
            .iter()
            .map(|m| m.cost(PRIZE_OFFSET, None).unwrap().is_some())
            .collect();
        assert_eq!(winnable, vec![false, true, false, true]);
    }

    #[test]
    fn test_parse_errors_name_the_machine() {
        let err = Solver::parse("Button A: X+1, Y+2\nButton B: X+3\nPrize: X=1, Y=1").unwrap_err();
        assert!(err.to_string().contains("machine 1"));
    }
}

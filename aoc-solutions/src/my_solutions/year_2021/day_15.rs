use crate::utils::grid::{DenseGrid, Grid};
use crate::utils::point::Point;
use crate::utils::priority_queue::PriorityQueue;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashMap;

/// How many times the cave tile repeats along each axis in part 2
const TILES: usize = 5;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 15, tags = ["grid", "dijkstra"])]
pub struct Solver;

/// Risk level of a single cave position, 1 to 9
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Risk(u8);

impl TryFrom<char> for Risk {
    type Error = char;

    fn try_from(ch: char) -> Result<Self, char> {
        match ch.to_digit(10) {
            Some(d @ 1..=9) => Ok(Risk(d as u8)),
            _ => Err(ch),
        }
    }
}

impl AocParser for Solver {
    type SharedData<'a> = DenseGrid<Risk>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let cave: DenseGrid<Risk> = input
            .parse()
            .map_err(ParseError::malformed)?;
        if cave.width() == 0 {
            return Err(ParseError::MissingData("empty cave".into()));
        }
        Ok(cave)
    }
}

/// Lowest total risk from the top left to the bottom right corner
fn lowest_risk(cave: &DenseGrid<Risk>) -> Option<u64> {
    let start = Point::ORIGIN;
    let goal = Point::new(cave.height() as i64 - 1, cave.width() as i64 - 1);

    let mut best: HashMap<Point, u64> = HashMap::from([(start, 0)]);
    let mut queue = PriorityQueue::new();
    queue.push(start, 0);

    while let Ok((risk, pos)) = queue.pop() {
        if pos == goal {
            return Some(risk);
        }
        for next in cave.get_adjacent(pos) {
            let total = risk + u64::from(cave[next].0);
            if best.get(&next).is_none_or(|&known| total < known) {
                best.insert(next, total);
                queue.push_or_decrease(next, total);
            }
        }
    }
    None
}

/// The full cave: the tile repeated, each repetition one risk level higher
/// per step right or down, wrapping from 9 back to 1
fn expand(cave: &DenseGrid<Risk>) -> DenseGrid<Risk> {
    let (width, height) = (cave.width(), cave.height());
    let mut full = DenseGrid::new(width * TILES, height * TILES, Risk(1));
    for pos in full.iter_cells().collect::<Vec<_>>() {
        let tile = (pos.y as usize / height + pos.x as usize / width) as u8;
        let base = cave[Point::new(pos.y % height as i64, pos.x % width as i64)].0;
        full[pos] = Risk((base - 1 + tile) % 9 + 1);
    }
    full
}

fn answer(cave: &DenseGrid<Risk>) -> Result<String, SolveError> {
    lowest_risk(cave)
        .map(|risk| risk.to_string())
        .ok_or_else(|| SolveError::NoSolution("exit is unreachable".into()))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        answer(shared)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        answer(&expand(shared))
    }
}

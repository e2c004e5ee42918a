use crate::utils::grid::{Grid, InfiniteGrid};
use crate::utils::point::{Direction, Point};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Order in which elves consider moving during the first round
const PROPOSALS: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::West,
    Direction::East,
];

const ROUNDS: usize = 10;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 23, tags = ["grid", "simulation"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = InfiniteGrid;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .parse()
            .map_err(ParseError::malformed)
    }
}

/// Where the elf at `elf` wants to go this round, if anywhere
fn propose(elves: &InfiniteGrid, elf: Point, round: usize) -> Option<Point> {
    if !elves.get_surround(elf).iter().any(|&p| elves.contains(p)) {
        return None;
    }
    (0..PROPOSALS.len())
        .map(|i| PROPOSALS[(round + i) % PROPOSALS.len()])
        .find(|&dir| {
            let ahead = elf.step(dir);
            [ahead, ahead.step(dir.turn_left()), ahead.step(dir.turn_right())]
                .iter()
                .all(|&p| !elves.contains(p))
        })
        .map(|dir| elf.step(dir))
}

/// Play one round; returns whether any elf moved
fn play_round(elves: &mut InfiniteGrid, round: usize) -> bool {
    // target -> the single elf proposing it, or None once contested
    let mut proposals: HashMap<Point, Option<Point>> = HashMap::new();
    for &elf in elves.cells() {
        if let Some(target) = propose(elves, elf, round) {
            match proposals.entry(target) {
                Entry::Vacant(vacant) => {
                    vacant.insert(Some(elf));
                }
                Entry::Occupied(mut occupied) => {
                    occupied.insert(None);
                }
            }
        }
    }

    let mut moved = false;
    for (target, elf) in proposals {
        if let Some(elf) = elf {
            elves.remove(elf);
            elves.insert(target);
            moved = true;
        }
    }
    moved
}

/// Empty ground tiles in the smallest rectangle holding every elf
fn empty_ground(elves: &InfiniteGrid) -> usize {
    elves.bounding_box().map_or(0, |(lo, hi)| {
        let area = (hi.y - lo.y + 1) * (hi.x - lo.x + 1);
        area as usize - elves.len()
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut elves = shared.clone();
        for round in 0..ROUNDS {
            play_round(&mut elves, round);
        }
        Ok(empty_ground(&elves).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut elves = shared.clone();
        let mut round = 0;
        while play_round(&mut elves, round) {
            round += 1;
        }
        Ok((round + 1).to_string())
    }
}

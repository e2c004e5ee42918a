use crate::utils::grid::{Grid, SparseGrid};
use crate::utils::point::Point;
use crate::utils::priority_queue::PriorityQueue;
use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::cmp::Reverse;
use std::collections::HashMap;

/// Memory space side length and bytes fallen before part 1, for the real input
const REAL_SETUP: (usize, usize) = (71, 1024);
/// Same for the worked example
const SAMPLE_SETUP: (usize, usize) = (7, 12);

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 18, tags = ["grid", "a-star"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    bytes: Vec<Point>,
    size: usize,
    fallen: usize,
}

fn parse_bytes(input: &str, (size, fallen): (usize, usize)) -> Result<SharedData, ParseError> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(i, line)| -> anyhow::Result<Point> {
            let (x, y) = line
                .trim()
                .split_once(',')
                .with_context(|| format!("(line {}) expected \"x,y\"", i + 1))?;
            let point = Point::new(y.parse()?, x.parse()?);
            if !(0..size as i64).contains(&point.x) || !(0..size as i64).contains(&point.y) {
                return Err(anyhow!("(line {}) {line} is outside the memory space", i + 1));
            }
            Ok(point)
        })
        .collect::<anyhow::Result<Vec<_>>>()
        .map(|bytes| SharedData {
            bytes,
            size,
            fallen,
        })
        .map_err(|e| ParseError::InvalidFormat(e.to_string()))
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_bytes(input, REAL_SETUP)
    }

    fn parse_sample<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_bytes(input, SAMPLE_SETUP)
    }
}

impl SharedData {
    /// The memory space after the first `count` bytes have fallen
    fn corrupted(&self, count: usize) -> Result<SparseGrid, SolveError> {
        let mut memory = SparseGrid::new(self.size, self.size);
        for &byte in self.bytes.iter().take(count) {
            memory.insert(byte).map_err(SolveError::failed)?;
        }
        Ok(memory)
    }
}

/// Fewest steps from the top left to the bottom right corner, avoiding corruption
fn shortest_path(memory: &SparseGrid) -> Option<i64> {
    let start = Point::ORIGIN;
    let goal = Point::new(memory.height() as i64 - 1, memory.width() as i64 - 1);
    if memory.contains(start) || memory.contains(goal) {
        return None;
    }

    let mut steps: HashMap<Point, i64> = HashMap::from([(start, 0)]);
    let mut queue = PriorityQueue::new();
    // (estimated total, steps so far); ties go to the deeper path
    queue.push(start, (start.manhattan(goal), Reverse(0)));

    while let Ok(((_, Reverse(taken)), pos)) = queue.pop() {
        if pos == goal {
            return Some(taken);
        }
        for next in memory.get_adjacent(pos) {
            if memory.contains(next) {
                continue;
            }
            let cost = taken + 1;
            if steps.get(&next).is_none_or(|&known| cost < known) {
                steps.insert(next, cost);
                queue.push(next, (cost + next.manhattan(goal), Reverse(cost)));
            }
        }
    }
    None
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let memory = shared.corrupted(shared.fallen)?;
        shortest_path(&memory)
            .map(|steps| steps.to_string())
            .ok_or_else(|| SolveError::NoSolution("exit is unreachable".into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Smallest count of fallen bytes that cuts the exit off
        let (mut open, mut blocked) = (0, shared.bytes.len());
        if shortest_path(&shared.corrupted(blocked)?).is_some() {
            return Err(SolveError::NoSolution("the exit is never cut off".into()));
        }
        while blocked - open > 1 {
            let mid = open + (blocked - open) / 2;
            if shortest_path(&shared.corrupted(mid)?).is_some() {
                open = mid;
            } else {
                blocked = mid;
            }
        }
        let byte = shared.bytes[blocked - 1];
        Ok(format!("{},{}", byte.x, byte.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
5,4
4,2
4,5
3,0
2,1
6,3
2,4
1,5
0,6
3,3
2,6
5,1
1,2
5,5
2,5
6,5
1,4
0,4
6,4
1,1
6,1
1,0
0,5
1,6
2,0
";

    #[test]
    fn test_sample() {
        let mut shared = Solver::parse_sample(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "22");
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "6,1");
    }

    #[test]
    fn test_real_setup_is_larger() {
        let shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!((shared.size, shared.fallen), REAL_SETUP);
    }

    #[test]
    fn test_out_of_range_byte_rejected() {
        assert!(Solver::parse_sample("7,0\n").is_err());
        assert!(Solver::parse_sample("1;2\n").is_err());
    }

    #[test]
    fn test_open_memory_path() {
        let memory = SparseGrid::new(4, 4);
        assert_eq!(shortest_path(&memory), Some(6));
    }

    #[test]
    fn test_path_counts_detour_steps() {
        // A wall across row 1 leaves only the right column open
        let mut memory = SparseGrid::new(3, 3);
        memory.insert(Point::new(1, 0)).unwrap();
        memory.insert(Point::new(1, 1)).unwrap();
        assert_eq!(shortest_path(&memory), Some(4));

        memory.insert(Point::new(1, 2)).unwrap();
        assert_eq!(shortest_path(&memory), None);
    }
}

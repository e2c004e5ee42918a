use crate::utils::grid::{Grid, SparseGrid};
use crate::utils::point::{Point, Vector};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

/// Slopes checked in part 2, as (down, right)
const SLOPES: [Vector; 5] = [
    Vector::new(1, 1),
    Vector::new(1, 3),
    Vector::new(1, 5),
    Vector::new(1, 7),
    Vector::new(2, 1),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 3, tags = ["grid"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = SparseGrid;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let trees: SparseGrid = input
            .parse()
            .map_err(ParseError::malformed)?;
        if trees.width() == 0 {
            return Err(ParseError::MissingData("empty map".into()));
        }
        Ok(trees)
    }
}

/// Trees hit going down `slope` from the top left; the map repeats to the right
fn trees_on_slope(trees: &SparseGrid, slope: Vector) -> usize {
    let width = trees.width() as i64;
    std::iter::successors(Some(Point::ORIGIN), |&p| Some(p + slope))
        .take_while(|p| p.y < trees.height() as i64)
        .filter(|p| trees.contains(Point::new(p.y, p.x.rem_euclid(width))))
        .count()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(trees_on_slope(shared, Vector::new(1, 3)).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let product: usize = SLOPES
            .iter()
            .map(|&slope| trees_on_slope(shared, slope))
            .product();
        Ok(product.to_string())
    }
}

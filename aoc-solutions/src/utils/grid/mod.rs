//! Two-dimensional grids parsed from puzzle input
//!
//! Three storage policies share one [`Grid`] contract:
//!
//! - [`DenseGrid`]: bounded `height × width` cells, each holding a value
//! - [`SparseGrid`]: bounded set of "on" positions
//! - [`InfiniteGrid`]: unbounded set of "on" positions
//!
//! All of them are parsed the same way: lines are consumed top to bottom until
//! the first blank line, every line must have the same length, and each
//! character is handed to [`Grid::parse_cell`] with its position. How a cell
//! is stored is the only thing that differs.
//!
//! # Example
//!
//! ```rust
//! use aoc_solutions::utils::grid::{Grid, SparseGrid};
//! use aoc_solutions::utils::point::Point;
//!
//! let grid: SparseGrid = ".#.\n..#\n...".parse().unwrap();
//! assert_eq!((grid.width(), grid.height()), (3, 3));
//! assert!(grid.contains(Point::new(0, 1)));
//! assert!(grid.contains(Point::new(1, 2)));
//! assert_eq!(grid.get_adjacent(Point::new(0, 0)).len(), 2);
//! ```
//!
//! # Custom cells
//!
//! A dense grid decodes each character through `TryFrom<char>`, so the cell
//! type decides what a character means:
//!
//! ```rust
//! use aoc_solutions::utils::grid::{DenseGrid, Grid};
//! use aoc_solutions::utils::point::Point;
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! struct Height(u8);
//!
//! impl TryFrom<char> for Height {
//!     type Error = char;
//!     fn try_from(ch: char) -> Result<Self, char> {
//!         ch.to_digit(10).map(|d| Height(d as u8)).ok_or(ch)
//!     }
//! }
//!
//! let grid: DenseGrid<Height> = "012\n345".parse().unwrap();
//! assert_eq!(grid[Point::new(1, 2)], Height(5));
//! assert!("01x".parse::<DenseGrid<Height>>().is_err());
//! ```

mod dense;
mod infinite;
mod sparse;

pub use dense::DenseGrid;
pub use infinite::InfiniteGrid;
pub use sparse::SparseGrid;

use crate::utils::point::{Direction, Point, SURROUND};
use thiserror::Error;

/// Default glyph marking an "on" cell in sparse and infinite grids
pub const ON_GLYPH: char = '#';
/// Glyph rendered for an "off" cell
pub const OFF_GLYPH: char = '.';

/// Errors raised while building a grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A line's length differs from the first line's
    #[error("line {line} has length {found}, expected {expected}")]
    RaggedLine {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// The cell type refused a character
    #[error("cannot decode {ch:?} at {pos}")]
    InvalidCell { pos: Point, ch: char },
    /// A position outside the declared rectangle
    #[error("{pos} is outside the {width}x{height} grid")]
    OutOfBounds {
        pos: Point,
        width: usize,
        height: usize,
    },
}

/// Common contract of every grid variant
pub trait Grid {
    /// Number of columns
    fn width(&self) -> usize;

    /// Number of rows
    fn height(&self) -> usize;

    /// Whether `pos` lies inside the grid
    fn in_bound(&self, pos: Point) -> bool;

    /// Forget every cell and both extents; `parse` starts from here
    fn clear(&mut self);

    /// Store the character read at `pos`.
    ///
    /// Called in reading order while parsing.
    fn parse_cell(&mut self, pos: Point, ch: char) -> Result<(), GridError>;

    /// Record the extents once parsing has finished
    fn set_extent(&mut self, width: usize, height: usize);

    /// Replace the grid's contents with lines of text, stopping at the first
    /// blank line.
    ///
    /// Returns the grid so parsing chains with construction. Settings such as
    /// the "on" glyph survive; cells and extents do not.
    fn parse<I>(mut self, lines: I) -> Result<Self, GridError>
    where
        Self: Sized,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.clear();
        let mut width = None;
        let mut height = 0;

        for (y, line) in lines.into_iter().enumerate() {
            let line = line.as_ref().trim_end_matches('\r');
            if line.is_empty() {
                break;
            }

            let found = line.chars().count();
            let expected = *width.get_or_insert(found);
            if found != expected {
                return Err(GridError::RaggedLine {
                    line: y,
                    expected,
                    found,
                });
            }

            for (x, ch) in line.chars().enumerate() {
                self.parse_cell(Point::new(y as i64, x as i64), ch)?;
            }
            height = y + 1;
        }

        self.set_extent(width.unwrap_or(0), height);
        Ok(self)
    }

    /// The orthogonal neighbours of `pos` (N, E, S, W order) inside the grid
    fn get_adjacent(&self, pos: Point) -> Vec<Point> {
        Direction::ALL
            .iter()
            .map(|&dir| pos.step(dir))
            .filter(|&p| self.in_bound(p))
            .collect()
    }

    /// The 8 Chebyshev neighbours of `pos` (clockwise from N) inside the grid
    fn get_surround(&self, pos: Point) -> Vec<Point> {
        SURROUND
            .iter()
            .map(|&v| pos + v)
            .filter(|&p| self.in_bound(p))
            .collect()
    }

    /// Every position of the `width × height` rectangle, in reading order
    fn iter_cells(&self) -> impl Iterator<Item = Point> {
        let (width, height) = (self.width() as i64, self.height() as i64);
        (0..height).flat_map(move |y| (0..width).map(move |x| Point::new(y, x)))
    }
}

/// Draw the rectangle `[top_left, bottom_right)`, `on` for set cells
fn render(
    f: &mut std::fmt::Formatter<'_>,
    on: char,
    top_left: Point,
    bottom_right: Point,
    is_on: impl Fn(Point) -> bool,
) -> std::fmt::Result {
    use std::fmt::Write;

    for y in top_left.y..bottom_right.y {
        for x in top_left.x..bottom_right.x {
            let glyph = if is_on(Point::new(y, x)) { on } else { OFF_GLYPH };
            f.write_char(glyph)?;
        }
        f.write_char('\n')?;
    }
    Ok(())
}

/// `0 <= pos < (height, width)`
fn within(pos: Point, width: usize, height: usize) -> bool {
    (0..width as i64).contains(&pos.x) && (0..height as i64).contains(&pos.y)
}

use super::{Grid, GridError, ON_GLYPH, render, within};
use crate::utils::point::Point;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// A bounded grid that only remembers which cells are "on"
///
/// While parsing, a cell is on iff its character equals the grid's glyph
/// (`#` unless built with [`SparseGrid::with_glyph`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseGrid {
    width: usize,
    height: usize,
    cells: HashSet<Point>,
    glyph: char,
}

impl Default for SparseGrid {
    fn default() -> Self {
        Self::with_glyph(ON_GLYPH)
    }
}

impl SparseGrid {
    /// An empty `width × height` grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// An empty grid whose parser treats `glyph` as "on"
    pub fn with_glyph(glyph: char) -> Self {
        Self {
            width: 0,
            height: 0,
            cells: HashSet::new(),
            glyph,
        }
    }

    pub fn contains(&self, pos: Point) -> bool {
        self.cells.contains(&pos)
    }

    /// Turn `pos` on; returns whether it was off before
    pub fn insert(&mut self, pos: Point) -> Result<bool, GridError> {
        if !self.in_bound(pos) {
            return Err(GridError::OutOfBounds {
                pos,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.cells.insert(pos))
    }

    /// Turn `pos` off; returns whether it was on
    pub fn remove(&mut self, pos: Point) -> bool {
        self.cells.remove(&pos)
    }

    pub fn cells(&self) -> &HashSet<Point> {
        &self.cells
    }

    /// Number of "on" cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Grid for SparseGrid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn in_bound(&self, pos: Point) -> bool {
        within(pos, self.width, self.height)
    }

    fn clear(&mut self) {
        self.cells.clear();
        self.set_extent(0, 0);
    }

    fn parse_cell(&mut self, pos: Point, ch: char) -> Result<(), GridError> {
        if ch == self.glyph {
            self.cells.insert(pos);
        }
        Ok(())
    }

    fn set_extent(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }
}

impl FromStr for SparseGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, GridError> {
        Self::default().parse(s.lines())
    }
}

impl fmt::Display for SparseGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bottom_right = Point::new(self.height as i64, self.width as i64);
        render(f, self.glyph, Point::ORIGIN, bottom_right, |p| self.contains(p))
    }
}

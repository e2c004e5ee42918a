use super::{Grid, GridError, ON_GLYPH, render};
use crate::utils::point::Point;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// An unbounded set of "on" cells
///
/// Parsing works like [`SparseGrid`](super::SparseGrid), but every position is
/// in bounds, so neighbour queries are never filtered. `width` and `height`
/// only describe the rectangle that was parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfiniteGrid {
    width: usize,
    height: usize,
    cells: HashSet<Point>,
    glyph: char,
}

impl Default for InfiniteGrid {
    fn default() -> Self {
        Self::with_glyph(ON_GLYPH)
    }
}

impl InfiniteGrid {
    pub fn new() -> Self {
        Self::default()
    }

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

    pub fn insert(&mut self, pos: Point) -> bool {
        self.cells.insert(pos)
    }

    pub fn remove(&mut self, pos: Point) -> bool {
        self.cells.remove(&pos)
    }

    pub fn cells(&self) -> &HashSet<Point> {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Inclusive `(min, max)` corners of the "on" cells
    pub fn bounding_box(&self) -> Option<(Point, Point)> {
        let mut iter = self.cells.iter();
        let first = *iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), p| {
            (
                Point::new(lo.y.min(p.y), lo.x.min(p.x)),
                Point::new(hi.y.max(p.y), hi.x.max(p.x)),
            )
        }))
    }
}

impl FromIterator<Point> for InfiniteGrid {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl Grid for InfiniteGrid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn in_bound(&self, _pos: Point) -> bool {
        true
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

impl FromStr for InfiniteGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, GridError> {
        Self::default().parse(s.lines())
    }
}

/// Renders the parsed rectangle, grown to cover every "on" cell.
impl fmt::Display for InfiniteGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut top_left = Point::ORIGIN;
        let mut bottom_right = Point::new(self.height as i64, self.width as i64);
        if let Some((lo, hi)) = self.bounding_box() {
            top_left = Point::new(lo.y.min(0), lo.x.min(0));
            bottom_right = Point::new(bottom_right.y.max(hi.y + 1), bottom_right.x.max(hi.x + 1));
        }
        render(f, self.glyph, top_left, bottom_right, |p| self.contains(p))
    }
}

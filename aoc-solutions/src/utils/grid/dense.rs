use super::{Grid, GridError, within};
use crate::utils::point::Point;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// A bounded grid storing one value per cell
///
/// Cells are decoded from input characters with `TryFrom<char>`; `char`
/// itself works out of the box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseGrid<T = char> {
    width: usize,
    height: usize,
    cells: Vec<Vec<T>>,
}

impl<T> Default for DenseGrid<T> {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
        }
    }
}

impl<T: Clone> DenseGrid<T> {
    /// A `width × height` grid with every cell set to `fill`
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![fill; width]; height],
        }
    }
}

impl<T> DenseGrid<T> {
    /// The cell at `pos`, or `None` outside the grid
    pub fn get(&self, pos: Point) -> Option<&T> {
        if !within(pos, self.width, self.height) {
            return None;
        }
        self.cells.get(pos.y as usize)?.get(pos.x as usize)
    }

    pub fn get_mut(&mut self, pos: Point) -> Option<&mut T> {
        if !within(pos, self.width, self.height) {
            return None;
        }
        self.cells.get_mut(pos.y as usize)?.get_mut(pos.x as usize)
    }

    /// Alias of [`DenseGrid::get`]
    pub fn get_value(&self, pos: Point) -> Option<&T> {
        self.get(pos)
    }

    /// Overwrite the cell at `pos`
    pub fn set(&mut self, pos: Point, value: T) -> Result<(), GridError> {
        let (width, height) = (self.width, self.height);
        let cell = self.get_mut(pos).ok_or(GridError::OutOfBounds { pos, width, height })?;
        *cell = value;
        Ok(())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Positions whose cell satisfies `pred`, in reading order
    pub fn positions<'a>(
        &'a self,
        mut pred: impl FnMut(&T) -> bool + 'a,
    ) -> impl Iterator<Item = Point> + 'a {
        let width = self.width as i64;
        (0..self.height as i64)
            .flat_map(move |y| (0..width).map(move |x| Point::new(y, x)))
            .filter(move |&p| pred(&self[p]))
    }

    /// A grid of the same shape with every cell transformed
    pub fn map<U>(&self, mut f: impl FnMut(Point, &T) -> U) -> DenseGrid<U> {
        let cells = self
            .cells
            .iter()
            .enumerate()
            .map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(|(x, cell)| f(Point::new(y as i64, x as i64), cell))
                    .collect()
            })
            .collect();
        DenseGrid {
            width: self.width,
            height: self.height,
            cells,
        }
    }
}

impl<T: TryFrom<char>> Grid for DenseGrid<T> {
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
        let value = T::try_from(ch).map_err(|_| GridError::InvalidCell { pos, ch })?;
        let y = pos.y as usize;
        if y == self.cells.len() {
            self.cells.push(Vec::new());
        }
        self.cells[y].push(value);
        Ok(())
    }

    fn set_extent(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }
}

impl<T: TryFrom<char>> FromStr for DenseGrid<T> {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, GridError> {
        Self::default().parse(s.lines())
    }
}

impl<T> Index<Point> for DenseGrid<T> {
    type Output = T;

    fn index(&self, pos: Point) -> &T {
        self.get(pos)
            .unwrap_or_else(|| panic!("{pos} is outside the {}x{} grid", self.width, self.height))
    }
}

impl<T> IndexMut<Point> for DenseGrid<T> {
    fn index_mut(&mut self, pos: Point) -> &mut T {
        let (width, height) = (self.width, self.height);
        self.get_mut(pos)
            .unwrap_or_else(|| panic!("{pos} is outside the {width}x{height} grid"))
    }
}

impl<T: fmt::Display> fmt::Display for DenseGrid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

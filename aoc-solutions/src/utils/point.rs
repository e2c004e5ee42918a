//! Points, directions and offsets on the puzzle plane.
//!
//! `y` grows downward and `x` grows to the right, matching the order in which
//! puzzle input lines are read. Points are ordered by `(y, x)`, which is
//! reading order.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A position on the plane
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub y: i64,
    pub x: i64,
}

/// A displacement between two points
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Vector {
    pub dy: i64,
    pub dx: i64,
}

/// One of the four compass directions
///
/// The discriminants give the stable iteration order N, E, S, W that callers
/// rely on for deterministic tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

/// Offsets to the 8 Chebyshev neighbours, clockwise from north
pub const SURROUND: [Vector; 8] = [
    Vector::new(-1, 0),
    Vector::new(-1, 1),
    Vector::new(0, 1),
    Vector::new(1, 1),
    Vector::new(1, 0),
    Vector::new(1, -1),
    Vector::new(0, -1),
    Vector::new(-1, -1),
];

impl Point {
    pub const ORIGIN: Point = Point { y: 0, x: 0 };

    /// Note the argument order: row first, then column.
    pub const fn new(y: i64, x: i64) -> Self {
        Self { y, x }
    }

    /// One step in `dir`
    pub fn step(self, dir: Direction) -> Self {
        self + dir.vector()
    }

    /// `k` steps in `dir`; negative `k` walks backwards
    pub fn step_by(self, dir: Direction, k: i64) -> Self {
        self + dir.vector() * k
    }

    pub fn manhattan(self, other: Point) -> i64 {
        (self.y - other.y).abs() + (self.x - other.x).abs()
    }

    /// Straight-line distance, for use as a comparison key
    pub fn euclidean(self, other: Point) -> f64 {
        let dy = (self.y - other.y) as f64;
        let dx = (self.x - other.x) as f64;
        dy.hypot(dx)
    }

    /// The 4 orthogonal neighbours in N, E, S, W order
    pub fn adjacent(self) -> [Point; 4] {
        Direction::ALL.map(|d| self.step(d))
    }

    /// The 8 Chebyshev neighbours, clockwise from north
    pub fn surround(self) -> [Point; 8] {
        SURROUND.map(|v| self + v)
    }
}

/// Row first, like [`Point::new`]: `(y=1, x=2)`
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(y={}, x={})", self.y, self.x)
    }
}

impl Vector {
    pub const fn new(dy: i64, dx: i64) -> Self {
        Self { dy, dx }
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, v: Vector) -> Point {
        Point::new(self.y + v.dy, self.x + v.dx)
    }
}

impl AddAssign<Vector> for Point {
    fn add_assign(&mut self, v: Vector) {
        self.y += v.dy;
        self.x += v.dx;
    }
}

impl Sub for Point {
    type Output = Vector;

    fn sub(self, other: Point) -> Vector {
        Vector::new(self.y - other.y, self.x - other.x)
    }
}

impl Mul<i64> for Vector {
    type Output = Vector;

    fn mul(self, k: i64) -> Vector {
        Vector::new(self.dy * k, self.dx * k)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.dy, -self.dx)
    }
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub const fn vector(self) -> Vector {
        match self {
            Direction::North => Vector::new(-1, 0),
            Direction::East => Vector::new(0, 1),
            Direction::South => Vector::new(1, 0),
            Direction::West => Vector::new(0, -1),
        }
    }

    /// Rotate `k` quarter turns clockwise; negative `k` turns counter-clockwise
    pub fn turn(self, k: i64) -> Self {
        Self::from_index((self as i64 + k).rem_euclid(4))
    }

    pub fn turn_right(self) -> Self {
        self.turn(1)
    }

    pub fn turn_left(self) -> Self {
        self.turn(-1)
    }

    pub fn opposite(self) -> Self {
        self.turn(2)
    }

    fn from_index(index: i64) -> Self {
        Self::ALL[index as usize]
    }
}

impl TryFrom<char> for Direction {
    type Error = char;

    /// Accepts arrows (`^>v<`), compass letters (`NESW`) and `URDL`.
    fn try_from(ch: char) -> Result<Self, char> {
        match ch {
            '^' | 'N' | 'U' => Ok(Direction::North),
            '>' | 'E' | 'R' => Ok(Direction::East),
            'v' | 'S' | 'D' => Ok(Direction::South),
            '<' | 'W' | 'L' => Ok(Direction::West),
            other => Err(other),
        }
    }
}

//! 2D integer vectors, direction offset tables, and a dense grid.

use std::ops::{Add, AddAssign, Index, IndexMut, Sub};

/// A 2D integer vector. `x` grows rightward, `y` grows downward, matching
/// the row-major text inputs the solvers read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Vec2 {
    pub x: i64,
    pub y: i64,
}

impl Vec2 {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Taxicab distance from the origin.
    pub fn manhattan(self) -> i64 {
        self.x.abs() + self.y.abs()
    }

    /// Chessboard distance from the origin; two cells are "touching"
    /// (including diagonally) iff their difference has chebyshev <= 1.
    pub fn chebyshev(self) -> i64 {
        self.x.abs().max(self.y.abs())
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// The four cardinal neighbor offsets: left, right, up, down.
pub const CARDINAL: [Vec2; 4] = [
    Vec2::new(-1, 0),
    Vec2::new(1, 0),
    Vec2::new(0, -1),
    Vec2::new(0, 1),
];

/// All eight neighbor offsets, row by row from the top-left.
pub const COMPASS: [Vec2; 8] = [
    Vec2::new(-1, -1),
    Vec2::new(0, -1),
    Vec2::new(1, -1),
    Vec2::new(-1, 0),
    Vec2::new(1, 0),
    Vec2::new(-1, 1),
    Vec2::new(0, 1),
    Vec2::new(1, 1),
];

/// Facing offsets indexed by heading: 0 = right, 1 = down, 2 = left, 3 = up.
/// The index order matters: turning right is +1 modulo 4, turning left is -1.
pub const HEADINGS: [Vec2; 4] = [
    Vec2::new(1, 0),
    Vec2::new(0, 1),
    Vec2::new(-1, 0),
    Vec2::new(0, -1),
];

/// Rotate a heading index by `quarter_turns` clockwise quarter turns
/// (negative for counterclockwise), staying within [`HEADINGS`].
pub fn rotate_heading(heading: usize, quarter_turns: i64) -> usize {
    (heading as i64 + quarter_turns).rem_euclid(HEADINGS.len() as i64) as usize
}

/// A dense row-major grid indexed by [`Vec2`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Grid<T> {
    /// Build a grid from rows. All rows must have equal length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }
        Some(Self {
            data: rows.into_iter().flatten().collect(),
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Vec2) -> bool {
        0 <= pos.x && (pos.x as usize) < self.width && 0 <= pos.y && (pos.y as usize) < self.height
    }

    pub fn get(&self, pos: Vec2) -> Option<&T> {
        if self.in_bounds(pos) {
            Some(&self.data[pos.y as usize * self.width + pos.x as usize])
        } else {
            None
        }
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Vec2::new(x as i64, y as i64)))
    }
}

impl<T> Index<Vec2> for Grid<T> {
    type Output = T;

    fn index(&self, pos: Vec2) -> &T {
        debug_assert!(self.in_bounds(pos));
        &self.data[pos.y as usize * self.width + pos.x as usize]
    }
}

impl<T> IndexMut<Vec2> for Grid<T> {
    fn index_mut(&mut self, pos: Vec2) -> &mut T {
        debug_assert!(self.in_bounds(pos));
        &mut self.data[pos.y as usize * self.width + pos.x as usize]
    }
}

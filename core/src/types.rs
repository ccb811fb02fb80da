use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Single coordinate axis used for grid height, width, and positions.
pub type Coord = u16;

/// Count type used for cell and wall counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Axis-aligned step direction.
///
/// [`Direction::ALL`] is the scan order shared by the generator's wall-collapse rule and by the solver, which makes
/// both deterministic for a fixed random source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    pub const fn delta(self) -> (i16, i16) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// Moves `coords` by `distance` steps, returning a value only when it stays inside `bounds`.
    pub fn step(self, coords: Coord2, distance: i16, bounds: Coord2) -> Option<Coord2> {
        let (dr, dc) = self.delta();
        apply_delta(coords, (dr * distance, dc * distance), bounds)
    }
}

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i16, i16), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (dr, dc) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(dr)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(dc)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let (rows, cols) = self.dim();
        // grids are built through `Maze`, which keeps both axes within `Coord`
        let bounds = (rows as Coord, cols as Coord);
        NeighborIter::new(index, bounds)
    }
}

/// Orthogonal neighbours of a cell in [`Direction::ALL`] order, skipping those outside the grid.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let direction = *Direction::ALL.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(next_item) = direction.step(self.center, 1, self.bounds) {
                return Some(next_item);
            }
        }
    }
}

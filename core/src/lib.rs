#![no_std]

extern crate alloc;

use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use error::*;
pub use frontier::*;
pub use generator::*;
pub use solver::*;
pub use text::*;
pub use tile::*;
pub use types::*;

mod error;
mod frontier;
mod generator;
mod solver;
mod text;
mod tile;
mod types;

/// Largest number of free cells per axis, so that `2 * size + 1` still fits a [`Coord`].
pub const MAX_SIZE: Coord = (Coord::MAX - 1) / 2;

/// Number of free cells per axis, `(rows, cols)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeConfig {
    pub cells: Coord2,
}

impl MazeConfig {
    pub const fn new_unchecked(cells: Coord2) -> Self {
        Self { cells }
    }

    /// Square maze with `size` free cells per side.
    pub fn new(size: Coord) -> Result<Self> {
        Self::rectangular(size, size)
    }

    pub fn rectangular(rows: Coord, cols: Coord) -> Result<Self> {
        let config = Self::new_unchecked((rows, cols));
        config.validate()?;
        Ok(config)
    }

    /// Checks both axes are within `1..=MAX_SIZE`, for configs built unchecked or deserialized.
    pub fn validate(&self) -> Result<()> {
        let valid = 1..=MAX_SIZE;
        if valid.contains(&self.cells.0) && valid.contains(&self.cells.1) {
            Ok(())
        } else {
            Err(MazeError::InvalidSize)
        }
    }

    /// Dimensions of the wall-and-cell grid.
    pub const fn grid_size(&self) -> Coord2 {
        (self.cells.0 * 2 + 1, self.cells.1 * 2 + 1)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.cells.0, self.cells.1)
    }
}

/// Grid of walls, corridors and markers shared by the generator, the text codec and the solver.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maze {
    cells: Array2<Cell>,
}

impl Maze {
    /// Grid of `size` filled with `tile`; callers keep both axes within [`Coord`].
    pub(crate) fn filled(size: Coord2, tile: Tile) -> Self {
        Self {
            cells: Array2::from_elem(size.to_nd_index(), Cell::new(tile)),
        }
    }

    /// `(rows, cols)` of the full grid, boundary included.
    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn contains(&self, (row, col): Coord2) -> bool {
        let (rows, cols) = self.size();
        row < rows && col < cols
    }

    pub fn tile_at(&self, coords: Coord2) -> Tile {
        self[coords].tile
    }

    pub fn trail_at(&self, coords: Coord2) -> Trail {
        self[coords].trail
    }

    pub fn start(&self) -> Option<Coord2> {
        self.find_tile(Tile::Start)
    }

    pub fn finish(&self) -> Option<Coord2> {
        self.find_tile(Tile::Finish)
    }

    pub fn count_tiles(&self, tile: Tile) -> CellCount {
        self.cells.iter().filter(|cell| cell.tile == tile).count() as CellCount
    }

    pub fn count_trail(&self, trail: Trail) -> CellCount {
        self.cells.iter().filter(|cell| cell.trail == trail).count() as CellCount
    }

    /// Forgets everything a previous solve left behind.
    pub fn clear_trail(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.trail = Trail::Untouched;
        }
    }

    pub fn row(&self, row: Coord) -> impl Iterator<Item = Cell> + '_ {
        self.cells.row(usize::from(row)).into_iter().copied()
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    fn find_tile(&self, tile: Tile) -> Option<Coord2> {
        self.cells
            .indexed_iter()
            .find(|(_, cell)| cell.tile == tile)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }
}

impl Index<Coord2> for Maze {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Maze {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}

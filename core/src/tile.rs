use serde::{Deserialize, Serialize};

/// Structural state of a grid position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    Wall,
    /// Odd/odd cell the generator has not reached yet.
    Unvisited,
    Corridor,
    Start,
    Finish,
}

impl Tile {
    /// Whether the solver may step onto this tile.
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Corridor | Self::Start)
    }

    /// Whether this tile is written with the open glyph when the maze is saved.
    pub const fn is_passable(self) -> bool {
        matches!(self, Self::Corridor | Self::Start | Self::Finish)
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::Wall
    }
}

/// Solver bookkeeping layered over a [`Tile`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trail {
    Untouched,
    /// Entered by the search and rejected as a dead end.
    Explored,
    Path,
}

impl Default for Trail {
    fn default() -> Self {
        Self::Untouched
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub tile: Tile,
    pub trail: Trail,
}

impl Cell {
    pub const fn new(tile: Tile) -> Self {
        Self {
            tile,
            trail: Trail::Untouched,
        }
    }

    pub const fn is_on_path(self) -> bool {
        matches!(self.trail, Trail::Path)
    }
}

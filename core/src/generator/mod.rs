use crate::*;
pub use prim::*;

mod prim;

pub trait MazeGenerator {
    fn generate(self, config: MazeConfig) -> Result<Maze>;
}

/// Outer boundary column that gets breached.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Side {
    Left,
    Right,
}

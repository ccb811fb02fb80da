use thiserror::Error;

use crate::MAX_SIZE;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("Maze size must be between 1 and {max}", max = MAX_SIZE)]
    InvalidSize,
    #[error("Tried to take a wall from an empty frontier")]
    EmptyFrontier,
    #[error("Malformed maze")]
    MalformedMaze(#[from] MalformedReason),
}

/// Why a textual maze could not be turned into a [`Maze`](crate::Maze).
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    #[error("no rows")]
    Empty,
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown glyph {glyph:?} at row {row}, column {col}")]
    UnknownGlyph { row: usize, col: usize, glyph: char },
    #[error("maze is too large")]
    TooLarge,
    #[error("no opening on the left boundary")]
    MissingStart,
    #[error("no opening on the right boundary")]
    MissingFinish,
    #[error("more than one opening on the left boundary")]
    MultipleStarts,
    #[error("more than one opening on the right boundary")]
    MultipleFinishes,
}

pub type Result<T> = core::result::Result<T, MazeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use core::error::Error;

    #[test]
    fn malformed_reason_is_the_source_not_the_message() {
        let err = MazeError::from(MalformedReason::Empty);

        assert_eq!(err.to_string(), "Malformed maze");
        assert_eq!(err.source().unwrap().to_string(), "no rows");
    }
}

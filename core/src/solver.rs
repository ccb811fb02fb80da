use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveOutcome {
    /// Cells from the start up to the one next to the finish, in walking order.
    Solved(Vec<Coord2>),
    Unsolvable,
}

impl SolveOutcome {
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }

    pub fn path(&self) -> Option<&[Coord2]> {
        match self {
            Self::Solved(path) => Some(path),
            Self::Unsolvable => None,
        }
    }
}

/// Depth-first search that marks its trail on the maze itself.
///
/// Neighbours are tried in [`Direction::ALL`] order and the first path that reaches the finish wins, which is not
/// necessarily the shortest one. Cells the search backs out of keep [`Trail::Explored`] and are never entered again.
/// The search keeps its own frame stack, so the depth of the maze is not limited by the call stack.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BacktrackSolver;

#[derive(Copy, Clone, Debug)]
struct Frame {
    coords: Coord2,
    next_direction: u8,
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Step {
    Blocked,
    Entered,
    ReachedFinish,
}

impl BacktrackSolver {
    pub const fn new() -> Self {
        Self
    }

    /// Solves from the maze's start tile.
    pub fn solve(&self, maze: &mut Maze) -> Result<SolveOutcome> {
        let start = maze.start().ok_or(MalformedReason::MissingStart)?;
        if maze.finish().is_none() {
            return Err(MalformedReason::MissingFinish.into());
        }
        Ok(self.solve_from(maze, start))
    }

    pub fn solve_from(&self, maze: &mut Maze, start: Coord2) -> SolveOutcome {
        let bounds = maze.size();
        let mut frames = Vec::new();

        match enter(maze, start) {
            Step::Blocked => return SolveOutcome::Unsolvable,
            Step::ReachedFinish => return SolveOutcome::Solved(Vec::new()),
            Step::Entered => frames.push(Frame::new(start)),
        }

        while let Some(frame) = frames.last_mut() {
            let Some(&direction) = Direction::ALL.get(usize::from(frame.next_direction)) else {
                // dead end, the cell stays explored
                frames.pop();
                continue;
            };
            frame.next_direction += 1;

            let Some(next) = direction.step(frame.coords, 1, bounds) else {
                continue;
            };
            match enter(maze, next) {
                Step::Blocked => {}
                Step::Entered => frames.push(Frame::new(next)),
                Step::ReachedFinish => {
                    let path: Vec<Coord2> = frames.iter().map(|frame| frame.coords).collect();
                    for &coords in &path {
                        maze[coords].trail = Trail::Path;
                    }
                    log::debug!(
                        "Solved with a path of {} cells, {} dead-end cells explored",
                        path.len(),
                        maze.count_trail(Trail::Explored)
                    );
                    return SolveOutcome::Solved(path);
                }
            }
        }

        log::debug!(
            "No path from {:?}, {} cells explored",
            start,
            maze.count_trail(Trail::Explored)
        );
        SolveOutcome::Unsolvable
    }
}

impl Frame {
    const fn new(coords: Coord2) -> Self {
        Self {
            coords,
            next_direction: 0,
        }
    }
}

/// Tries to step onto `coords`, marking it explored when it is open and untouched.
fn enter(maze: &mut Maze, coords: Coord2) -> Step {
    if !maze.contains(coords) {
        return Step::Blocked;
    }

    let cell = maze[coords];
    if cell.tile == Tile::Finish {
        return Step::ReachedFinish;
    }
    if !cell.tile.is_open() || cell.trail != Trail::Untouched {
        return Step::Blocked;
    }

    maze[coords].trail = Trail::Explored;
    Step::Entered
}

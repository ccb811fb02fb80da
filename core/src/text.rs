use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Characters used in the persisted line format.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glyphs {
    pub wall: char,
    pub open: char,
}

impl Glyphs {
    fn tile(&self, glyph: char) -> Option<Tile> {
        if glyph == self.wall {
            Some(Tile::Wall)
        } else if glyph == self.open {
            Some(Tile::Corridor)
        } else {
            None
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            wall: 'X',
            open: ' ',
        }
    }
}

/// What to do when a boundary column has more than one opening.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreachPolicy {
    /// Exactly one opening per side, anything else is malformed.
    Strict,
    /// The lowest opening wins, the ones above it stay plain corridors.
    LastMatch,
}

impl Default for BreachPolicy {
    fn default() -> Self {
        Self::Strict
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadOptions {
    pub glyphs: Glyphs,
    pub breach: BreachPolicy,
}

/// Display-only characters, see [`Maze::render`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub wall: char,
    pub open: char,
    pub start: char,
    pub finish: char,
    pub path: char,
    /// Glyph for dead ends the solver backed out of, drawn as open space when unset.
    pub explored: Option<char>,
}

impl RenderStyle {
    pub const fn with_explored(self, glyph: char) -> Self {
        Self {
            explored: Some(glyph),
            ..self
        }
    }

    fn glyph(&self, cell: Cell) -> char {
        match (cell.tile, cell.trail) {
            (Tile::Wall | Tile::Unvisited, _) => self.wall,
            (Tile::Start, _) => self.start,
            (Tile::Finish, _) => self.finish,
            (Tile::Corridor, Trail::Path) => self.path,
            (Tile::Corridor, Trail::Explored) => self.explored.unwrap_or(self.open),
            (Tile::Corridor, Trail::Untouched) => self.open,
        }
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            wall: '+',
            open: ' ',
            start: 'S',
            finish: 'F',
            path: '#',
            explored: None,
        }
    }
}

impl Maze {
    /// Persisted form, one string per grid row.
    pub fn to_lines(&self, glyphs: &Glyphs) -> Vec<String> {
        let (rows, _) = self.size();
        (0..rows)
            .map(|row| {
                self.row(row)
                    .map(|cell| {
                        if cell.tile.is_passable() {
                            glyphs.open
                        } else {
                            glyphs.wall
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// Parses the persisted form and derives the start and finish from the openings in the outer columns.
    pub fn from_lines<I, S>(lines: I, options: &LoadOptions) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut width = None;
        let mut height = 0;
        let mut cells = Vec::new();

        for (row, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let line = line.strip_suffix('\r').unwrap_or(line);

            let mut found = 0;
            for (col, glyph) in line.chars().enumerate() {
                let tile = options
                    .glyphs
                    .tile(glyph)
                    .ok_or(MalformedReason::UnknownGlyph { row, col, glyph })?;
                cells.push(Cell::new(tile));
                found += 1;
            }

            let expected = *width.get_or_insert(found);
            if found != expected {
                return Err(MalformedReason::RaggedRow {
                    row,
                    expected,
                    found,
                }
                .into());
            }
            height += 1;
        }

        let width = match width {
            None | Some(0) => return Err(MalformedReason::Empty.into()),
            Some(width) => width,
        };
        if height > usize::from(Coord::MAX) || width > usize::from(Coord::MAX) {
            return Err(MalformedReason::TooLarge.into());
        }
        if width < 2 {
            return Err(MalformedReason::MissingFinish.into());
        }

        let cells = Array2::from_shape_vec((height, width), cells)
            .expect("every row was checked to have the same width");
        let mut maze = Maze { cells };
        let last_col = maze.size().1 - 1;
        maze.mark_breach(0, Tile::Start, options.breach)?;
        maze.mark_breach(last_col, Tile::Finish, options.breach)?;

        log::debug!(
            "Loaded {}x{} maze, start {:?}, finish {:?}",
            height,
            width,
            maze.start(),
            maze.finish()
        );
        Ok(maze)
    }

    /// Turns the opening of boundary column `col` into `tile`.
    fn mark_breach(&mut self, col: Coord, tile: Tile, policy: BreachPolicy) -> Result<()> {
        let (rows, _) = self.size();
        let openings: Vec<Coord> = (0..rows)
            .filter(|&row| self.tile_at((row, col)) == Tile::Corridor)
            .collect();

        let (missing, multiple) = match tile {
            Tile::Start => (MalformedReason::MissingStart, MalformedReason::MultipleStarts),
            _ => (MalformedReason::MissingFinish, MalformedReason::MultipleFinishes),
        };
        let row = match (policy, openings.as_slice()) {
            (_, []) => return Err(missing.into()),
            (BreachPolicy::Strict, [row]) => *row,
            (BreachPolicy::Strict, _) => return Err(multiple.into()),
            (BreachPolicy::LastMatch, [.., row]) => {
                if openings.len() > 1 {
                    log::warn!(
                        "{} openings found in column {}, keeping row {}",
                        openings.len(),
                        col,
                        row
                    );
                }
                *row
            }
        };

        self[(row, col)].tile = tile;
        Ok(())
    }

    /// Console form, one string per grid row.
    pub fn render(&self, style: &RenderStyle) -> Vec<String> {
        let (rows, _) = self.size();
        (0..rows)
            .map(|row| self.row(row).map(|cell| style.glyph(cell)).collect())
            .collect()
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        let style = RenderStyle::default();
        let (rows, _) = self.size();
        for row in 0..rows {
            for cell in self.row(row) {
                f.write_char(style.glyph(cell))?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    const SMALL: [&str; 5] = ["XXXXX", "  X X", "X X  ", "X   X", "XXXXX"];

    fn load(lines: &[&str]) -> Result<Maze> {
        Maze::from_lines(lines, &LoadOptions::default())
    }

    #[test]
    fn generated_maze_survives_a_round_trip() {
        let config = MazeConfig::new(6).unwrap();
        let maze = PrimMazeGenerator::new(17).generate(config).unwrap();
        let glyphs = Glyphs::default();

        let lines = maze.to_lines(&glyphs);
        let loaded = Maze::from_lines(&lines, &LoadOptions::default()).unwrap();

        assert_eq!(loaded.to_lines(&glyphs), lines);
        assert_eq!(loaded.start(), maze.start());
        assert_eq!(loaded.finish(), maze.finish());
    }

    #[test]
    fn loader_marks_boundary_openings() {
        let maze = load(&SMALL).unwrap();

        assert_eq!(maze.size(), (5, 5));
        assert_eq!(maze.start(), Some((1, 0)));
        assert_eq!(maze.finish(), Some((2, 4)));
        assert_eq!(maze.tile_at((1, 1)), Tile::Corridor);
        assert_eq!(maze.tile_at((0, 0)), Tile::Wall);
    }

    #[test]
    fn loader_rejects_ragged_rows() {
        let err = load(&["XXX", "   ", "XX"]).unwrap_err();

        assert_eq!(
            err,
            MazeError::MalformedMaze(MalformedReason::RaggedRow {
                row: 2,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn loader_rejects_unknown_glyphs() {
        let err = load(&["XXX", " o ", "XXX"]).unwrap_err();

        assert_eq!(
            err,
            MazeError::MalformedMaze(MalformedReason::UnknownGlyph {
                row: 1,
                col: 1,
                glyph: 'o'
            })
        );
    }

    #[test]
    fn loader_rejects_empty_input() {
        let lines: [&str; 0] = [];

        assert_eq!(
            load(&lines),
            Err(MazeError::MalformedMaze(MalformedReason::Empty))
        );
        assert_eq!(
            load(&[""]),
            Err(MazeError::MalformedMaze(MalformedReason::Empty))
        );
    }

    #[test]
    fn loader_requires_both_breaches() {
        assert_eq!(
            load(&["XXX", "X  ", "XXX"]),
            Err(MazeError::MalformedMaze(MalformedReason::MissingStart))
        );
        assert_eq!(
            load(&["XXX", "  X", "XXX"]),
            Err(MazeError::MalformedMaze(MalformedReason::MissingFinish))
        );
    }

    #[test]
    fn strict_policy_rejects_extra_openings() {
        let lines = ["XXXXX", "    X", "XXX X", "   X ", "XXXXX"];

        assert_eq!(
            load(&lines),
            Err(MazeError::MalformedMaze(MalformedReason::MultipleStarts))
        );
    }

    #[test]
    fn last_match_policy_keeps_the_lowest_opening() {
        let lines = ["XXXXX", "    X", "XXX X", "     ", "XXXXX"];
        let options = LoadOptions {
            breach: BreachPolicy::LastMatch,
            ..LoadOptions::default()
        };

        let maze = Maze::from_lines(lines, &options).unwrap();

        assert_eq!(maze.start(), Some((3, 0)));
        assert_eq!(maze.tile_at((1, 0)), Tile::Corridor);
        assert_eq!(maze.finish(), Some((3, 4)));
    }

    #[test]
    fn carriage_returns_are_ignored() {
        let lines = vec!["XXX\r", "   \r", "XXX\r"];

        let maze = Maze::from_lines(lines, &LoadOptions::default()).unwrap();

        assert_eq!(maze.size(), (3, 3));
    }

    #[test]
    fn custom_glyphs_are_honoured() {
        let options = LoadOptions {
            glyphs: Glyphs { wall: '#', open: '.' },
            ..LoadOptions::default()
        };

        let maze = Maze::from_lines(["###", "...", "###"], &options).unwrap();

        assert_eq!(maze.to_lines(&options.glyphs), ["###", "...", "###"]);
    }

    #[test]
    fn render_normalizes_walls() {
        let maze = load(&SMALL).unwrap();

        assert_eq!(
            maze.render(&RenderStyle::default()),
            ["+++++", "S + +", "+ + F", "+   +", "+++++"]
        );
        assert_eq!(maze.to_string(), "+++++\nS + +\n+ + F\n+   +\n+++++\n");
    }
}

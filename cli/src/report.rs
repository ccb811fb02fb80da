use corrido_core::*;
use serde::Serialize;
use std::path::Path;

/// Machine-readable summary of a solve, printed with `--json`.
#[derive(Debug, Serialize)]
pub struct SolveReport<'a> {
    pub file: &'a Path,
    pub size: Coord2,
    pub start: Option<Coord2>,
    pub finish: Option<Coord2>,
    pub solved: bool,
    pub path: Option<&'a [Coord2]>,
    pub explored: CellCount,
    pub rendered: Vec<String>,
}

impl<'a> SolveReport<'a> {
    pub fn new(
        file: &'a Path,
        maze: &Maze,
        outcome: &'a SolveOutcome,
        style: &RenderStyle,
    ) -> Self {
        Self {
            file,
            size: maze.size(),
            start: maze.start(),
            finish: maze.finish(),
            solved: outcome.is_solved(),
            path: outcome.path(),
            explored: maze.count_trail(Trail::Explored),
            rendered: maze.render(style),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes_path_and_grid() {
        let mut maze = Maze::from_lines(["XXX", "   ", "XXX"], &LoadOptions::default()).unwrap();
        let outcome = BacktrackSolver::new().solve(&mut maze).unwrap();

        let style = RenderStyle::default();

        let report = SolveReport::new(Path::new("tiny.txt"), &maze, &outcome, &style);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["file"], "tiny.txt");
        assert_eq!(json["size"], serde_json::json!([3, 3]));
        assert_eq!(json["solved"], true);
        assert_eq!(json["path"], serde_json::json!([[1, 0], [1, 1]]));
        assert_eq!(json["rendered"][1], "S#F");
    }
}

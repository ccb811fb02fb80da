use rand::Rng;

use super::*;

/// Randomized Prim–Jarnik growth: starting from a random cell, keep collapsing random frontier walls whose far side
/// has not been reached yet, until no candidate wall is left.
#[derive(Clone, Debug, PartialEq)]
pub struct PrimMazeGenerator {
    seed: u64,
}

impl PrimMazeGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MazeGenerator for PrimMazeGenerator {
    fn generate(self, config: MazeConfig) -> Result<Maze> {
        use rand::{SeedableRng, rngs::SmallRng};

        log::debug!("Generating {:?} maze with seed {}", config.cells, self.seed);
        let mut rng = SmallRng::seed_from_u64(self.seed);
        generate_prim(config, &mut rng)
    }
}

/// Carves a perfect maze for `config`, taking every random decision from `rng`.
pub fn generate_prim<R: Rng + ?Sized>(config: MazeConfig, rng: &mut R) -> Result<Maze> {
    config.validate()?;
    let mut maze = initial_grid(config);
    let mut frontier = FrontierSet::new();

    let seed_cell = (random_odd(config.cells.0, rng), random_odd(config.cells.1, rng));
    visit_cell(&mut maze, &mut frontier, seed_cell);

    let mut collapsed: CellCount = 0;
    while !frontier.is_empty() {
        let wall = frontier.remove_random(rng)?;
        let Some(cell) = maze
            .iter_neighbors(wall)
            .find(|&pos| maze.tile_at(pos) == Tile::Unvisited)
        else {
            // both sides already carved
            continue;
        };
        visit_cell(&mut maze, &mut frontier, cell);
        maze[wall].tile = Tile::Corridor;
        collapsed += 1;
    }

    // every collapse connects exactly one new cell
    if collapsed + 1 != config.total_cells() {
        log::warn!(
            "Generated maze collapse count mismatch, actual: {}, expected: {}",
            collapsed,
            config.total_cells() - 1
        );
    }
    log::debug!("Carved {} cells with {} collapsed walls", collapsed + 1, collapsed);

    breach(&mut maze, config, Side::Left, rng);
    breach(&mut maze, config, Side::Right, rng);
    Ok(maze)
}

/// Solid walls everywhere except the odd/odd cells, which start out unvisited.
fn initial_grid(config: MazeConfig) -> Maze {
    let mut maze = Maze::filled(config.grid_size(), Tile::Wall);
    let (rows, cols) = config.cells;
    for row in 0..rows {
        for col in 0..cols {
            maze[(row * 2 + 1, col * 2 + 1)].tile = Tile::Unvisited;
        }
    }
    maze
}

/// Random odd coordinate among `count` free cells on one axis.
fn random_odd<R: Rng + ?Sized>(count: Coord, rng: &mut R) -> Coord {
    rng.random_range(0..count) * 2 + 1
}

/// Marks `cell` carved and queues every wall that separates it from a still unvisited cell.
fn visit_cell(maze: &mut Maze, frontier: &mut FrontierSet<Coord2>, cell: Coord2) {
    maze[cell].tile = Tile::Corridor;

    let bounds = maze.size();
    for direction in Direction::ALL {
        let Some(wall) = direction.step(cell, 1, bounds) else {
            continue;
        };
        let Some(beyond) = direction.step(cell, 2, bounds) else {
            continue;
        };
        // a wall is never queued twice: once collapsed its far side is no longer unvisited
        if maze.tile_at(beyond) == Tile::Unvisited && maze.tile_at(wall) == Tile::Wall {
            frontier.push(wall);
        }
    }
}

/// Opens the outer wall on `side` next to a random carved cell, by rejection sampling odd rows.
fn breach<R: Rng + ?Sized>(maze: &mut Maze, config: MazeConfig, side: Side, rng: &mut R) {
    let (_, last_col) = config.grid_size();
    let last_col = last_col - 1;
    let (boundary, inner, tile) = match side {
        Side::Left => (0, 1, Tile::Start),
        Side::Right => (last_col, last_col - 1, Tile::Finish),
    };

    let row = loop {
        let row = random_odd(config.cells.0, rng);
        if maze.tile_at((row, inner)) == Tile::Corridor {
            break row;
        }
    };
    log::trace!("Breaching {:?} boundary at row {}", side, row);
    maze[(row, boundary)].tile = tile;
}

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use corrido_core::*;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use web_time::Instant;

use prompt::Prompter;
use report::SolveReport;

mod prompt;
mod report;

const DEFAULT_FILE: &str = "maze.txt";

/// Generate perfect mazes, save them as text and solve them by backtracking
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Generate a maze and save it to a file
    Generate(GenerateArgs),
    /// Load a maze from a file and solve it
    Solve(SolveArgs),
    /// Generate, save, reload and solve a maze (default)
    Run {
        #[command(flatten)]
        generate: GenerateArgs,
        #[command(flatten)]
        display: DisplayArgs,
    },
}

#[derive(clap::Args, Debug, Default)]
struct GenerateArgs {
    /// Free cells per side, asked on stdin when missing
    #[arg(short, long, conflicts_with_all = ["rows", "cols"])]
    size: Option<Coord>,

    /// Free cells per column, for non-square mazes
    #[arg(long, requires = "cols")]
    rows: Option<Coord>,

    /// Free cells per row, for non-square mazes
    #[arg(long, requires = "rows")]
    cols: Option<Coord>,

    /// Force a seed instead of random
    #[arg(long)]
    seed: Option<u64>,

    /// Where to save the maze, asked on stdin when the size was asked too
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
struct SolveArgs {
    /// Maze file to load
    #[arg(default_value = DEFAULT_FILE)]
    file: PathBuf,

    /// Accept several openings per side and keep the lowest one
    #[arg(long)]
    legacy_breach: bool,

    #[command(flatten)]
    display: DisplayArgs,
}

#[derive(clap::Args, Debug, Default)]
struct DisplayArgs {
    /// Draw dead ends the solver backed out of
    #[arg(long)]
    show_explored: bool,

    /// Print a JSON report instead of the grids
    #[arg(long)]
    json: bool,
}

impl DisplayArgs {
    fn style(&self) -> RenderStyle {
        let style = RenderStyle::default();
        if self.show_explored {
            style.with_explored('.')
        } else {
            style
        }
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());
    let mut out = io::stdout().lock();

    let command = args.command.unwrap_or(Command::Run {
        generate: GenerateArgs::default(),
        display: DisplayArgs::default(),
    });
    let solved = match command {
        Command::Generate(generate) => {
            generate_to_file(&generate, &mut prompter, &mut out)?;
            true
        }
        Command::Solve(solve) => {
            let options = load_options(solve.legacy_breach);
            solve_file(&solve.file, &options, &solve.display, &mut out)?
        }
        Command::Run { generate, display } => {
            let file = generate_to_file(&generate, &mut prompter, &mut out)?;
            solve_file(&file, &LoadOptions::default(), &display, &mut out)?
        }
    };

    Ok(if solved {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    })
}

fn load_options(legacy_breach: bool) -> LoadOptions {
    LoadOptions {
        breach: if legacy_breach {
            BreachPolicy::LastMatch
        } else {
            BreachPolicy::Strict
        },
        ..LoadOptions::default()
    }
}

/// Generates a maze, prints it and saves it, returning the file it went to.
fn generate_to_file<R, W>(
    args: &GenerateArgs,
    prompter: &mut Prompter<R, W>,
    out: &mut impl Write,
) -> Result<PathBuf>
where
    R: io::BufRead,
    W: Write,
{
    let (config, asked) = match (args.size, args.rows, args.cols) {
        (Some(size), _, _) => (MazeConfig::new(size)?, false),
        (None, Some(rows), Some(cols)) => (MazeConfig::rectangular(rows, cols)?, false),
        _ => (MazeConfig::new(prompter.ask_size()?)?, true),
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("seed: {seed}");

    writeln!(out, "Generating maze...")?;
    let started = Instant::now();
    let maze = PrimMazeGenerator::new(seed).generate(config)?;
    log::debug!("Generated in {:?}", started.elapsed());

    let lines = maze.to_lines(&Glyphs::default());
    for line in &lines {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    out.flush()?;

    let file = match &args.output {
        Some(file) => file.clone(),
        None if asked => prompter.ask_file(Path::new(DEFAULT_FILE))?,
        None => PathBuf::from(DEFAULT_FILE),
    };
    save_lines(&file, &lines)?;
    writeln!(out, "{} saved", file.display())?;
    Ok(file)
}

fn save_lines(file: &Path, lines: &[String]) -> Result<()> {
    let mut contents = lines.join("\n");
    contents.push('\n');
    std::fs::write(file, contents).with_context(|| format!("Could not write {}", file.display()))
}

/// Loads and solves `file`, printing the grids or a JSON report. Returns whether a path was found.
fn solve_file(
    file: &Path,
    options: &LoadOptions,
    display: &DisplayArgs,
    out: &mut impl Write,
) -> Result<bool> {
    let contents = std::fs::read_to_string(file)
        .with_context(|| format!("Could not read {}", file.display()))?;
    let mut maze = Maze::from_lines(contents.lines(), options)
        .with_context(|| format!("Could not load {}", file.display()))?;
    let style = display.style();

    if !display.json {
        let (rows, cols) = maze.size();
        writeln!(out, "Maze loaded")?;
        writeln!(out, "Dimensions = {rows}:{cols}")?;
        writeln!(out)?;
        writeln!(out, "Unsolved maze:")?;
        print_grid(&maze, &style, out)?;
    }

    let started = Instant::now();
    let outcome = BacktrackSolver::new().solve(&mut maze)?;
    log::debug!("Solved in {:?}", started.elapsed());

    if display.json {
        let report = SolveReport::new(file, &maze, &outcome, &style);
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else if outcome.is_solved() {
        writeln!(out, "Solved maze:")?;
        print_grid(&maze, &style, out)?;
    } else {
        writeln!(out, "No path from start to finish")?;
    }
    Ok(outcome.is_solved())
}

fn print_grid(maze: &Maze, style: &RenderStyle, out: &mut impl Write) -> Result<()> {
    writeln!(out)?;
    for line in maze.render(style) {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    Ok(())
}

//! CLI entry point for the maze solver.
//!
//! Usage:
//!   maze-solver solve <maze.txt|maze.json> [options]
//!   maze-solver generate --rows <n> --cols <n> [--seed <n>]
//!
//! Options for `solve`:
//!   --strategy <name>   bfs, zigzag, ucs or ids (default: bfs)
//!   --max-depth <n>     Depth cap for ids (default: rows * cols)
//!   --relax             ucs marks cells visited when expanded, not when discovered
//!   --format <fmt>      json or text (default: json)
//!
//! Exit status is 0 when a path was found, 1 when the goal is unreachable and
//! 2 when the maze could not be read.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use maze_solver::generate::{random_maze, seeded_maze};
use maze_solver::render::render;
use maze_solver::{solve_with, Marking, Maze, Position, SolverConfig, SolverResult, Strategy};

#[derive(Parser)]
#[command(name = "maze-solver")]
#[command(about = "Find a route through an integer-coded maze")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a maze for a route from start to goal
    Solve {
        /// Maze file: whitespace-separated codes, or a JSON array of rows
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Search strategy
        #[arg(long, value_enum, default_value = "bfs")]
        strategy: StrategyArg,

        /// Maximum depth limit for iterative deepening
        #[arg(long)]
        max_depth: Option<usize>,

        /// Uniform-cost search relaxes costs until a cell is expanded
        #[arg(long)]
        relax: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },

    /// Print a random maze in the text format
    Generate {
        #[arg(long, default_value = "10")]
        rows: usize,

        #[arg(long, default_value = "10")]
        cols: usize,

        /// Seed for a reproducible maze
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Bfs,
    Zigzag,
    Ucs,
    Ids,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Bfs => Strategy::Bfs,
            StrategyArg::Zigzag => Strategy::ZigZag,
            StrategyArg::Ucs => Strategy::Ucs,
            StrategyArg::Ids => Strategy::Ids,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

/// JSON output for a solve run
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    strategy: Strategy,
    found: bool,
    /// Start to goal
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<Vec<Position>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path_cost: Option<u32>,
    visited_count: usize,
    expanded_count: usize,
    time_elapsed_ms: u64,
    visited: Vec<Position>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let status = match cli.command {
        Commands::Solve {
            file,
            strategy,
            max_depth,
            relax,
            format,
        } => {
            let maze = match Maze::load(&file) {
                Ok(maze) => maze,
                Err(e) => {
                    log::error!("Cannot load maze {}: {e}", file.display());
                    process::exit(2);
                }
            };

            let config = SolverConfig {
                strategy: strategy.into(),
                max_depth,
                marking: if relax {
                    Marking::OnExpansion
                } else {
                    Marking::OnDiscovery
                },
            };

            let result = solve_with(&maze, &config);
            match format {
                OutputFormat::Json => print_json(&format_result(&result)),
                OutputFormat::Text => print_text(&maze, &result),
            }

            if result.found {
                0
            } else {
                1
            }
        }

        Commands::Generate { rows, cols, seed } => {
            let maze = match seed {
                Some(seed) => seeded_maze(rows, cols, seed),
                None => random_maze(rows, cols, &mut rand::thread_rng()),
            };
            match maze {
                Ok(maze) => {
                    print!("{maze}");
                    0
                }
                Err(e) => {
                    log::error!("Cannot generate maze: {e}");
                    2
                }
            }
        }
    };

    process::exit(status);
}

fn format_result(result: &SolverResult) -> SolveOutput {
    SolveOutput {
        strategy: result.strategy,
        found: result.found,
        path: result.outcome.path.as_ref().map(|path| path.to_start_first()),
        path_cost: result.path_cost,
        visited_count: result.visited_count,
        expanded_count: result.expanded_count,
        time_elapsed_ms: result.time_elapsed_ms,
        visited: result.outcome.visited.clone(),
    }
}

fn print_json(output: &SolveOutput) {
    match serde_json::to_string_pretty(output) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Cannot serialize result: {e}"),
    }
}

fn print_text(maze: &Maze, result: &SolverResult) {
    print!("{}", render(maze, result.outcome.path.as_ref()));
    println!();
    match (&result.outcome.path, result.path_cost) {
        (Some(path), Some(cost)) => {
            println!("{}: {} cells, cost {cost}", result.strategy, path.len());
        }
        _ => println!("{}: no path", result.strategy),
    }
    println!(
        "visited {} cells, expanded {}, {}ms",
        result.visited_count, result.expanded_count, result.time_elapsed_ms
    );
}

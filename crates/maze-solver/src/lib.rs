//! Grid maze search library.
//!
//! This crate finds a route from the start cell to the goal cell of an
//! integer-coded maze using breadth-first search (plain and zig-zag ordered),
//! uniform-cost search and iterative-deepening search. Every search returns
//! its path together with the visited order, so callers can replay it.

pub mod bfs;
pub mod error;
pub mod frontier;
pub mod generate;
pub mod ids;
pub mod maze;
pub mod path;
pub mod render;
pub mod solver;
pub mod state;
pub mod ucs;

// Re-export main types
pub use error::MazeError;
pub use maze::{CellKind, Maze, Move, Position, Sweep};
pub use path::Path;
pub use solver::{solve_with, SolverConfig, SolverResult, Strategy};
pub use state::{Expansion, SearchOutcome, SearchState};
pub use ucs::Marking;

//! Front door for running one strategy on a maze.
//!
//! Picks the strategy named in a [`SolverConfig`], applies the depth cap and
//! marking options, and wraps the outcome with timing and summary counts.

use std::fmt;
use std::time::Instant;

use log::info;
use serde::{Deserialize, Serialize};

use crate::maze::Maze;
use crate::state::SearchOutcome;
use crate::ucs::Marking;
use crate::{bfs, ids, ucs};

/// Which search to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Bfs,
    ZigZag,
    Ucs,
    Ids,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [Strategy::Bfs, Strategy::ZigZag, Strategy::Ucs, Strategy::Ids];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Bfs => "bfs",
            Strategy::ZigZag => "zigzag",
            Strategy::Ucs => "ucs",
            Strategy::Ids => "ids",
        };
        f.write_str(name)
    }
}

/// Configuration for the solver
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    pub strategy: Strategy,
    /// Cap on the iterative-deepening depth limit. `None` uses the number of
    /// cells in the maze.
    pub max_depth: Option<usize>,
    /// Visited marking for uniform-cost search.
    pub marking: Marking,
}

impl SolverConfig {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Default::default()
        }
    }
}

/// Result of one solver run
#[derive(Debug, Clone)]
pub struct SolverResult {
    pub strategy: Strategy,
    /// Whether a path to the goal was found
    pub found: bool,
    /// Total entry cost of the path
    pub path_cost: Option<u32>,
    /// Number of cells marked visited
    pub visited_count: usize,
    /// Number of cells expanded
    pub expanded_count: usize,
    /// Time elapsed in milliseconds
    pub time_elapsed_ms: u64,
    /// Path and replay data
    pub outcome: SearchOutcome,
}

/// Run the configured strategy on `maze`.
pub fn solve_with(maze: &Maze, config: &SolverConfig) -> SolverResult {
    let start_time = Instant::now();

    let outcome = match config.strategy {
        Strategy::Bfs => bfs::solve(maze),
        Strategy::ZigZag => bfs::solve_zigzag(maze),
        Strategy::Ucs => ucs::solve_with_marking(maze, config.marking),
        Strategy::Ids => ids::solve(maze, config.max_depth.unwrap_or_else(|| maze.cell_count())),
    };

    let result = SolverResult {
        strategy: config.strategy,
        found: outcome.found(),
        path_cost: outcome.path.as_ref().map(|path| path.cost(maze)),
        visited_count: outcome.visited.len(),
        expanded_count: outcome.expanded.len(),
        time_elapsed_ms: start_time.elapsed().as_millis() as u64,
        outcome,
    };

    info!(
        "{}: found={} cost={:?} visited={} in {}ms",
        result.strategy, result.found, result.path_cost, result.visited_count, result.time_elapsed_ms
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::tests::sample_maze;

    #[test]
    fn test_every_strategy_solves_sample() {
        let maze = sample_maze();
        for strategy in Strategy::ALL {
            let result = solve_with(&maze, &SolverConfig::new(strategy));
            assert!(result.found, "{strategy}");
            let path = result.outcome.path.as_ref().unwrap();
            assert_eq!(path.len(), 8, "{strategy}");
            assert_eq!(result.visited_count, result.outcome.visited.len());
        }
    }

    #[test]
    fn test_costs_per_strategy() {
        let maze = sample_maze();
        let cost = |strategy| solve_with(&maze, &SolverConfig::new(strategy)).path_cost;
        assert_eq!(cost(Strategy::Bfs), Some(11));
        assert_eq!(cost(Strategy::ZigZag), Some(11));
        assert_eq!(cost(Strategy::Ucs), Some(8));
        assert_eq!(cost(Strategy::Ids), Some(11));
    }

    #[test]
    fn test_depth_cap_is_applied() {
        let maze = sample_maze();
        let config = SolverConfig {
            strategy: Strategy::Ids,
            max_depth: Some(4),
            ..Default::default()
        };
        let result = solve_with(&maze, &config);
        assert!(!result.found);
        assert_eq!(result.path_cost, None);
    }

    #[test]
    fn test_unreachable_goal_for_all() {
        let maze = Maze::from_rows(vec![
            vec![0, 1, -1, 1],
            vec![-1, 1, -1, 4],
        ])
        .unwrap();
        for strategy in Strategy::ALL {
            let result = solve_with(&maze, &SolverConfig::new(strategy));
            assert!(!result.found, "{strategy}");
            assert!(result.outcome.path.is_none());
        }
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(Strategy::ZigZag.to_string(), "zigzag");
        assert_eq!(serde_json::to_string(&Strategy::ZigZag).unwrap(), "\"zigzag\"");
        assert_eq!(serde_json::from_str::<Strategy>("\"ids\"").unwrap(), Strategy::Ids);
    }
}

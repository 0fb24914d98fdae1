//! Uniform-cost search over cell entry costs.
//!
//! Stepping onto a cell costs its entry cost (1 for open cells, 2 or 3 for
//! obstacles). The frontier is ordered by accumulated cost, ties by position.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::frontier::CostQueue;
use crate::maze::{Maze, Sweep};
use crate::state::{SearchOutcome, SearchState};

/// When a cell counts as visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Marking {
    /// Visited as soon as it is first pushed. Its cost and parent are never
    /// revised afterwards.
    #[default]
    OnDiscovery,
    /// Visited when popped. Cheaper routes found before that replace the
    /// recorded cost and parent.
    OnExpansion,
}

/// Uniform-cost search marking cells visited on discovery.
pub fn solve(maze: &Maze) -> SearchOutcome {
    solve_with_marking(maze, Marking::default())
}

pub fn solve_with_marking(maze: &Maze, marking: Marking) -> SearchOutcome {
    debug!(
        "ucs ({marking:?}): {}x{} maze, start {}, goal {}",
        maze.rows(),
        maze.cols(),
        maze.start(),
        maze.goal()
    );
    let outcome = match marking {
        Marking::OnDiscovery => search_marking_on_discovery(maze),
        Marking::OnExpansion => search_marking_on_expansion(maze),
    };
    debug!(
        "ucs: {} after {} expansions, goal cost {:?}",
        if outcome.found() { "found" } else { "exhausted" },
        outcome.expanded.len(),
        outcome.goal_cost()
    );
    outcome
}

fn search_marking_on_discovery(maze: &Maze) -> SearchOutcome {
    let start = maze.start();
    let goal = maze.goal();

    let mut state = SearchState::new(start).with_costs();
    let mut queue = CostQueue::new();
    queue.push(0, start);
    state.mark_visited(start);

    let mut reached = None;
    while let Some((cost, current)) = queue.pop() {
        state.record_expansion(current, Sweep::Forward);
        if current == goal {
            reached = Some(current);
            break;
        }

        trace!("ucs: expand {current} at cost {cost}");
        for next in maze.neighbors(current, Sweep::Forward) {
            if state.is_visited(next) {
                continue;
            }
            let Some(step) = maze.entry_cost(next) else {
                continue;
            };
            let new_cost = cost + step;
            queue.push(new_cost, next);
            state.discover(next, current);
            state.set_cost(next, new_cost);
        }
    }

    state.finish(reached)
}

fn search_marking_on_expansion(maze: &Maze) -> SearchOutcome {
    let start = maze.start();
    let goal = maze.goal();

    let mut state = SearchState::new(start).with_costs();
    let mut queue = CostQueue::new();
    queue.push(0, start);

    let mut reached = None;
    while let Some((cost, current)) = queue.pop() {
        // A cheaper entry for this cell was already expanded.
        if !state.mark_visited(current) {
            continue;
        }
        state.record_expansion(current, Sweep::Forward);
        if current == goal {
            reached = Some(current);
            break;
        }

        trace!("ucs: expand {current} at cost {cost}");
        for next in maze.neighbors(current, Sweep::Forward) {
            if state.is_visited(next) {
                continue;
            }
            let Some(step) = maze.entry_cost(next) else {
                continue;
            };
            let new_cost = cost + step;
            if state.cost(next).is_some_and(|known| known <= new_cost) {
                continue;
            }
            queue.push(new_cost, next);
            state.replace_parent(next, current);
            state.set_cost(next, new_cost);
        }
    }

    state.finish(reached)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs;
    use crate::maze::tests::sample_maze;
    use crate::maze::Position;

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_sample_prefers_cheap_route() {
        let maze = sample_maze();
        let outcome = solve(&maze);
        let path = outcome.path.as_ref().expect("sample maze is solvable");

        assert_eq!(
            path.positions(),
            &[p(2, 4), p(3, 4), p(3, 3), p(3, 2), p(3, 1), p(2, 1), p(2, 0), p(1, 0)]
        );
        assert_eq!(outcome.goal_cost(), Some(8));
        assert_eq!(path.cost(&maze), 8);

        let costs = outcome.cost_so_far.as_ref().unwrap();
        assert_eq!(costs[&p(1, 0)], 0);
        assert_eq!(costs[&p(0, 1)], 4);
        assert_eq!(costs[&p(3, 3)], 6);
    }

    #[test]
    fn test_not_worse_than_bfs() {
        let maze = sample_maze();
        let bfs_cost = bfs::solve(&maze).path.unwrap().cost(&maze);
        let ucs_cost = solve(&maze).goal_cost().unwrap();
        assert_eq!(bfs_cost, 11);
        assert!(ucs_cost <= bfs_cost);
    }

    #[test]
    fn test_uniform_costs_match_bfs_length() {
        let maze = Maze::from_rows(vec![
            vec![0, 1, 1, 1],
            vec![1, -1, -1, 1],
            vec![1, 1, 1, 4],
        ])
        .unwrap();
        let ucs_path = solve(&maze).path.unwrap();
        let bfs_path = bfs::solve(&maze).path.unwrap();
        assert_eq!(ucs_path.len(), bfs_path.len());
        assert_eq!(ucs_path.cost(&maze), bfs_path.cost(&maze));
    }

    #[test]
    fn test_marking_modes_agree_on_sample() {
        let maze = sample_maze();
        let discovery = solve_with_marking(&maze, Marking::OnDiscovery);
        let expansion = solve_with_marking(&maze, Marking::OnExpansion);
        assert_eq!(discovery.goal_cost(), expansion.goal_cost());
        assert_eq!(discovery.path, expansion.path);
        // Expansion marking only counts cells it actually expanded.
        assert!(expansion.visited.len() <= discovery.visited.len());
    }

    #[test]
    fn test_marking_on_discovery_keeps_first_cost() {
        // (0,1) is first pushed from the start at cost 3. No later route can
        // undercut it, since every route into (0,1) pays its own entry cost.
        let maze = Maze::from_rows(vec![
            vec![0, 3, 4],
            vec![1, 1, 1],
        ])
        .unwrap();
        let discovery = solve_with_marking(&maze, Marking::OnDiscovery);
        let expansion = solve_with_marking(&maze, Marking::OnExpansion);
        let first = discovery.cost_so_far.as_ref().unwrap()[&p(0, 1)];
        let relaxed = expansion.cost_so_far.as_ref().unwrap()[&p(0, 1)];
        assert_eq!(first, 3);
        assert_eq!(relaxed, 3);
        assert_eq!(discovery.goal_cost(), Some(4));
        assert_eq!(expansion.goal_cost(), Some(4));
    }

    #[test]
    fn test_marking_modes_agree_on_random_mazes() {
        for seed in 0..300 {
            let maze = crate::generate::seeded_maze(6, 6, seed).unwrap();
            let discovery = solve_with_marking(&maze, Marking::OnDiscovery);
            let expansion = solve_with_marking(&maze, Marking::OnExpansion);
            assert_eq!(discovery.found(), expansion.found(), "seed {seed}");
            assert_eq!(discovery.goal_cost(), expansion.goal_cost(), "seed {seed}");
            if let Some(path) = &discovery.path {
                assert!(path.is_connected(&maze));
                assert_eq!(Some(path.cost(&maze)), discovery.goal_cost());
            }
        }
    }

    #[test]
    fn test_no_path() {
        let maze = Maze::from_rows(vec![vec![0, -1, 4]]).unwrap();
        for marking in [Marking::OnDiscovery, Marking::OnExpansion] {
            let outcome = solve_with_marking(&maze, marking);
            assert!(!outcome.found());
            assert_eq!(outcome.goal_cost(), None);
        }
    }

    #[test]
    fn test_deterministic() {
        let maze = sample_maze();
        assert_eq!(solve(&maze), solve(&maze));
    }
}

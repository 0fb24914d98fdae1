//! Solved routes through a maze.

use serde::Serialize;

use crate::maze::{Maze, Position};

/// A solved route, stored goal first.
///
/// Paths are only built by walking a parent map back from the goal, so they
/// always hold at least the goal and the start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path {
    cells: Vec<Position>,
}

impl Path {
    pub(crate) fn from_goal_first(cells: Vec<Position>) -> Self {
        debug_assert!(!cells.is_empty());
        Self { cells }
    }

    /// Positions in the order they were reconstructed: goal to start.
    pub fn positions(&self) -> &[Position] {
        &self.cells
    }

    pub fn goal(&self) -> Position {
        self.cells[0]
    }

    pub fn start(&self) -> Position {
        self.cells[self.cells.len() - 1]
    }

    /// Number of cells, endpoints included.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves between start and goal.
    pub fn edges(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Walk the path from start to goal.
    pub fn from_start(&self) -> impl DoubleEndedIterator<Item = Position> + '_ {
        self.cells.iter().rev().copied()
    }

    pub fn to_start_first(&self) -> Vec<Position> {
        self.from_start().collect()
    }

    /// Total entry cost of every cell after the start.
    pub fn cost(&self, maze: &Maze) -> u32 {
        self.from_start()
            .skip(1)
            .filter_map(|pos| maze.entry_cost(pos))
            .sum()
    }

    /// True if consecutive cells are orthogonal neighbors and none is a wall.
    pub fn is_connected(&self, maze: &Maze) -> bool {
        let steps_ok = self.cells.windows(2).all(|pair| {
            let dr = pair[0].row.abs_diff(pair[1].row);
            let dc = pair[0].col.abs_diff(pair[1].col);
            dr + dc == 1
        });
        steps_ok && self.cells.iter().all(|&pos| maze.in_bounds(pos) && !maze.is_wall(pos))
    }
}

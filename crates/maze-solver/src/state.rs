//! Bookkeeping shared by every search strategy.
//!
//! A [`SearchState`] is created fresh for each search call. It tracks which
//! cells have been reached, who reached them first, and (depending on the
//! strategy) their BFS level or accumulated cost. Once the search ends the
//! state is consumed into a [`SearchOutcome`].

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::maze::{Position, Sweep};
use crate::path::Path;

/// One cell taken off the frontier, with the sweep that took it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Expansion {
    pub position: Position,
    pub sweep: Sweep,
}

/// What a search produced.
///
/// `path` is `None` when the goal cannot be reached. The remaining fields are
/// replay data for consumers that want to animate or report the search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub path: Option<Path>,
    /// Cells in the order they were marked visited.
    pub visited: Vec<Position>,
    /// Cells in the order they were expanded.
    pub expanded: Vec<Expansion>,
    /// Accumulated cost per reached cell (uniform-cost search only).
    pub cost_so_far: Option<HashMap<Position, u32>>,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Accumulated cost recorded for the goal, if this search tracked costs
    /// and reached it.
    pub fn goal_cost(&self) -> Option<u32> {
        let goal = self.path.as_ref()?.goal();
        self.cost_so_far.as_ref()?.get(&goal).copied()
    }
}

#[derive(Debug)]
pub struct SearchState {
    start: Position,
    visited: HashSet<Position>,
    order: Vec<Position>,
    expanded: Vec<Expansion>,
    parent: HashMap<Position, Option<Position>>,
    levels: Option<HashMap<Position, usize>>,
    costs: Option<HashMap<Position, u32>>,
}

impl SearchState {
    pub fn new(start: Position) -> Self {
        Self {
            start,
            visited: HashSet::new(),
            order: Vec::new(),
            expanded: Vec::new(),
            parent: HashMap::from([(start, None)]),
            levels: None,
            costs: None,
        }
    }

    /// Track BFS levels, with the start at level 0.
    pub fn with_levels(mut self) -> Self {
        self.levels = Some(HashMap::from([(self.start, 0)]));
        self
    }

    /// Track accumulated costs, with the start at cost 0.
    pub fn with_costs(mut self) -> Self {
        self.costs = Some(HashMap::from([(self.start, 0)]));
        self
    }

    pub fn is_visited(&self, pos: Position) -> bool {
        self.visited.contains(&pos)
    }

    /// Mark a cell visited. Returns `false` if it already was.
    pub fn mark_visited(&mut self, pos: Position) -> bool {
        if !self.visited.insert(pos) {
            return false;
        }
        self.order.push(pos);
        true
    }

    /// Mark `child` visited and record `parent` as the cell it was reached from.
    pub fn discover(&mut self, child: Position, parent: Position) {
        self.mark_visited(child);
        self.set_parent(child, parent);
    }

    /// Record the first parent of `child`. Later calls for the same child are
    /// ignored.
    pub fn set_parent(&mut self, child: Position, parent: Position) {
        debug_assert!(self.parent.contains_key(&parent));
        self.parent.entry(child).or_insert(Some(parent));
    }

    /// Overwrite the parent of `child` after a cheaper route was found.
    pub fn replace_parent(&mut self, child: Position, parent: Position) {
        debug_assert!(self.parent.contains_key(&parent));
        self.parent.insert(child, Some(parent));
    }

    pub fn parent(&self, child: Position) -> Option<Position> {
        self.parent.get(&child).copied().flatten()
    }

    pub fn level(&self, pos: Position) -> Option<usize> {
        self.levels.as_ref()?.get(&pos).copied()
    }

    pub fn set_level(&mut self, pos: Position, level: usize) {
        if let Some(levels) = self.levels.as_mut() {
            levels.insert(pos, level);
        }
    }

    pub fn cost(&self, pos: Position) -> Option<u32> {
        self.costs.as_ref()?.get(&pos).copied()
    }

    pub fn set_cost(&mut self, pos: Position, cost: u32) {
        if let Some(costs) = self.costs.as_mut() {
            costs.insert(pos, cost);
        }
    }

    pub fn record_expansion(&mut self, position: Position, sweep: Sweep) {
        self.expanded.push(Expansion { position, sweep });
    }

    pub fn visited_order(&self) -> &[Position] {
        &self.order
    }

    pub fn expansions(&self) -> &[Expansion] {
        &self.expanded
    }

    /// Forget visited cells, parents, levels and costs, keeping the replay
    /// logs. Used between iterative-deepening passes.
    pub fn reset(&mut self) {
        self.visited.clear();
        self.parent.clear();
        self.parent.insert(self.start, None);
        if let Some(levels) = self.levels.as_mut() {
            levels.clear();
            levels.insert(self.start, 0);
        }
        if let Some(costs) = self.costs.as_mut() {
            costs.clear();
            costs.insert(self.start, 0);
        }
    }

    /// Walk parent links from `goal` back to the start.
    ///
    /// Returns `None` when the chain breaks before reaching the start, which
    /// means the goal was never reached.
    pub fn backtrack(&self, goal: Position) -> Option<Path> {
        let mut cells = Vec::new();
        let mut current = goal;
        while current != self.start {
            cells.push(current);
            if cells.len() > self.parent.len() {
                return None;
            }
            current = self.parent.get(&current).copied().flatten()?;
        }
        cells.push(self.start);
        Some(Path::from_goal_first(cells))
    }

    /// Consume the state. `goal` is the goal cell if the search reached it.
    pub fn finish(self, goal: Option<Position>) -> SearchOutcome {
        let path = goal.and_then(|goal| self.backtrack(goal));
        SearchOutcome {
            path,
            visited: self.order,
            expanded: self.expanded,
            cost_so_far: self.costs,
        }
    }
}

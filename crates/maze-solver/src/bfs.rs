//! Breadth-first search, plain and zig-zag ordered.
//!
//! Both variants return a path with the fewest moves. The zig-zag variant
//! alternates the traversal direction at every BFS level, which changes the
//! tie-breaking between equally short routes and the replay order, but not
//! the path length.

use log::{debug, trace};

use crate::frontier::{Fifo, ZigZagDeque};
use crate::maze::{Maze, Sweep};
use crate::state::{SearchOutcome, SearchState};

/// Plain BFS, expanding moves in the order up, right, down, left.
pub fn solve(maze: &Maze) -> SearchOutcome {
    let start = maze.start();
    let goal = maze.goal();
    debug!("bfs: {}x{} maze, start {start}, goal {goal}", maze.rows(), maze.cols());

    let mut state = SearchState::new(start).with_levels();
    let mut queue = Fifo::new();
    state.mark_visited(start);
    queue.push(start);

    let mut reached = None;
    while let Some(current) = queue.pop() {
        state.record_expansion(current, Sweep::Forward);
        if current == goal {
            reached = Some(current);
            break;
        }

        let level = state.level(current).unwrap_or(0);
        trace!("bfs: expand {current} at level {level}");
        for next in maze.neighbors(current, Sweep::Forward) {
            if state.is_visited(next) {
                continue;
            }
            state.discover(next, current);
            state.set_level(next, level + 1);
            queue.push(next);
        }
    }

    let outcome = state.finish(reached);
    debug!(
        "bfs: {} after {} expansions",
        if outcome.found() { "found" } else { "exhausted" },
        outcome.expanded.len()
    );
    outcome
}

/// BFS that sweeps each level in the opposite direction of the previous one.
///
/// A forward sweep takes cells from the front of the deque, explores moves
/// up, right, down, left and appends to the back. A backward sweep takes from
/// the back, explores left, down, right, up and prepends to the front. The
/// direction flips whenever the next cell belongs to a deeper level than any
/// seen so far.
pub fn solve_zigzag(maze: &Maze) -> SearchOutcome {
    let start = maze.start();
    let goal = maze.goal();
    debug!("zigzag: {}x{} maze, start {start}, goal {goal}", maze.rows(), maze.cols());

    let mut state = SearchState::new(start).with_levels();
    let mut deque = ZigZagDeque::new();
    state.mark_visited(start);
    deque.push(Sweep::Forward, start);

    let mut sweep = Sweep::Forward;
    let mut depth = 0;
    let mut reached = None;

    while let Some(peeked) = deque.peek(sweep) {
        let level = state.level(peeked).unwrap_or(0);
        if level > depth {
            depth = level;
            sweep = sweep.flip();
            trace!("zigzag: level {depth}, sweeping {sweep:?}");
        }
        let Some(current) = deque.pop(sweep) else {
            break;
        };

        state.record_expansion(current, sweep);
        if current == goal {
            reached = Some(current);
            break;
        }

        for next in maze.neighbors(current, sweep) {
            if state.is_visited(next) {
                continue;
            }
            state.discover(next, current);
            state.set_level(next, depth + 1);
            deque.push(sweep, next);
        }
    }

    let outcome = state.finish(reached);
    debug!(
        "zigzag: {} after {} expansions",
        if outcome.found() { "found" } else { "exhausted" },
        outcome.expanded.len()
    );
    outcome
}

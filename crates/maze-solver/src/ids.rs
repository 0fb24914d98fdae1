//! Iterative-deepening depth-first search.
//!
//! Runs a depth-bounded DFS with limits 0, 1, 2, ... up to `max_depth`,
//! starting over with an empty visited set and parent map on each pass. A
//! limit of `d` reaches paths of at most `d` cells. The visited set is shared
//! by every branch of a pass, so a cell claimed by a long branch is not
//! revisited from a shorter one.

use log::{debug, trace};

use crate::maze::{Maze, Move, Position, Sweep};
use crate::state::{SearchOutcome, SearchState};

/// A cell being explored, with the moves it has left to try.
#[derive(Debug, Clone, Copy)]
struct Frame {
    position: Position,
    remaining: usize,
    next_move: usize,
}

enum Entered {
    Goal,
    Pruned,
    Pushed,
}

/// Iterative deepening with an explicit cap on the depth limit.
///
/// The caller must supply `max_depth`: without it a maze with no route would
/// be searched forever. `maze.cell_count()` covers every simple path.
pub fn solve(maze: &Maze, max_depth: usize) -> SearchOutcome {
    let start = maze.start();
    debug!(
        "ids: {}x{} maze, start {start}, goal {}, max depth {max_depth}",
        maze.rows(),
        maze.cols(),
        maze.goal()
    );

    let mut state = SearchState::new(start);
    for limit in 0..=max_depth {
        state.reset();
        trace!("ids: depth limit {limit}");
        if depth_limited(maze, &mut state, limit) {
            debug!("ids: found at depth limit {limit}");
            return state.finish(Some(maze.goal()));
        }
    }

    debug!("ids: no route within depth limit {max_depth}");
    state.finish(None)
}

/// Enter `position` from `parent` with `remaining` depth left. Mirrors the
/// head of a recursive DFS call. A cell cut off by the depth limit gets no
/// parent, so a later branch of the same pass can still claim it.
fn enter(
    maze: &Maze,
    state: &mut SearchState,
    stack: &mut Vec<Frame>,
    position: Position,
    parent: Option<Position>,
    remaining: usize,
) -> Entered {
    if remaining == 0 {
        return Entered::Pruned;
    }
    if let Some(parent) = parent {
        state.replace_parent(position, parent);
    }
    state.record_expansion(position, Sweep::Forward);
    if position == maze.goal() {
        return Entered::Goal;
    }
    state.mark_visited(position);
    stack.push(Frame {
        position,
        remaining,
        next_move: 0,
    });
    Entered::Pushed
}

/// One depth-bounded DFS pass. The first branch that reaches the goal ends
/// the pass; no further moves are tried.
fn depth_limited(maze: &Maze, state: &mut SearchState, limit: usize) -> bool {
    let mut stack = Vec::new();
    match enter(maze, state, &mut stack, maze.start(), None, limit) {
        Entered::Goal => return true,
        Entered::Pruned => return false,
        Entered::Pushed => {}
    }

    while let Some(frame) = stack.last_mut() {
        let Some(&mv) = Move::FORWARD.get(frame.next_move) else {
            stack.pop();
            continue;
        };
        frame.next_move += 1;
        let current = frame.position;
        let remaining = frame.remaining;

        let Some(next) = current.step(mv, maze.rows(), maze.cols()) else {
            continue;
        };
        if state.is_visited(next) || maze.is_wall(next) {
            continue;
        }
        if let Entered::Goal = enter(maze, state, &mut stack, next, Some(current), remaining - 1) {
            return true;
        }
    }
    false
}

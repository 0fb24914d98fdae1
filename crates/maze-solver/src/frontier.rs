//! Queuing disciplines for the frontier of discovered, unexpanded cells.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::maze::{Position, Sweep};

/// First-in, first-out queue used by plain BFS.
#[derive(Debug, Default)]
pub struct Fifo {
    queue: VecDeque<Position>,
}

impl Fifo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pos: Position) {
        self.queue.push_back(pos);
    }

    pub fn pop(&mut self) -> Option<Position> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Double-ended queue whose working end follows the sweep direction.
///
/// A forward sweep takes from the front and appends to the back; a backward
/// sweep takes from the back and prepends to the front.
#[derive(Debug, Default)]
pub struct ZigZagDeque {
    deque: VecDeque<Position>,
}

impl ZigZagDeque {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look at the entry `pop(sweep)` would return.
    pub fn peek(&self, sweep: Sweep) -> Option<Position> {
        match sweep {
            Sweep::Forward => self.deque.front().copied(),
            Sweep::Backward => self.deque.back().copied(),
        }
    }

    pub fn pop(&mut self, sweep: Sweep) -> Option<Position> {
        match sweep {
            Sweep::Forward => self.deque.pop_front(),
            Sweep::Backward => self.deque.pop_back(),
        }
    }

    pub fn push(&mut self, sweep: Sweep, pos: Position) {
        match sweep {
            Sweep::Forward => self.deque.push_back(pos),
            Sweep::Backward => self.deque.push_front(pos),
        }
    }

    pub fn len(&self) -> usize {
        self.deque.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deque.is_empty()
    }
}

/// Min-priority queue keyed by accumulated cost.
///
/// Entries with equal cost come out in position order (row, then column).
#[derive(Debug, Default)]
pub struct CostQueue {
    heap: BinaryHeap<Reverse<(u32, Position)>>,
}

impl CostQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cost: u32, pos: Position) {
        self.heap.push(Reverse((cost, pos)));
    }

    pub fn pop(&mut self) -> Option<(u32, Position)> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

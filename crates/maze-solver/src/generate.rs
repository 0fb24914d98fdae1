//! Random maze generation.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::MazeError;
use crate::maze::{CellKind, Maze};

/// Codes a random cell is drawn from, each equally likely.
const FILL: [CellKind; 4] = [
    CellKind::Obstacle(2),
    CellKind::Wall,
    CellKind::Open,
    CellKind::Obstacle(3),
];

/// Fill a `rows x cols` grid at random, then place a start and a goal on two
/// distinct cells. Nothing guarantees the goal is reachable.
pub fn random_maze<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Maze, MazeError> {
    if rows.saturating_mul(cols) < 2 {
        return Err(MazeError::TooSmall { rows, cols });
    }

    let mut cells: Vec<Vec<i32>> = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| FILL.choose(rng).map_or(CellKind::Open, |kind| *kind).code())
                .collect()
        })
        .collect();

    let start = (rng.gen_range(0..rows), rng.gen_range(0..cols));
    cells[start.0][start.1] = CellKind::Start.code();

    let goal = loop {
        let candidate = (rng.gen_range(0..rows), rng.gen_range(0..cols));
        if candidate != start {
            break candidate;
        }
    };
    cells[goal.0][goal.1] = CellKind::Goal.code();

    Maze::from_rows(cells)
}

/// Reproducible variant of [`random_maze`].
pub fn seeded_maze(rows: usize, cols: usize, seed: u64) -> Result<Maze, MazeError> {
    let mut rng = StdRng::seed_from_u64(seed);
    random_maze(rows, cols, &mut rng)
}

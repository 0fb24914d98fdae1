//! Maze representation: cell codes, positions and moves.
//!
//! A maze is a rectangular matrix of integer cell codes. It is read from the
//! plain text format (one row per line, whitespace-separated codes) or from a
//! JSON array of rows, and is immutable once built.

use std::fmt;
use std::fs;
use std::path::Path as FsPath;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::MazeError;

/// Semantic role of a cell code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    Wall,
    Start,
    Open,
    /// Traversable, but entering it costs more than an open cell.
    Obstacle(u32),
    Goal,
}

impl CellKind {
    /// Map a raw cell code to its kind. Returns `None` for unknown codes.
    pub fn classify(code: i32) -> Option<CellKind> {
        match code {
            -1 => Some(CellKind::Wall),
            0 => Some(CellKind::Start),
            1 => Some(CellKind::Open),
            2 | 3 => Some(CellKind::Obstacle(code as u32)),
            4 => Some(CellKind::Goal),
            _ => None,
        }
    }

    /// The raw code this kind is stored as.
    pub fn code(self) -> i32 {
        match self {
            CellKind::Wall => -1,
            CellKind::Start => 0,
            CellKind::Open => 1,
            CellKind::Obstacle(cost) => cost as i32,
            CellKind::Goal => 4,
        }
    }

    /// Cost paid when a search steps onto a cell of this kind.
    /// Walls cannot be entered.
    pub fn entry_cost(self) -> Option<u32> {
        match self {
            CellKind::Wall => None,
            CellKind::Obstacle(cost) => Some(cost),
            CellKind::Start | CellKind::Open | CellKind::Goal => Some(1),
        }
    }

    pub fn is_wall(self) -> bool {
        self == CellKind::Wall
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellKind::Wall => write!(f, "wall"),
            CellKind::Start => write!(f, "start"),
            CellKind::Open => write!(f, "open"),
            CellKind::Obstacle(cost) => write!(f, "obstacle (cost {cost})"),
            CellKind::Goal => write!(f, "goal"),
        }
    }
}

/// Position on the grid, `(row, col)`, ordered row first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Apply a move. Returns `None` when the result would leave a
    /// `rows x cols` grid.
    pub fn step(self, mv: Move, rows: usize, cols: usize) -> Option<Position> {
        let (dr, dc) = mv.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        if row < rows && col < cols {
            Some(Position { row, col })
        } else {
            None
        }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four orthogonal moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Up,
    Right,
    Down,
    Left,
}

impl Move {
    /// Exploration order used by every strategy: up, right, down, left.
    pub const FORWARD: [Move; 4] = [Move::Up, Move::Right, Move::Down, Move::Left];

    /// Exact reversal of [`Move::FORWARD`].
    pub const BACKWARD: [Move; 4] = [Move::Left, Move::Down, Move::Right, Move::Up];

    pub fn delta(self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Right => (0, 1),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
        }
    }
}

/// Traversal direction of a sweep over the frontier.
///
/// Only zig-zag BFS ever switches to `Backward`; the other strategies expand
/// everything forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sweep {
    #[default]
    Forward,
    Backward,
}

impl Sweep {
    pub fn flip(self) -> Sweep {
        match self {
            Sweep::Forward => Sweep::Backward,
            Sweep::Backward => Sweep::Forward,
        }
    }

    /// Move order for this sweep.
    pub fn moves(self) -> &'static [Move; 4] {
        match self {
            Sweep::Forward => &Move::FORWARD,
            Sweep::Backward => &Move::BACKWARD,
        }
    }
}

/// An immutable maze with a single start and a single goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i32>>", into = "Vec<Vec<i32>>")]
pub struct Maze {
    cells: Vec<Vec<i32>>,
    rows: usize,
    cols: usize,
    start: Position,
    goal: Position,
}

impl Maze {
    /// Build a maze from rows of cell codes.
    ///
    /// Fails if the matrix is empty or ragged, contains an unknown code, or
    /// does not have exactly one start and exactly one goal.
    pub fn from_rows(cells: Vec<Vec<i32>>) -> Result<Self, MazeError> {
        let rows = cells.len();
        let cols = cells.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(MazeError::Empty);
        }

        let mut start = None;
        let mut goal = None;

        for (r, row) in cells.iter().enumerate() {
            if row.len() != cols {
                return Err(MazeError::Ragged {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            for (c, &code) in row.iter().enumerate() {
                let kind = CellKind::classify(code).ok_or(MazeError::UnknownCell {
                    row: r,
                    col: c,
                    code,
                })?;
                let slot = match kind {
                    CellKind::Start => &mut start,
                    CellKind::Goal => &mut goal,
                    _ => continue,
                };
                let here = Position::new(r, c);
                if let Some(first) = *slot {
                    return Err(MazeError::DuplicateCell {
                        kind,
                        first,
                        second: here,
                    });
                }
                *slot = Some(here);
            }
        }

        let start = start.ok_or(MazeError::MissingCell(CellKind::Start))?;
        let goal = goal.ok_or(MazeError::MissingCell(CellKind::Goal))?;

        Ok(Self {
            cells,
            rows,
            cols,
            start,
            goal,
        })
    }

    /// Parse the text format: one row per non-blank line, codes separated by
    /// whitespace.
    pub fn parse(text: &str) -> Result<Self, MazeError> {
        let mut cells = Vec::new();
        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let row = line
                .split_whitespace()
                .map(|token| {
                    token.parse::<i32>().map_err(|_| MazeError::Parse {
                        line: index + 1,
                        token: token.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            cells.push(row);
        }
        Self::from_rows(cells)
    }

    /// Parse a JSON array of integer rows.
    pub fn from_json(json: &str) -> Result<Self, MazeError> {
        let cells: Vec<Vec<i32>> = serde_json::from_str(json)?;
        Self::from_rows(cells)
    }

    /// Read a maze from disk. Files ending in `.json` are read as JSON,
    /// everything else as the text format.
    pub fn load(path: impl AsRef<FsPath>) -> Result<Self, MazeError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&content)
        } else {
            Self::parse(&content)
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    /// Number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Row-major view of the raw codes.
    pub fn cells(&self) -> &[Vec<i32>] {
        &self.cells
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Raw code at a position (bounds-checked).
    pub fn code(&self, pos: Position) -> Option<i32> {
        self.cells.get(pos.row).and_then(|row| row.get(pos.col)).copied()
    }

    /// Kind of the cell at a position. Out-of-bounds positions have no kind.
    pub fn kind(&self, pos: Position) -> Option<CellKind> {
        // Codes were validated at construction.
        self.code(pos).and_then(CellKind::classify)
    }

    pub fn is_wall(&self, pos: Position) -> bool {
        self.kind(pos).is_some_and(CellKind::is_wall)
    }

    /// Cost of stepping onto `pos`, or `None` for walls and positions off
    /// the grid.
    pub fn entry_cost(&self, pos: Position) -> Option<u32> {
        self.kind(pos).and_then(CellKind::entry_cost)
    }

    /// In-bounds, non-wall neighbors of `pos` in the move order of `sweep`.
    pub fn neighbors(&self, pos: Position, sweep: Sweep) -> SmallVec<[Position; 4]> {
        sweep
            .moves()
            .iter()
            .filter_map(|&mv| pos.step(mv, self.rows, self.cols))
            .filter(|&next| !self.is_wall(next))
            .collect()
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<Vec<Vec<i32>>> for Maze {
    type Error = MazeError;

    fn try_from(cells: Vec<Vec<i32>>) -> Result<Self, Self::Error> {
        Self::from_rows(cells)
    }
}

impl From<Maze> for Vec<Vec<i32>> {
    fn from(maze: Maze) -> Self {
        maze.cells
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line = row
                .iter()
                .map(|code| code.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// The 4x5 maze used across the strategy tests.
    pub(crate) fn sample_maze() -> Maze {
        Maze::from_rows(vec![
            vec![1, 3, 1, 3, 1],
            vec![0, -1, 1, 1, 1],
            vec![1, 1, -1, -1, 4],
            vec![1, 1, 1, 2, 1],
        ])
        .unwrap()
    }

    #[test]
    fn test_classify_codes() {
        assert_eq!(CellKind::classify(-1), Some(CellKind::Wall));
        assert_eq!(CellKind::classify(0), Some(CellKind::Start));
        assert_eq!(CellKind::classify(1), Some(CellKind::Open));
        assert_eq!(CellKind::classify(2), Some(CellKind::Obstacle(2)));
        assert_eq!(CellKind::classify(3), Some(CellKind::Obstacle(3)));
        assert_eq!(CellKind::classify(4), Some(CellKind::Goal));
        assert_eq!(CellKind::classify(5), None);
        assert_eq!(CellKind::classify(-2), None);

        for code in -1..=4 {
            assert_eq!(CellKind::classify(code).unwrap().code(), code);
        }
    }

    #[test]
    fn test_entry_costs() {
        assert_eq!(CellKind::Wall.entry_cost(), None);
        assert_eq!(CellKind::Start.entry_cost(), Some(1));
        assert_eq!(CellKind::Open.entry_cost(), Some(1));
        assert_eq!(CellKind::Goal.entry_cost(), Some(1));
        assert_eq!(CellKind::Obstacle(3).entry_cost(), Some(3));
    }

    #[test]
    fn test_move_orders_are_reversed() {
        let mut reversed = Move::FORWARD;
        reversed.reverse();
        assert_eq!(reversed, Move::BACKWARD);
        assert_eq!(Sweep::Forward.flip(), Sweep::Backward);
        assert_eq!(Sweep::Backward.flip(), Sweep::Forward);
    }

    #[test]
    fn test_step_stays_in_bounds() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.step(Move::Up, 2, 2), None);
        assert_eq!(corner.step(Move::Left, 2, 2), None);
        assert_eq!(corner.step(Move::Right, 2, 2), Some(Position::new(0, 1)));
        assert_eq!(corner.step(Move::Down, 2, 2), Some(Position::new(1, 0)));
        assert_eq!(Position::new(1, 1).step(Move::Down, 2, 2), None);
    }

    #[test]
    fn test_sample_maze_endpoints() {
        let maze = sample_maze();
        assert_eq!(maze.rows(), 4);
        assert_eq!(maze.cols(), 5);
        assert_eq!(maze.start(), Position::new(1, 0));
        assert_eq!(maze.goal(), Position::new(2, 4));
        assert!(maze.is_wall(Position::new(1, 1)));
        assert!(maze.is_wall(Position::new(2, 2)));
        assert!(maze.is_wall(Position::new(2, 3)));
        assert_eq!(maze.entry_cost(Position::new(3, 3)), Some(2));
        assert_eq!(maze.entry_cost(Position::new(9, 9)), None);
    }

    #[test]
    fn test_neighbors_skip_walls_and_edges() {
        let maze = sample_maze();
        let start = maze.start();
        let forward: Vec<_> = maze.neighbors(start, Sweep::Forward).into_iter().collect();
        assert_eq!(forward, vec![Position::new(0, 0), Position::new(2, 0)]);
        let backward: Vec<_> = maze.neighbors(start, Sweep::Backward).into_iter().collect();
        assert_eq!(backward, vec![Position::new(2, 0), Position::new(0, 0)]);
    }

    #[test]
    fn test_parse_text_format() {
        let maze: Maze = "1 3 1 3 1\n0 -1 1 1 1\n\n1 1 -1 -1 4\n1 1 1 2 1\n"
            .parse()
            .unwrap();
        assert_eq!(maze, sample_maze());
        assert_eq!(maze.to_string().parse::<Maze>().unwrap(), maze);
    }

    #[test]
    fn test_parse_rejects_bad_token() {
        let err = Maze::parse("0 1\n1 x 4").unwrap_err();
        match err {
            MazeError::Parse { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_json_round_trip() {
        let maze = Maze::from_json("[[0, 1], [-1, 4]]").unwrap();
        assert_eq!(maze.goal(), Position::new(1, 1));
        let json = serde_json::to_string(&maze).unwrap();
        assert_eq!(json, "[[0,1],[-1,4]]");
        let back: Maze = serde_json::from_str(&json).unwrap();
        assert_eq!(back, maze);
    }

    #[test]
    fn test_malformed_mazes() {
        assert!(matches!(Maze::from_rows(vec![]), Err(MazeError::Empty)));
        assert!(matches!(
            Maze::from_rows(vec![vec![0, 1], vec![4]]),
            Err(MazeError::Ragged { row: 1, expected: 2, found: 1 })
        ));
        assert!(matches!(
            Maze::from_rows(vec![vec![0, 7, 4]]),
            Err(MazeError::UnknownCell { row: 0, col: 1, code: 7 })
        ));
        assert!(matches!(
            Maze::from_rows(vec![vec![1, 1, 4]]),
            Err(MazeError::MissingCell(CellKind::Start))
        ));
        assert!(matches!(
            Maze::from_rows(vec![vec![0, 1, 1]]),
            Err(MazeError::MissingCell(CellKind::Goal))
        ));
        match Maze::from_rows(vec![vec![0, 4, 4]]) {
            Err(MazeError::DuplicateCell {
                kind,
                first,
                second,
            }) => {
                assert_eq!(kind, CellKind::Goal);
                assert_eq!(first, Position::new(0, 1));
                assert_eq!(second, Position::new(0, 2));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_json_rejects_invalid_maze() {
        assert!(matches!(Maze::from_json("[[0, 0, 4]]"), Err(MazeError::DuplicateCell { .. })));
        assert!(matches!(Maze::from_json("not json"), Err(MazeError::Json(_))));
        assert!(serde_json::from_str::<Maze>("[[1, 1]]").is_err());
    }
}

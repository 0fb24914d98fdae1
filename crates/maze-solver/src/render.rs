//! Text drawing of a maze and an optional path.

use crate::maze::{CellKind, Maze, Position};
use crate::path::Path;

/// Draw the maze as text, one line per row.
///
/// `#` wall, `S` start, `G` goal, `.` open, the cost digit for obstacles and
/// `*` for path cells between start and goal.
pub fn render(maze: &Maze, path: Option<&Path>) -> String {
    let mut out = String::with_capacity(maze.rows() * (maze.cols() * 2 + 1));
    for row in 0..maze.rows() {
        let line: Vec<String> = (0..maze.cols())
            .map(|col| glyph(maze, path, Position::new(row, col)))
            .collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

fn glyph(maze: &Maze, path: Option<&Path>, pos: Position) -> String {
    let kind = maze.kind(pos);
    let on_path = path.is_some_and(|path| path.contains(pos));
    match kind {
        Some(CellKind::Start) => "S".to_string(),
        Some(CellKind::Goal) => "G".to_string(),
        _ if on_path => "*".to_string(),
        Some(CellKind::Wall) => "#".to_string(),
        Some(CellKind::Open) => ".".to_string(),
        Some(CellKind::Obstacle(cost)) => cost.to_string(),
        None => "?".to_string(),
    }
}

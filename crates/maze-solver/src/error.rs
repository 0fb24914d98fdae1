//! Errors raised while building a maze.
//!
//! Search itself never fails: a maze with no route yields an outcome without
//! a path. Everything here is detected before a search starts.

use thiserror::Error;

use crate::maze::{CellKind, Position};

#[derive(Debug, Error)]
pub enum MazeError {
    #[error("maze has no cells")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell code {code} at ({row}, {col})")]
    UnknownCell { row: usize, col: usize, code: i32 },

    #[error("maze has no {0} cell")]
    MissingCell(CellKind),

    #[error("maze has more than one {kind} cell: {first} and {second}")]
    DuplicateCell {
        kind: CellKind,
        first: Position,
        second: Position,
    },

    #[error("line {line}: cannot parse `{token}` as a cell code")]
    Parse { line: usize, token: String },

    #[error("a {rows}x{cols} maze cannot hold both a start and a goal")]
    TooSmall { rows: usize, cols: usize },

    #[error("invalid maze JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot read maze: {0}")]
    Io(#[from] std::io::Error),
}

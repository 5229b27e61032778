//! Errors reported by the grid model.

use thiserror::Error;

/// Failures of grid access and geometry.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GridError {
    #[error("cell ({x}, {y}) is outside a {cols}x{rows} grid")]
    OutOfRange {
        x: isize,
        y: isize,
        cols: usize,
        rows: usize,
    },
    #[error("grid has no cells ({rows} rows, {cols} cols)")]
    DegenerateGrid { rows: usize, cols: usize },
    #[error("display area {width}x{height} cannot hold a grid")]
    DegenerateDisplay { width: f32, height: f32 },
}

/// Failures while reading a pattern description.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("unexpected symbol {symbol:?} at line {line}, column {column}")]
    UnexpectedSymbol {
        line: usize,
        column: usize,
        symbol: char,
    },
}

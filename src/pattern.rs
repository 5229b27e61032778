//! Patterns that can be embedded into the board.
//!
//! A pattern is an immutable sub-grid plus a signed offset from the host
//! grid's center. Presets live in `presets`; arbitrary patterns can be read
//! from the Life "plaintext" format.

mod presets;

pub use presets::Preset;

use crate::cell::CellState;
use crate::error::PatternError;
use crate::grid::Grid;
use crate::mapper::CellIndex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    name: String,
    data: Grid,
    start_pos: CellIndex,
}

impl Pattern {
    /// `start_pos` is the offset of the pattern's `(0, 0)` cell from the
    /// host grid's center, and may be negative.
    pub fn new(name: impl Into<String>, data: Grid, start_pos: CellIndex) -> Self {
        Self {
            name: name.into(),
            data,
            start_pos,
        }
    }

    /// Pattern whose middle lands on the host grid's center.
    pub fn centered(name: impl Into<String>, data: Grid) -> Self {
        let start_pos = CellIndex::new(
            -((data.cols() / 2) as isize),
            -((data.rows() / 2) as isize),
        );
        Self::new(name, data, start_pos)
    }

    /// Build a pattern from the coordinates of its live cells.
    ///
    /// Coordinates are shifted so the top-left live cell sits at row 0 and
    /// column 0; the result is centered.
    pub fn from_cells(name: impl Into<String>, cells: &[(isize, isize)]) -> Self {
        let min_x = cells.iter().map(|&(x, _)| x).min().unwrap_or(0);
        let min_y = cells.iter().map(|&(_, y)| y).min().unwrap_or(0);
        let max_x = cells.iter().map(|&(x, _)| x).max().unwrap_or(-1);
        let max_y = cells.iter().map(|&(_, y)| y).max().unwrap_or(-1);

        let cols = (max_x - min_x + 1).max(0) as usize;
        let rows = (max_y - min_y + 1).max(0) as usize;
        let mut data = Grid::new(rows, cols);
        for &(x, y) in cells {
            // In bounds by construction.
            let _ = data.set(x - min_x, y - min_y, CellState::Living);
        }
        Self::centered(name, data)
    }

    /// Parse the Life plaintext format: lines starting with `!` are comments,
    /// `.` is a dead cell and `O` (or `*`) a live one. Short lines are padded
    /// with empty cells.
    pub fn from_plaintext(
        name: impl Into<String>,
        text: &str,
        start_pos: CellIndex,
    ) -> Result<Self, PatternError> {
        let mut rows: Vec<Vec<CellState>> = Vec::new();
        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim_end();
            if line.starts_with('!') {
                continue;
            }
            let row = line
                .chars()
                .enumerate()
                .map(|(column, symbol)| match symbol {
                    '.' => Ok(CellState::Empty),
                    'O' | '*' => Ok(CellState::Living),
                    _ => Err(PatternError::UnexpectedSymbol {
                        line: line_no + 1,
                        column: column + 1,
                        symbol,
                    }),
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }

        let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut data = Grid::new(rows.len(), cols);
        for (y, row) in rows.iter().enumerate() {
            for (x, &state) in row.iter().enumerate() {
                let _ = data.set(x as isize, y as isize, state);
            }
        }
        Ok(Self::new(name, data, start_pos))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &Grid {
        &self.data
    }

    pub fn start_pos(&self) -> CellIndex {
        self.start_pos
    }
}

use crate::cell::CellState;
use crate::error::GridError;
use crate::mapper::CellIndex;

/// Rectangular board of cell states, addressed by `(x = column, y = row)`.
///
/// Storage is row-major. Every cell always holds a state; freshly exposed
/// cells are `Empty`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create an all-empty grid. Either dimension may be zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![CellState::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `true` when the grid has no cells at all.
    pub fn is_degenerate(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    pub fn contains(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.cols && (y as usize) < self.rows
    }

    fn index(&self, x: isize, y: isize) -> Result<usize, GridError> {
        if self.contains(x, y) {
            Ok(y as usize * self.cols + x as usize)
        } else {
            Err(GridError::OutOfRange {
                x,
                y,
                cols: self.cols,
                rows: self.rows,
            })
        }
    }

    pub fn get(&self, x: isize, y: isize) -> Result<CellState, GridError> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Write one cell. Out-of-range writes leave the grid untouched.
    pub fn set(&mut self, x: isize, y: isize, state: CellState) -> Result<(), GridError> {
        let idx = self.index(x, y)?;
        self.cells[idx] = state;
        Ok(())
    }

    /// Reshape to `rows` x `cols`, keeping every cell the new bounds still cover.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        if rows == self.rows && cols == self.cols {
            return;
        }
        let mut cells = vec![CellState::Empty; rows * cols];
        let keep_cols = cols.min(self.cols);
        for y in 0..rows.min(self.rows) {
            let src = y * self.cols;
            let dst = y * cols;
            cells[dst..dst + keep_cols].copy_from_slice(&self.cells[src..src + keep_cols]);
        }
        self.rows = rows;
        self.cols = cols;
        self.cells = cells;
    }

    /// Copy every cell of `sub` into this grid with its `(0, 0)` at `origin`.
    ///
    /// Cells that would land outside this grid are skipped; the number of
    /// skipped sub-grid cells, empty ones included, is returned.
    pub fn load_from(&mut self, sub: &Grid, origin: CellIndex) -> usize {
        let mut skipped = 0;
        for (sx, sy, state) in sub.iter() {
            let x = origin.x + sx as isize;
            let y = origin.y + sy as isize;
            if self.set(x, y, state).is_err() {
                skipped += 1;
            }
        }
        skipped
    }

    /// Reset every cell to `Empty` without changing the shape.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Empty);
    }

    /// Number of cells currently alive.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|state| state.is_alive()).count()
    }

    /// Iterate cells row by row as `(x, y, state)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        let cols = self.cols.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &state)| (idx % cols, idx / cols, state))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(crate::DEFAULT_ROWS, crate::DEFAULT_COLS)
    }
}

use crate::cell::CellState;
use crate::engine::EngineObserver;
use crate::error::GridError;
use crate::grid::Grid;
use crate::mapper::{CellIndex, CoordinateMapper, DisplaySize, Point, Rect};
use crate::pattern::Pattern;

/// Empty margin, in cells, kept around an embedded pattern when the grid grows.
pub const EMBED_PADDING: usize = 4;

/// Outcome of [`GridController::embed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbedReport {
    pub rows: usize,
    pub cols: usize,
    /// Where the pattern's `(0, 0)` cell was placed.
    pub origin: CellIndex,
    pub resized: bool,
    /// Sub-grid cells, dead or alive, that fell outside the grid and were dropped.
    pub skipped: usize,
}

/// Owns the grid and turns display-space edits into grid writes, telling the
/// injected engine about every completed change.
pub struct GridController<E> {
    grid: Grid,
    engine: E,
}

impl<E: EngineObserver> GridController<E> {
    pub fn new(grid: Grid, engine: E) -> Self {
        Self { grid, engine }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn into_parts(self) -> (Grid, E) {
        (self.grid, self.engine)
    }

    /// Layout of the current grid in `display`.
    pub fn mapper(&self, display: DisplaySize) -> Result<CoordinateMapper, GridError> {
        CoordinateMapper::for_grid(display, &self.grid)
    }

    fn hit(&self, display: DisplaySize, point: Point) -> Option<(CoordinateMapper, CellIndex)> {
        let mapper = match self.mapper(display) {
            Ok(mapper) => mapper,
            Err(err) => {
                log::debug!("Ignoring point ({}, {}): {}", point.x, point.y, err);
                return None;
            }
        };
        match mapper.cell_at(point) {
            Some(index) => Some((mapper, index)),
            None => {
                log::debug!("Point ({}, {}) is outside the grid", point.x, point.y);
                None
            }
        }
    }

    /// Index of the cell under `point`, if any.
    pub fn index_at_point(&self, display: DisplaySize, point: Point) -> Option<CellIndex> {
        self.hit(display, point).map(|(_, index)| index)
    }

    pub fn cell_at_point(&self, display: DisplaySize, point: Point) -> Option<CellState> {
        let index = self.index_at_point(display, point)?;
        self.grid.get(index.x, index.y).ok()
    }

    /// Write `state` into the cell under `point`.
    ///
    /// Returns the display rectangle to redraw, or `None` when the point
    /// misses the grid, in which case nothing changes and nobody is notified.
    pub fn set_cell_at_point(
        &mut self,
        display: DisplaySize,
        point: Point,
        state: CellState,
    ) -> Option<Rect> {
        let (mapper, index) = self.hit(display, point)?;
        self.set_cell(index.x, index.y, state).ok()?;
        Some(mapper.index_to_rect(index))
    }

    /// Toggle the cell under `point`. Same contract as [`set_cell_at_point`].
    ///
    /// [`set_cell_at_point`]: GridController::set_cell_at_point
    pub fn toggle_cell_at_point(&mut self, display: DisplaySize, point: Point) -> Option<Rect> {
        let (mapper, index) = self.hit(display, point)?;
        self.toggle_cell(index.x, index.y).ok()?;
        Some(mapper.index_to_rect(index))
    }

    pub fn set_cell(&mut self, x: isize, y: isize, state: CellState) -> Result<(), GridError> {
        self.grid.set(x, y, state)?;
        self.engine.grid_updated(&self.grid);
        Ok(())
    }

    /// Toggle one cell and return its new state.
    pub fn toggle_cell(&mut self, x: isize, y: isize) -> Result<CellState, GridError> {
        let state = self.grid.get(x, y)?.toggle();
        self.set_cell(x, y, state)?;
        Ok(state)
    }

    /// Grow the grid to fit `pattern` plus padding, then write the pattern
    /// relative to the new center.
    ///
    /// The grid never shrinks. The engine hears `grid_resized` (only if the
    /// shape changed) and then a single `grid_changed`, both after the write.
    pub fn embed(&mut self, pattern: &Pattern) -> EmbedReport {
        let data = pattern.data();
        let rows = self.grid.rows().max(data.rows() + EMBED_PADDING);
        let cols = self.grid.cols().max(data.cols() + EMBED_PADDING);
        let resized = (rows, cols) != (self.grid.rows(), self.grid.cols());
        self.grid.resize(rows, cols);

        let start = pattern.start_pos();
        let origin = CellIndex::new((cols / 2) as isize + start.x, (rows / 2) as isize + start.y);
        let skipped = self.grid.load_from(data, origin);
        if skipped > 0 {
            log::debug!(
                "Pattern '{}' overflowed the grid, dropped {} cells",
                pattern.name(),
                skipped
            );
        }
        log::info!(
            "Embedded '{}' at ({}, {}) in a {}x{} grid",
            pattern.name(),
            origin.x,
            origin.y,
            rows,
            cols
        );

        if resized {
            self.engine.grid_resized(rows, cols);
        }
        self.engine.grid_changed(&self.grid);

        EmbedReport {
            rows,
            cols,
            origin,
            resized,
            skipped,
        }
    }

    /// Empty every cell, keeping the shape.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.engine.grid_changed(&self.grid);
    }

    /// Install a grid computed by the engine, such as the next generation.
    /// The engine is not notified back.
    pub fn replace_grid(&mut self, grid: Grid) {
        self.grid = grid;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Preset;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Updated(usize),
        Resized(usize, usize),
        Changed(usize, usize, usize),
    }

    #[derive(Default)]
    struct Recorder(Vec<Event>);

    impl EngineObserver for Recorder {
        fn grid_updated(&mut self, grid: &Grid) {
            self.0.push(Event::Updated(grid.population()));
        }

        fn grid_resized(&mut self, rows: usize, cols: usize) {
            self.0.push(Event::Resized(rows, cols));
        }

        fn grid_changed(&mut self, grid: &Grid) {
            self.0.push(Event::Changed(grid.rows(), grid.cols(), grid.population()));
        }
    }

    fn controller(rows: usize, cols: usize) -> GridController<Recorder> {
        GridController::new(Grid::new(rows, cols), Recorder::default())
    }

    const DISPLAY: DisplaySize = DisplaySize {
        width: 200.0,
        height: 200.0,
    };

    #[test]
    fn tap_toggles_and_notifies_once() {
        let mut ctl = controller(20, 20);
        let tap = Point::new(15.0, 15.0);

        let dirty = ctl.toggle_cell_at_point(DISPLAY, tap);
        assert_eq!(dirty, Some(Rect::new(10.0, 10.0, 10.0, 10.0)));
        assert_eq!(ctl.grid().get(1, 1), Ok(CellState::Living));
        assert_eq!(ctl.cell_at_point(DISPLAY, tap), Some(CellState::Living));

        ctl.toggle_cell_at_point(DISPLAY, tap);
        assert_eq!(ctl.grid().get(1, 1), Ok(CellState::Empty));
        assert_eq!(ctl.engine().0, vec![Event::Updated(1), Event::Updated(0)]);
    }

    #[test]
    fn tap_outside_grid_is_a_silent_no_op() {
        let mut ctl = controller(10, 10);
        let wide = DisplaySize::new(300.0, 100.0);

        assert_eq!(ctl.toggle_cell_at_point(wide, Point::new(50.0, 50.0)), None);
        assert_eq!(ctl.set_cell_at_point(wide, Point::new(250.0, 50.0), CellState::Living), None);
        assert_eq!(ctl.cell_at_point(wide, Point::new(-1.0, 50.0)), None);
        assert_eq!(ctl.grid().population(), 0);
        assert!(ctl.engine().0.is_empty());
    }

    #[test]
    fn non_finite_tap_is_a_silent_no_op() {
        let mut ctl = controller(20, 20);
        let nan = Point::new(f32::NAN, f32::NAN);

        assert_eq!(ctl.toggle_cell_at_point(DISPLAY, nan), None);
        assert_eq!(ctl.set_cell_at_point(DISPLAY, nan, CellState::Living), None);
        assert_eq!(ctl.cell_at_point(DISPLAY, nan), None);
        assert_eq!(ctl.grid().get(0, 0), Ok(CellState::Empty));
        assert!(ctl.engine().0.is_empty());
    }

    #[test]
    fn toggling_hint_cells_clears_them() {
        let mut ctl = controller(3, 3);
        ctl.replace_grid({
            let mut grid = Grid::new(3, 3);
            grid.set(0, 0, CellState::Born).unwrap();
            grid.set(1, 0, CellState::Died).unwrap();
            grid
        });
        assert_eq!(ctl.toggle_cell(0, 0), Ok(CellState::Empty));
        assert_eq!(ctl.toggle_cell(1, 0), Ok(CellState::Empty));
        assert_eq!(ctl.toggle_cell(1, 0), Ok(CellState::Living));
    }

    #[test]
    fn degenerate_display_or_grid_ignores_edits() {
        let mut ctl = controller(10, 10);
        assert_eq!(
            ctl.toggle_cell_at_point(DisplaySize::new(0.0, 0.0), Point::new(0.0, 0.0)),
            None
        );

        let mut empty = controller(0, 0);
        assert_eq!(empty.toggle_cell_at_point(DISPLAY, Point::new(1.0, 1.0)), None);
        assert!(ctl.engine().0.is_empty());
        assert!(empty.engine().0.is_empty());
    }

    #[test]
    fn set_cell_reports_out_of_range() {
        let mut ctl = controller(3, 3);
        assert!(matches!(
            ctl.set_cell(3, 0, CellState::Living),
            Err(GridError::OutOfRange { .. })
        ));
        assert!(ctl.engine().0.is_empty());
        assert_eq!(ctl.toggle_cell(2, 2), Ok(CellState::Living));
        assert_eq!(ctl.engine().0, vec![Event::Updated(1)]);
    }

    #[test]
    fn embed_without_growth() {
        let mut ctl = controller(20, 20);
        let mut data = Grid::new(6, 6);
        data.set(0, 0, CellState::Living).unwrap();
        let pattern = Pattern::new("square", data, CellIndex::new(0, 0));

        let report = ctl.embed(&pattern);
        assert_eq!((report.rows, report.cols), (20, 20));
        assert_eq!(report.origin, CellIndex::new(10, 10));
        assert!(!report.resized);
        assert_eq!(ctl.grid().get(10, 10), Ok(CellState::Living));
        assert_eq!(ctl.engine().0, vec![Event::Changed(20, 20, 1)]);
    }

    #[test]
    fn embed_grows_then_notifies_in_order() {
        let mut ctl = controller(5, 30);
        ctl.set_cell(0, 0, CellState::Living).unwrap();
        let report = ctl.embed(&Preset::Glider.pattern());

        // 3 + 4 > 5 rows; 3 + 4 <= 30 cols.
        assert_eq!((report.rows, report.cols), (7, 30));
        assert_eq!(report.origin, CellIndex::new(15 - 1, 3 - 1));
        assert_eq!(report.skipped, 0);
        assert_eq!(ctl.grid().get(0, 0), Ok(CellState::Living));
        assert_eq!(ctl.grid().population(), 6);
        assert_eq!(
            ctl.engine().0,
            vec![Event::Updated(1), Event::Resized(7, 30), Event::Changed(7, 30, 6)]
        );
    }

    #[test]
    fn embed_overflow_drops_cells() {
        let mut ctl = controller(10, 10);
        let block = Preset::Block.pattern().data().clone();
        let pattern = Pattern::new("far", block, CellIndex::new(4, 4));
        let report = ctl.embed(&pattern);

        // Origin (9, 9): only the top-left cell of the block fits.
        assert_eq!(report.origin, CellIndex::new(9, 9));
        assert_eq!(report.skipped, 3);
        assert_eq!(ctl.grid().population(), 1);
        assert_eq!(ctl.grid().get(9, 9), Ok(CellState::Living));
    }

    #[test]
    fn clear_and_replace() {
        let mut ctl = controller(4, 4);
        ctl.set_cell(1, 1, CellState::Born).unwrap();
        ctl.clear();
        assert_eq!(ctl.grid().population(), 0);

        let mut next = Grid::new(8, 8);
        next.set(7, 7, CellState::Died).unwrap();
        ctl.replace_grid(next.clone());
        assert_eq!(ctl.grid(), &next);
        assert_eq!(ctl.engine().0, vec![Event::Updated(1), Event::Changed(4, 4, 0)]);
    }
}

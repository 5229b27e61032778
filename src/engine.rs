use crate::grid::Grid;

/// Receiver of grid-change notifications.
///
/// The controller owns one of these, handed over at construction. Every
/// call happens after the grid is fully updated, on the caller's thread.
pub trait EngineObserver {
    /// A cell was edited by the user. Carries the whole grid, not a diff.
    fn grid_updated(&mut self, grid: &Grid);

    /// The grid grew to `rows` x `cols`. Always followed by [`grid_changed`].
    ///
    /// [`grid_changed`]: EngineObserver::grid_changed
    fn grid_resized(&mut self, rows: usize, cols: usize);

    /// The grid was rewritten wholesale, e.g. by embedding a pattern.
    fn grid_changed(&mut self, grid: &Grid);
}

impl<E: EngineObserver + ?Sized> EngineObserver for &mut E {
    fn grid_updated(&mut self, grid: &Grid) {
        (**self).grid_updated(grid)
    }

    fn grid_resized(&mut self, rows: usize, cols: usize) {
        (**self).grid_resized(rows, cols)
    }

    fn grid_changed(&mut self, grid: &Grid) {
        (**self).grid_changed(grid)
    }
}

impl<E: EngineObserver + ?Sized> EngineObserver for Box<E> {
    fn grid_updated(&mut self, grid: &Grid) {
        (**self).grid_updated(grid)
    }

    fn grid_resized(&mut self, rows: usize, cols: usize) {
        (**self).grid_resized(rows, cols)
    }

    fn grid_changed(&mut self, grid: &Grid) {
        (**self).grid_changed(grid)
    }
}

/// Observer that only reports notifications through `log`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogEngine;

impl EngineObserver for LogEngine {
    fn grid_updated(&mut self, grid: &Grid) {
        log::debug!("Grid updated, {} live cells", grid.population());
    }

    fn grid_resized(&mut self, rows: usize, cols: usize) {
        log::info!("Grid resized to {}x{}", rows, cols);
    }

    fn grid_changed(&mut self, grid: &Grid) {
        log::info!(
            "Grid changed: {}x{}, {} live cells",
            grid.rows(),
            grid.cols(),
            grid.population()
        );
    }
}

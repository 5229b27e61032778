//! Geometry between continuous display space and discrete cell indices.

use crate::error::GridError;
use crate::grid::Grid;

/// A point in display units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Size of the drawing surface at query time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DisplaySize {
    pub width: f32,
    pub height: f32,
}

impl DisplaySize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Axis-aligned rectangle in display units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Half-open containment: the right and bottom edges belong to the neighbor.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x < self.x + self.width
            && point.y < self.y + self.height
    }
}

/// Placement of the whole grid inside the display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridBounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl From<GridBounds> for Rect {
    fn from(bounds: GridBounds) -> Self {
        Rect::new(bounds.left, bounds.top, bounds.width, bounds.height)
    }
}

/// Signed cell index, `x` is the column and `y` the row.
///
/// Indices computed from points may be negative or past the last row/column;
/// check them with [`Grid::contains`] before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellIndex {
    pub x: isize,
    pub y: isize,
}

impl CellIndex {
    pub fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }
}

/// Square-cell layout of a `rows` x `cols` grid centered in a display.
///
/// Built fresh for every query from the current display size, so nothing
/// goes stale when the surface is resized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    display: DisplaySize,
    rows: usize,
    cols: usize,
    spacing: f32,
}

impl CoordinateMapper {
    pub fn new(display: DisplaySize, rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::DegenerateGrid { rows, cols });
        }
        if !display.is_usable() {
            return Err(GridError::DegenerateDisplay {
                width: display.width,
                height: display.height,
            });
        }
        let spacing = (display.width / cols as f32).min(display.height / rows as f32);
        Ok(Self {
            display,
            rows,
            cols,
            spacing,
        })
    }

    pub fn for_grid(display: DisplaySize, grid: &Grid) -> Result<Self, GridError> {
        Self::new(display, grid.rows(), grid.cols())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Edge length of one square cell.
    pub fn cell_spacing(&self) -> f32 {
        self.spacing
    }

    pub fn bounds(&self) -> GridBounds {
        let width = self.cols as f32 * self.spacing;
        let height = self.rows as f32 * self.spacing;
        // Clamp away the rounding residue on the constraining axis.
        let left = ((self.display.width - width) / 2.0).max(0.0);
        let top = ((self.display.height - height) / 2.0).max(0.0);
        GridBounds {
            left,
            top,
            width,
            height,
        }
    }

    pub fn index_to_rect(&self, index: CellIndex) -> Rect {
        let bounds = self.bounds();
        Rect::new(
            bounds.left + index.x as f32 * self.spacing,
            bounds.top + index.y as f32 * self.spacing,
            self.spacing,
            self.spacing,
        )
    }

    /// Cell under `point`, without any bounds check.
    pub fn point_to_index(&self, point: Point) -> CellIndex {
        let bounds = self.bounds();
        CellIndex::new(
            ((point.x - bounds.left) / self.spacing).floor() as isize,
            ((point.y - bounds.top) / self.spacing).floor() as isize,
        )
    }

    /// Cell under `point`, or `None` when the point misses the grid.
    /// Non-finite coordinates never hit a cell.
    pub fn cell_at(&self, point: Point) -> Option<CellIndex> {
        if !(point.x.is_finite() && point.y.is_finite()) {
            return None;
        }
        let index = self.point_to_index(point);
        let inside = index.x >= 0
            && index.y >= 0
            && (index.x as usize) < self.cols
            && (index.y as usize) < self.rows;
        inside.then_some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn square_display_fills_exactly() {
        let mapper = CoordinateMapper::new(DisplaySize::new(200.0, 200.0), 20, 20).unwrap();
        assert_eq!(mapper.cell_spacing(), 10.0);
        let bounds = mapper.bounds();
        assert_eq!((bounds.left, bounds.top), (0.0, 0.0));
        assert_eq!((bounds.width, bounds.height), (200.0, 200.0));
        assert_eq!(mapper.point_to_index(Point::new(15.0, 15.0)), CellIndex::new(1, 1));
    }

    #[test]
    fn wide_display_centers_horizontally() {
        let mapper = CoordinateMapper::new(DisplaySize::new(300.0, 100.0), 10, 10).unwrap();
        assert_eq!(mapper.cell_spacing(), 10.0);
        let bounds = mapper.bounds();
        assert_eq!((bounds.left, bounds.top), (100.0, 0.0));
        assert_eq!(
            mapper.index_to_rect(CellIndex::new(2, 3)),
            Rect::new(120.0, 30.0, 10.0, 10.0)
        );
    }

    #[test]
    fn points_outside_map_out_of_range() {
        let mapper = CoordinateMapper::new(DisplaySize::new(300.0, 100.0), 10, 10).unwrap();
        assert_eq!(mapper.point_to_index(Point::new(50.0, 5.0)), CellIndex::new(-5, 0));
        assert_eq!(mapper.point_to_index(Point::new(250.0, 5.0)), CellIndex::new(15, 0));
        assert_eq!(mapper.cell_at(Point::new(50.0, 5.0)), None);
        assert_eq!(mapper.cell_at(Point::new(199.9, 99.9)), Some(CellIndex::new(9, 9)));
        assert_eq!(mapper.cell_at(Point::new(200.0, 50.0)), None);
    }

    #[test]
    fn non_finite_points_miss_the_grid() {
        let mapper = CoordinateMapper::new(DisplaySize::new(200.0, 200.0), 20, 20).unwrap();
        for point in [
            Point::new(f32::NAN, f32::NAN),
            Point::new(f32::NAN, 15.0),
            Point::new(15.0, f32::NAN),
            Point::new(f32::INFINITY, 15.0),
            Point::new(15.0, f32::NEG_INFINITY),
        ] {
            assert_eq!(mapper.cell_at(point), None, "{:?}", point);
        }
    }

    #[test]
    fn degenerate_inputs_are_rejected() {
        let display = DisplaySize::new(100.0, 100.0);
        assert_eq!(
            CoordinateMapper::new(display, 0, 5),
            Err(GridError::DegenerateGrid { rows: 0, cols: 5 })
        );
        assert!(CoordinateMapper::new(display, 5, 0).is_err());
        assert!(matches!(
            CoordinateMapper::new(DisplaySize::new(0.0, 100.0), 5, 5),
            Err(GridError::DegenerateDisplay { .. })
        ));
        assert!(CoordinateMapper::new(DisplaySize::new(100.0, f32::NAN), 5, 5).is_err());
    }

    proptest! {
        #[test]
        fn grid_is_centered_and_contained(
            width in 1.0..4000.0_f32,
            height in 1.0..4000.0_f32,
            rows in 1..400_usize,
            cols in 1..400_usize,
        ) {
            let display = DisplaySize::new(width, height);
            let mapper = CoordinateMapper::new(display, rows, cols).unwrap();
            let spacing = mapper.cell_spacing();
            prop_assert_eq!(spacing, (width / cols as f32).min(height / rows as f32));

            let bounds = mapper.bounds();
            let slack = 1e-3 * width.max(height);
            prop_assert!(bounds.left >= 0.0);
            prop_assert!(bounds.top >= 0.0);
            prop_assert!(bounds.left + cols as f32 * spacing <= width + slack);
            prop_assert!(bounds.top + rows as f32 * spacing <= height + slack);
            prop_assert!((bounds.left * 2.0 + bounds.width - width).abs() <= slack);
            prop_assert!((bounds.top * 2.0 + bounds.height - height).abs() <= slack);
        }

        #[test]
        fn cell_center_maps_back_to_its_index(
            width in 10.0..4000.0_f32,
            height in 10.0..4000.0_f32,
            rows in 1..200_usize,
            cols in 1..200_usize,
            fx in 0.0..1.0_f64,
            fy in 0.0..1.0_f64,
        ) {
            let display = DisplaySize::new(width, height);
            let mapper = CoordinateMapper::new(display, rows, cols).unwrap();
            let index = CellIndex::new(
                ((cols as f64 * fx) as usize).min(cols - 1) as isize,
                ((rows as f64 * fy) as usize).min(rows - 1) as isize,
            );
            let center = mapper.index_to_rect(index).center();
            prop_assert_eq!(mapper.point_to_index(center), index);
            prop_assert_eq!(mapper.cell_at(center), Some(index));
        }
    }
}

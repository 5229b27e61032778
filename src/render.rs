//! Frame geometry for whatever surface ends up painting the grid.
//!
//! Nothing here touches pixels: [`FramePlan`] lists the background, grid
//! lines and one instance per cell, already snapped to the pixel grid.

use bytemuck::{Pod, Zeroable};

use crate::cell::CellState;
use crate::error::GridError;
use crate::grid::Grid;
use crate::mapper::{CellIndex, CoordinateMapper, DisplaySize, Point, Rect};

/// Below this cell size (in display units) cells are drawn as plain squares
/// and grid lines are dropped.
pub const COMPACT_SPACING_THRESHOLD: f32 = 3.0;

pub const SHAPE_SQUARE: u32 = 0;
pub const SHAPE_OVAL: u32 = 1;

/// Per-cell instance data, laid out for direct upload to a GPU buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CellInstance {
    pub position: [f32; 2],
    pub size: [f32; 2],
    pub color: [f32; 4],
    /// `SHAPE_SQUARE` or `SHAPE_OVAL`
    pub shape: u32,
    pub _padding: [u32; 3], // Keep the struct a multiple of 16 bytes
}

impl CellInstance {
    pub fn rect(&self) -> Rect {
        Rect::new(self.position[0], self.position[1], self.size[0], self.size[1])
    }
}

/// Colors and line settings used to lay out a frame. Colors are RGBA in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub living_color: [f32; 4],
    pub empty_color: [f32; 4],
    pub born_color: [f32; 4],
    pub died_color: [f32; 4],
    pub grid_color: [f32; 4],
    pub background_color: [f32; 4],
    pub grid_line_width: f32,
    /// Force compact cells regardless of cell size.
    pub compact_cells: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            living_color: [1.0, 1.0, 1.0, 1.0],
            empty_color: [0.0, 0.0, 0.0, 1.0],
            born_color: [0.9, 1.0, 0.9, 1.0],
            died_color: [0.2, 0.1, 0.1, 1.0],
            grid_color: [2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0, 1.0],
            background_color: [1.0, 1.0, 1.0, 1.0],
            grid_line_width: 1.0,
            compact_cells: false,
        }
    }
}

impl RenderStyle {
    pub fn cell_color(&self, state: CellState) -> [f32; 4] {
        match state {
            CellState::Empty => self.empty_color,
            CellState::Born => self.born_color,
            CellState::Died => self.died_color,
            CellState::Living => self.living_color,
        }
    }

    pub fn with_compact_cells(mut self, compact_cells: bool) -> Self {
        self.compact_cells = compact_cells;
        self
    }

    pub fn with_grid_line_width(mut self, width: f32) -> Self {
        self.grid_line_width = width;
        self
    }

    /// Half-pixel shift that keeps odd line widths crisp.
    fn stroke_correction(&self) -> f32 {
        if self.grid_line_width % 2.0 == 0.0 {
            0.0
        } else {
            0.5
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub from: Point,
    pub to: Point,
}

/// Everything needed to paint one frame of the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePlan {
    pub background: Rect,
    pub background_color: [f32; 4],
    pub compact: bool,
    pub grid_lines: Vec<LineSegment>,
    pub line_color: [f32; 4],
    pub line_width: f32,
    /// One entry per cell, row-major.
    pub cells: Vec<CellInstance>,
    cols: usize,
}

impl FramePlan {
    /// Lay out `grid` inside `display`. Fails for an empty grid or display,
    /// in which case nothing should be drawn.
    pub fn build(
        grid: &Grid,
        display: DisplaySize,
        style: &RenderStyle,
    ) -> Result<Self, GridError> {
        let mapper = CoordinateMapper::for_grid(display, grid)?;
        let bounds = mapper.bounds();
        let spacing = mapper.cell_spacing();
        let line_width = style.grid_line_width;
        let compact = spacing < COMPACT_SPACING_THRESHOLD || style.compact_cells;

        let stroke = style.stroke_correction();
        let column_offset =
            |column: usize| (bounds.left + column as f32 * spacing).round() + stroke;
        let row_offset = |row: usize| (bounds.top + row as f32 * spacing).round() + stroke;

        let mut grid_lines = Vec::new();
        if !compact {
            for column in 1..grid.cols() {
                let x = column_offset(column);
                grid_lines.push(LineSegment {
                    from: Point::new(x, bounds.top + line_width),
                    to: Point::new(x, bounds.top + bounds.height - line_width),
                });
            }
            for row in 1..grid.rows() {
                let y = row_offset(row);
                grid_lines.push(LineSegment {
                    from: Point::new(bounds.left + line_width, y),
                    to: Point::new(bounds.left + bounds.width - line_width, y),
                });
            }
        }

        let cells = grid
            .iter()
            .map(|(x, y, state)| {
                let x_pos = column_offset(x);
                let y_pos = row_offset(y);
                let width = column_offset(x + 1) - x_pos;
                let height = row_offset(y + 1) - y_pos;
                let (position, size, shape) = if compact {
                    ([x_pos, y_pos], [width, height], SHAPE_SQUARE)
                } else {
                    (
                        [x_pos + line_width / 2.0, y_pos + line_width / 2.0],
                        [width - line_width, height - line_width],
                        SHAPE_OVAL,
                    )
                };
                CellInstance {
                    position,
                    size,
                    color: style.cell_color(state),
                    shape,
                    _padding: [0; 3],
                }
            })
            .collect();

        Ok(Self {
            background: bounds.into(),
            background_color: style.background_color,
            compact,
            grid_lines,
            line_color: style.grid_color,
            line_width,
            cells,
            cols: grid.cols(),
        })
    }

    pub fn cell(&self, index: CellIndex) -> Option<&CellInstance> {
        if index.x < 0 || index.y < 0 || index.x as usize >= self.cols {
            return None;
        }
        self.cells.get(index.y as usize * self.cols + index.x as usize)
    }
}

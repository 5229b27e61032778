use std::collections::HashSet;

use crate::cell::CellState;
use crate::controller::GridController;
use crate::engine::EngineObserver;
use crate::mapper::{CellIndex, DisplaySize, Point, Rect};

/// Turns raw pointer events into cell edits.
///
/// A press toggles the cell under the pointer. Dragging with the button held
/// paints every cell the pointer enters as `Living`, each cell at most once
/// per stroke, so sweeping back over a cell does not flicker it.
#[derive(Debug, Default)]
pub struct PointerTracker {
    pressed: bool,
    visited: HashSet<CellIndex>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Start a stroke. Returns the rectangle to redraw, if a cell changed.
    pub fn press<E: EngineObserver>(
        &mut self,
        controller: &mut GridController<E>,
        display: DisplaySize,
        point: Point,
    ) -> Option<Rect> {
        self.pressed = true;
        self.visited.clear();
        let index = controller.index_at_point(display, point)?;
        self.visited.insert(index);
        controller.toggle_cell_at_point(display, point)
    }

    /// Continue a stroke. Ignored when no button is held.
    pub fn drag<E: EngineObserver>(
        &mut self,
        controller: &mut GridController<E>,
        display: DisplaySize,
        point: Point,
    ) -> Option<Rect> {
        if !self.pressed {
            return None;
        }
        let index = controller.index_at_point(display, point)?;
        if !self.visited.insert(index) {
            return None;
        }
        controller.set_cell_at_point(display, point, CellState::Living)
    }

    pub fn release(&mut self) {
        self.pressed = false;
        self.visited.clear();
    }
}

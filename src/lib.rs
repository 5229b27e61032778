//! Platform-independent model for an editable Game of Life board.
//!
//! The crate maps between continuous display space and discrete cell indices,
//! stores the per-cell lifecycle state, and embeds patterns into a growing
//! grid. Painting is left to whatever renderer consumes [`render::FramePlan`].

pub mod cell;
pub mod controller;
pub mod engine;
pub mod error;
pub mod grid;
pub mod input;
pub mod mapper;
pub mod pattern;
pub mod render;

pub use cell::CellState;
pub use controller::{EmbedReport, GridController, EMBED_PADDING};
pub use engine::{EngineObserver, LogEngine};
pub use error::{GridError, PatternError};
pub use grid::Grid;
pub use input::PointerTracker;
pub use mapper::{CellIndex, CoordinateMapper, DisplaySize, GridBounds, Point, Rect};
pub use pattern::{Pattern, Preset};
pub use render::{CellInstance, FramePlan, LineSegment, RenderStyle};

/// Board shape used when nothing else has been loaded yet.
pub const DEFAULT_ROWS: usize = 20;
pub const DEFAULT_COLS: usize = 20;

/// Lifecycle tag of a single cell.
///
/// `Born` and `Died` are render hints left behind by a generation step to
/// flag cells that changed on the last tick. For liveness `Born` counts as
/// alive and `Died` as dead; a manual toggle treats both like `Living`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty,
    Born,
    Died,
    Living,
}

impl CellState {
    /// All four states, in declaration order.
    pub const ALL: [CellState; 4] = [
        CellState::Empty,
        CellState::Born,
        CellState::Died,
        CellState::Living,
    ];

    /// Whether the cell counts as alive. `Born` is alive, `Died` is not.
    pub fn is_alive(self) -> bool {
        matches!(self, CellState::Born | CellState::Living)
    }

    /// Transition applied by a manual edit: `Empty` becomes `Living`, every
    /// other state becomes `Empty`.
    pub fn toggle(self) -> Self {
        match self {
            CellState::Empty => CellState::Living,
            _ => CellState::Empty,
        }
    }
}

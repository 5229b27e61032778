use super::Pattern;

/// Built-in patterns, each centered on the host grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// A small stationary pattern
    Block,
    /// A small oscillator
    Blinker,
    /// A small oscillator
    Toad,
    /// A diagonal spaceship
    Glider,
    /// A horizontal spaceship
    LightweightSpaceship,
    /// A pattern that grows indefinitely
    GosperGliderGun,
}

impl Preset {
    pub const ALL: [Preset; 6] = [
        Preset::Block,
        Preset::Blinker,
        Preset::Toad,
        Preset::Glider,
        Preset::LightweightSpaceship,
        Preset::GosperGliderGun,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Block => "Block",
            Preset::Blinker => "Blinker",
            Preset::Toad => "Toad",
            Preset::Glider => "Glider",
            Preset::LightweightSpaceship => "Lightweight spaceship",
            Preset::GosperGliderGun => "Gosper glider gun",
        }
    }

    /// Live cells as `(x, y)` offsets.
    #[rustfmt::skip]
    fn cells(self) -> &'static [(isize, isize)] {
        match self {
            Preset::Block => &[
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ],
            Preset::Blinker => &[
                (0, 0), (0, 1), (0, 2),
            ],
            Preset::Toad => &[
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
            Preset::Glider => &[
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
            Preset::LightweightSpaceship => &[
                (1, 0), (4, 0),
                (0, 1),
                (0, 2), (4, 2),
                (0, 3), (1, 3), (2, 3), (3, 3),
            ],
            Preset::GosperGliderGun => &[
                // Left block
                (0, 4), (0, 5),
                (1, 4), (1, 5),

                // Left ship
                (10, 4), (10, 5), (10, 6),
                (11, 3), (11, 7),
                (12, 2), (12, 8),
                (13, 2), (13, 8),
                (14, 5),
                (15, 3), (15, 7),
                (16, 4), (16, 5), (16, 6),
                (17, 5),

                // Right ship
                (20, 2), (20, 3), (20, 4),
                (21, 2), (21, 3), (21, 4),
                (22, 1), (22, 5),
                (24, 0), (24, 1), (24, 5), (24, 6),

                // Right block
                (34, 2), (34, 3),
                (35, 2), (35, 3),
            ],
        }
    }

    pub fn pattern(self) -> Pattern {
        Pattern::from_cells(self.name(), self.cells())
    }
}

impl From<Preset> for Pattern {
    fn from(preset: Preset) -> Self {
        preset.pattern()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_shapes() {
        let shape = |preset: Preset| {
            let pattern = preset.pattern();
            (pattern.data().rows(), pattern.data().cols(), pattern.data().population())
        };
        assert_eq!(shape(Preset::Block), (2, 2, 4));
        assert_eq!(shape(Preset::Blinker), (3, 1, 3));
        assert_eq!(shape(Preset::Toad), (2, 4, 6));
        assert_eq!(shape(Preset::Glider), (3, 3, 5));
        assert_eq!(shape(Preset::LightweightSpaceship), (4, 5, 9));
        assert_eq!(shape(Preset::GosperGliderGun), (9, 36, 36));
    }

    #[test]
    fn presets_are_centered() {
        for preset in Preset::ALL {
            let pattern = preset.pattern();
            let data = pattern.data();
            assert_eq!(pattern.start_pos().x, -((data.cols() / 2) as isize));
            assert_eq!(pattern.start_pos().y, -((data.rows() / 2) as isize));
            assert_eq!(pattern.name(), preset.name());
        }
    }
}

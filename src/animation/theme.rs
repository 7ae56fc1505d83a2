//! Visual themes and their spawn palettes
//!
//! A theme is a draw strategy plus the colors its effects spawn with.
//! Switching themes never touches simulation rules, only what gets
//! created and how it is drawn.

/// The built-in draw strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Particles,
    Ripples,
    Fireworks,
    Flowers,
}

impl Theme {
    pub fn from_name(name: &str) -> Option<Theme> {
        match name {
            "particles" => Some(Theme::Particles),
            "ripples" => Some(Theme::Ripples),
            "fireworks" => Some(Theme::Fireworks),
            "flowers" => Some(Theme::Flowers),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Particles => "particles",
            Theme::Ripples => "ripples",
            Theme::Fireworks => "fireworks",
            Theme::Flowers => "flowers",
        }
    }

    /// Spawn colors for this theme. Effects index into the palette by
    /// slot (left hand, right hand, both hands, body movement), wrapping
    /// when a palette is shorter than the slot count.
    pub fn palette(&self) -> &'static [[u8; 3]] {
        match self {
            Theme::Particles => &[
                [255, 100, 150],
                [100, 200, 255],
                [150, 255, 100],
                [255, 200, 50],
            ],
            Theme::Ripples => &[[100, 200, 255], [255, 100, 150], [150, 255, 100]],
            Theme::Fireworks => &[
                [255, 50, 50],
                [50, 255, 50],
                [50, 50, 255],
                [255, 255, 50],
                [255, 50, 255],
            ],
            Theme::Flowers => &[
                [255, 100, 150],
                [255, 200, 100],
                [150, 100, 255],
                [100, 255, 150],
            ],
        }
    }

    /// Color for the given effect slot
    pub fn spawn_color(&self, slot: usize) -> [u8; 3] {
        let palette = self.palette();
        palette[slot % palette.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for theme in [
            Theme::Particles,
            Theme::Ripples,
            Theme::Fireworks,
            Theme::Flowers,
        ] {
            assert_eq!(Theme::from_name(theme.name()), Some(theme));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(Theme::from_name("lasers"), None);
    }

    #[test]
    fn short_palettes_wrap_by_slot() {
        // The ripples palette has three entries; slot 3 wraps to slot 0
        assert_eq!(Theme::Ripples.spawn_color(3), Theme::Ripples.spawn_color(0));
    }
}

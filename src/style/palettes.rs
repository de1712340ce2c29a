use crate::error::ChartResult;

use super::{StyleKind, lookup};

/// Named ordered color set assigned to datasets or slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub colors: &'static [&'static str],
}

impl Palette {
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[must_use]
    pub fn color(&self, slot: usize) -> Option<&'static str> {
        self.colors.get(slot).copied()
    }

    /// Color at `slot` wrapped around the palette length.
    #[must_use]
    pub fn cyclic(&self, slot: usize) -> &'static str {
        self.colors[slot % self.colors.len()]
    }
}

pub static PALETTES: &[Palette] = &[
    Palette {
        name: "vibrant",
        colors: &[
            "rgba(255, 99, 132, 0.8)",
            "rgba(54, 162, 235, 0.8)",
            "rgba(255, 206, 86, 0.8)",
            "rgba(75, 192, 192, 0.8)",
            "rgba(153, 102, 255, 0.8)",
            "rgba(255, 159, 64, 0.8)",
            "rgba(199, 199, 199, 0.8)",
            "rgba(83, 102, 255, 0.8)",
            "rgba(255, 99, 255, 0.8)",
        ],
    },
    Palette {
        name: "pastel",
        colors: &[
            "rgba(255, 179, 186, 0.8)",
            "rgba(186, 225, 255, 0.8)",
            "rgba(255, 223, 186, 0.8)",
            "rgba(186, 255, 201, 0.8)",
            "rgba(220, 186, 255, 0.8)",
            "rgba(255, 218, 193, 0.8)",
        ],
    },
    Palette {
        name: "professional",
        colors: &[
            "rgba(41, 128, 185, 0.8)",
            "rgba(52, 152, 219, 0.8)",
            "rgba(155, 89, 182, 0.8)",
            "rgba(142, 68, 173, 0.8)",
            "rgba(22, 160, 133, 0.8)",
            "rgba(26, 188, 156, 0.8)",
        ],
    },
    Palette {
        name: "earth",
        colors: &[
            "rgba(139, 69, 19, 0.8)",
            "rgba(160, 82, 45, 0.8)",
            "rgba(205, 133, 63, 0.8)",
            "rgba(210, 180, 140, 0.8)",
            "rgba(188, 143, 143, 0.8)",
            "rgba(165, 42, 42, 0.8)",
        ],
    },
];

pub fn palette(key: &str) -> ChartResult<&'static Palette> {
    lookup(PALETTES, key, StyleKind::Palette, |p| p.name)
}
